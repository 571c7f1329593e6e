use yew::prelude::*;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent};

use crate::config::{COUNTER_TICKS, COUNTER_TICK_MS, STATS_VISIBILITY_THRESHOLD, STAT_PRESS_MS};
use crate::content::Stat;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CounterFrame {
    pub value: u32,
    pub finished: bool,
}

/// Linear count from zero to `target` in fixed increments, one per tick.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    ticks: u32,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            increment: target as f64 / COUNTER_TICKS as f64,
            current: 0.0,
            ticks: 0,
        }
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.ticks += 1;
        self.current += self.increment;

        // Float accumulation can land just short of the target on the last tick.
        if self.current >= self.target as f64 || self.ticks >= COUNTER_TICKS {
            CounterFrame { value: self.target, finished: true }
        } else {
            CounterFrame { value: self.current.floor() as u32, finished: false }
        }
    }
}

/// Whether an intersection entry starts the counters: only the first
/// intersecting entry does.
pub fn should_start_counters(started: bool, intersecting: bool) -> bool {
    intersecting && !started
}

pub fn stat_fact(label: &str, number: &str) -> String {
    if label.contains("Daily Members") {
        format!("Did you know? We have {}+ members daily! 🎉", number)
    } else if label.contains("Equipment") {
        format!("Did you know? We have {}+ pieces of equipment! 💪", number)
    } else {
        format!("Did you know? We're open {} days a week! 📅", number)
    }
}

#[derive(Properties, PartialEq)]
pub struct StatItemProps {
    pub stat: Stat,
    pub running: bool,
}

#[function_component(StatItem)]
pub fn stat_item(props: &StatItemProps) -> Html {
    let value = use_state(|| 0u32);
    let pressed = use_state(|| false);

    {
        let value = value.clone();
        let target = props.stat.target;
        use_effect_with_deps(
            move |running| {
                if *running {
                    spawn_local(async move {
                        let mut animation = CounterAnimation::new(target);
                        loop {
                            TimeoutFuture::new(COUNTER_TICK_MS).await;
                            let frame = animation.tick();
                            value.set(frame.value);
                            if frame.finished {
                                break;
                            }
                        }
                    });
                }
                || ()
            },
            props.running,
        );
    }

    let onclick = {
        let pressed = pressed.clone();
        let label = props.stat.label;
        let number = (*value).to_string();
        Callback::from(move |_: MouseEvent| {
            pressed.set(true);
            let pressed = pressed.clone();
            spawn_local(async move {
                TimeoutFuture::new(STAT_PRESS_MS).await;
                pressed.set(false);
            });

            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&stat_fact(label, &number));
            }
        })
    };

    html! {
        <div
            class="stat-item"
            style={(*pressed).then(|| "transform: scale(0.95);")}
            {onclick}
        >
            <div class="stat-value">
                <span class="stat-number" data-target={props.stat.target.to_string()}>
                    {*value}
                </span>
                if props.stat.plus {
                    <span class="plus-sign">{"+"}</span>
                }
            </div>
            <div class="stat-label">{props.stat.label}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsSectionProps {
    pub stats: &'static [Stat],
}

/// Counters start the first time half of the container is on screen.
#[function_component(StatsSection)]
pub fn stats_section(props: &StatsSectionProps) -> Html {
    let container = use_node_ref();
    let started = use_state(|| false);

    {
        let container = container.clone();
        let started = started.clone();
        use_effect_with_deps(
            move |_| {
                let observation = container.cast::<Element>().and_then(|element| {
                    let mut triggered = false;
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if should_start_counters(triggered, entry.is_intersecting()) {
                                    debug!("Stats container in view, starting counters");
                                    triggered = true;
                                    started.set(true);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    );

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(STATS_VISIBILITY_THRESHOLD));
                    init.set_root_margin("0px");

                    let observer = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &init,
                    )
                    .ok()?;
                    observer.observe(&element);
                    Some((observer, callback))
                });

                move || {
                    if let Some((observer, _callback)) = observation {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="stats-container" ref={container}>
            { for props.stats.iter().map(|stat| html! {
                <StatItem stat={*stat} running={*started} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: u32) -> Vec<CounterFrame> {
        let mut animation = CounterAnimation::new(target);
        let mut frames = Vec::new();
        loop {
            let frame = animation.tick();
            frames.push(frame);
            if frame.finished {
                return frames;
            }
        }
    }

    #[test]
    fn counter_ends_exactly_on_target_within_budget() {
        for target in [1, 7, 150, 500, 999, 12_345] {
            let frames = run(target);
            assert!(frames.len() <= COUNTER_TICKS as usize, "target {}", target);
            assert_eq!(frames.last().map(|f| f.value), Some(target));
        }
    }

    #[test]
    fn counter_values_never_decrease() {
        for target in [7, 150, 500] {
            let frames = run(target);
            assert!(frames.windows(2).all(|pair| pair[0].value <= pair[1].value));
            assert!(frames.iter().all(|frame| frame.value <= target));
        }
    }

    #[test]
    fn intermediate_values_are_floored() {
        let mut animation = CounterAnimation::new(7);
        // 0.14 floors to 0
        assert_eq!(animation.tick(), CounterFrame { value: 0, finished: false });
        let mut animation = CounterAnimation::new(500);
        assert_eq!(animation.tick(), CounterFrame { value: 10, finished: false });
        assert_eq!(animation.tick(), CounterFrame { value: 20, finished: false });
    }

    #[test]
    fn zero_target_finishes_immediately() {
        assert_eq!(run(0), vec![CounterFrame { value: 0, finished: true }]);
    }

    #[test]
    fn counters_start_on_first_intersection_only() {
        let mut started = false;
        let mut starts = 0;
        for intersecting in [false, true, false, true, true] {
            if should_start_counters(started, intersecting) {
                started = true;
                starts += 1;
            }
        }
        assert!(started);
        assert_eq!(starts, 1);
    }

    #[test]
    fn counters_wait_until_visible() {
        assert!(!should_start_counters(false, false));
        assert!(should_start_counters(false, true));
        assert!(!should_start_counters(true, true));
    }

    #[test]
    fn fact_depends_on_label() {
        assert_eq!(
            stat_fact("Daily Members", "500"),
            "Did you know? We have 500+ members daily! 🎉"
        );
        assert_eq!(
            stat_fact("Equipment Pieces", "150"),
            "Did you know? We have 150+ pieces of equipment! 💪"
        );
        assert_eq!(
            stat_fact("Days a Week", "7"),
            "Did you know? We're open 7 days a week! 📅"
        );
    }
}
