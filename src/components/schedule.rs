use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::DaySchedule;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Value of the tab's `data-day` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Day::Mon => "mon",
            Day::Tue => "tue",
            Day::Wed => "wed",
            Day::Thu => "thu",
            Day::Fri => "fri",
            Day::Sat => "sat",
            Day::Sun => "sun",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Day::Mon => "Monday",
            Day::Tue => "Tuesday",
            Day::Wed => "Wednesday",
            Day::Thu => "Thursday",
            Day::Fri => "Friday",
            Day::Sat => "Saturday",
            Day::Sun => "Sunday",
        }
    }

    pub fn panel_id(self) -> String {
        format!("{}-schedule", self.key())
    }
}

/// Position of the panel shown for `day`, matched by element id. Only the
/// first match is shown; `None` hides every panel.
pub fn active_panel_index(panels: &[DaySchedule], day: Day) -> Option<usize> {
    let wanted = day.panel_id();
    panels.iter().position(|panel| panel.day.panel_id() == wanted)
}

#[derive(Properties, PartialEq)]
pub struct ScheduleTabsProps {
    pub schedules: &'static [DaySchedule],
}

#[function_component(ScheduleTabs)]
pub fn schedule_tabs(props: &ScheduleTabsProps) -> Html {
    // Monday is selected on load
    let active_day = use_state(|| Day::Mon);

    let shown = active_panel_index(props.schedules, *active_day);

    html! {
        <div class="schedule">
            <div class="day-tabs">
                { for Day::ALL.iter().map(|&day| {
                    let onclick = {
                        let active_day = active_day.clone();
                        Callback::from(move |_: MouseEvent| active_day.set(day))
                    };
                    html! {
                        <button
                            class={classes!("day-tab", (*active_day == day).then(|| "active"))}
                            data-day={day.key()}
                            {onclick}
                        >
                            {day.label()}
                        </button>
                    }
                }) }
            </div>

            { for props.schedules.iter().enumerate().map(|(index, schedule)| html! {
                <div
                    id={schedule.day.panel_id()}
                    class={classes!("day-schedule", (shown == Some(index)).then(|| "active"))}
                >
                    <ul class="time-slots">
                        { for schedule.slots.iter().map(|slot| html! {
                            <li class="time-slot">
                                <span class="slot-time">{slot.time}</span>
                                <span class="slot-activity">{slot.activity}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            }) }
        </div>
    }
}
