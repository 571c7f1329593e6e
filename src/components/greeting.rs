use yew::prelude::*;
use chrono::{Local, Timelike};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    pub fn for_hour(hour: u32) -> Self {
        if hour < 12 {
            Greeting::Morning
        } else if hour < 17 {
            Greeting::Afternoon
        } else {
            Greeting::Evening
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Greeting::Morning => "Good Morning! Start your day with a workout!",
            Greeting::Afternoon => "Good Afternoon! Perfect time for a session!",
            Greeting::Evening => "Good Evening! Evening workouts are great!",
        }
    }
}

/// Returns the greeting stored in `slot`, picking it from `hour` only when
/// the slot is still empty.
pub fn greeting_once(slot: &mut Option<Greeting>, hour: impl FnOnce() -> u32) -> Greeting {
    *slot.get_or_insert_with(|| Greeting::for_hour(hour()))
}

const BANNER_STYLE: &str = "background: var(--secondary); color: white; padding: 1rem; \
    border-radius: 8px; margin: 1rem auto; max-width: 600px; text-align: center; \
    animation: slideIn 0.5s ease;";

/// Banner picked from local time when the page mounts; it does not change
/// while the page stays open.
#[function_component(GreetingBanner)]
pub fn greeting_banner() -> Html {
    let slot = use_mut_ref(|| None::<Greeting>);
    let greeting = greeting_once(&mut slot.borrow_mut(), || Local::now().hour());

    html! {
        <div class="greeting-message" style={BANNER_STYLE}>
            {greeting.message()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_bands() {
        assert_eq!(Greeting::for_hour(0), Greeting::Morning);
        assert_eq!(Greeting::for_hour(11), Greeting::Morning);
        assert_eq!(Greeting::for_hour(12), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(16), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(17), Greeting::Evening);
        assert_eq!(Greeting::for_hour(23), Greeting::Evening);
    }

    #[test]
    fn greeting_is_picked_once() {
        let mut slot = None;
        assert_eq!(greeting_once(&mut slot, || 9), Greeting::Morning);
        // Later renders keep the first pick and never read the clock again
        let again = greeting_once(&mut slot, || panic!("clock read twice"));
        assert_eq!(again, Greeting::Morning);
        assert_eq!(slot, Some(Greeting::Morning));
    }

    #[test]
    fn messages_name_the_time_of_day() {
        assert!(Greeting::Morning.message().starts_with("Good Morning"));
        assert!(Greeting::Afternoon.message().starts_with("Good Afternoon"));
        assert!(Greeting::Evening.message().starts_with("Good Evening"));
    }
}
