//! Static content of the page. Everything the behaviors operate on is declared
//! here so the components only deal with rendering and interaction.

use crate::components::schedule::Day;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "facilities", label: "Facilities" },
    Section { id: "timings", label: "Timings" },
    Section { id: "contact", label: "Contact" },
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Facility {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const FACILITIES: &[Facility] = &[
    Facility {
        title: "Cardio Zone",
        icon: "🏃",
        description: "Treadmills, rowers, bikes and ellipticals with a view over the campus.",
    },
    Facility {
        title: "Strength Area",
        icon: "🏋️",
        description: "Free weights, squat racks and plate-loaded machines for every level.",
    },
    Facility {
        title: "Studio",
        icon: "🧘",
        description: "Sprung-floor studio hosting yoga, spin and HIIT classes.",
    },
    Facility {
        title: "Swimming Pool",
        icon: "🏊",
        description: "25 m pool with lane swimming and aqua fitness sessions.",
    },
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Video {
    pub src: &'static str,
    pub caption: &'static str,
}

pub const VIDEOS: &[Video] = &[
    Video { src: "/assets/gym-tour.mp4", caption: "Take a tour of the gym" },
    Video { src: "/assets/classes.mp4", caption: "Group classes in action" },
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Stat {
    pub label: &'static str,
    pub target: u32,
    pub plus: bool,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Daily Members", target: 500, plus: true },
    Stat { label: "Equipment Pieces", target: 150, plus: true },
    Stat { label: "Days a Week", target: 7, plus: false },
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Slot {
    pub time: &'static str,
    pub activity: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DaySchedule {
    pub day: Day,
    pub slots: &'static [Slot],
}

const WEEKDAY_SLOTS: &[Slot] = &[
    Slot { time: "06:00 - 10:00", activity: "Open gym" },
    Slot { time: "10:00 - 12:00", activity: "Women only" },
    Slot { time: "12:00 - 17:00", activity: "Open gym" },
    Slot { time: "17:00 - 18:00", activity: "Spin class" },
    Slot { time: "18:00 - 23:00", activity: "Open gym" },
];

const FRIDAY_SLOTS: &[Slot] = &[
    Slot { time: "09:00 - 12:00", activity: "Open gym" },
    Slot { time: "14:00 - 20:00", activity: "Open gym" },
];

const WEEKEND_SLOTS: &[Slot] = &[
    Slot { time: "08:00 - 10:00", activity: "Yoga" },
    Slot { time: "10:00 - 22:00", activity: "Open gym" },
];

pub const SCHEDULES: &[DaySchedule] = &[
    DaySchedule { day: Day::Mon, slots: WEEKDAY_SLOTS },
    DaySchedule { day: Day::Tue, slots: WEEKDAY_SLOTS },
    DaySchedule { day: Day::Wed, slots: WEEKDAY_SLOTS },
    DaySchedule { day: Day::Thu, slots: WEEKDAY_SLOTS },
    DaySchedule { day: Day::Fri, slots: FRIDAY_SLOTS },
    DaySchedule { day: Day::Sat, slots: WEEKEND_SLOTS },
    DaySchedule { day: Day::Sun, slots: WEEKEND_SLOTS },
];

pub const INQUIRIES: &[(&str, &str)] = &[
    ("membership", "Membership"),
    ("training", "Personal Training"),
    ("classes", "Group Classes"),
    ("facilities", "Facilities"),
    ("other", "Other"),
];
