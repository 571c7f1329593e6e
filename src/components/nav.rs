use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::config::NAV_LOOKAHEAD;
use crate::content::{Section, SECTIONS};
use crate::hooks::use_scroll_offset;

/// Index of the last section whose top, minus the lookahead, is at or above
/// the scroll offset. `None` while the page is scrolled above every section.
pub fn active_section(tops: &[f64], scroll_y: f64) -> Option<usize> {
    tops.iter().rposition(|top| scroll_y >= top - NAV_LOOKAHEAD)
}

/// The link to highlight. Falls back to the first link so one is always active.
pub fn active_link(tops: &[f64], scroll_y: f64) -> usize {
    active_section(tops, scroll_y).unwrap_or(0)
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// Following a link always closes the menu.
    pub fn close(self) -> Self {
        Self { open: false }
    }
}

/// Document offsets of the rendered sections, in the order given. Sections
/// that are not in the DOM never become active.
fn section_tops(sections: &[Section]) -> Vec<f64> {
    let document = web_sys::window().and_then(|window| window.document());

    sections
        .iter()
        .map(|section| {
            document
                .as_ref()
                .and_then(|document| document.get_element_by_id(section.id))
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
                .map(|element| element.offset_top() as f64)
                .unwrap_or(f64::INFINITY)
        })
        .collect()
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MenuState::default);
    let scroll_y = use_scroll_offset();

    let active = active_link(&section_tops(SECTIONS), scroll_y);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggle());
        })
    };

    // Anchor navigation still happens, only the mobile menu closes.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.close());
        })
    };

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#home" class="nav-logo">{"NYUAD Fitness Center"}</a>

                <ul id="navMenu" class={classes!("nav-menu", menu.open.then(|| "active"))}>
                    { for SECTIONS.iter().enumerate().map(|(index, section)| html! {
                        <li>
                            <a
                                href={format!("#{}", section.id)}
                                class={classes!("nav-link", (index == active).then(|| "active"))}
                                onclick={close_menu.clone()}
                            >
                                {section.label}
                            </a>
                        </li>
                    }) }
                </ul>

                <button
                    id="hamburger"
                    class={classes!("hamburger", menu.open.then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPS: [f64; 4] = [0.0, 800.0, 1600.0, 2400.0];

    #[test]
    fn menu_starts_closed_and_toggles() {
        let menu = MenuState::default();
        assert!(!menu.open);
        assert!(menu.toggle().open);
        assert_eq!(menu.toggle().toggle(), menu);
    }

    #[test]
    fn link_click_closes_menu_from_any_state() {
        let closed = MenuState::default();
        let open = closed.toggle();
        assert_eq!(open.close(), closed);
        assert_eq!(closed.close(), closed);
    }

    #[test]
    fn first_section_active_at_top_of_page() {
        assert_eq!(active_section(&TOPS, 0.0), Some(0));
        assert_eq!(active_link(&TOPS, 0.0), 0);
    }

    #[test]
    fn section_activates_within_lookahead() {
        assert_eq!(active_section(&TOPS, 599.0), Some(0));
        assert_eq!(active_section(&TOPS, 600.0), Some(1));
        assert_eq!(active_section(&TOPS, 2200.0), Some(3));
        assert_eq!(active_section(&TOPS, 10_000.0), Some(3));
    }

    #[test]
    fn falls_back_to_first_link_above_all_sections() {
        let tops = [500.0, 1200.0];
        assert_eq!(active_section(&tops, 0.0), None);
        assert_eq!(active_link(&tops, 0.0), 0);
    }

    #[test]
    fn missing_sections_never_activate() {
        let tops = [0.0, f64::INFINITY, 1600.0];
        assert_eq!(active_link(&tops, 900.0), 0);
        assert_eq!(active_link(&tops, 1400.0), 2);
    }

    #[test]
    fn active_link_is_last_reached_section_for_any_offset() {
        for step in 0..60 {
            let scroll_y = step as f64 * 50.0;
            let active = active_link(&TOPS, scroll_y);
            assert!(active < TOPS.len());
            assert!(scroll_y >= TOPS[active] - NAV_LOOKAHEAD || active == 0);
            if let Some(next) = TOPS.get(active + 1) {
                assert!(scroll_y < next - NAV_LOOKAHEAD);
            }
        }
    }
}
