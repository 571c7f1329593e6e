use yew::prelude::*;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::config::SCROLL_TOP_THRESHOLD;
use crate::hooks::use_scroll_offset;

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

const BUTTON_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; height: 50px; \
    border-radius: 50%; background: var(--primary); color: white; border: none; cursor: pointer; \
    font-size: 1.5rem; box-shadow: var(--shadow); transition: var(--transition); z-index: 999;";

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let scroll_y = use_scroll_offset();

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let display = if scroll_top_visible(scroll_y) { "block" } else { "none" };

    html! {
        <button
            class="scroll-top"
            style={format!("{} display: {};", BUTTON_STYLE, display)}
            {onclick}
        >
            {"↑"}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_follows_threshold() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(500.0));
        assert!(scroll_top_visible(500.5));
        assert!(scroll_top_visible(600.0));
    }
}
