use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::{KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::config::KEYBOARD_REFERENCE_Y;
use crate::content::Section;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageDirection {
    Next,
    Previous,
}

impl PageDirection {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(PageDirection::Next),
            "ArrowUp" => Some(PageDirection::Previous),
            _ => None,
        }
    }
}

/// Index of the last section whose viewport rect spans the reference line,
/// or 0 when none does.
pub fn section_at_reference(rects: &[(f64, f64)], reference: f64) -> usize {
    rects
        .iter()
        .rposition(|&(top, bottom)| top <= reference && bottom >= reference)
        .unwrap_or(0)
}

/// Section to scroll to from `current`, `None` at either end.
pub fn page_target(current: usize, count: usize, direction: PageDirection) -> Option<usize> {
    match direction {
        PageDirection::Next if current + 1 < count => Some(current + 1),
        PageDirection::Previous if current > 0 => Some(current - 1),
        _ => None,
    }
}

/// Arrow up/down pages between the given sections.
#[hook]
pub fn use_keyboard_paging(sections: &'static [Section]) {
    use_event_with_window("keydown", move |e: KeyboardEvent| {
        let Some(direction) = PageDirection::from_key(&e.key()) else {
            return;
        };
        e.prevent_default();

        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let elements: Vec<_> = sections
            .iter()
            .filter_map(|section| document.get_element_by_id(section.id))
            .collect();
        let rects: Vec<(f64, f64)> = elements
            .iter()
            .map(|element| {
                let rect = element.get_bounding_client_rect();
                (rect.top(), rect.bottom())
            })
            .collect();

        let current = section_at_reference(&rects, KEYBOARD_REFERENCE_Y);
        if let Some(target) = page_target(current, elements.len(), direction) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            elements[target].scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(PageDirection::from_key("ArrowDown"), Some(PageDirection::Next));
        assert_eq!(PageDirection::from_key("ArrowUp"), Some(PageDirection::Previous));
        assert_eq!(PageDirection::from_key("PageDown"), None);
    }

    #[test]
    fn current_section_spans_reference_line() {
        let rects = [(-900.0, -100.0), (-100.0, 700.0), (700.0, 1500.0)];
        assert_eq!(section_at_reference(&rects, 100.0), 1);
        // Nothing spans the line before the first section scrolls in
        let rects = [(150.0, 900.0), (900.0, 1700.0)];
        assert_eq!(section_at_reference(&rects, 100.0), 0);
    }

    #[test]
    fn paging_is_clamped() {
        assert_eq!(page_target(0, 5, PageDirection::Next), Some(1));
        assert_eq!(page_target(4, 5, PageDirection::Next), None);
        assert_eq!(page_target(0, 5, PageDirection::Previous), None);
        assert_eq!(page_target(3, 5, PageDirection::Previous), Some(2));
        assert_eq!(page_target(0, 0, PageDirection::Next), None);
    }
}
