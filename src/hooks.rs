use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Vertical scroll offset of the window, refreshed on every scroll event.
#[hook]
pub fn use_scroll_offset() -> f64 {
    let offset = use_state(current_scroll_y);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();

                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    offset.set(current_scroll_y());
                });

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (), // Listener lives as long as the component
        );
    }

    *offset
}
