use yew::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{DomException, HtmlVideoElement, MouseEvent};

use crate::content::{Facility, Video};

#[derive(Properties, PartialEq)]
pub struct VideoShowcaseProps {
    pub videos: &'static [Video],
}

/// A hover-out pauses the video while `play()` is still pending, which rejects
/// the play promise with `AbortError`. That is routine, not a failure.
pub fn is_interrupted_playback(error_name: Option<&str>) -> bool {
    error_name == Some("AbortError")
}

/// Videos play while hovered and rewind when the pointer leaves.
#[function_component(VideoShowcase)]
pub fn video_showcase(props: &VideoShowcaseProps) -> Html {
    let onmouseenter = Callback::from(|e: MouseEvent| {
        let video: HtmlVideoElement = e.target_unchecked_into();
        if let Ok(promise) = video.play() {
            spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    let name = err.dyn_ref::<DomException>().map(|e| e.name());
                    if is_interrupted_playback(name.as_deref()) {
                        debug!("Video playback interrupted before it started");
                    } else {
                        warn!("Video playback failed: {:?}", err);
                    }
                }
            });
        }
    });

    let onmouseleave = Callback::from(|e: MouseEvent| {
        let video: HtmlVideoElement = e.target_unchecked_into();
        let _ = video.pause();
        video.set_current_time(0.0);
    });

    html! {
        <div class="video-showcase">
            { for props.videos.iter().map(|video| html! {
                <div class="video-wrapper">
                    <video
                        src={video.src}
                        muted=true
                        loop=true
                        playsinline=true
                        preload="metadata"
                        onmouseenter={onmouseenter.clone()}
                        onmouseleave={onmouseleave.clone()}
                    />
                    <p class="video-caption">{video.caption}</p>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FacilityGridProps {
    pub facilities: &'static [Facility],
}

#[function_component(FacilityGrid)]
pub fn facility_grid(props: &FacilityGridProps) -> Html {
    html! {
        <div class="facilities-grid">
            { for props.facilities.iter().map(|facility| {
                let title = facility.title;
                html! {
                    <div
                        class="facility-card"
                        onmouseenter={Callback::from(move |_: MouseEvent| info!("Exploring: {}", title))}
                    >
                        <div class="facility-icon">{facility.icon}</div>
                        <h3>{facility.title}</h3>
                        <p>{facility.description}</p>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_during_pending_play_is_routine() {
        assert!(is_interrupted_playback(Some("AbortError")));
    }

    #[test]
    fn other_playback_errors_are_reported() {
        assert!(!is_interrupted_playback(Some("NotAllowedError")));
        assert!(!is_interrupted_playback(Some("NotSupportedError")));
        assert!(!is_interrupted_playback(None));
    }
}
