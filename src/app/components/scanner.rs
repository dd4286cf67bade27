//! Camera QR scanner for the check-in terminal.
//!
//! Frames from the rear camera are drawn to an offscreen canvas and handed
//! to the page-global `jsQR` decoder. Every decoded value is dispatched as
//! [`Action::Scanned`]; debouncing happens in the reducer.

use std::time::Duration;

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::app::store::use_store;
use crate::platform;
use crate::state::Action;

const VIDEO_ID: &str = "scanner-video";
const CANVAS_ID: &str = "scanner-canvas";

/// Gap between two decode attempts
const FRAME_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq)]
enum CameraState {
    Idle,
    Starting,
    Active,
    Failed(String),
}

#[component]
pub fn Scanner() -> Element {
    let store = use_store();
    let mut camera_state = use_signal(|| CameraState::Idle);

    use_drop(move || camera::stop(VIDEO_ID));

    let start = move |_| {
        if matches!(
            *camera_state.peek(),
            CameraState::Starting | CameraState::Active
        ) {
            return;
        }
        camera_state.set(CameraState::Starting);
        spawn(async move {
            if let Err(e) = camera::start(VIDEO_ID).await {
                warn!("Camera unavailable: {}", e);
                camera_state.set(CameraState::Failed(e));
                return;
            }
            debug!("Camera started");
            camera_state.set(CameraState::Active);

            while *camera_state.peek() == CameraState::Active {
                if let Some(raw) = camera::decode_frame(VIDEO_ID, CANVAS_ID) {
                    store.dispatch(Action::Scanned {
                        raw,
                        at_ms: platform::now_ms(),
                    });
                }
                platform::sleep(FRAME_INTERVAL).await;
            }
        });
    };

    let stop = move |_| {
        camera::stop(VIDEO_ID);
        camera_state.set(CameraState::Idle);
    };

    let state = camera_state();
    let active = matches!(state, CameraState::Active | CameraState::Starting);
    let status_line = match state {
        CameraState::Starting => rsx! { p { class: "text-sm text-gray-500", "Requesting camera..." } },
        CameraState::Active => rsx! { p { class: "text-sm text-gray-500", "Point the badge QR code at the camera." } },
        CameraState::Failed(e) => rsx! { p { class: "text-sm text-red-600", "Camera unavailable: {e}. Use manual entry below." } },
        CameraState::Idle => rsx! {},
    };

    rsx! {
        div { class: "flex flex-col items-center gap-3",
            video {
                id: VIDEO_ID,
                class: "scanner-video",
                autoplay: true,
                muted: true,
                "playsinline": "true",
            }
            canvas { id: CANVAS_ID, class: "hidden" }

            div { class: "flex gap-2",
                if active {
                    button {
                        class: "btn bg-gray-200 text-gray-800",
                        r#type: "button",
                        onclick: stop,
                        "Stop camera"
                    }
                } else {
                    button {
                        class: "btn bg-indigo-600 text-white",
                        r#type: "button",
                        onclick: start,
                        "Start camera"
                    }
                }
            }

            {status_line}
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod camera {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, ImageData, MediaStream,
        MediaStreamConstraints, MediaStreamTrack,
    };

    fn element<T: JsCast>(id: &str) -> Option<T> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<T>()
            .ok()
    }

    fn js_error(e: JsValue) -> String {
        e.as_string()
            .or_else(|| {
                js_sys::Reflect::get(&e, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| "unknown error".to_string())
    }

    /// Open the rear camera and attach it to the video element.
    pub async fn start(video_id: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        let devices = window.navigator().media_devices().map_err(js_error)?;

        let video_constraints = js_sys::Object::new();
        js_sys::Reflect::set(
            &video_constraints,
            &JsValue::from_str("facingMode"),
            &JsValue::from_str("environment"),
        )
        .map_err(js_error)?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&video_constraints);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(js_error)?;
        let stream: MediaStream = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| "camera returned no stream".to_string())?;

        let video = element::<HtmlVideoElement>(video_id).ok_or("video element missing")?;
        video.set_src_object(Some(&stream));
        let _ = video.play();
        Ok(())
    }

    /// Stop every camera track attached to the video element.
    pub fn stop(video_id: &str) {
        let Some(video) = element::<HtmlVideoElement>(video_id) else {
            return;
        };
        if let Some(stream) = video.src_object() {
            for track in stream.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                    track.stop();
                }
            }
        }
        video.set_src_object(None);
    }

    /// Grab the current frame and try to decode a QR code from it.
    pub fn decode_frame(video_id: &str, canvas_id: &str) -> Option<String> {
        let video = element::<HtmlVideoElement>(video_id)?;
        let canvas = element::<HtmlCanvasElement>(canvas_id)?;
        let (w, h) = (video.video_width(), video.video_height());
        if w == 0 || h == 0 {
            return None;
        }
        canvas.set_width(w);
        canvas.set_height(h);

        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        ctx.draw_image_with_html_video_element(&video, 0.0, 0.0).ok()?;
        let image = ctx.get_image_data(0.0, 0.0, w as f64, h as f64).ok()?;
        decode_image(&image)
    }

    /// Run the page-global `jsQR(data, width, height)`; None when absent.
    fn decode_image(image: &ImageData) -> Option<String> {
        let window = web_sys::window()?;
        let jsqr = js_sys::Reflect::get(&window, &JsValue::from_str("jsQR")).ok()?;
        let jsqr = jsqr.dyn_into::<js_sys::Function>().ok()?;

        let data = js_sys::Reflect::get(image.as_ref(), &JsValue::from_str("data")).ok()?;
        let result = jsqr
            .call3(
                &JsValue::NULL,
                &data,
                &JsValue::from_f64(image.width() as f64),
                &JsValue::from_f64(image.height() as f64),
            )
            .ok()?;
        if result.is_null() || result.is_undefined() {
            return None;
        }
        js_sys::Reflect::get(&result, &JsValue::from_str("data"))
            .ok()?
            .as_string()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod camera {
    pub async fn start(_video_id: &str) -> Result<(), String> {
        Err("camera access needs a browser".to_string())
    }

    pub fn stop(_video_id: &str) {}

    pub fn decode_frame(_video_id: &str, _canvas_id: &str) -> Option<String> {
        None
    }
}
