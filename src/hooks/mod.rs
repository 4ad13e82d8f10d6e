//! Yew hooks that connect the motion engine to the browser.
//!
//! Every hook registers its listeners, observers and timers inside
//! `use_effect_with_deps` and releases them from the effect destructor.

mod count_up;
mod pointer;
mod reveal;
mod scroll;
mod viewport;

pub use count_up::use_count_up;
pub use pointer::use_pointer_follow;
pub use reveal::use_reveal;
pub use scroll::{scroll_to_id, scroll_to_top, use_scroll_top};
pub use viewport::use_viewport;

use yew::prelude::*;

use crate::config::MotionConfig;

/// Wall-clock milliseconds, the time base for throttles and reveals.
pub fn now() -> f64 {
    web_sys::js_sys::Date::now()
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[hook]
pub fn use_motion_config() -> MotionConfig {
    use_context::<MotionConfig>().unwrap_or_default()
}
