//! Scroll-driven motion: viewport watching, staggered reveals, count-ups,
//! pointer-follow light and the scroll-to-top threshold.
//!
//! Nothing in here touches the DOM except [`frame::BrowserFrames`]; the Yew
//! hooks in `crate::hooks` feed browser events in and read state back out.

pub mod count_up;
pub mod easing;
pub mod frame;
pub mod pointer;
pub mod reveal;
pub mod scroll_top;
pub mod throttle;
pub mod viewport;

pub use count_up::CountUpRun;
pub use easing::Easing;
pub use frame::{BrowserFrames, FrameScheduler};
pub use pointer::{PointerFollow, PointerPosition, PointerUpdate};
pub use reveal::{RevealConfig, RevealController, RevealPhase, RevealRun, RevealStyle};
pub use scroll_top::{ScrollTopAffordance, ScrollUpdate};
pub use viewport::{ViewportEvent, ViewportSignal, ViewportWatcher, WatchOptions};
