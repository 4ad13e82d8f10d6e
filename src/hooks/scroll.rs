use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::prelude::*;

use super::{now, use_motion_config};
use crate::motion::{ScrollTopAffordance, ScrollUpdate};

/// Whether the page is scrolled past the configured scroll-to-top threshold.
#[hook]
pub fn use_scroll_top() -> bool {
    let config = use_motion_config();
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(threshold, throttle_ms)| {
                let affordance = Rc::new(RefCell::new(ScrollTopAffordance::new(
                    *threshold,
                    f64::from(*throttle_ms),
                )));
                let flush_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                let on_scroll = {
                    let affordance = affordance.clone();
                    let flush_timer = flush_timer.clone();
                    move || {
                        let offset = web_sys::window()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        let at = now();
                        let update = affordance.borrow_mut().on_scroll(offset, at);
                        match update {
                            ScrollUpdate::Changed(shown) => visible.set(shown),
                            ScrollUpdate::Scheduled { delay_ms } => {
                                let due = at + delay_ms;
                                let affordance = affordance.clone();
                                let visible = visible.clone();
                                let timeout = Timeout::new(delay_ms.ceil() as u32, move || {
                                    let update = affordance.borrow_mut().flush(now().max(due));
                                    if let ScrollUpdate::Changed(shown) = update {
                                        visible.set(shown);
                                    }
                                });
                                *flush_timer.borrow_mut() = Some(timeout);
                            }
                            ScrollUpdate::Unchanged => {}
                        }
                    }
                };
                on_scroll();

                let window = web_sys::window();
                let on_scroll = Closure::<dyn FnMut()>::new(on_scroll);
                if let Some(window) = &window {
                    let callback: &Function = on_scroll.as_ref().unchecked_ref();
                    let _ = window.add_event_listener_with_callback("scroll", callback);
                }

                move || {
                    if let Some(window) = window {
                        let callback: &Function = on_scroll.as_ref().unchecked_ref();
                        let _ = window.remove_event_listener_with_callback("scroll", callback);
                    }
                    flush_timer.borrow_mut().take();
                    affordance.borrow_mut().dispose();
                }
            },
            (config.scroll_top_threshold, config.scroll_throttle_ms),
        );
    }

    *visible
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scroll to the element with `id`; does nothing if it is missing.
pub fn scroll_to_id(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
