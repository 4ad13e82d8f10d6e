use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use super::{now, use_motion_config, viewport_width};
use crate::motion::{PointerFollow, PointerPosition, PointerUpdate};

/// Pointer position relative to `container`, or `None` while the viewport
/// is at or below the mobile breakpoint.
#[hook]
pub fn use_pointer_follow(container: NodeRef) -> Option<PointerPosition> {
    let config = use_motion_config();
    let follow = use_mut_ref(|| {
        PointerFollow::new(f64::from(config.pointer_throttle_ms), config.mobile_breakpoint)
    });
    let enabled = use_state_eq(|| false);
    let position = use_state_eq(|| None::<PointerPosition>);

    // Width decides whether the pointer listener exists at all.
    {
        let follow = follow.clone();
        let enabled = enabled.clone();
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let sync = move || {
                    let flipped = follow.borrow_mut().set_viewport_width(viewport_width());
                    if flipped {
                        let on = follow.borrow().is_enabled();
                        debug!("Pointer follow {}", if on { "enabled" } else { "disabled" });
                        enabled.set(on);
                        if !on {
                            position.set(None);
                        }
                    }
                };
                sync();

                let window = web_sys::window();
                let on_resize = Closure::<dyn FnMut()>::new(sync);
                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let follow = follow.clone();
        let position = position.clone();
        use_effect_with_deps(
            move |enabled| {
                let mut listener: Option<(web_sys::Window, Closure<dyn FnMut(MouseEvent)>)> = None;
                let flush_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                if *enabled {
                    let follow = follow.clone();
                    let flush_timer = flush_timer.clone();
                    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
                        let origin = container
                            .cast::<Element>()
                            .map(|el| {
                                let rect = el.get_bounding_client_rect();
                                (rect.left(), rect.top())
                            })
                            .unwrap_or((0.0, 0.0));
                        let at = now();
                        let update = follow.borrow_mut().on_pointer_move(
                            f64::from(e.client_x()),
                            f64::from(e.client_y()),
                            origin,
                            at,
                        );
                        match update {
                            PointerUpdate::Applied(p) => position.set(Some(p)),
                            PointerUpdate::Scheduled { delay_ms } => {
                                let due = at + delay_ms;
                                let follow = follow.clone();
                                let position = position.clone();
                                let timeout = Timeout::new(delay_ms.ceil() as u32, move || {
                                    let flushed = follow.borrow_mut().flush(now().max(due));
                                    if let Some(p) = flushed {
                                        position.set(Some(p));
                                    }
                                });
                                *flush_timer.borrow_mut() = Some(timeout);
                            }
                            PointerUpdate::Coalesced | PointerUpdate::Ignored => {}
                        }
                    });

                    if let Some(window) = web_sys::window() {
                        let callback: &Function = on_move.as_ref().unchecked_ref();
                        let _ = window.add_event_listener_with_callback("mousemove", callback);
                        listener = Some((window, on_move));
                    }
                }

                move || {
                    if let Some((window, on_move)) = listener {
                        let callback: &Function = on_move.as_ref().unchecked_ref();
                        let _ = window.remove_event_listener_with_callback("mousemove", callback);
                    }
                    flush_timer.borrow_mut().take();
                    follow.borrow_mut().cancel_pending();
                }
            },
            *enabled,
        );
    }

    {
        let follow = follow.clone();
        use_effect_with_deps(move |_| move || follow.borrow_mut().dispose(), ());
    }

    *position
}
