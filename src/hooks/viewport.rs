use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Function};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};
use yew::prelude::*;

use super::viewport_height;
use crate::motion::viewport::scroll_progress;
use crate::motion::{ViewportEvent, ViewportSignal, ViewportWatcher, WatchOptions};

/// Visibility and scroll progress of the element behind `node`.
#[hook]
pub fn use_viewport(node: NodeRef, options: WatchOptions) -> ViewportSignal {
    let signal = use_state_eq(ViewportSignal::default);

    {
        let signal = signal.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let subscription = Subscription::attach(node, options.clone(), signal.setter());
                move || drop(subscription)
            },
            (node, options),
        );
    }

    *signal
}

/// Everything one watched region holds on to. Dropping it releases the
/// observer and listeners.
struct Subscription {
    window: Window,
    watcher: Rc<RefCell<ViewportWatcher>>,
    observer: Option<IntersectionObserver>,
    _on_intersect: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
    on_scroll: Option<Closure<dyn FnMut()>>,
}

impl Subscription {
    fn attach(
        node: &NodeRef,
        options: WatchOptions,
        setter: UseStateSetter<ViewportSignal>,
    ) -> Option<Subscription> {
        let Some(element) = node.cast::<Element>() else {
            debug!("Viewport target not mounted, nothing to observe");
            return None;
        };
        let window = web_sys::window()?;

        let watcher = Rc::new(RefCell::new(ViewportWatcher::new(options.clone())));
        watcher.borrow_mut().attach();

        let emit = {
            let watcher = watcher.clone();
            move |event: ViewportEvent| {
                let changed = watcher.borrow_mut().handle(event);
                if let Some(signal) = changed {
                    setter.set(signal);
                }
            }
        };

        let threshold = options.threshold;
        let once = options.once;
        let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
            let emit = emit.clone();
            let watcher = watcher.clone();
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    if !target.is_connected() {
                        observer.unobserve(&target);
                        emit(ViewportEvent::Detached);
                        continue;
                    }
                    let visible = entry.is_intersecting() && entry.intersection_ratio() >= threshold;
                    emit(ViewportEvent::Intersection { visible });
                }
                if once && !watcher.borrow().phase().is_observing() {
                    observer.disconnect();
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(&options.root_margin);

        let observer = match IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => {
                observer.observe(&element);
                Some(observer)
            }
            Err(e) => {
                warn!("IntersectionObserver unavailable, showing region: {:?}", e);
                emit(ViewportEvent::Unsupported);
                None
            }
        };

        let on_scroll = if once {
            None
        } else {
            let update = {
                let emit = emit.clone();
                let watcher = watcher.clone();
                move || {
                    if !watcher.borrow().wants_progress() {
                        return;
                    }
                    let rect = element.get_bounding_client_rect();
                    let progress = scroll_progress(rect.top(), rect.height(), viewport_height());
                    emit(ViewportEvent::Scrolled { progress });
                }
            };
            update();
            let on_scroll = Closure::<dyn FnMut()>::new(update);
            let callback: &Function = on_scroll.as_ref().unchecked_ref();
            let _ = window.add_event_listener_with_callback("scroll", callback);
            let _ = window.add_event_listener_with_callback("resize", callback);
            Some(on_scroll)
        };

        Some(Subscription {
            window,
            watcher,
            observer,
            _on_intersect: Some(on_intersect),
            on_scroll,
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        if let Some(on_scroll) = self.on_scroll.take() {
            let callback: &Function = on_scroll.as_ref().unchecked_ref();
            let _ = self.window.remove_event_listener_with_callback("scroll", callback);
            let _ = self.window.remove_event_listener_with_callback("resize", callback);
        }
        self.watcher.borrow_mut().detach();
    }
}
