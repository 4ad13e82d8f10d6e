//! Per-frame callback scheduling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Something that can run a callback on the next animation frame.
///
/// Callbacks receive the frame timestamp in milliseconds.
pub trait FrameScheduler {
    type Handle;

    /// `None` when the host refused to schedule the frame.
    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// `window.requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFrames;

pub struct BrowserFrame {
    id: i32,
    // Keeps the JS closure alive until the frame fires or is cancelled.
    _closure: Closure<dyn FnMut(f64)>,
}

impl FrameScheduler for BrowserFrames {
    type Handle = BrowserFrame;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<BrowserFrame> {
        let window = web_sys::window()?;
        let slot = Rc::new(RefCell::new(Some(callback)));
        let closure = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            if let Some(callback) = slot.borrow_mut().take() {
                callback(timestamp);
            }
        });
        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()?;
        Some(BrowserFrame {
            id,
            _closure: closure,
        })
    }

    fn cancel(&self, handle: BrowserFrame) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle.id);
        }
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::FrameScheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Pending = Vec<(u32, Box<dyn FnOnce(f64)>)>;

    /// Frames fire only when the test says so.
    #[derive(Clone, Default)]
    pub struct ManualFrames {
        next_id: Rc<Cell<u32>>,
        pending: Rc<RefCell<Pending>>,
    }

    impl ManualFrames {
        pub fn pending(&self) -> usize {
            self.pending.borrow().len()
        }

        /// Run every callback queued before this call.
        pub fn fire(&self, timestamp: f64) {
            let due: Pending = self.pending.borrow_mut().drain(..).collect();
            for (_, callback) in due {
                callback(timestamp);
            }
        }
    }

    impl FrameScheduler for ManualFrames {
        type Handle = u32;

        fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<u32> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.pending.borrow_mut().push((id, callback));
            Some(id)
        }

        fn cancel(&self, handle: u32) {
            self.pending.borrow_mut().retain(|(id, _)| *id != handle);
        }
    }
}
