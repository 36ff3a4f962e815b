use std::cell::RefCell;
use std::rc::Rc;

use sparkle_engine::{FrameHandle, FrameScheduler};
use wasm_bindgen::prelude::*;

/// Slot holding the per-frame callback. Shared between the scheduler (which
/// hands it to `requestAnimationFrame`) and the host (which fills and clears it).
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` / `cancelAnimationFrame` on the global window.
pub struct AnimationFrameScheduler {
    callback: FrameCallback,
}

impl AnimationFrameScheduler {
    pub fn new(callback: FrameCallback) -> Self {
        Self { callback }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = web_sys::window()?;
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(err) => {
                log::error!("sparkle-web: requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle.0);
        }
    }
}
