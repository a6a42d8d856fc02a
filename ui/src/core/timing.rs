//! Per-frame scheduling for the ambient animation.
//!
//! [`FrameTicker`] owns its schedule: `cancel()` (or dropping the handle)
//! guarantees no further ticks. Browsers drive it with
//! `requestAnimationFrame`; native shells use a Dioxus task sleeping between
//! frames, so a `FrameTicker` must be started from inside a component.

/// Nominal frame interval for native shells (~60 Hz).
pub const FRAME_MS: u64 = 16;

pub struct FrameTicker {
    handle: imp::Handle,
}

impl FrameTicker {
    pub fn start(tick: impl FnMut() + 'static) -> Self {
        Self {
            handle: imp::start(tick),
        }
    }

    /// Stop ticking. Safe to call more than once.
    pub fn cancel(&mut self) {
        self.handle.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }
}

impl Drop for FrameTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use dioxus::logger::tracing::warn;
    use wasm_bindgen::{closure::Closure, JsCast};

    type FrameCallback = Closure<dyn FnMut(f64)>;

    pub struct Handle {
        window: Option<web_sys::Window>,
        // The callback re-requests itself, so it keeps a clone of this slot;
        // emptying the slot on cancel breaks that cycle.
        callback: Rc<RefCell<Option<FrameCallback>>>,
        pending: Rc<Cell<Option<i32>>>,
        running: Rc<Cell<bool>>,
    }

    pub fn start(mut tick: impl FnMut() + 'static) -> Handle {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(false));

        let Some(window) = web_sys::window() else {
            warn!("[timing] no window; animation frames unavailable");
            return Handle {
                window: None,
                callback,
                pending,
                running,
            };
        };

        let on_frame = {
            let window = window.clone();
            let callback = callback.clone();
            let pending = pending.clone();
            let running = running.clone();
            move |_timestamp: f64| {
                if !running.get() {
                    return;
                }
                tick();
                pending.set(request_frame(&window, &callback));
            }
        };
        *callback.borrow_mut() = Some(Closure::new(on_frame));

        running.set(true);
        pending.set(request_frame(&window, &callback));

        Handle {
            window: Some(window),
            callback,
            pending,
            running,
        }
    }

    fn request_frame(
        window: &web_sys::Window,
        callback: &RefCell<Option<FrameCallback>>,
    ) -> Option<i32> {
        let slot = callback.borrow();
        let cb = slot.as_ref()?;
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|err| warn!("[timing] requestAnimationFrame failed: {err:?}"))
            .ok()
    }

    impl Handle {
        pub fn cancel(&mut self) {
            if !self.running.replace(false) {
                return;
            }
            if let (Some(window), Some(id)) = (self.window.as_ref(), self.pending.take()) {
                let _ = window.cancel_animation_frame(id);
            }
            self.callback.borrow_mut().take();
        }

        pub fn is_running(&self) -> bool {
            self.running.get()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::time::Duration;

    use dioxus::prelude::{spawn, Task};

    use super::FRAME_MS;

    pub struct Handle {
        task: Option<Task>,
    }

    pub fn start(mut tick: impl FnMut() + 'static) -> Handle {
        let task = spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(FRAME_MS)).await;
                tick();
            }
        });
        Handle { task: Some(task) }
    }

    impl Handle {
        pub fn cancel(&mut self) {
            if let Some(task) = self.task.take() {
                task.cancel();
            }
        }

        pub fn is_running(&self) -> bool {
            self.task.is_some()
        }
    }
}
