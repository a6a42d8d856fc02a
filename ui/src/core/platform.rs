//! Viewport helpers.

/// Size of the visible drawing area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Used before a native shell reports its window size.
    pub const FALLBACK: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Current browser viewport (`innerWidth` × `innerHeight`).
#[cfg(target_arch = "wasm32")]
pub fn viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

/// A `resize` listener on `window`, removed on [`ResizeListener::detach`] or drop.
#[cfg(target_arch = "wasm32")]
pub struct ResizeListener {
    window: web_sys::Window,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
    attached: bool,
}

#[cfg(target_arch = "wasm32")]
impl ResizeListener {
    pub fn attach(mut on_resize: impl FnMut(Viewport) + 'static) -> Option<Self> {
        use dioxus::logger::tracing::warn;
        use wasm_bindgen::{closure::Closure, JsCast};

        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            if let Some(size) = viewport() {
                on_resize(size);
            }
        });
        if let Err(err) =
            window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
        {
            warn!("[platform] resize listener not attached: {err:?}");
            return None;
        }
        Some(Self {
            window,
            callback,
            attached: true,
        })
    }

    pub fn detach(&mut self) {
        use wasm_bindgen::JsCast;

        if !self.attached {
            return;
        }
        self.attached = false;
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ResizeListener {
    fn drop(&mut self) {
        self.detach();
    }
}
