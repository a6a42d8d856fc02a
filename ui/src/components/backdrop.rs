//! Full-viewport particle animation behind the page.
//!
//! Browser builds draw on a `<canvas>`; native shells render the same
//! field as SVG lines, sized from the `Signal<Viewport>` context the shell
//! provides (falling back to [`Viewport::FALLBACK`]).

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
#[component]
pub fn BlueprintBackground() -> Element {
    use dioxus::logger::tracing::warn;

    let animator: Rc<RefCell<Option<canvas::Animator>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_drop({
        let animator = animator.clone();
        move || {
            if let Some(mut animator) = animator.borrow_mut().take() {
                animator.stop();
            }
        }
    });

    let on_mounted = move |evt: MountedEvent| {
        if animator.borrow().is_some() {
            return;
        }
        let Some(element) = evt.data().downcast::<web_sys::Element>().cloned() else {
            return;
        };
        match canvas::Animator::start(element) {
            Some(started) => *animator.borrow_mut() = Some(started),
            None => warn!("[backdrop] 2d canvas unavailable; background stays blank"),
        }
    };

    rsx! {
        canvas {
            class: "backdrop",
            aria_hidden: "true",
            onmounted: on_mounted,
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod canvas {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::logger::tracing::debug;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use crate::core::platform::{viewport, ResizeListener, Viewport};
    use crate::core::timing::FrameTicker;
    use crate::effects::particles::{ParticleField, Segment, Surface, LINE_COLOR, LINE_WIDTH};

    pub struct Animator {
        ticker: FrameTicker,
        resize: Option<ResizeListener>,
    }

    impl Animator {
        pub fn start(element: web_sys::Element) -> Option<Self> {
            let canvas: HtmlCanvasElement = element.dyn_into().ok()?;
            let context: CanvasRenderingContext2d =
                canvas.get_context("2d").ok()??.dyn_into().ok()?;

            let bounds = viewport().unwrap_or_default();
            fit(&canvas, bounds);
            let field = Rc::new(RefCell::new(ParticleField::new(
                bounds,
                &mut rand::thread_rng(),
            )));
            debug!("[backdrop] started at {}x{}", bounds.width, bounds.height);

            let resize = ResizeListener::attach({
                let field = field.clone();
                let canvas = canvas.clone();
                move |bounds| {
                    fit(&canvas, bounds);
                    field.borrow_mut().resize(bounds, &mut rand::thread_rng());
                    debug!("[backdrop] reset for {}x{}", bounds.width, bounds.height);
                }
            });

            let mut surface = CanvasSurface { context };
            let ticker = FrameTicker::start(move || field.borrow_mut().frame(&mut surface));

            Some(Self { ticker, resize })
        }

        pub fn stop(&mut self) {
            self.ticker.cancel();
            if let Some(resize) = self.resize.as_mut() {
                resize.detach();
            }
            debug!("[backdrop] stopped");
        }
    }

    fn fit(canvas: &HtmlCanvasElement, bounds: Viewport) {
        canvas.set_width(bounds.width as u32);
        canvas.set_height(bounds.height as u32);
    }

    struct CanvasSurface {
        context: CanvasRenderingContext2d,
    }

    impl Surface for CanvasSurface {
        fn clear(&mut self, bounds: Viewport) {
            self.context.clear_rect(0.0, 0.0, bounds.width, bounds.height);
            // Resizing the canvas resets context state, so restyle every frame.
            self.context.set_stroke_style_str(LINE_COLOR);
            self.context.set_line_width(LINE_WIDTH);
        }

        fn line(&mut self, segment: Segment) {
            self.context.begin_path();
            self.context.move_to(segment.x1, segment.y1);
            self.context.line_to(segment.x2, segment.y2);
            self.context.stroke();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn BlueprintBackground() -> Element {
    use crate::core::platform::Viewport;
    use crate::core::timing::FrameTicker;
    use crate::effects::particles::{LineBuffer, ParticleField, LINE_COLOR, LINE_WIDTH};

    let shell_viewport = try_use_context::<Signal<Viewport>>();
    let mut field = use_signal(|| {
        let bounds = shell_viewport.map(|vp| *vp.peek()).unwrap_or_default();
        ParticleField::new(bounds, &mut rand::thread_rng())
    });
    let mut lines = use_signal(LineBuffer::default);

    use_effect(move || {
        let Some(viewport) = shell_viewport else {
            return;
        };
        let bounds = viewport();
        if field.peek().bounds() != bounds {
            field.with_mut(|f| f.resize(bounds, &mut rand::thread_rng()));
        }
    });

    let ticker = use_hook(|| {
        Rc::new(RefCell::new(FrameTicker::start(move || {
            lines.with_mut(|buffer| field.with_mut(|f| f.frame(buffer)));
        })))
    });
    use_drop(move || ticker.borrow_mut().cancel());

    let bounds = field.peek().bounds();
    let segments = lines.read().segments.clone();

    rsx! {
        svg {
            class: "backdrop",
            "aria-hidden": "true",
            view_box: "0 0 {bounds.width} {bounds.height}",
            preserve_aspect_ratio: "none",
            for (i, segment) in segments.into_iter().enumerate() {
                line {
                    key: "{i}",
                    x1: "{segment.x1}",
                    y1: "{segment.y1}",
                    x2: "{segment.x2}",
                    y2: "{segment.y2}",
                    stroke: LINE_COLOR,
                    stroke_width: "{LINE_WIDTH}",
                }
            }
        }
    }
}
