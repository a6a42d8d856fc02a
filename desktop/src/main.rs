#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{
    tao::{dpi::PhysicalSize, window::WindowBuilder},
    Config,
};
use dioxus::prelude::*;

use ui::core::config::{BRAND, ICONS_CSS_URL};
use ui::core::platform::Viewport;
use ui::views::Landing;
use ui::THEME_CSS_INLINE;

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("{BRAND} – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Window size for the particle backdrop, which has no DOM to measure.
    #[cfg(feature = "desktop")]
    let window = dioxus::desktop::use_window();
    #[cfg(feature = "desktop")]
    let mut viewport = use_signal({
        let window = window.clone();
        move || logical_viewport(window.inner_size(), window.scale_factor())
    });
    #[cfg(not(feature = "desktop"))]
    let viewport = use_signal(Viewport::default);
    use_context_provider(|| viewport);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::tao::event::{Event, WindowEvent};
        use dioxus::desktop::use_wry_event_handler;

        use_wry_event_handler(move |event, _| {
            if let Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } = event
            {
                viewport.set(logical_viewport(*size, window.scale_factor()));
            }
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{THEME_CSS_INLINE}" }
        document::Link { rel: "stylesheet", href: ICONS_CSS_URL }

        Landing {}
    }
}

#[cfg(feature = "desktop")]
fn logical_viewport(size: PhysicalSize<u32>, scale_factor: f64) -> Viewport {
    let size = size.to_logical::<f64>(scale_factor);
    Viewport::new(size.width, size.height)
}

#[cfg(all(test, feature = "desktop"))]
mod tests {
    use super::*;

    #[test]
    fn window_size_is_scaled_to_css_pixels() {
        let vp = logical_viewport(PhysicalSize::new(2560, 1600), 2.0);
        assert_eq!(vp, Viewport::new(1280.0, 800.0));
    }

    #[test]
    fn unscaled_window_keeps_its_size() {
        let vp = logical_viewport(PhysicalSize::new(1024, 768), 1.0);
        assert_eq!(vp, Viewport::new(1024.0, 768.0));
    }
}
