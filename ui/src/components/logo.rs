use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::core::config::{BRAND, LOGO_PLACEHOLDER_URL, LOGO_URL};

/// Which image the brand mark is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoSource {
    #[default]
    Primary,
    Placeholder,
}

impl LogoSource {
    pub fn url(self) -> &'static str {
        match self {
            LogoSource::Primary => LOGO_URL,
            LogoSource::Placeholder => LOGO_PLACEHOLDER_URL,
        }
    }

    /// Source to switch to after a load failure. The placeholder never
    /// falls back further, so a broken placeholder cannot loop.
    pub fn on_load_error(self) -> LogoSource {
        LogoSource::Placeholder
    }
}

#[component]
pub fn Logo(#[props(default)] class: String) -> Element {
    let mut source = use_signal(LogoSource::default);

    let on_error = move |_: ImageEvent| {
        let current = source();
        let next = current.on_load_error();
        if next != current {
            warn!("[logo] {} failed to load; using placeholder", current.url());
            source.set(next);
        }
    };

    rsx! {
        img {
            class: "logo {class}",
            src: source().url(),
            alt: BRAND,
            onerror: on_error,
        }
    }
}
