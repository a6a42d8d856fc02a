use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::sections::{About, Community, Courses, Footer, Hero, Newsletter, Stats, Workshops};
use crate::components::{AppNavbar, BlueprintBackground};
use crate::i18n::Locale;

/// Class list of the page root. Arabic switches the font stack.
pub fn root_class(locale: Locale) -> &'static str {
    if locale.is_rtl() {
        "landing font-arabic"
    } else {
        "landing"
    }
}

/// The whole landing page. Owns the current locale; every section receives
/// it as a prop and reads its strings from `locale.bundle()`.
#[component]
pub fn Landing() -> Element {
    let mut locale = use_signal(Locale::default);

    let on_toggle = move |_: ()| {
        let next = locale().toggled();
        debug!("[landing] locale {} -> {next}", locale());
        locale.set(next);
    };

    let current = locale();

    rsx! {
        div {
            class: root_class(current),
            dir: current.dir(),
            lang: current.tag(),
            BlueprintBackground {}
            AppNavbar { locale: current, on_toggle }
            main { class: "landing__main",
                Hero { locale: current }
                Stats { locale: current }
                Courses { locale: current }
                Workshops { locale: current }
                Community { locale: current }
                About { locale: current }
                Newsletter { locale: current }
            }
            Footer { locale: current }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_root_is_rtl_with_arabic_font() {
        assert_eq!(Locale::Arabic.dir(), "rtl");
        assert!(root_class(Locale::Arabic).contains("font-arabic"));
    }

    #[test]
    fn english_root_is_ltr() {
        assert_eq!(Locale::English.dir(), "ltr");
        assert_eq!(root_class(Locale::English), "landing");
    }
}
