use dioxus::prelude::*;

use super::Logo;
use crate::core::config::BRAND;
use crate::i18n::Locale;

/// In-page anchors, in display order, paired with their label lookup.
pub const NAV_ANCHORS: [&str; 4] = ["#courses", "#workshops", "#gallery", "#about"];

/// Fixed top bar: brand, section anchors, the language switch and the
/// "join" call to action.
///
/// The switch shows the *other* language's name (see
/// [`Locale::switch_label`]) and asks the owner to flip the locale through
/// `on_toggle`; the navbar keeps no locale state of its own.
#[component]
pub fn AppNavbar(locale: Locale, on_toggle: EventHandler<()>) -> Element {
    let nav = &locale.bundle().nav;
    let labels = [
        nav.courses.as_str(),
        nav.workshops.as_str(),
        nav.gallery.as_str(),
        nav.about.as_str(),
    ];

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#",
                    Logo { class: "navbar__logo" }
                    span { class: "navbar__brand-mark", "{BRAND}" }
                }

                nav { class: "navbar__links",
                    for (href, label) in NAV_ANCHORS.into_iter().zip(labels) {
                        a { key: "{href}", class: "navbar__link", href, "{label}" }
                    }
                }

                div { class: "navbar__actions",
                    button {
                        class: "navbar__locale",
                        r#type: "button",
                        lang: locale.toggled().tag(),
                        onclick: move |_| on_toggle.call(()),
                        i { class: "fas fa-globe", aria_hidden: "true" }
                        "{locale.switch_label()}"
                    }
                    button { class: "button button--primary navbar__join", r#type: "button",
                        "{nav.join}"
                    }
                }
            }
        }
    }
}
