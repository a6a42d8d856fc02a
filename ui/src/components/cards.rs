//! Course and workshop cards. Both are pure: every string arrives already
//! localized from the caller.

use dioxus::prelude::*;

/// Icon class for an arrow pointing in the reading direction.
pub fn forward_arrow(rtl: bool) -> &'static str {
    if rtl {
        "fa-arrow-left"
    } else {
        "fa-arrow-right"
    }
}

/// A curriculum level.
///
/// `level_label` is the localized word for "Level"; `label` is the
/// localized "Modules" suffix shown after `modules`.
#[component]
pub fn CourseCard(
    level: &'static str,
    level_label: &'static str,
    title: &'static str,
    desc: &'static str,
    price: &'static str,
    modules: u32,
    img: &'static str,
    rtl: bool,
    label: &'static str,
) -> Element {
    let arrow = forward_arrow(rtl);

    rsx! {
        article { class: "course-card",
            div { class: "course-card__media",
                img { class: "course-card__image", src: img, alt: title }
                span { class: "course-card__level", "{level_label} {level}" }
            }
            div { class: "course-card__body",
                div { class: "course-card__meta",
                    span { class: "course-card__modules",
                        i { class: "fas fa-layer-group", aria_hidden: "true" }
                        "{modules} {label}"
                    }
                    span { class: "course-card__price", "{price}" }
                }
                h3 { class: "course-card__title", "{title}" }
                p { class: "course-card__desc", "{desc}" }
                span { class: "course-card__more",
                    i { class: "fas {arrow}", aria_hidden: "true" }
                }
            }
        }
    }
}

#[component]
pub fn WorkshopCard(
    title: &'static str,
    desc: &'static str,
    img: &'static str,
    rtl: bool,
    badge: &'static str,
    button: &'static str,
) -> Element {
    let arrow = forward_arrow(rtl);

    rsx! {
        article { class: "workshop-card",
            div { class: "workshop-card__media",
                img { class: "workshop-card__image", src: img, alt: title }
                span { class: "workshop-card__badge", "{badge}" }
            }
            div { class: "workshop-card__body",
                h3 { class: "workshop-card__title", "{title}" }
                p { class: "workshop-card__desc", "{desc}" }
                button { class: "button button--outline workshop-card__button", r#type: "button",
                    "{button}"
                    i { class: "fas {arrow}", aria_hidden: "true" }
                }
            }
        }
    }
}
