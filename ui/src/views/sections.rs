//! Page sections, top to bottom. Each one is a pure function of the locale.

use dioxus::prelude::*;

use crate::components::{forward_arrow, CourseCard, Logo, Reveal, WorkshopCard};
use crate::core::config::{
    BRAND, COMMUNITY_IMAGE, COURSES, EMAIL_URL, FOUNDER_URL, HERO_IMAGE, INSTAGRAM_URL,
    NEWSLETTER_IMAGE, PHONE_DISPLAY, PHONE_URL, STATS, TELEGRAM_URL, WHATSAPP_URL,
    WORKSHOP_IMAGES,
};
use crate::i18n::Locale;

const STAGGER: [&str; 4] = [
    "reveal--delay-100",
    "reveal--delay-200",
    "reveal--delay-300",
    "reveal--delay-400",
];

/// Stagger class for the n-th item of a revealed grid (100 ms steps, capped).
fn stagger(index: usize) -> &'static str {
    STAGGER[index.min(STAGGER.len() - 1)]
}

#[component]
pub fn Hero(locale: Locale) -> Element {
    let hero = &locale.bundle().hero;
    let arrow = forward_arrow(locale.is_rtl());

    rsx! {
        section { class: "hero",
            div { class: "container hero__inner",
                Reveal { class: "hero__copy",
                    div { class: "hero__badge",
                        span { class: "hero__rule" }
                        span { "{hero.badge}" }
                    }
                    h1 { class: "hero__title",
                        "{hero.title_1}"
                        br {}
                        span { class: "hero__brand", "{BRAND}" }
                        br {}
                        "{hero.title_2}"
                    }
                    p { class: "hero__description", "{hero.description}" }
                    div { class: "hero__actions",
                        a { class: "button button--primary", href: "#courses",
                            "{hero.explore}"
                            i { class: "fas {arrow}", aria_hidden: "true" }
                        }
                        a { class: "button button--ghost", href: "#gallery", "{hero.showcase}" }
                    }
                }
            }
            div { class: "hero__visual",
                Reveal { class: "hero__visual-inner",
                    img { class: "hero__image", src: HERO_IMAGE, alt: "{hero.image_alt}" }
                }
            }
        }
    }
}

#[component]
pub fn Stats(locale: Locale) -> Element {
    let stats = &locale.bundle().stats;
    let labels = [
        stats.active_students.as_str(),
        stats.studios.as_str(),
        stats.mentors.as_str(),
        stats.success.as_str(),
    ];

    rsx! {
        Reveal {
            section { class: "stats",
                div { class: "container stats__grid",
                    for (i, (figure, label)) in STATS.into_iter().zip(labels).enumerate() {
                        div { key: "{i}", class: "stats__item",
                            span { class: "stats__figure",
                                "{figure}"
                                if i == 0 {
                                    span { class: "stats__pulse", aria_hidden: "true" }
                                }
                            }
                            span { class: "stats__label", "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Courses(locale: Locale) -> Element {
    let courses = &locale.bundle().courses;
    let rtl = locale.is_rtl();
    let arrow = forward_arrow(rtl);

    rsx! {
        section { id: "courses", class: "section courses",
            div { class: "container",
                Reveal { class: "section__header section__header--split",
                    div {
                        h2 { class: "section__title", "{courses.title}" }
                        p { class: "section__subtitle", "{courses.subtitle}" }
                    }
                    a { class: "section__link", href: "#",
                        "{courses.view_all}"
                        i { class: "fas {arrow}", aria_hidden: "true" }
                    }
                }
                div { class: "courses__grid",
                    for (i, (listing, (title, desc, price))) in COURSES.iter().zip(courses.offerings()).enumerate() {
                        Reveal { key: "{i}", class: "{stagger(i)}",
                            CourseCard {
                                level: listing.level,
                                level_label: courses.level.as_str(),
                                title,
                                desc,
                                price,
                                modules: listing.modules,
                                img: listing.image,
                                rtl,
                                label: courses.modules.as_str(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Workshops(locale: Locale) -> Element {
    let workshops = &locale.bundle().workshops;
    let rtl = locale.is_rtl();

    rsx! {
        section { id: "workshops", class: "section section--tinted workshops",
            div { class: "container",
                Reveal { class: "section__header section__header--center",
                    h2 { class: "section__title", "{workshops.title}" }
                    p { class: "section__subtitle", "{workshops.subtitle}" }
                }
                div { class: "workshops__grid",
                    for (i, ((title, desc), img)) in workshops.offerings().into_iter().zip(WORKSHOP_IMAGES).enumerate() {
                        WorkshopCard {
                            key: "{i}",
                            title,
                            desc,
                            img,
                            rtl,
                            badge: workshops.badge.as_str(),
                            button: workshops.register.as_str(),
                        }
                    }
                }
            }
        }
    }
}

/// Telegram community banner. Carries the `#gallery` anchor the navbar
/// points at.
#[component]
pub fn Community(locale: Locale) -> Element {
    let cta = &locale.bundle().cta;

    rsx! {
        Reveal {
            section { id: "gallery", class: "community",
                div { class: "community__backdrop",
                    img { src: COMMUNITY_IMAGE, alt: "" }
                }
                div { class: "container community__inner",
                    a {
                        class: "community__link",
                        href: TELEGRAM_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        i { class: "fab fa-telegram", aria_hidden: "true" }
                        "{cta.telegram}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn About(locale: Locale) -> Element {
    let about = &locale.bundle().about;

    rsx! {
        section { id: "about", class: "section about",
            div { class: "container container--narrow",
                Reveal {
                    div { class: "about__badge",
                        span { class: "about__rule" }
                        span { "{about.mission_badge}" }
                        span { class: "about__rule" }
                    }
                    h2 { class: "about__title", "{about.title}" }
                }
                Reveal { class: "reveal--delay-200",
                    div { class: "about__card",
                        div { class: "about__portrait",
                            img { class: "about__founder", src: FOUNDER_URL, alt: "{about.founder_alt}" }
                            span { class: "about__quote",
                                i { class: "fas fa-quote-right", aria_hidden: "true" }
                            }
                        }
                        p { class: "about__bio", "\"{about.bio}\"" }
                        ul { class: "about__contacts",
                            li { class: "about__contact",
                                span { class: "about__icon", i { class: "fas fa-map-marker-alt" } }
                                span { "{about.location}" }
                            }
                            li { class: "about__contact",
                                span { class: "about__icon", i { class: "fas fa-envelope" } }
                                a { href: EMAIL_URL, "{about.inquiry}" }
                            }
                            li { class: "about__contact",
                                span { class: "about__icon", i { class: "fab fa-whatsapp" } }
                                a { href: WHATSAPP_URL, target: "_blank", "{about.whatsapp}" }
                            }
                            li { class: "about__contact",
                                span { class: "about__icon", i { class: "fab fa-instagram" } }
                                a { href: INSTAGRAM_URL, target: "_blank", "{about.instagram}" }
                            }
                        }
                    }
                }
                Reveal { class: "about__signature reveal--delay-400",
                    h4 { class: "about__name", "{about.founder_name}" }
                    Logo { class: "about__logo" }
                }
            }
        }
    }
}

#[component]
pub fn Newsletter(locale: Locale) -> Element {
    let cta = &locale.bundle().cta;

    rsx! {
        section { class: "newsletter",
            div { class: "container newsletter__grid",
                Reveal {
                    h2 { class: "newsletter__title", "{cta.title}" }
                    p { class: "newsletter__description", "{cta.description}" }
                    // Inert: nothing is sent anywhere.
                    form {
                        class: "newsletter__form",
                        onsubmit: move |evt: FormEvent| evt.prevent_default(),
                        input {
                            class: "newsletter__input",
                            r#type: "email",
                            placeholder: "{cta.placeholder}",
                        }
                        button { class: "newsletter__submit", r#type: "submit", "{cta.subscribe}" }
                    }
                }
                div { class: "newsletter__visual",
                    Reveal { class: "newsletter__visual-inner",
                        img { class: "newsletter__image", src: NEWSLETTER_IMAGE, alt: "{cta.image_alt}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer(locale: Locale) -> Element {
    let footer = &locale.bundle().footer;
    let foundation = [
        footer.curriculum.as_str(),
        footer.grants.as_str(),
        footer.studio_access.as_str(),
        footer.design_lab.as_str(),
    ];
    let resources = [
        footer.showcase.as_str(),
        footer.library.as_str(),
        footer.journal.as_str(),
        footer.alumni.as_str(),
    ];

    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer__grid",
                    Reveal { class: "footer__brand",
                        Logo { class: "footer__logo" }
                        p { class: "footer__desc", "{footer.desc}" }
                        div { class: "footer__social",
                            a { href: "#", i { class: "fab fa-facebook-f" } }
                            a { href: INSTAGRAM_URL, target: "_blank", i { class: "fab fa-instagram" } }
                            a { href: TELEGRAM_URL, target: "_blank", i { class: "fab fa-telegram-plane" } }
                        }
                    }
                    Reveal { class: "reveal--delay-100",
                        h4 { class: "footer__heading", "{footer.foundation}" }
                        ul { class: "footer__list",
                            for item in foundation {
                                li { key: "{item}", a { href: "#", "{item}" } }
                            }
                        }
                    }
                    Reveal { class: "reveal--delay-200",
                        h4 { class: "footer__heading", "{footer.resources}" }
                        ul { class: "footer__list",
                            for item in resources {
                                li { key: "{item}", a { href: "#", "{item}" } }
                            }
                        }
                    }
                    Reveal { class: "reveal--delay-300",
                        h4 { class: "footer__heading", "{footer.contact}" }
                        ul { class: "footer__list footer__list--contact",
                            li {
                                i { class: "fas fa-map-marker-alt" }
                                span { "{footer.address}" }
                            }
                            li {
                                i { class: "fas fa-phone" }
                                a { href: PHONE_URL, dir: "ltr", "{PHONE_DISPLAY}" }
                            }
                        }
                    }
                }
                div { class: "footer__bottom",
                    p { "{footer.rights}" }
                    div { class: "footer__legal",
                        a { href: "#", "{footer.privacy}" }
                        a { href: "#", "{footer.terms}" }
                    }
                }
            }
        }
    }
}
