//! Internationalization (i18n) support for `archein-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `fluent` (message parsing + formatting)
//! - `unic-langid` (language identifiers for the two bundles)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en-US/archein-ui.ftl   (fallback/reference)
//!   ar-IQ/archein-ui.ftl   (right-to-left locale)
//! ```
//!
//! Both files are resolved once into typed [`Bundle`] records. Components
//! never look strings up by key at render time; they receive a [`Locale`]
//! and read fields from `locale.bundle()`.
//!
//! Missing keys: debug builds refuse to start (the catalog load fails with
//! [`I18nError::MissingKeys`]), release builds fall back to the English
//! string and log a warning.
//!
//! To add a string:
//! 1. Add the key to `en-US/archein-ui.ftl` and `ar-IQ/archein-ui.ftl`.
//! 2. Add a `field => "key"` line to the matching `section!` below.
//! 3. Run tests to ensure completeness.
use std::fmt;

use dioxus::logger::tracing::{info, warn};
use fluent::{FluentBundle, FluentResource};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

/// Fluent "domain" (matches the crate / the FTL filename in every locale).
const DOMAIN: &str = "archein-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("embedded translation file not found: {0}")]
    MissingResource(String),

    #[error("translation file {0} is not valid UTF-8")]
    InvalidUtf8(String),

    #[error("failed to parse {path}: {errors} error(s)")]
    Parse { path: String, errors: usize },

    #[error("invalid language identifier {tag}: {reason}")]
    InvalidLanguage { tag: String, reason: String },

    #[error("locale {locale} is missing {} key(s): {}", .keys.len(), .keys.join(", "))]
    MissingKeys {
        locale: &'static str,
        keys: Vec<&'static str>,
    },
}

/// The two display languages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Arabic,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Arabic];

    /// Language tag, also the folder name under `i18n/`.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::English => "en-US",
            Locale::Arabic => "ar-IQ",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Arabic)
    }

    /// Value for the `dir` attribute of the page root.
    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::English => Locale::Arabic,
            Locale::Arabic => Locale::English,
        }
    }

    /// Caption of the toggle button: names the language you switch *to*.
    pub fn switch_label(self) -> &'static str {
        match self {
            Locale::English => "عربي",
            Locale::Arabic => "English",
        }
    }

    pub fn bundle(self) -> &'static Bundle {
        CATALOG.bundle(self)
    }

    fn language_id(self) -> Result<LanguageIdentifier, I18nError> {
        self.tag()
            .parse()
            .map_err(|err: unic_langid::LanguageIdentifierError| I18nError::InvalidLanguage {
                tag: self.tag().to_string(),
                reason: err.to_string(),
            })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What to do when a locale lacks a key the fallback defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    FailFast,
    FallBack,
}

impl Default for MissingKeyPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            MissingKeyPolicy::FailFast
        } else {
            MissingKeyPolicy::FallBack
        }
    }
}

struct Resolver<'a> {
    locale: Locale,
    primary: &'a FluentBundle<FluentResource>,
    fallback: Option<&'a FluentBundle<FluentResource>>,
    missing: Vec<&'static str>,
}

impl Resolver<'_> {
    fn text(&mut self, key: &'static str) -> String {
        if let Some(value) = format_message(self.primary, key) {
            return value;
        }
        self.missing.push(key);
        self.fallback
            .and_then(|bundle| format_message(bundle, key))
            .unwrap_or_else(|| key.to_string())
    }
}

fn format_message(bundle: &FluentBundle<FluentResource>, key: &str) -> Option<String> {
    let message = bundle.get_message(key)?;
    let pattern = message.value()?;
    let mut errors = Vec::new();
    let value = bundle.format_pattern(pattern, None, &mut errors);
    Some(value.into_owned())
}

/// Declares one bundle section: a struct of display strings plus the Fluent
/// key each field is read from.
macro_rules! section {
    ($(#[$meta:meta])* $name:ident { $($field:ident => $key:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            $(pub $field: String),+
        }

        impl $name {
            pub const KEYS: &'static [&'static str] = &[$($key),+];

            fn resolve(r: &mut Resolver<'_>) -> Self {
                Self {
                    $($field: r.text($key)),+
                }
            }

            pub fn entries(&self) -> Vec<(&'static str, &str)> {
                vec![$(($key, self.$field.as_str())),+]
            }
        }
    };
}

section!(NavText {
    courses => "nav-courses",
    workshops => "nav-workshops",
    gallery => "nav-gallery",
    about => "nav-about",
    join => "nav-join",
});

section!(HeroText {
    badge => "hero-badge",
    title_1 => "hero-title-1",
    title_2 => "hero-title-2",
    description => "hero-description",
    explore => "hero-explore",
    showcase => "hero-showcase",
    image_alt => "hero-image-alt",
});

section!(StatsText {
    active_students => "stats-active-students",
    studios => "stats-studios",
    mentors => "stats-mentors",
    success => "stats-success",
});

section!(CoursesText {
    title => "courses-title",
    subtitle => "courses-subtitle",
    view_all => "courses-view-all",
    modules => "courses-modules",
    level => "courses-level",
    course_1 => "courses-course-1",
    desc_1 => "courses-desc-1",
    price_1 => "courses-price-1",
    course_2 => "courses-course-2",
    desc_2 => "courses-desc-2",
    price_2 => "courses-price-2",
    course_3 => "courses-course-3",
    desc_3 => "courses-desc-3",
    price_3 => "courses-price-3",
});

section!(WorkshopsText {
    title => "workshops-title",
    subtitle => "workshops-subtitle",
    register => "workshops-register",
    badge => "workshops-badge",
    maquette => "workshops-maquette",
    maquette_desc => "workshops-maquette-desc",
    ai => "workshops-ai",
    ai_desc => "workshops-ai-desc",
    revit => "workshops-revit",
    revit_desc => "workshops-revit-desc",
    d5 => "workshops-d5",
    d5_desc => "workshops-d5-desc",
    photoshop => "workshops-photoshop",
    photoshop_desc => "workshops-photoshop-desc",
    davinci => "workshops-davinci",
    davinci_desc => "workshops-davinci-desc",
});

section!(AboutText {
    mission_badge => "about-mission-badge",
    title => "about-title",
    bio => "about-bio",
    location => "about-location",
    founder_name => "about-founder-name",
    founder_alt => "about-founder-alt",
    inquiry => "about-inquiry",
    whatsapp => "about-whatsapp",
    instagram => "about-instagram",
});

section!(CtaText {
    telegram => "cta-telegram",
    title => "cta-title",
    description => "cta-description",
    placeholder => "cta-placeholder",
    subscribe => "cta-subscribe",
    image_alt => "cta-image-alt",
});

section!(FooterText {
    desc => "footer-desc",
    foundation => "footer-foundation",
    resources => "footer-resources",
    contact => "footer-contact",
    rights => "footer-rights",
    privacy => "footer-privacy",
    terms => "footer-terms",
    curriculum => "footer-curriculum",
    grants => "footer-grants",
    studio_access => "footer-studio-access",
    design_lab => "footer-design-lab",
    showcase => "footer-showcase",
    library => "footer-library",
    journal => "footer-journal",
    alumni => "footer-alumni",
    address => "footer-address",
});

impl CoursesText {
    /// `(title, description, price)` for the three catalogue entries, in order.
    pub fn offerings(&self) -> [(&str, &str, &str); 3] {
        [
            (self.course_1.as_str(), self.desc_1.as_str(), self.price_1.as_str()),
            (self.course_2.as_str(), self.desc_2.as_str(), self.price_2.as_str()),
            (self.course_3.as_str(), self.desc_3.as_str(), self.price_3.as_str()),
        ]
    }
}

impl WorkshopsText {
    /// `(title, description)` for the six workshops, in display order.
    pub fn offerings(&self) -> [(&str, &str); 6] {
        [
            (self.maquette.as_str(), self.maquette_desc.as_str()),
            (self.ai.as_str(), self.ai_desc.as_str()),
            (self.revit.as_str(), self.revit_desc.as_str()),
            (self.d5.as_str(), self.d5_desc.as_str()),
            (self.photoshop.as_str(), self.photoshop_desc.as_str()),
            (self.davinci.as_str(), self.davinci_desc.as_str()),
        ]
    }
}

/// Every display string of one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub nav: NavText,
    pub hero: HeroText,
    pub stats: StatsText,
    pub courses: CoursesText,
    pub workshops: WorkshopsText,
    pub about: AboutText,
    pub cta: CtaText,
    pub footer: FooterText,
}

impl Bundle {
    fn resolve(r: &mut Resolver<'_>) -> Self {
        Self {
            nav: NavText::resolve(r),
            hero: HeroText::resolve(r),
            stats: StatsText::resolve(r),
            courses: CoursesText::resolve(r),
            workshops: WorkshopsText::resolve(r),
            about: AboutText::resolve(r),
            cta: CtaText::resolve(r),
            footer: FooterText::resolve(r),
        }
    }

    /// All Fluent keys a bundle is built from.
    pub fn keys() -> impl Iterator<Item = &'static str> {
        [
            NavText::KEYS,
            HeroText::KEYS,
            StatsText::KEYS,
            CoursesText::KEYS,
            WorkshopsText::KEYS,
            AboutText::KEYS,
            CtaText::KEYS,
            FooterText::KEYS,
        ]
        .into_iter()
        .flatten()
        .copied()
    }

    /// `(key, text)` pairs across every section.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut out = self.nav.entries();
        out.extend(self.hero.entries());
        out.extend(self.stats.entries());
        out.extend(self.courses.entries());
        out.extend(self.workshops.entries());
        out.extend(self.about.entries());
        out.extend(self.cta.entries());
        out.extend(self.footer.entries());
        out
    }
}

/// Both resolved bundles.
#[derive(Debug, Clone)]
pub struct Catalog {
    english: Bundle,
    arabic: Bundle,
}

impl Catalog {
    /// Load from the embedded `.ftl` files.
    pub fn load(policy: MissingKeyPolicy) -> Result<Self, I18nError> {
        let english = embedded_source(Locale::English)?;
        let arabic = embedded_source(Locale::Arabic)?;
        Self::from_sources(&english, &arabic, policy)
    }

    pub fn from_sources(
        english: &str,
        arabic: &str,
        policy: MissingKeyPolicy,
    ) -> Result<Self, I18nError> {
        let english_bundle = parse_bundle(Locale::English, english)?;
        let arabic_bundle = parse_bundle(Locale::Arabic, arabic)?;

        let english = resolve_bundle(Locale::English, &english_bundle, None, policy)?;
        let arabic = resolve_bundle(Locale::Arabic, &arabic_bundle, Some(&english_bundle), policy)?;

        Ok(Self { english, arabic })
    }

    pub fn bundle(&self, locale: Locale) -> &Bundle {
        match locale {
            Locale::English => &self.english,
            Locale::Arabic => &self.arabic,
        }
    }
}

fn resolve_bundle(
    locale: Locale,
    primary: &FluentBundle<FluentResource>,
    fallback: Option<&FluentBundle<FluentResource>>,
    policy: MissingKeyPolicy,
) -> Result<Bundle, I18nError> {
    let mut resolver = Resolver {
        locale,
        primary,
        fallback,
        missing: Vec::new(),
    };
    let bundle = Bundle::resolve(&mut resolver);

    if resolver.missing.is_empty() {
        return Ok(bundle);
    }
    match policy {
        MissingKeyPolicy::FailFast => Err(I18nError::MissingKeys {
            locale: resolver.locale.tag(),
            keys: resolver.missing,
        }),
        MissingKeyPolicy::FallBack => {
            warn!(
                "[i18n] {} missing {} key(s), using fallback text: {}",
                resolver.locale,
                resolver.missing.len(),
                resolver.missing.join(", ")
            );
            Ok(bundle)
        }
    }
}

fn parse_bundle(locale: Locale, source: &str) -> Result<FluentBundle<FluentResource>, I18nError> {
    let path = resource_path(locale);
    let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
        I18nError::Parse {
            path: path.clone(),
            errors: errors.len(),
        }
    })?;

    let mut bundle = FluentBundle::new(vec![locale.language_id()?]);
    // Plain strings only; no bidi isolation marks around placeables.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| I18nError::Parse {
            path,
            errors: errors.len(),
        })?;
    Ok(bundle)
}

fn resource_path(locale: Locale) -> String {
    format!("{}/{DOMAIN}.ftl", locale.tag())
}

fn embedded_source(locale: Locale) -> Result<String, I18nError> {
    let path = resource_path(locale);
    let file = Localizations::get(&path).ok_or_else(|| I18nError::MissingResource(path.clone()))?;
    String::from_utf8(file.data.into_owned()).map_err(|_| I18nError::InvalidUtf8(path))
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::load(MissingKeyPolicy::default())
        .unwrap_or_else(|err| panic!("[i18n] translation catalog failed to load: {err}"))
});

/// Resolve the catalog up front (idempotent) so a broken bundle surfaces at
/// startup instead of on the first language switch.
pub fn init() {
    Lazy::force(&CATALOG);
    info!("[i18n] catalog ready ({})", available_languages().join(", "));
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const EN_US: &str = include_str!("../i18n/en-US/archein-ui.ftl");
    const AR_IQ: &str = include_str!("../i18n/ar-IQ/archein-ui.ftl");

    #[test]
    fn embedded_languages_match_locales() {
        let langs = available_languages();
        for locale in Locale::ALL {
            assert!(langs.iter().any(|l| l == locale.tag()), "{locale} not embedded");
        }
    }

    #[test]
    fn strict_load_succeeds() {
        let catalog = Catalog::load(MissingKeyPolicy::FailFast).expect("complete catalog");
        assert_eq!(catalog.bundle(Locale::English).nav.join, "Enrol Now");
        assert_eq!(catalog.bundle(Locale::Arabic).nav.join, "انضم الآن");
    }

    #[test]
    fn toggle_twice_is_identity() {
        for locale in Locale::ALL {
            assert_ne!(locale.toggled(), locale);
            assert_eq!(locale.toggled().toggled(), locale);
            assert_eq!(locale.toggled().toggled().bundle(), locale.bundle());
        }
    }

    #[test]
    fn only_arabic_is_right_to_left() {
        assert_eq!(Locale::default(), Locale::English);
        assert!(!Locale::English.is_rtl());
        assert_eq!(Locale::English.dir(), "ltr");
        assert!(Locale::Arabic.is_rtl());
        assert_eq!(Locale::Arabic.dir(), "rtl");
    }

    #[test]
    fn bundles_share_key_set_and_have_text() {
        let en: BTreeSet<_> = Locale::English.bundle().entries().into_iter().map(|(k, _)| k).collect();
        let ar: BTreeSet<_> = Locale::Arabic.bundle().entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(en, ar);
        assert_eq!(en, Bundle::keys().collect::<BTreeSet<_>>());

        for locale in Locale::ALL {
            for (key, text) in locale.bundle().entries() {
                assert!(!text.trim().is_empty(), "{locale}: {key} is blank");
            }
        }
    }

    #[test]
    fn arabic_strings_come_from_arabic_file() {
        let ar = Locale::Arabic.bundle();
        assert_eq!(ar.nav.courses, "الدورات الأكاديمية");
        assert_eq!(ar.courses.price_1, "249$");
        assert_eq!(ar.about.founder_name, "أحمد كزار");
        // A few strings are brand/product names and legitimately shared.
        let en = Locale::English.bundle();
        let differing = en
            .entries()
            .into_iter()
            .zip(ar.entries())
            .filter(|((_, e), (_, a))| e != a)
            .count();
        assert!(differing > en.entries().len() / 2);
    }

    #[test]
    fn missing_key_fails_fast() {
        let truncated: String = AR_IQ
            .lines()
            .filter(|line| !line.starts_with("hero-badge"))
            .collect::<Vec<_>>()
            .join("\n");
        let err = Catalog::from_sources(EN_US, &truncated, MissingKeyPolicy::FailFast).unwrap_err();
        match err {
            I18nError::MissingKeys { locale, keys } => {
                assert_eq!(locale, "ar-IQ");
                assert_eq!(keys, vec!["hero-badge"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_key_falls_back_to_english() {
        let truncated: String = AR_IQ
            .lines()
            .filter(|line| !line.starts_with("nav-gallery"))
            .collect::<Vec<_>>()
            .join("\n");
        let catalog = Catalog::from_sources(EN_US, &truncated, MissingKeyPolicy::FallBack).unwrap();
        let ar = catalog.bundle(Locale::Arabic);
        assert_eq!(ar.nav.gallery, "Student Work");
        assert_eq!(ar.nav.about, "رؤيتنا");
    }

    #[test]
    fn unparseable_source_is_reported() {
        let err = Catalog::from_sources("nav-courses = {", AR_IQ, MissingKeyPolicy::FallBack).unwrap_err();
        assert!(matches!(err, I18nError::Parse { .. }), "got {err}");
    }
}
