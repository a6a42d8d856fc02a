//! Site configuration: every external URL and figure the page references.
//!
//! These are opaque strings; nothing parses them.

pub const LOGO_URL: &str =
    "https://image2url.com/r2/default/images/1770665485995-d2c1b3c4-c782-4d8b-ad03-b17b9aafeb0f.png";
pub const LOGO_PLACEHOLDER_URL: &str = "https://via.placeholder.com/200x200?text=ARCHEIN";
pub const FOUNDER_URL: &str =
    "https://image2url.com/r2/default/images/1770666345050-d6a845ef-f528-4c98-a2b5-39a5316aa080.png";

pub const BRAND: &str = "ARCHEIN";

/// Icon font used by the `fas`/`fab` classes.
pub const ICONS_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=1470&auto=format&fit=crop";
pub const COMMUNITY_IMAGE: &str =
    "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=1400";
pub const NEWSLETTER_IMAGE: &str = "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=1469&auto=format&fit=crop";

pub const TELEGRAM_URL: &str = "https://t.me/ARCHNEST1";
pub const WHATSAPP_URL: &str = "https://wa.me/9647867418843";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/p.ahmedkzar/";
pub const EMAIL_URL: &str = "mailto:ahmedkzartuma@gmail.com";
pub const PHONE_URL: &str = "tel:+9647867418843";
pub const PHONE_DISPLAY: &str = "+964 786 741 8843";

/// Figure shown above each stats label, in the order of the stats strip.
pub const STATS: [&str; 4] = ["5.2K", "45+", "12", "98%"];

/// Fixed (non-translated) facts about a course listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseListing {
    pub level: &'static str,
    pub modules: u32,
    pub image: &'static str,
}

/// Catalogue order matches `CoursesText::offerings`.
pub const COURSES: [CourseListing; 3] = [
    CourseListing {
        level: "01",
        modules: 12,
        image: "https://images.unsplash.com/photo-1590374585152-ca0e8194c0d6?q=80&w=1287&auto=format&fit=crop",
    },
    CourseListing {
        level: "02",
        modules: 8,
        image: "https://images.unsplash.com/photo-1518005020410-674e225916ba?q=80&w=1328&auto=format&fit=crop",
    },
    CourseListing {
        level: "03",
        modules: 15,
        image: "https://images.unsplash.com/photo-1511139088636-ca013ef400b1?q=80&w=1334&auto=format&fit=crop",
    },
];

/// Workshop photos, in the order of `WorkshopsText::offerings`.
pub const WORKSHOP_IMAGES: [&str; 6] = [
    "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?q=80&w=1470&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1677442136019-21780ecad995?q=80&w=1632&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1581092580497-e0d23cbdf1dc?q=80&w=1470&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1544168190-79c17527004f?q=80&w=1376&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1561070791-26c1458c4e4d?q=80&w=1470&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1492724441997-5dc865305da7?q=80&w=1470&auto=format&fit=crop",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_use_expected_schemes() {
        for url in [TELEGRAM_URL, WHATSAPP_URL, INSTAGRAM_URL, LOGO_URL, FOUNDER_URL] {
            assert!(url.starts_with("https://"), "{url}");
        }
        assert!(EMAIL_URL.starts_with("mailto:"));
        assert!(PHONE_URL.starts_with("tel:+"));
    }

    #[test]
    fn placeholder_differs_from_primary_logo() {
        assert_ne!(LOGO_URL, LOGO_PLACEHOLDER_URL);
    }
}
