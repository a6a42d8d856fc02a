#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme) remains present and non-trivial.
//!
//! The desktop shell inlines `ui/assets/theme/main.css` through
//! `ui::THEME_CSS_INLINE`; a truncated or moved file would only show up as an
//! unstyled window at runtime.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_matches_ui_constant() {
    assert_eq!(EMBEDDED_CSS, ui::THEME_CSS_INLINE);
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--color-accent", "body {", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
