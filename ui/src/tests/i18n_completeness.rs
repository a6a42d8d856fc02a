use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "archein-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Extract message IDs from a Fluent file: any `<identifier> =` line.
/// Comments, terms (`-` prefix) and blank lines are ignored.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line[..eq_pos].trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Collect every `=> "key"` literal under `src/` (the `section!` field
/// declarations in i18n.rs).
///
/// Only literal keys are found; that is how every section declares them.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let needle = "=> \"";
        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            let Some(end) = rest.find('"') else {
                break;
            };
            let key = &rest[..end];
            // Only kebab-case message ids; skips unrelated match arms.
            if key.contains('-') && key.chars().all(valid_key_char) {
                found.insert(key.to_string());
            }
            rest = &rest[end + 1..];
        }
    }

    found
}

fn collect_locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    // 1. Fallback locale (en-US) must exist.
    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {:?}",
        fallback_file
    );

    // 2. Every key a bundle section declares must exist in the fallback.
    let referenced_keys = extract_translation_keys_from_source(&crate_root.join("src"));
    assert!(
        !referenced_keys.is_empty(),
        "No `=> \"key\"` declarations found under src/"
    );
    let mut missing_in_fallback: Vec<_> = referenced_keys
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .cloned()
        .collect();
    missing_in_fallback.sort();
    assert!(
        missing_in_fallback.is_empty(),
        "Declared translation keys missing in fallback ({}):\n{}",
        missing_in_fallback.len(),
        missing_in_fallback.join("\n")
    );

    // 3. The declared keys are exactly what the typed bundle reads.
    let bundle_keys: HashSet<String> = crate::i18n::Bundle::keys().map(str::to_string).collect();
    assert_eq!(referenced_keys, bundle_keys);

    // 4. Each locale defines the same key set as the fallback.
    let mut mismatches: BTreeMap<String, (Vec<String>, Vec<String>)> = BTreeMap::new();
    for locale in collect_locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Locale folder {locale:?} missing {path:?}"));
        let keys = parse_ftl_keys(&content);

        let missing: Vec<String> = fallback_keys.difference(&keys).cloned().collect();
        let extra: Vec<String> = keys.difference(&fallback_keys).cloned().collect();
        if !missing.is_empty() || !extra.is_empty() {
            mismatches.insert(locale, (missing, extra));
        }
    }

    if !mismatches.is_empty() {
        let mut report = String::from("Locales out of step with en-US:\n");
        for (locale, (missing, extra)) in &mismatches {
            report.push_str(&format!(
                "  {locale}: missing [{}], extra [{}]\n",
                missing.join(", "),
                extra.join(", ")
            ));
        }
        panic!("{report}");
    }

    // 5. Unused fallback keys are only reported.
    let unused: Vec<_> = fallback_keys
        .iter()
        .filter(|k| !referenced_keys.contains(*k))
        .cloned()
        .collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} fallback keys not read by any bundle section:\n{}",
            unused.len(),
            unused.join(", ")
        );
    }
}
