//! Translation key checks.
//!
//! - every `t!("...")` key used under `src/` exists in the fallback (en-US) file
//! - every fallback key is used somewhere
//! - every locale defines every fallback key, with no duplicates

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "dataviewer-ui.ftl";
const FALLBACK: &str = "en-US";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Message IDs from a Fluent file. Comments, terms and attribute lines are skipped.
fn parse_ftl_keys(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter(|line| !line.starts_with('.'))
        .filter_map(|line| {
            let (id, _) = line.split_once('=')?;
            let id = id.trim();
            (!id.is_empty() && id.chars().all(valid_key_char)).then(|| id.to_string())
        })
        .collect()
}

fn read_locale(locale: &str) -> String {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("reading {path:?}: {err}"))
}

/// Keys passed as the literal first argument of `t!`.
fn source_keys(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            for entry in fs::read_dir(&path).into_iter().flatten().flatten() {
                stack.push(entry.path());
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in content.split("t!(\"").skip(1) {
            if let Some((key, _)) = chunk.split_once('"') {
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }
    found
}

fn locales() -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(crate_root().join("i18n"))
        .expect("i18n directory")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| name.contains('-'))
        .collect();
    dirs.sort();
    dirs
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback: HashSet<String> = parse_ftl_keys(&read_locale(FALLBACK)).into_iter().collect();
    let referenced = source_keys(&crate_root().join("src"));
    assert!(!referenced.is_empty(), "no t! usages found under src/");

    let missing: Vec<_> = referenced.iter().filter(|k| !fallback.contains(*k)).collect();
    assert!(
        missing.is_empty(),
        "keys used in src/ but missing from {FALLBACK}: {missing:?}"
    );
}

#[test]
fn fallback_has_no_unused_keys() {
    let referenced = source_keys(&crate_root().join("src"));
    let unused: Vec<_> = parse_ftl_keys(&read_locale(FALLBACK))
        .into_iter()
        .filter(|k| !referenced.contains(k))
        .collect();
    assert!(unused.is_empty(), "unused keys in {FALLBACK}: {unused:?}");
}

#[test]
fn all_locales_are_complete_and_unique() {
    let fallback: BTreeSet<String> = parse_ftl_keys(&read_locale(FALLBACK)).into_iter().collect();
    let locales = locales();
    assert!(locales.iter().any(|l| l == "ko-KR"), "ko-KR locale missing");

    let mut failures = Vec::new();
    for locale in &locales {
        let keys = parse_ftl_keys(&read_locale(locale));

        let mut seen = HashSet::new();
        let dups: BTreeSet<_> = keys.iter().filter(|k| !seen.insert(k.as_str())).collect();
        if !dups.is_empty() {
            failures.push(format!("{locale}: duplicate keys {dups:?}"));
        }

        let missing: Vec<_> = fallback.iter().filter(|k| !seen.contains(k.as_str())).collect();
        if !missing.is_empty() {
            failures.push(format!("{locale}: missing keys {missing:?}"));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
