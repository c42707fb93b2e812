//! Discovery of installed interface translations.
//!
//! Translation files are named `cutlass_<locale>.qm`; only the two-letter
//! language part of the locale is used to name the language.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FILE_PREFIX: &str = "cutlass_";
const FILE_SUFFIX: &str = ".qm";

/// Always offered, no file needed.
pub const BUILTIN_LANGUAGE: &str = "English";

/// Language code, default locale and native language name.
static LANGUAGES: &[(&str, &str, &str)] = &[
    ("ca", "ca_ES", "català"),
    ("de", "de_DE", "deutsch"),
    ("en", "en_US", "english"),
    ("es", "es_ES", "español"),
    ("fa", "fa_IR", "فارسی"),
    ("fr", "fr_FR", "français"),
    ("he", "he_IL", "עברית"),
    ("hi", "hi_IN", "हिन्दी"),
    ("it", "it_IT", "italiano"),
    ("ja", "ja_JP", "日本語"),
    ("ko", "ko_KR", "한국어"),
    ("nl", "nl_NL", "nederlands"),
    ("pt", "pt_PT", "português"),
    ("ro", "ro_RO", "română"),
    ("ru", "ru_RU", "русский"),
    ("tr", "tr_TR", "türkçe"),
    ("uk", "uk_UA", "українська"),
    ("zh", "zh_CN", "中文"),
];

/// Native name of a language, capitalized (`"de"` -> `"Deutsch"`).
pub fn native_language_name(code: &str) -> Option<String> {
    LANGUAGES
        .iter()
        .find(|(lang, _, _)| *lang == code)
        .map(|(_, _, name)| capitalize(name))
}

/// Default locale for a native language name, case-insensitive.
pub fn locale_for_language(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    LANGUAGES
        .iter()
        .find(|(_, _, native)| native.to_lowercase() == name)
        .map(|(_, locale, _)| *locale)
}

/// Directories searched for translation files: `translations/` next to the
/// executable, then `extra` in order.
pub fn translation_directories(extra: &[PathBuf]) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    match std::env::current_exe() {
        Ok(exe) => {
            if let Some(parent) = exe.parent() {
                dirs.push(parent.join("translations"));
            }
        }
        Err(e) => log::warn!("Cannot locate executable for translations: {e}"),
    }
    dirs.extend(extra.iter().cloned());
    dirs
}

/// Native names of every installed translation, in file-name order, followed
/// by [`BUILTIN_LANGUAGE`]. Missing directories are skipped.
pub fn available_translations(dirs: &[PathBuf]) -> Vec<String> {
    let file_names: BTreeSet<String> = dirs
        .iter()
        .filter(|dir| dir.is_dir())
        .flat_map(|dir| translation_files(dir))
        .collect();

    let mut languages: Vec<String> = file_names
        .iter()
        .filter_map(|file| {
            let code = file.strip_prefix(FILE_PREFIX)?.get(..2)?;
            let name = native_language_name(code);
            if name.is_none() {
                log::debug!("No language known for translation file {file}");
            }
            name
        })
        .collect();
    languages.push(BUILTIN_LANGUAGE.to_string());
    languages
}

fn translation_files(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Failed to read translations directory {}: {e}", dir.display());
            return Vec::new();
        }
    };

    entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(FILE_PREFIX) && name.ends_with(FILE_SUFFIX))
        .collect()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_available_translations_scans_all_dirs() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        touch(first.path(), "cutlass_fr.qm");
        touch(first.path(), "cutlass_de.qm");
        touch(second.path(), "cutlass_de.qm");
        touch(second.path(), "other_it.qm");
        touch(second.path(), "cutlass_xx.qm");

        let languages = available_translations(&[
            first.path().to_path_buf(),
            second.path().join("missing"),
            second.path().to_path_buf(),
        ]);

        assert_eq!(languages, vec!["Deutsch", "Français", "English"]);
    }

    #[test]
    fn test_no_translations_still_offers_english() {
        assert_eq!(available_translations(&[]), vec!["English"]);
    }

    #[test]
    fn test_language_lookups() {
        assert_some_eq!(native_language_name("ru"), "Русский");
        assert_some_eq!(locale_for_language("ESPAÑOL"), "es_ES");
        assert_none!(locale_for_language("Klingon"));
    }

    #[test]
    fn test_translation_directories_start_next_to_executable() {
        let extra = PathBuf::from("/usr/share/cutlass/translations");
        let dirs = translation_directories(std::slice::from_ref(&extra));
        assert_eq!(dirs.last(), Some(&extra));
        assert!(dirs[0].ends_with("translations"));
    }
}
