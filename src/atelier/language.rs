//! Extension → language lookup.
//!
//! A file's language tag is derived from its path, never stored
//! authoritatively: editors key syntax highlighting off it, and the tree
//! view uses it as a sort key. Unknown extensions map to `"plaintext"`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const PLAINTEXT: &str = "plaintext";

static LANGUAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ts", "typescript"),
        ("tsx", "typescript"),
        ("js", "javascript"),
        ("jsx", "javascript"),
        ("css", "css"),
        ("scss", "scss"),
        ("html", "html"),
        ("json", "json"),
        ("md", "markdown"),
        ("py", "python"),
        ("go", "go"),
        ("rs", "rust"),
        ("php", "php"),
        ("rb", "ruby"),
        ("java", "java"),
        ("c", "c"),
        ("cpp", "cpp"),
        ("cs", "csharp"),
        ("toml", "toml"),
        ("yaml", "yaml"),
        ("yml", "yaml"),
        ("sh", "shell"),
        ("sql", "sql"),
        ("svg", "xml"),
        ("xml", "xml"),
        ("txt", PLAINTEXT),
    ])
});

/// Derive the language tag for a path from its extension.
///
/// The extension is everything after the last `.` in the last path segment.
/// A segment without a `.` (or with only a leading `.`, like `.gitignore`)
/// has no extension and maps to plaintext.
pub fn language_for_path(path: &str) -> &'static str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(0) | None => PLAINTEXT,
        Some(idx) => {
            let ext = name[idx + 1..].to_ascii_lowercase();
            LANGUAGES.get(ext.as_str()).copied().unwrap_or(PLAINTEXT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(language_for_path("src/App.tsx"), "typescript");
        assert_eq!(language_for_path("src/index.css"), "css");
        assert_eq!(language_for_path("main.rs"), "rust");
        assert_eq!(language_for_path("notes.md"), "markdown");
    }

    #[test]
    fn test_case_insensitive_extension() {
        assert_eq!(language_for_path("README.MD"), "markdown");
        assert_eq!(language_for_path("App.TSX"), "typescript");
    }

    #[test]
    fn test_unknown_extension_is_plaintext() {
        assert_eq!(language_for_path("data.bin"), PLAINTEXT);
        assert_eq!(language_for_path("archive.xyz"), PLAINTEXT);
    }

    #[test]
    fn test_no_extension_is_plaintext() {
        assert_eq!(language_for_path("Makefile"), PLAINTEXT);
        assert_eq!(language_for_path("src/LICENSE"), PLAINTEXT);
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        assert_eq!(language_for_path(".gitignore"), PLAINTEXT);
        assert_eq!(language_for_path("conf/.env"), PLAINTEXT);
    }

    #[test]
    fn test_extension_comes_from_last_segment() {
        // The directory name must not contribute an extension
        assert_eq!(language_for_path("assets.css/readme"), PLAINTEXT);
    }
}
