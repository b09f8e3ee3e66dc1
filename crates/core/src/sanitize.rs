use regex::Regex;
use std::sync::LazyLock;

/// Longest stored file name, in bytes.
pub const MAX_FILE_NAME_LEN: usize = 128;

/// Longer "extensions" are treated as part of the name.
const MAX_EXTENSION_LEN: usize = 16;

const FALLBACK_NAME: &str = "file";

static UNSAFE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").unwrap());

/// Turn a client-supplied upload name into a safe name inside the uploads dir.
///
/// Directory components (either separator) are dropped, anything outside
/// `[A-Za-z0-9._-]` collapses to `_`, leading dots are removed so the result
/// can never be `.`, `..` or a hidden file.
pub fn sanitize_file_name(raw: &str) -> String {
    let base = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    let replaced = UNSAFE_CHARS_RE.replace_all(base, "_");
    let trimmed = replaced.trim_start_matches('.');

    if trimmed.is_empty() || trimmed.chars().all(|c| c == '_') {
        return FALLBACK_NAME.to_string();
    }
    truncate_keeping_extension(trimmed, MAX_FILE_NAME_LEN)
}

/// Cap `name` at `max` bytes, preserving a short extension. The input is
/// ASCII by the time it gets here.
fn truncate_keeping_extension(name: &str, max: usize) -> String {
    if name.len() <= max {
        return name.to_string();
    }
    let (stem, ext) = split_extension(name);
    if ext.len() > MAX_EXTENSION_LEN {
        return name.chars().take(max).collect();
    }
    let stem: String = stem.chars().take(max - ext.len()).collect();
    format!("{stem}{ext}")
}

/// Split `report.tar.gz` into `("report.tar", ".gz")`.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Name tried for the `attempt`-th collision: `Home.psd` → `Home-1.psd`.
///
/// The stem is shortened when needed so the result stays within
/// [`MAX_FILE_NAME_LEN`].
pub fn numbered_file_name(name: &str, attempt: u32) -> String {
    if attempt == 0 {
        return name.to_string();
    }
    let (stem, ext) = match split_extension(name) {
        (_, ext) if ext.len() > MAX_EXTENSION_LEN => (name, ""),
        parts => parts,
    };
    let suffix = format!("-{attempt}");
    let room = MAX_FILE_NAME_LEN.saturating_sub(suffix.len() + ext.len());
    let stem: String = stem.chars().take(room.max(1)).collect();
    format!("{stem}{suffix}{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_pass_through() {
        assert_eq!(sanitize_file_name("Home.psd"), "Home.psd");
        assert_eq!(sanitize_file_name("report_2019-06.pdf"), "report_2019-06.pdf");
    }

    #[test]
    fn test_path_traversal_is_stripped() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("..\\..\\boot.ini"), "boot.ini");
        assert_eq!(sanitize_file_name("/var/www/index.php"), "index.php");
        assert_eq!(sanitize_file_name(".."), "file");
        assert_eq!(sanitize_file_name("uploads/"), "file");
    }

    #[test]
    fn test_unsafe_characters_are_replaced() {
        assert_eq!(sanitize_file_name("my photo (1).jpg"), "my_photo_1_.jpg");
        assert_eq!(sanitize_file_name("отчёт.docx"), "_.docx");
        assert_eq!(sanitize_file_name("a<b>c.txt"), "a_b_c.txt");
    }

    #[test]
    fn test_hidden_and_empty_names() {
        assert_eq!(sanitize_file_name(".htaccess"), "htaccess");
        assert_eq!(sanitize_file_name(""), "file");
        assert_eq!(sanitize_file_name("   "), "file");
        assert_eq!(sanitize_file_name("файл"), "file");
    }

    #[test]
    fn test_long_names_keep_extension() {
        let long = format!("{}.pdf", "a".repeat(300));
        let name = sanitize_file_name(&long);
        assert_eq!(name.len(), MAX_FILE_NAME_LEN);
        assert!(name.ends_with(".pdf"));
    }

    #[test]
    fn test_long_extension_is_capped() {
        let name = sanitize_file_name(&format!("a.{}", "x".repeat(300)));
        assert_eq!(name.len(), MAX_FILE_NAME_LEN);
        assert!(name.starts_with("a.xxx"));

        let name = sanitize_file_name(&format!("{}.{}", "b".repeat(200), "y".repeat(40)));
        assert_eq!(name.len(), MAX_FILE_NAME_LEN);
        assert!(name.chars().all(|c| c == 'b'));
    }

    #[test]
    fn test_numbered_long_names_stay_capped() {
        let long = sanitize_file_name(&format!("{}.pdf", "a".repeat(300)));
        let numbered = numbered_file_name(&long, 1000);
        assert_eq!(numbered.len(), MAX_FILE_NAME_LEN);
        assert!(numbered.ends_with("-1000.pdf"));

        let long_ext = sanitize_file_name(&format!("a.{}", "x".repeat(300)));
        let numbered = numbered_file_name(&long_ext, 7);
        assert_eq!(numbered.len(), MAX_FILE_NAME_LEN);
        assert!(numbered.ends_with("-7"));
    }

    #[test]
    fn test_numbered_file_name() {
        assert_eq!(numbered_file_name("Home.psd", 0), "Home.psd");
        assert_eq!(numbered_file_name("Home.psd", 1), "Home-1.psd");
        assert_eq!(numbered_file_name("archive.tar.gz", 2), "archive.tar-2.gz");
        assert_eq!(numbered_file_name("README", 3), "README-3");
    }
}
