//! Shared string helpers.

/// Reduces an uploaded file name to something safe to join onto a directory.
///
/// Path separators become word breaks, whitespace runs collapse to `_`, only
/// ASCII alphanumerics and `_.-` survive, and leading/trailing dots and
/// underscores are stripped. Returns `None` when nothing is left.
pub fn sanitize_filename(input: &str) -> Option<String> {
    let spaced: String = input
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || "_.-".contains(*c))
        .collect();

    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Truncates a string to a maximum number of characters with ellipsis.
pub fn truncate_string(input: &str, max_length: usize) -> String {
    if input.chars().count() <= max_length {
        input.to_string()
    } else {
        let head: String = input.chars().take(max_length.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

/// Returns the lower-cased extension of a file name, if any.
pub fn file_extension(file_name: &str) -> Option<String> {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("My cool data.csv").as_deref(), Some("My_cool_data.csv"));
        assert_eq!(
            sanitize_filename("../../etc/passwd").as_deref(),
            Some("etc_passwd")
        );
        assert_eq!(
            sanitize_filename("C:\\Users\\me\\sales.xlsx").as_deref(),
            Some("C_Users_me_sales.xlsx")
        );
        assert_eq!(sanitize_filename("résumé.csv").as_deref(), Some("rsum.csv"));
        assert_eq!(sanitize_filename("..."), None);
        assert_eq!(sanitize_filename(""), None);
    }

    #[test]
    fn test_truncate_string() {
        let input = "This is a very long string that should be truncated";
        let truncated = truncate_string(input, 20);
        assert_eq!(truncated, "This is a very lo...");

        assert_eq!(truncate_string("Short", 20), "Short");
        assert_eq!(truncate_string("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("data.CSV").as_deref(), Some("csv"));
        assert_eq!(file_extension("book.xlsx").as_deref(), Some("xlsx"));
        assert_eq!(file_extension("noext"), None);
    }
}
