//! File name and extension policy for exported artifacts.

use super::ExportFormat;

/// Theme name used in file names when none is given.
pub const FALLBACK_FILE_STEM: &str = "theme";

/// Returns the file extension for a format key.
///
/// Unknown keys fall back to `txt`.
///
/// # Example
///
/// ```rust
/// use tintly::file_extension;
///
/// assert_eq!(file_extension("tailwind"), "js");
/// assert_eq!(file_extension("shadcn"), "json");
/// assert_eq!(file_extension("bogus"), "txt");
/// ```
pub fn file_extension(format: &str) -> &'static str {
    format
        .parse::<ExportFormat>()
        .map(ExportFormat::extension)
        .unwrap_or("txt")
}

/// Returns the suggested file name for a format key and theme name.
///
/// `tailwind` and `shadcn` have fixed names. `css` and `json` derive theirs
/// from the theme name (see [`file_stem`]). Unknown keys fall back to
/// `<stem>.txt`.
///
/// # Example
///
/// ```rust
/// use tintly::file_name;
///
/// assert_eq!(file_name("json", Some("Ocean Blue")), "ocean-blue-tokens.json");
/// assert_eq!(file_name("css", None), "theme.css");
/// assert_eq!(file_name("tailwind", Some("Ocean Blue")), "tailwind.config.js");
/// ```
pub fn file_name(format: &str, theme_name: Option<&str>) -> String {
    match format.parse::<ExportFormat>() {
        Ok(format) => format.file_name(theme_name),
        Err(_) => format!("{}.txt", file_stem(theme_name)),
    }
}

/// Lower-cases a theme name and replaces every character outside
/// `[a-z0-9]` with `-`. Absent or empty names become `theme`.
pub fn file_stem(theme_name: Option<&str>) -> String {
    let name = theme_name
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_FILE_STEM);
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension_known() {
        assert_eq!(file_extension("tailwind"), "js");
        assert_eq!(file_extension("css"), "css");
        assert_eq!(file_extension("json"), "json");
        assert_eq!(file_extension("shadcn"), "json");
    }

    #[test]
    fn test_file_extension_unknown() {
        assert_eq!(file_extension("bogus"), "txt");
        assert_eq!(file_extension(""), "txt");
        assert_eq!(file_extension("CSS"), "txt");
    }

    #[test]
    fn test_file_name_derived() {
        assert_eq!(file_name("css", Some("My Cool Theme!")), "my-cool-theme-.css");
        assert_eq!(file_name("json", Some("Ocean Blue")), "ocean-blue-tokens.json");
    }

    #[test]
    fn test_file_name_fixed() {
        assert_eq!(file_name("tailwind", Some("Anything")), "tailwind.config.js");
        assert_eq!(file_name("shadcn", Some("Anything")), "components.json");
    }

    #[test]
    fn test_file_name_unknown_format() {
        assert_eq!(file_name("bogus", Some("Ocean Blue")), "ocean-blue.txt");
        assert_eq!(file_name("bogus", None), "theme.txt");
    }

    #[test]
    fn test_file_stem_defaults() {
        assert_eq!(file_stem(None), "theme");
        assert_eq!(file_stem(Some("")), "theme");
    }

    #[test]
    fn test_file_stem_non_ascii() {
        assert_eq!(file_stem(Some("Café Noir")), "caf--noir");
        assert_eq!(file_stem(Some("v2_Final")), "v2-final");
    }
}
