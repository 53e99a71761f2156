/// Normalize a decorated oracle label to a bare language code.
///
/// Strips `prefix` if (and only if) the label starts with it, then trims
/// surrounding whitespace. An empty prefix strips nothing.
///
/// ```
/// use glossa_detect_ranked::strip_label;
///
/// assert_eq!(strip_label("__label__en", "__label__"), "en");
/// assert_eq!(strip_label("de", "__label__"), "de");
/// ```
pub fn strip_label<'a>(label: &'a str, prefix: &str) -> &'a str {
    label.strip_prefix(prefix).unwrap_or(label).trim()
}
