//! Input cleanup for code written by a language model.
//!
//! Models tend to wrap code in Markdown fences, often with a language tag:
//!
//! ````text
//! ```python
//! print(1 + 1)
//! ```
//! ````
//!
//! [`sanitize_input`] strips that wrapping so only the code reaches the
//! interpreter.

use regex::Regex;
use std::sync::LazyLock;

/// Leading whitespace and backticks, then an optional `python`/`python3`
/// tag (whole word, any case), then whitespace.
static LEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s`]*(?:(?i:python3?)\b)?\s*").expect("valid regex"));

/// Strip fencing and surrounding whitespace from `code`.
///
/// Returns a slice of the input. The result may be empty, for example when
/// the input was only a fence.
///
/// ```
/// use glossa_repl::sanitize_input;
///
/// assert_eq!(sanitize_input("```python\nprint(1+1)\n```"), "print(1+1)");
/// assert_eq!(sanitize_input("  x = 1  "), "x = 1");
/// assert_eq!(sanitize_input("pythonic = True"), "pythonic = True");
/// ```
pub fn sanitize_input(code: &str) -> &str {
    let start = LEADING.find(code).map_or(0, |m| m.end());
    code[start..].trim_end_matches(|c: char| c.is_whitespace() || c == '`')
}
