//! Text helpers.

/// Default suffix appended to truncated text.
pub const DEFAULT_TRUNCATE_SUFFIX: &str = "...";

/// Truncate `text` to at most `max_len` characters, suffix included.
///
/// Text that already fits is returned unchanged. Otherwise the first
/// `max_len - suffix_len` characters are kept and `suffix` is appended.
///
/// # Example
///
/// ```
/// use roster_lib::format::truncate;
///
/// assert_eq!(truncate("Bangkok Metropolis", 10, "..."), "Bangkok...");
/// assert_eq!(truncate("Bangkok", 10, "..."), "Bangkok");
/// ```
pub fn truncate(text: &str, max_len: usize, suffix: &str) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let keep = max_len.saturating_sub(suffix.chars().count());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(suffix);
    out
}
