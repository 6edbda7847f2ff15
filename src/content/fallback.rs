//! Optional-field fallbacks.
//!
//! Every optional content field resolves to a concrete value before it leaves the
//! service: blank or missing text becomes its hardcoded fallback (or `""` where the
//! page should simply show nothing), never `null`.

/// A partial record that can be completed from a defaults record.
pub trait ApplyDefaults {
    type Defaults;
    type Output;

    fn apply_defaults(&self, defaults: &Self::Defaults) -> Self::Output;
}

/// Present means non-blank after trimming.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// The trimmed value, or `fallback` when missing or blank.
pub fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// The trimmed value, or an empty string.
pub fn text(value: Option<&str>) -> String {
    text_or(value, "")
}

/// Non-blank entries, or the fallback list when none remain.
pub fn list_or(values: &[String], fallback: &[&str]) -> Vec<String> {
    let present: Vec<String> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();

    if present.is_empty() {
        fallback.iter().map(|v| v.to_string()).collect()
    } else {
        present
    }
}

/// Shorten `text` to at most `max` characters on a word boundary, adding an ellipsis.
pub fn excerpt(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }

    let cut: String = text.chars().take(max).collect();
    let cut = match cut.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_takes_fallback() {
        assert_eq!(text_or(None, "Default"), "Default");
        assert_eq!(text_or(Some("   "), "Default"), "Default");
        assert_eq!(text_or(Some(" Coffee "), "Default"), "Coffee");
        assert_eq!(text(None), "");
        assert!(!is_present(Some("\t")));
        assert!(is_present(Some("x")));
    }

    #[test]
    fn lists_drop_blanks_before_falling_back() {
        let values = vec!["".to_string(), " Quality ".to_string()];
        assert_eq!(list_or(&values, &["Integrity"]), vec!["Quality"]);
        assert_eq!(list_or(&["  ".to_string()], &["Integrity"]), vec!["Integrity"]);
        assert!(list_or(&[], &[]).is_empty());
    }

    #[test]
    fn excerpts_break_on_words() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("Coffee export season opens early", 16), "Coffee export…");
        assert_eq!(excerpt("Supercalifragilistic", 5), "Super…");
    }
}
