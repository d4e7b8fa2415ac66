use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Email pattern: matches standard email addresses.
fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
    });
    &EMAIL_REGEX
}

/// Masks email addresses: keeps the first character of the local part and the
/// full domain. Database constraint messages quote offending values, so raw
/// driver errors pass through here before being logged.
pub fn redact(input: &str) -> String {
    email_regex()
        .replace_all(input, |caps: &regex::Captures| {
            let full_match = &caps[0];
            match full_match.find('@') {
                Some(0) | None => full_match.to_string(),
                Some(at_pos) => {
                    let first_char = &full_match[..1];
                    let domain = &full_match[at_pos..];
                    format!("{first_char}***{domain}")
                }
            }
        })
        .to_string()
}

/// Redacts the wrapped string when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
