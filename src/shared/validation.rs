use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating media tag labels
    /// Must start with a letter or digit; spaces, hyphens and underscores allowed inside
    /// - Valid: "sprint", "Leg Day", "u-17", "warm_up"
    /// - Invalid: "-sprint", " sprint", "sprint!", ""
    pub static ref TAG_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9 _-]*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_regex_valid() {
        assert!(TAG_REGEX.is_match("sprint"));
        assert!(TAG_REGEX.is_match("Leg Day"));
        assert!(TAG_REGEX.is_match("u-17"));
        assert!(TAG_REGEX.is_match("warm_up"));
        assert!(TAG_REGEX.is_match("100m"));
        assert!(TAG_REGEX.is_match("a"));
    }

    #[test]
    fn test_tag_regex_invalid() {
        assert!(!TAG_REGEX.is_match("")); // empty
        assert!(!TAG_REGEX.is_match(" sprint")); // leading space
        assert!(!TAG_REGEX.is_match("-sprint")); // leading hyphen
        assert!(!TAG_REGEX.is_match("_warmup")); // leading underscore
        assert!(!TAG_REGEX.is_match("sprint!")); // punctuation
        assert!(!TAG_REGEX.is_match("spr#int")); // punctuation
    }
}
