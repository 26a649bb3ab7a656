//! Detection of links that already point at this service.
//!
//! Submitting `https://{domain}/{alias}` re-shortens the URL behind that
//! alias instead of wrapping a short link in another short link.

use regex::Regex;

/// Matches inputs that start with `http(s)://{domain}` followed by a path
/// separator or the end of the string.
#[derive(Debug, Clone)]
pub struct SelfLinkMatcher {
    pattern: Regex,
}

impl SelfLinkMatcher {
    /// Builds a matcher for `domain` (host with optional port).
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting pattern cannot be compiled.
    pub fn new(domain: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"(?i)^https?://{}(?:/|$)",
            regex::escape(domain.trim_end_matches('/'))
        ))?;
        Ok(Self { pattern })
    }

    /// Returns the trailing path segment if `input` is one of our own links.
    ///
    /// The segment may be empty (`https://{domain}/`), which never resolves.
    pub fn alias<'a>(&self, input: &'a str) -> Option<&'a str> {
        if !self.pattern.is_match(input) {
            return None;
        }
        input.rsplit('/').next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> SelfLinkMatcher {
        SelfLinkMatcher::new("s.example.com").unwrap()
    }

    #[test]
    fn test_matches_https_link() {
        assert_eq!(matcher().alias("https://s.example.com/1a2b3c4d"), Some("1a2b3c4d"));
    }

    #[test]
    fn test_matches_http_link() {
        assert_eq!(
            matcher().alias("http://s.example.com/brave-quiet-otter"),
            Some("brave-quiet-otter")
        );
    }

    #[test]
    fn test_takes_last_segment() {
        assert_eq!(matcher().alias("https://s.example.com/a/b/c"), Some("c"));
    }

    #[test]
    fn test_bare_domain_yields_empty_alias() {
        assert_eq!(matcher().alias("https://s.example.com/"), Some(""));
    }

    #[test]
    fn test_scheme_and_host_are_case_insensitive() {
        assert_eq!(matcher().alias("HTTPS://S.Example.com/abc"), Some("abc"));
    }

    #[test]
    fn test_other_hosts_do_not_match() {
        assert_eq!(matcher().alias("https://example.com/abc"), None);
        assert_eq!(matcher().alias("https://s.example.com.evil.org/abc"), None);
        assert_eq!(matcher().alias("https://sxexample.com/abc"), None);
    }

    #[test]
    fn test_domain_must_be_at_start() {
        assert_eq!(
            matcher().alias("https://other.org/?next=https://s.example.com/abc"),
            None
        );
    }

    #[test]
    fn test_domain_with_port() {
        let matcher = SelfLinkMatcher::new("localhost:3000").unwrap();
        assert_eq!(matcher.alias("http://localhost:3000/abc"), Some("abc"));
        assert_eq!(matcher.alias("http://localhost/abc"), None);
    }
}
