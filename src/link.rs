use url::Url;

/// Decides whether a string is a URL the reader could open.
pub trait UrlValidator {
    fn openable_url(&self, candidate: &str) -> Option<Url>;
}

impl<F> UrlValidator for F
where
    F: Fn(&str) -> Option<Url>,
{
    fn openable_url(&self, candidate: &str) -> Option<Url> {
        self(candidate)
    }
}

/// Accepts absolute URLs whose scheme is in an allow list.
#[derive(Debug, Clone)]
pub struct SchemeValidator {
    schemes: Vec<String>,
}

impl SchemeValidator {
    pub fn new<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            schemes: schemes
                .into_iter()
                .map(|scheme| scheme.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }
}

impl Default for SchemeValidator {
    fn default() -> Self {
        Self::new(["http", "https", "mailto"])
    }
}

impl UrlValidator for SchemeValidator {
    fn openable_url(&self, candidate: &str) -> Option<Url> {
        let candidate = candidate.trim();
        if candidate.is_empty() || candidate.contains(char::is_whitespace) {
            return None;
        }
        let url = Url::parse(candidate).ok()?;
        // Url lowercases the scheme
        if !self.schemes.iter().any(|scheme| scheme == url.scheme()) {
            return None;
        }
        if url.scheme() != "mailto" && !url.has_host() {
            return None;
        }
        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("https://example.com")]
    #[case("http://example.com/a?b=c#d")]
    #[case("  https://example.com  ")]
    #[case("HTTPS://EXAMPLE.COM")]
    #[case("mailto:someone@example.com")]
    fn accepts_openable_urls(#[case] candidate: &str) {
        assert!(SchemeValidator::default().openable_url(candidate).is_some());
    }

    #[rstest]
    #[case("")]
    #[case("not a url")]
    #[case("click here")]
    #[case("example.com")]
    #[case("/relative/path")]
    #[case("#anchor")]
    #[case("javascript:alert(1)")]
    #[case("file:///etc/passwd")]
    fn rejects_everything_else(#[case] candidate: &str) {
        assert!(SchemeValidator::default().openable_url(candidate).is_none());
    }

    #[test]
    fn custom_schemes() {
        let validator = SchemeValidator::new(["FTP"]);
        assert!(validator.openable_url("ftp://example.com/file").is_some());
        assert!(validator.openable_url("https://example.com").is_none());
    }

    #[test]
    fn closures_are_validators() {
        let anything = |candidate: &str| {
            Url::parse("https://fixed.example")
                .ok()
                .filter(|_| !candidate.is_empty())
        };
        assert!(anything.openable_url("whatever").is_some());
        assert!(anything.openable_url("").is_none());
    }
}
