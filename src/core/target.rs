// src/core/target.rs

/// The site under analysis, fixed once per user-supplied URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub raw_input: String,
    pub normalized_url: String,
    pub hostname: String,
}

impl Target {
    /// Normalizes raw operator input.
    ///
    /// Input that does not start with `http` gets an `https://` prefix. The
    /// hostname is whatever sits between the last `//` and the next `/`; it is
    /// not validated, so garbage in shows up later as collector failures.
    pub fn parse(raw_input: &str) -> Self {
        let trimmed = raw_input.trim();
        let normalized_url = if trimmed.starts_with("http") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };
        let hostname = extract_hostname(&normalized_url).to_string();

        Self {
            raw_input: raw_input.to_string(),
            normalized_url,
            hostname,
        }
    }
}

fn extract_hostname(url: &str) -> &str {
    let after_scheme = url.rsplit("//").next().unwrap_or(url);
    after_scheme.split('/').next().unwrap_or(after_scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_domain_gets_https_scheme() {
        let target = Target::parse("example.com");
        assert_eq!(target.normalized_url, "https://example.com");
        assert_eq!(target.hostname, "example.com");
        assert_eq!(target.raw_input, "example.com");
    }

    #[test]
    fn schemed_input_is_unchanged() {
        for input in ["http://example.com", "https://example.com/blog/post"] {
            assert_eq!(Target::parse(input).normalized_url, input);
        }
    }

    #[test]
    fn hostname_drops_scheme_and_path() {
        let target = Target::parse("https://sub.example.com/a/b?c=d");
        assert_eq!(target.hostname, "sub.example.com");
    }

    #[test]
    fn hostname_keeps_port() {
        let target = Target::parse("localhost:8080/status");
        assert_eq!(target.normalized_url, "https://localhost:8080/status");
        assert_eq!(target.hostname, "localhost:8080");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let target = Target::parse("  example.org \n");
        assert_eq!(target.normalized_url, "https://example.org");
    }

    #[test]
    fn malformed_input_passes_through() {
        let target = Target::parse("not a url");
        assert_eq!(target.normalized_url, "https://not a url");
        assert_eq!(target.hostname, "not a url");
    }
}
