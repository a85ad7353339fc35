use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A navigation target split into its parts. Only `path` takes part in route matching.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
    pub hash: Option<String>,
}

impl Location {
    /// Splits `/path?query#hash`. The markers themselves are not kept.
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        Self {
            path: path.to_string(),
            query,
            hash,
        }
    }

    /// The location as it would appear in the address bar, without any base.
    pub fn href(&self) -> String {
        let mut href = self.path.clone();
        if let Some(query) = &self.query {
            href.push('?');
            href.push_str(query);
        }
        if let Some(hash) = &self.hash {
            href.push('#');
            href.push_str(hash);
        }
        href
    }
}

pub(crate) fn validate_route_path(path: &str) -> Result<(), &'static str> {
    if !path.starts_with('/') {
        return Err("paths must be absolute and start with `/`");
    }

    if path.contains("//") {
        return Err("paths cannot contain empty segments");
    }

    if path.contains(['?', '#']) {
        return Err("paths cannot contain a query or a fragment");
    }

    if path.chars().any(char::is_whitespace) {
        return Err("paths cannot contain whitespace");
    }

    Ok(())
}

/// The key a path is indexed and looked up under, according to the matching options.
pub(crate) fn match_key(path: &str, strict: bool, sensitive: bool) -> Cow<'_, str> {
    let path = if !strict && path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };

    if sensitive {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(path.to_lowercase())
    }
}

/// Normalizes a base to a leading slash and no trailing slash. The root base is the empty string.
pub(crate) fn normalize_base(base: Option<&str>) -> String {
    let trimmed = base.unwrap_or_default().trim().trim_end_matches('/');

    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Removes `base` from a host address. Returns `None` when the address lies outside of it.
pub(crate) fn strip_base<'a>(href: &'a str, base: &str) -> Option<Cow<'a, str>> {
    if base.is_empty() {
        return Some(Cow::Borrowed(href));
    }

    let rest = href.strip_prefix(base)?;
    match rest.chars().next() {
        None => Some(Cow::Borrowed("/")),
        Some('/') => Some(Cow::Borrowed(rest)),
        Some('?' | '#') => Some(Cow::Owned(format!("/{}", rest))),
        // `/apple` is not inside `/app`
        Some(_) => None,
    }
}

pub(crate) fn join_base(base: &str, href: &str) -> String {
    format!("{}{}", base, href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_path() {
        let location = Location::parse("/training");

        assert_eq!(location.path, "/training");
        assert_eq!(location.query, None);
        assert_eq!(location.hash, None);
    }

    #[test]
    fn test_parse_query_and_hash() {
        let location = Location::parse("/statistics?range=week#chart");

        assert_eq!(location.path, "/statistics");
        assert_eq!(location.query.as_deref(), Some("range=week"));
        assert_eq!(location.hash.as_deref(), Some("chart"));
        assert_eq!(location.href(), "/statistics?range=week#chart");
    }

    #[test]
    fn test_parse_question_mark_inside_hash() {
        let location = Location::parse("/settings#what?");

        assert_eq!(location.path, "/settings");
        assert_eq!(location.query, None);
        assert_eq!(location.hash.as_deref(), Some("what?"));
    }

    #[test]
    fn test_validate_route_path() {
        assert!(validate_route_path("/").is_ok());
        assert!(validate_route_path("/settings").is_ok());
        assert!(validate_route_path("settings").is_err());
        assert!(validate_route_path("").is_err());
        assert!(validate_route_path("/a//b").is_err());
        assert!(validate_route_path("/a?b").is_err());
        assert!(validate_route_path("/a#b").is_err());
        assert!(validate_route_path("/a b").is_err());
    }

    #[test]
    fn test_match_key_strict_and_sensitive() {
        assert_eq!(match_key("/Settings/", true, true), "/Settings/");
    }

    #[test]
    fn test_match_key_loose() {
        assert_eq!(match_key("/Settings/", false, false), "/settings");
        assert_eq!(match_key("/", false, false), "/");
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(None), "");
        assert_eq!(normalize_base(Some("/")), "");
        assert_eq!(normalize_base(Some("app")), "/app");
        assert_eq!(normalize_base(Some("/app/")), "/app");
        assert_eq!(normalize_base(Some("/nested/app")), "/nested/app");
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(strip_base("/training", "").as_deref(), Some("/training"));
        assert_eq!(strip_base("/app", "/app").as_deref(), Some("/"));
        assert_eq!(strip_base("/app/", "/app").as_deref(), Some("/"));
        assert_eq!(strip_base("/app/training", "/app").as_deref(), Some("/training"));
        assert_eq!(strip_base("/app?x=1", "/app").as_deref(), Some("/?x=1"));
        assert_eq!(strip_base("/apple", "/app"), None);
        assert_eq!(strip_base("/training", "/app"), None);
    }

    #[test]
    fn test_join_base() {
        assert_eq!(join_base("", "/settings"), "/settings");
        assert_eq!(join_base("/app", "/"), "/app/");
    }
}
