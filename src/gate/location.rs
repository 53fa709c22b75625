//! Locations and order ids.
//!
//! A [`Location`] is the path plus raw query of a navigation target. The
//! fragment is dropped: the gate never reads it and the history trap pins the
//! path and query only.

use std::fmt;
use url::{Url, form_urlencoded};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    path: String,
    query: Option<String>,
}

impl Location {
    /// Builds a location from a path and an optional raw query (with or without
    /// the leading `?`). An empty path becomes `/`.
    pub fn new(path: impl Into<String>, query: Option<&str>) -> Self {
        let path = path.into();
        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };

        let query = query
            .map(|value| value.trim_start_matches('?'))
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Self { path, query }
    }

    /// Parses either an absolute URL (`https://host/p?q`) or a root-relative
    /// href (`/p?q#f`). Parsing never fails; anything unrecognized is taken
    /// as a path.
    pub fn parse(href: &str) -> Self {
        if let Ok(url) = Url::parse(href) {
            if !url.cannot_be_a_base() {
                return Self::new(url.path(), url.query());
            }
        }

        let without_fragment = href.split('#').next().unwrap_or_default();
        match without_fragment.split_once('?') {
            Some((path, query)) => Self::new(path, Some(query)),
            None => Self::new(without_fragment, None),
        }
    }

    /// Builds `path?param=value` with the value form-encoded.
    pub fn with_param(path: &str, param: &str, value: &str) -> Self {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(param, value)
            .finish();
        Self::new(path, Some(&query))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the first decoded value of `key`, if present.
    pub fn query_param(&self, key: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        form_urlencoded::parse(query.as_bytes())
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.into_owned())
    }

    /// Extracts the order id carried by `param`. Absent, blank or malformed
    /// values yield `None`.
    pub fn order_id(&self, param: &str) -> Option<OrderId> {
        self.query_param(param)
            .and_then(|value| OrderId::parse(&value))
    }

    pub fn href(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.href())
    }
}

/// External transaction identifier. Opaque to the gate; it is only trimmed and
/// checked for being printable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(String);

impl OrderId {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_control) {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_path_and_query() {
        let location = Location::parse("/sale/buy-course/course/access?order_id=ORD123");
        assert_eq!(location.path(), "/sale/buy-course/course/access");
        assert_eq!(location.query(), Some("order_id=ORD123"));
        assert_eq!(
            location.href(),
            "/sale/buy-course/course/access?order_id=ORD123"
        );
    }

    #[test]
    fn parse_accepts_absolute_urls_and_drops_fragment() {
        let location = Location::parse("https://shop.example/access?order_id=A1#top");
        assert_eq!(location.path(), "/access");
        assert_eq!(location.query(), Some("order_id=A1"));

        let relative = Location::parse("/access?order_id=A1#top");
        assert_eq!(relative, location);
    }

    #[test]
    fn new_normalizes_path_and_empty_query() {
        let location = Location::new("", Some("?"));
        assert_eq!(location.path(), "/");
        assert_eq!(location.query(), None);
        assert_eq!(Location::new("access", None).path(), "/access");
    }

    #[test]
    fn order_id_is_decoded() {
        let location = Location::parse("/access?order_id=ORD%20123%2Bx");
        assert_eq!(
            location.order_id("order_id").map(|id| id.to_string()),
            Some("ORD 123+x".to_string())
        );
    }

    #[test]
    fn order_id_takes_first_occurrence() {
        let location = Location::parse("/access?order_id=first&order_id=second");
        assert_eq!(
            location.order_id("order_id").map(|id| id.to_string()),
            Some("first".to_string())
        );
    }

    #[test]
    fn order_id_missing_or_blank_is_none() {
        assert_eq!(Location::parse("/access").order_id("order_id"), None);
        assert_eq!(Location::parse("/access?order_id=").order_id("order_id"), None);
        assert_eq!(
            Location::parse("/access?order_id=%20%20").order_id("order_id"),
            None
        );
        assert_eq!(
            Location::parse("/access?order_id=a%0Ab").order_id("order_id"),
            None
        );
        assert_eq!(Location::parse("/access?orderid=X").order_id("order_id"), None);
    }

    #[test]
    fn with_param_encodes_value() {
        let location = Location::with_param("/access", "order_id", "A&B C");
        assert_eq!(location.href(), "/access?order_id=A%26B+C");
        assert_eq!(
            location.order_id("order_id").map(|id| id.to_string()),
            Some("A&B C".to_string())
        );
    }
}
