//! Endpoint tables and URL template resolution
//!
//! Each resource type declares a static [`EndpointMap`]: action name to
//! `(URL template, HTTP method)`. Templates are slash-delimited; a segment
//! with a leading `:` is mutable and is filled in, left to right, by the
//! positional arguments supplied at dispatch time. Argument count must
//! match the mutable-segment count exactly or the call is rejected before
//! any network activity.
//!
//! Templates are relative to the API root: `wallet/:id`, never
//! `/api/v1/wallet/:id`.

use std::fmt;

use crate::error::{Error, Result};

/// Marker prefix for a mutable template segment.
const MUTABLE_MARKER: char = ':';

/// The HTTP methods the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Parse a method string from an endpoint table, case-insensitively.
    pub fn parse(method: &str) -> Option<Self> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Whether requests with this verb carry a JSON body.
    pub fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static per-type table from action name to `(template, method)`.
#[derive(Debug, Clone, Copy)]
pub struct EndpointMap {
    entries: &'static [(&'static str, (&'static str, &'static str))],
}

impl EndpointMap {
    pub const fn new(entries: &'static [(&'static str, (&'static str, &'static str))]) -> Self {
        Self { entries }
    }

    /// Look up and validate the entry for an action.
    ///
    /// Distinguishes an unknown action from a malformed entry: a missing
    /// key is [`Error::UnknownAction`], an empty template is
    /// [`Error::InvalidEndpoint`], and a method outside the four supported
    /// verbs is [`Error::InvalidMethod`].
    pub fn lookup(&self, action: &str) -> Result<(&'static str, Verb)> {
        let (template, method) = self
            .entries
            .iter()
            .find(|(name, _)| *name == action)
            .map(|(_, entry)| *entry)
            .ok_or_else(|| Error::UnknownAction(action.to_string()))?;

        if template.is_empty() {
            return Err(Error::InvalidEndpoint {
                action: action.to_string(),
                reason: "empty URL template".to_string(),
            });
        }

        let verb = Verb::parse(method).ok_or_else(|| Error::InvalidMethod {
            method: method.to_string(),
            action: action.to_string(),
        })?;

        Ok((template, verb))
    }
}

/// Substitute positional arguments into a URL template.
///
/// Every `:`-prefixed segment is replaced, left to right, by the next
/// argument. The argument count must equal the mutable-segment count. A
/// duplicate leading separator (template starting with `//`) is collapsed.
pub fn resolve(template: &str, args: &[&str]) -> Result<String> {
    let fragments: Vec<&str> = template.split('/').collect();
    let expected = fragments
        .iter()
        .filter(|fragment| fragment.starts_with(MUTABLE_MARKER))
        .count();

    if args.len() != expected {
        return Err(Error::TemplateMismatch {
            template: template.to_string(),
            expected,
            supplied: args.len(),
        });
    }

    let mut remaining = args.iter().copied();
    let mut mapped = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if fragment.starts_with(MUTABLE_MARKER) {
            // Cannot run dry: arity was checked above
            if let Some(argument) = remaining.next() {
                mapped.push(argument);
            }
        } else {
            mapped.push(fragment);
        }
    }

    let mut path = mapped.join("/");
    if path.starts_with("//") {
        path.remove(0);
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINTS: EndpointMap = EndpointMap::new(&[
        ("LIST", ("wallet", "GET")),
        ("READ", ("wallet/:id", "get")),
        ("BROKEN_URL", ("", "GET")),
        ("BROKEN_METHOD", ("wallet", "PATCH")),
    ]);

    #[test]
    fn resolve_substitutes_single_argument() {
        assert_eq!(resolve("wallet/:id", &["abc123"]).unwrap(), "wallet/abc123");
    }

    #[test]
    fn resolve_without_mutable_segments_takes_no_arguments() {
        assert_eq!(resolve("wallet", &[]).unwrap(), "wallet");
    }

    #[test]
    fn resolve_substitutes_in_order() {
        let path = resolve("wallet/:walletid/webhooks/:id", &["w1", "h9"]).unwrap();
        assert_eq!(path, "wallet/w1/webhooks/h9");
    }

    #[test]
    fn resolve_rejects_too_few_and_too_many_arguments() {
        for args in [&[][..], &["a", "b"][..]] {
            let err = resolve("wallet/:id", args).unwrap_err();
            assert!(matches!(
                err,
                Error::TemplateMismatch {
                    expected: 1,
                    supplied,
                    ..
                } if supplied == args.len()
            ));
        }
    }

    #[test]
    fn resolve_collapses_duplicate_leading_separator() {
        assert_eq!(resolve("//wallet/:id", &["w1"]).unwrap(), "/wallet/w1");
        assert_eq!(resolve("/wallet", &[]).unwrap(), "/wallet");
    }

    #[test]
    fn lookup_parses_method_case_insensitively() {
        let (template, verb) = ENDPOINTS.lookup("READ").unwrap();
        assert_eq!(template, "wallet/:id");
        assert_eq!(verb, Verb::Get);
    }

    #[test]
    fn lookup_rejects_unknown_action() {
        assert!(matches!(
            ENDPOINTS.lookup("FREEZE"),
            Err(Error::UnknownAction(action)) if action == "FREEZE"
        ));
    }

    #[test]
    fn lookup_rejects_empty_template() {
        assert!(matches!(
            ENDPOINTS.lookup("BROKEN_URL"),
            Err(Error::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn lookup_rejects_unsupported_method() {
        assert!(matches!(
            ENDPOINTS.lookup("BROKEN_METHOD"),
            Err(Error::InvalidMethod { method, .. }) if method == "PATCH"
        ));
    }

    #[test]
    fn verb_body_rules() {
        assert!(Verb::Post.has_body());
        assert!(Verb::Put.has_body());
        assert!(!Verb::Get.has_body());
        assert!(!Verb::Delete.has_body());
    }
}
