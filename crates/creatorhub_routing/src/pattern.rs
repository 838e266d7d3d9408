use std::borrow::Cow;
use std::fmt::{self, Display};

/// Strips the query string and fragment, leaving the path component.
///
/// Nothing else is normalised: `"/signup/"` stays distinct from `"/signup"`
/// and `""` stays distinct from `"/"`.
pub fn path_component(raw: &str) -> &str {
    match raw.find(['?', '#']) {
        Some(end) => &raw[..end],
        None => raw,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Exact(Cow<'static, str>),
    Wildcard,
}

impl Pattern {
    pub fn exact(path: impl Into<Cow<'static, str>>) -> Self {
        Pattern::Exact(path.into())
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Pattern::Wildcard)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Exact(path) => f.write_str(path),
            Pattern::Wildcard => f.write_str("*"),
        }
    }
}
