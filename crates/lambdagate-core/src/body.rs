use serde::Serialize;
use serde_json::Value;

/// Nesting depth at which `serde_json` refuses to parse a document.
pub const MAX_JSON_DEPTH: usize = 128;

/// A request body after JSON decoding.
///
/// Keeps track of which branch the decoder took so the engine can
/// tell a missing body from a JSON `null` document, and a parsed document
/// from text that failed to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    /// No body was sent, or it was empty.
    #[default]
    Absent,
    /// The body parsed as JSON.
    Json(Value),
    /// The body did not parse as JSON and is passed through verbatim,
    /// so request validation can report the offending text.
    Raw(String),
}

impl Body {
    /// Decode a raw body string.
    ///
    /// `None` and the empty string are both [`Body::Absent`]; the parser is
    /// never called for them. Parse failures are not errors.
    ///
    /// The parser is `serde_json` with its default limits, which are
    /// stricter than `JSON.parse` in two places:
    ///
    /// - Arrays and objects nested [`MAX_JSON_DEPTH`] or more levels deep
    ///   are rejected, keeping recursion (parse and drop) bounded on the
    ///   stack. Such bodies become [`Body::Raw`].
    /// - Strings containing an unpaired UTF-16 surrogate escape such as
    ///   `"\ud800"` cannot be represented as a Rust `String` and also
    ///   become [`Body::Raw`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Absent,
            Some(text) => match serde_json::from_str(text) {
                Ok(value) => Self::Json(value),
                Err(_) => Self::Raw(text.to_string()),
            },
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(text) => Some(text),
            _ => None,
        }
    }

    /// Flatten into a JSON value. Raw text becomes a JSON string.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Absent => None,
            Self::Json(value) => Some(value),
            Self::Raw(text) => Some(Value::String(text)),
        }
    }
}
