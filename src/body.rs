//! Parse-or-fallback handling of message bodies.

use serde_json::Value;

use crate::json_tree::{build_tree, JsonNode};

/// Which rendering branch a body takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Structured,
    Text,
}

/// A message body after the JSON attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedBody {
    /// The body was a valid JSON document.
    Structured(Value),
    /// Anything else, kept byte-for-byte.
    Text(String),
}

impl ParsedBody {
    pub fn kind(&self) -> BodyKind {
        match self {
            ParsedBody::Structured(_) => BodyKind::Structured,
            ParsedBody::Text(_) => BodyKind::Text,
        }
    }
}

/// Try the body as JSON; on any failure keep the original text untouched.
pub fn parse_body(body: &str) -> ParsedBody {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => ParsedBody::Structured(value),
        Err(_) => ParsedBody::Text(body.to_owned()),
    }
}

/// Body ready for drawing: the tree model for JSON, or the raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayBody {
    Tree(JsonNode),
    Text(String),
}

impl DisplayBody {
    /// Parse and prepare a raw body in one step.
    pub fn from_raw(body: &str) -> Self {
        parse_body(body).into()
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            DisplayBody::Tree(_) => BodyKind::Structured,
            DisplayBody::Text(_) => BodyKind::Text,
        }
    }
}

impl From<ParsedBody> for DisplayBody {
    fn from(parsed: ParsedBody) -> Self {
        match parsed {
            ParsedBody::Structured(value) => DisplayBody::Tree(build_tree(&value)),
            ParsedBody::Text(text) => DisplayBody::Text(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body_object() {
        let parsed = parse_body(r#"{"a":1,"b":{"c":2}}"#);
        assert_eq!(parsed.kind(), BodyKind::Structured);
        assert_eq!(parsed, ParsedBody::Structured(json!({"a": 1, "b": {"c": 2}})));
    }

    #[test]
    fn test_parse_body_scalars_are_structured() {
        assert_eq!(parse_body("42"), ParsedBody::Structured(json!(42)));
        assert_eq!(parse_body("true"), ParsedBody::Structured(json!(true)));
        assert_eq!(parse_body("null"), ParsedBody::Structured(Value::Null));
        assert_eq!(parse_body(r#""quoted""#), ParsedBody::Structured(json!("quoted")));
        assert_eq!(parse_body("  [1, 2]\n"), ParsedBody::Structured(json!([1, 2])));
    }

    #[test]
    fn test_parse_body_text_fallback_is_verbatim() {
        for raw in ["hello", "{invalid", "Connected", "", "  spaced  ", "{\"a\":1} trailing", "[1,]"] {
            let parsed = parse_body(raw);
            assert_eq!(parsed.kind(), BodyKind::Text, "{raw:?}");
            assert_eq!(parsed, ParsedBody::Text(raw.to_string()));
        }
    }

    #[test]
    fn test_parse_body_unicode_text() {
        let raw = "héllo → wörld\n\tline two";
        assert_eq!(parse_body(raw), ParsedBody::Text(raw.to_string()));
    }

    #[test]
    fn test_display_body_follows_parse_branch() {
        assert_eq!(DisplayBody::from_raw(r#"{"a":1}"#).kind(), BodyKind::Structured);
        assert_eq!(
            DisplayBody::from_raw("plain text reply"),
            DisplayBody::Text("plain text reply".to_string())
        );
    }
}
