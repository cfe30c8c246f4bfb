//! Upstream response envelope
//!
//! Every dog.ceo response is `{"status": .., "message": ..}`. The message is
//! decoded once into [`Message`] and then narrowed to the shape a given
//! endpoint expects, so no endpoint inspects raw JSON on its own.

use dogapi_core::domain::BreedCatalog;
use dogapi_core::port::UpstreamError;
use serde::Deserialize;
use serde_json::{Map, Value};

const SUCCESS: &str = "success";

/// Possible shapes of the `message` field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    List(Vec<Value>),
    Catalog(Map<String, Value>),
    Other(Value),
}

impl Message {
    fn kind(&self) -> &'static str {
        match self {
            Message::Text(_) => "string",
            Message::List(_) => "list",
            Message::Catalog(_) => "map",
            Message::Other(_) => "scalar",
        }
    }
}

/// Raw `{status, message}` wrapper
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<Message>,
}

impl Envelope {
    pub fn decode(body: &str) -> Result<Self, UpstreamError> {
        serde_json::from_str(body).map_err(|e| UpstreamError::Decode(e.to_string()))
    }

    /// Reject any status other than "success"
    pub fn into_payload(self) -> Result<Payload, UpstreamError> {
        if self.status != SUCCESS {
            return Err(UpstreamError::Status(self.status));
        }
        Ok(Payload(self.message))
    }
}

/// Message of a successful envelope, awaiting narrowing
#[derive(Debug)]
pub struct Payload(Option<Message>);

impl Payload {
    pub fn into_text(self) -> Result<String, UpstreamError> {
        match self.0 {
            Some(Message::Text(text)) => Ok(text),
            other => Err(shape_error("string", other.as_ref())),
        }
    }

    /// Non-string elements are dropped, not rejected.
    pub fn into_strings(self) -> Result<Vec<String>, UpstreamError> {
        match self.0 {
            Some(Message::List(items)) => Ok(strings_only(items)),
            other => Err(shape_error("list", other.as_ref())),
        }
    }

    /// Entries whose value is not a list are skipped.
    pub fn into_catalog(self) -> Result<BreedCatalog, UpstreamError> {
        match self.0 {
            Some(Message::Catalog(map)) => Ok(map
                .into_iter()
                .filter_map(|(breed, subs)| match subs {
                    Value::Array(items) => Some((breed, strings_only(items))),
                    _ => None,
                })
                .collect()),
            other => Err(shape_error("map", other.as_ref())),
        }
    }
}

/// Pull a human-readable reason out of an error body, if it carries one
pub fn error_hint(body: &str) -> Option<String> {
    match Envelope::decode(body).ok()?.message {
        Some(Message::Text(text)) if !text.is_empty() => Some(text),
        _ => None,
    }
}

fn strings_only(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

fn shape_error(expected: &'static str, actual: Option<&Message>) -> UpstreamError {
    UpstreamError::Shape {
        expected,
        actual: actual.map_or("nothing", Message::kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(body: &str) -> Result<Payload, UpstreamError> {
        Envelope::decode(body)?.into_payload()
    }

    #[test]
    fn test_text_message() {
        let url = payload(r#"{"status":"success","message":"https://x/y.jpg"}"#)
            .unwrap()
            .into_text()
            .unwrap();
        assert_eq!(url, "https://x/y.jpg");
    }

    #[test]
    fn test_list_keeps_order_and_drops_non_strings() {
        let items = payload(r#"{"status":"success","message":["a",5,"b",null,{"k":1},"c"]}"#)
            .unwrap()
            .into_strings()
            .unwrap();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_list() {
        let items = payload(r#"{"status":"success","message":[]}"#)
            .unwrap()
            .into_strings()
            .unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_catalog_message() {
        let catalog = payload(
            r#"{"status":"success","message":{"husky":["agouti"],"boxer":[],"odd":"x","mixed":["a",1]}}"#,
        )
        .unwrap()
        .into_catalog()
        .unwrap();

        assert_eq!(catalog["husky"], vec!["agouti"]);
        assert!(catalog["boxer"].is_empty());
        assert_eq!(catalog["mixed"], vec!["a"]);
        assert!(!catalog.contains_key("odd"));
    }

    #[test]
    fn test_error_status_rejected() {
        let err = payload(r#"{"status":"error"}"#).unwrap_err();
        assert_eq!(err, UpstreamError::Status("error".to_string()));

        let err = payload(r#"{"message":"hi"}"#).unwrap_err();
        assert_eq!(err, UpstreamError::Status(String::new()));
    }

    #[test]
    fn test_shape_mismatch() {
        let err = payload(r#"{"status":"success","message":["a"]}"#)
            .unwrap()
            .into_text()
            .unwrap_err();
        assert_eq!(
            err,
            UpstreamError::Shape {
                expected: "string",
                actual: "list"
            }
        );

        let err = payload(r#"{"status":"success","message":"a"}"#)
            .unwrap()
            .into_catalog()
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Shape { expected: "map", actual: "string" }));

        let err = payload(r#"{"status":"success","message":42}"#)
            .unwrap()
            .into_strings()
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Shape { actual: "scalar", .. }));

        let err = payload(r#"{"status":"success"}"#)
            .unwrap()
            .into_strings()
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Shape { actual: "nothing", .. }));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        assert!(matches!(
            Envelope::decode("<html>oops</html>"),
            Err(UpstreamError::Decode(_))
        ));
        assert!(matches!(
            Envelope::decode(r#"{"status":5}"#),
            Err(UpstreamError::Decode(_))
        ));
    }

    #[test]
    fn test_error_hint() {
        assert_eq!(
            error_hint(r#"{"status":"error","message":"Breed not found","code":404}"#),
            Some("Breed not found".to_string())
        );
        assert_eq!(error_hint("not json"), None);
        assert_eq!(error_hint(r#"{"status":"error"}"#), None);
    }
}
