//! JSON document parsing.

use portal_model::JsonRow;
use serde_json::Value;
use tracing::debug;

/// Parses `text` as JSON. An array yields one row per element, an object a
/// single row. Anything else, including malformed input, yields `None`.
pub fn try_parse_json(text: &str) -> Option<Vec<JsonRow>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => Some(items.into_iter().map(JsonRow::new).collect()),
        Ok(object @ Value::Object(_)) => Some(vec![JsonRow::new(object)]),
        Ok(_) => None,
        Err(error) => {
            debug!(%error, "content is not JSON");
            None
        }
    }
}

/// Like [`try_parse_json`], with unusable input flattened to no rows.
pub fn parse_json(text: &str) -> Vec<JsonRow> {
    try_parse_json(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use portal_model::GenericRow;

    use super::*;

    #[test]
    fn arrays_and_objects_become_rows() {
        let rows = parse_json(r#"[{"company": "Acme"}, {"company": "Globex"}]"#);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].keys(), vec!["company"]);
        assert_eq!(parse_json(r#"{"hodName": "Dr. Rao"}"#).len(), 1);
    }

    #[test]
    fn scalars_and_garbage_yield_nothing() {
        assert!(parse_json("42").is_empty());
        assert!(parse_json("null").is_empty());
        assert!(parse_json("{not json").is_empty());
        assert!(try_parse_json("\"text\"").is_none());
    }

    #[test]
    fn empty_array_parses_to_no_rows() {
        assert_eq!(try_parse_json("[]").map(|rows| rows.len()), Some(0));
    }
}
