//! Parsing of field-value mappings out of language model responses.
//!
//! Models are asked to return only a JSON object, but frequently wrap it in
//! prose or Markdown fences. The parser locates the first top-level object
//! and decodes it; anything else is an [`ExtractionError`], which callers
//! treat as "nothing extracted".

use thiserror::Error;

use super::extracted_data::PartialExtraction;

/// Maximum accepted response length (100KB).
pub const MAX_RESPONSE_LENGTH: usize = 100_000;

/// Errors that can occur while parsing an extraction response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Response too long: {actual} bytes exceeds maximum of {max} bytes")]
    TooLong { max: usize, actual: usize },

    #[error("No JSON object found in response")]
    NoJsonObject,

    #[error("JSON parse error: {0}")]
    ParseError(String),
}

/// Extracts the first top-level JSON object from a model response.
///
/// The whole response is scanned once; Markdown fences need no special
/// handling since their markers contain no braces. The scan is string- and
/// escape-aware, so braces inside quoted values do not end the object early.
pub fn parse_extraction(response: &str) -> Result<PartialExtraction, ExtractionError> {
    if response.len() > MAX_RESPONSE_LENGTH {
        return Err(ExtractionError::TooLong {
            max: MAX_RESPONSE_LENGTH,
            actual: response.len(),
        });
    }

    let candidate = find_json_object(response).ok_or(ExtractionError::NoJsonObject)?;

    let value: serde_json::Value = serde_json::from_str(candidate)
        .map_err(|e| ExtractionError::ParseError(e.to_string()))?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(ExtractionError::NoJsonObject),
    }
}

/// Returns the first balanced `{...}` slice of `s`.
fn find_json_object(s: &str) -> Option<&str> {
    let start = s.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, c) in s[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[start..start + offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_bare_object() {
        let map = parse_extraction(r#"{"Name": "Asha"}"#).unwrap();
        assert_eq!(map.get("Name"), Some(&json!("Asha")));
    }

    #[test]
    fn parses_object_surrounded_by_prose() {
        let response = r#"Sure! Here is what I found: {"Name": "Asha", "Phone": "9876543210"} Let me know if you need more."#;
        let map = parse_extraction(response).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Phone"), Some(&json!("9876543210")));
    }

    #[test]
    fn parses_object_in_code_fence() {
        let response = "```json\n{\"City\": \"Pune\"}\n```";
        let map = parse_extraction(response).unwrap();
        assert_eq!(map.get("City"), Some(&json!("Pune")));
    }

    #[test]
    fn bare_object_wins_over_later_fenced_example() {
        let response = "{\"Name\": \"Asha\"}\nFor example:\n```json\n{\"Phone\": \"123\"}\n```";
        let map = parse_extraction(response).unwrap();
        assert_eq!(map.get("Name"), Some(&json!("Asha")));
        assert!(!map.contains_key("Phone"));
    }

    #[test]
    fn fenced_object_after_prose_is_found() {
        let response = "Here you go:\n```\n{\"City\": \"Pune\", \"Pin\": \"411001\"}\n```\nAnything else?";
        let map = parse_extraction(response).unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn braces_inside_strings_do_not_end_object() {
        let response = r#"{"Address": "Flat {4B}, \"Sunrise\" Apts"} trailing }"#;
        let map = parse_extraction(response).unwrap();
        assert_eq!(map.get("Address"), Some(&json!("Flat {4B}, \"Sunrise\" Apts")));
    }

    #[test]
    fn handles_multibyte_text_before_object() {
        let response = "Voilà, résultat: {\"Name\": \"Zoë\"}";
        let map = parse_extraction(response).unwrap();
        assert_eq!(map.get("Name"), Some(&json!("Zoë")));
    }

    #[test]
    fn only_first_top_level_object_is_used() {
        let map = parse_extraction(r#"{"A": "1"} and {"B": "2"}"#).unwrap();
        assert!(map.contains_key("A"));
        assert!(!map.contains_key("B"));
    }

    #[test]
    fn response_without_json_is_an_error() {
        assert_eq!(
            parse_extraction("I could not find any details."),
            Err(ExtractionError::NoJsonObject)
        );
    }

    #[test]
    fn unbalanced_object_is_an_error() {
        assert_eq!(
            parse_extraction(r#"{"Name": "Asha""#),
            Err(ExtractionError::NoJsonObject)
        );
    }

    #[test]
    fn malformed_object_is_a_parse_error() {
        assert!(matches!(
            parse_extraction("{Name: Asha}"),
            Err(ExtractionError::ParseError(_))
        ));
    }

    #[test]
    fn empty_object_is_valid() {
        assert!(parse_extraction("{}").unwrap().is_empty());
    }

    #[test]
    fn oversized_response_is_rejected() {
        let response = "x".repeat(MAX_RESPONSE_LENGTH + 1);
        assert!(matches!(
            parse_extraction(&response),
            Err(ExtractionError::TooLong { .. })
        ));
    }
}
