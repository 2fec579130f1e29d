//! Wire records and the line classifier.
//!
//! The stream carries one JSON object per line, tagged by a `type` field,
//! interleaved with free-form "thinking" text from the model. [`classify`]
//! decodes a single line into the closed [`Record`] vocabulary or rejects it
//! silently; free text must never surface as an error, since it is an
//! expected part of the stream.

use serde::Deserialize;

use crate::models::Priority;

/// One decoded, tagged unit of structured input.
///
/// The vocabulary is closed: a line whose `type` names a variant below is a
/// record, anything else is free text. Unknown fields on a recognized record
/// are ignored, so producers may grow the schema without breaking older
/// consumers.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Record {
    /// Names the draft and optionally describes it.
    RootInit {
        name: String,
        #[serde(default)]
        description: Option<String>,
    },

    /// Opens a new container at the top level of the draft.
    Container {
        id: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
    },

    /// Adds an item to a previously announced container.
    #[serde(rename_all = "camelCase")]
    Item {
        id: String,
        container_id: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default, deserialize_with = "lenient_priority")]
        priority: Priority,
        #[serde(default, deserialize_with = "lenient_minutes")]
        estimated_minutes: Option<f64>,
    },

    /// Adds a sub-item to a previously announced item.
    ///
    /// The id is optional on the wire; the accumulator generates one when it
    /// is absent.
    #[serde(rename_all = "camelCase")]
    SubItem {
        #[serde(default)]
        id: Option<String>,
        item_id: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default, deserialize_with = "lenient_minutes")]
        estimated_minutes: Option<f64>,
    },

    /// Terminal record; ends the build.
    Complete {
        #[serde(default)]
        message: Option<String>,
    },
}

/// Classifies one line of stream output.
///
/// Returns `None` for anything that is not a recognized record: empty lines,
/// free-form text, malformed JSON, non-object values, and unknown `type`
/// discriminants. Pure and stateless; identical input always yields
/// identical output.
pub fn classify(line: &str) -> Option<Record> {
    let line = line.trim();
    // Cheap pre-filter so ordinary prose never reaches the JSON parser.
    if !(line.starts_with('{') && line.ends_with('}')) {
        return None;
    }
    serde_json::from_str(line).ok()
}

/// Accepts any JSON value for `priority`, normalizing unrecognized input to
/// [`Priority::None`].
fn lenient_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default())
}

/// Accepts any JSON value for an estimate, keeping only non-negative numbers.
fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|minutes| *minutes >= 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_root_init() {
        let record = classify(r#"{"type":"root-init","name":"Launch Plan"}"#);
        assert_eq!(
            record,
            Some(Record::RootInit {
                name: "Launch Plan".to_string(),
                description: None,
            })
        );
    }

    #[test]
    fn test_classify_container() {
        let record = classify(r#"{"type":"container","id":"c1","name":"Phase 1"}"#);
        assert_eq!(
            record,
            Some(Record::Container {
                id: "c1".to_string(),
                name: "Phase 1".to_string(),
                description: None,
            })
        );
    }

    #[test]
    fn test_classify_item_with_all_fields() {
        let line = r#"{"type":"item","id":"i1","containerId":"c1","name":"Draft spec","description":"Write it","priority":"high","estimatedMinutes":45}"#;
        let record = classify(line);
        assert_eq!(
            record,
            Some(Record::Item {
                id: "i1".to_string(),
                container_id: "c1".to_string(),
                name: "Draft spec".to_string(),
                description: Some("Write it".to_string()),
                priority: Priority::High,
                estimated_minutes: Some(45.0),
            })
        );
    }

    #[test]
    fn test_classify_sub_item_without_id() {
        let record = classify(r#"{"type":"sub-item","itemId":"i1","name":"Write intro"}"#);
        assert_eq!(
            record,
            Some(Record::SubItem {
                id: None,
                item_id: "i1".to_string(),
                name: "Write intro".to_string(),
                description: None,
                estimated_minutes: None,
            })
        );
    }

    #[test]
    fn test_classify_complete() {
        assert_eq!(
            classify(r#"{"type":"complete","message":"done"}"#),
            Some(Record::Complete {
                message: Some("done".to_string()),
            })
        );
        assert_eq!(
            classify(r#"{"type":"complete"}"#),
            Some(Record::Complete { message: None })
        );
    }

    #[test]
    fn test_free_text_is_not_a_record() {
        assert_eq!(classify("I am thinking about this..."), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
    }

    #[test]
    fn test_malformed_json_is_not_a_record() {
        assert_eq!(classify(r#"{"type":"container","id":"#), None);
        assert_eq!(classify("{not json}"), None);
        assert_eq!(classify("[1, 2, 3]"), None);
    }

    #[test]
    fn test_unknown_discriminant_is_not_a_record() {
        assert_eq!(classify(r#"{"type":"hologram","id":"x"}"#), None);
        assert_eq!(classify(r#"{"type":42}"#), None);
        assert_eq!(classify(r#"{"name":"no tag at all"}"#), None);
    }

    #[test]
    fn test_missing_required_field_is_not_a_record() {
        // An item without its container reference cannot be applied.
        assert_eq!(classify(r#"{"type":"item","id":"i1","name":"X"}"#), None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let record = classify(r#"{"type":"container","id":"c1","name":"X","color":"red"}"#);
        assert!(matches!(record, Some(Record::Container { .. })));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let record = classify("  {\"type\":\"root-init\",\"name\":\"X\"}  ");
        assert!(matches!(record, Some(Record::RootInit { .. })));
    }

    #[test]
    fn test_priority_normalizes_unrecognized_values() {
        let line = r#"{"type":"item","id":"i1","containerId":"c1","name":"X","priority":"urgent"}"#;
        let Some(Record::Item { priority, .. }) = classify(line) else {
            panic!("expected an item record");
        };
        assert_eq!(priority, Priority::None);

        // Non-string priorities normalize the same way.
        let line = r#"{"type":"item","id":"i1","containerId":"c1","name":"X","priority":3}"#;
        let Some(Record::Item { priority, .. }) = classify(line) else {
            panic!("expected an item record");
        };
        assert_eq!(priority, Priority::None);
    }

    #[test]
    fn test_negative_estimate_is_treated_as_absent() {
        let line = r#"{"type":"item","id":"i1","containerId":"c1","name":"X","estimatedMinutes":-5}"#;
        let Some(Record::Item {
            estimated_minutes, ..
        }) = classify(line)
        else {
            panic!("expected an item record");
        };
        assert_eq!(estimated_minutes, None);
    }
}
