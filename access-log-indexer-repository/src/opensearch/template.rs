//! Access log index template.
//!
//! This module defines the index template registered before ingestion. The
//! template applies to any index matching the access log name patterns and
//! carries the field type coercions the raw log text needs.

use serde_json::{json, Value};

/// The name of the concrete index documents are written into.
pub const DEFAULT_INDEX_NAME: &str = "access-logs-index-1";

/// The name the template is registered under.
pub const DEFAULT_TEMPLATE_NAME: &str = "access_logs_template";

/// Date format of the `requestdatetime` field.
///
/// This is the textual timestamp layout the log grammar extracts, e.g.
/// `06/Feb/2019:00:00:38 +0000`.
pub const TIMESTAMP_FORMAT: &str = "dd/MMM/yyyy:HH:mm:ss Z";

/// Get the template body for the access log index.
///
/// The template coerces:
/// - **remoteip** to the `ip` type, so address range queries work
/// - **requestdatetime** to `date` with [`TIMESTAMP_FORMAT`], matching the
///   timestamp text the grammar extracts
///
/// All other fields keep the store's default text mapping.
pub fn access_log_template() -> Value {
    json!({
        "index_patterns": ["access-log-index*", "access-logs-index*"],
        "settings": {
            "number_of_shards": 1
        },
        "mappings": {
            "properties": {
                "remoteip": {
                    "type": "ip"
                },
                "requestdatetime": {
                    "type": "date",
                    "format": TIMESTAMP_FORMAT
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_structure() {
        let template = access_log_template();

        // Check patterns cover the default index name
        let patterns = template["index_patterns"].as_array().unwrap();
        assert!(patterns
            .iter()
            .any(|p| DEFAULT_INDEX_NAME.starts_with(p.as_str().unwrap().trim_end_matches('*'))));

        // Check settings exist
        assert_eq!(template["settings"]["number_of_shards"], 1);

        // Check typed fields
        assert_eq!(template["mappings"]["properties"]["remoteip"]["type"], "ip");
        assert_eq!(
            template["mappings"]["properties"]["requestdatetime"]["type"],
            "date"
        );
        assert_eq!(
            template["mappings"]["properties"]["requestdatetime"]["format"],
            TIMESTAMP_FORMAT
        );
    }

    #[test]
    fn test_default_names() {
        assert_eq!(DEFAULT_INDEX_NAME, "access-logs-index-1");
        assert_eq!(DEFAULT_TEMPLATE_NAME, "access_logs_template");
    }
}
