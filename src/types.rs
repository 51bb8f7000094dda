//! Response envelope types.
//!
//! Entities are opaque: the library returns whatever JSON the server sent
//! and never models the RESO field schema. [`ODataEnvelope`] is an optional
//! convenience for callers who want the standard collection envelope split
//! into its parts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

/// The standard OData collection envelope: context, optional count, and the
/// `value` array of opaque entities.
#[derive(Serialize, Deserialize, Debug)]
pub struct ODataEnvelope {
    #[serde(rename = "@odata.context")]
    pub context: Option<String>,
    /// Present only when the query set `$count=true`.
    #[serde(rename = "@odata.count")]
    pub count: Option<i64>,
    #[serde(default)]
    pub value: Vec<Value>,
}

impl ODataEnvelope {
    /// Splits a decoded collection response into its envelope parts.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_full_envelope() {
        let envelope = ODataEnvelope::from_value(json!({
            "@odata.context": "https://resoapi.utahrealestate.com/reso/odata/$metadata#Property",
            "@odata.count": 1542,
            "value": [
                {"ListingKey": "12345678", "ListPrice": 450000},
                {"ListingKey": "87654321", "ListPrice": 325000}
            ]
        }))
        .unwrap();
        assert_eq!(envelope.count, Some(1542));
        assert_eq!(envelope.value.len(), 2);
        assert_eq!(envelope.value[0]["ListingKey"], "12345678");
    }

    #[test]
    fn count_and_context_are_optional() {
        let envelope = ODataEnvelope::from_value(json!({
            "value": []
        }))
        .unwrap();
        assert_eq!(envelope.context, None);
        assert_eq!(envelope.count, None);
        assert!(envelope.value.is_empty());
    }

    #[test]
    fn missing_value_array_defaults_to_empty() {
        let envelope = ODataEnvelope::from_value(json!({})).unwrap();
        assert!(envelope.value.is_empty());
    }

    #[test]
    fn non_object_input_is_a_decode_error() {
        let result = ODataEnvelope::from_value(json!("not an envelope"));
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
