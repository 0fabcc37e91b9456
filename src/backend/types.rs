use crate::config::Endpoint;
use crate::models::Property;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {endpoint:?} endpoint failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Accepted shapes of the list endpoint's response. Rows stay raw so each
/// one is decoded on its own.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse {
    Envelope { properties: Vec<Value> },
    Bare(Vec<Value>),
}

impl ListResponse {
    pub fn into_rows(self) -> Vec<Value> {
        match self {
            Self::Envelope { properties } | Self::Bare(properties) => properties,
        }
    }
}

/// Body of a delete call
#[derive(Debug, Serialize)]
pub struct DeleteRequest<'a> {
    pub id: &'a str,
}

/// Decode a list response body.
///
/// Bytes that are not JSON at all are an error, so callers keep whatever they
/// already had. Well-formed JSON that matches neither accepted shape decodes to
/// an empty list. Rows that do not decode as a property are skipped.
pub fn decode_list(body: &[u8]) -> Result<Vec<Property>, BackendError> {
    let value: Value = serde_json::from_slice(body)?;

    let rows = match ListResponse::deserialize(&value) {
        Ok(response) => response.into_rows(),
        Err(e) => {
            warn!("Unexpected response format ({}): {}", e, value);
            return Ok(Vec::new());
        }
    };

    let total = rows.len();
    let properties: Vec<Property> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(i, row)| match serde_json::from_value::<Property>(row) {
            Ok(property) => Some(property),
            Err(e) => {
                warn!("Skipping row {}: {}", i, e);
                None
            }
        })
        .collect();

    if properties.len() < total {
        warn!("Kept {} of {} rows", properties.len(), total);
    }
    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RECORD: &str = r#"{"id":"PROP001","title":"Lake House","type":"villa","location":"Pune","price":52000000,"status":"available","bedrooms":4,"bathrooms":3,"area":3200,"description":"","features":"Garden","availableFrom":"","isRental":false}"#;

    #[test]
    fn decodes_envelope_shape() {
        let body = format!(r#"{{"properties":[{RECORD}],"count":1}}"#);
        let properties = decode_list(body.as_bytes()).unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].id, "PROP001");
    }

    #[test]
    fn decodes_bare_array() {
        let body = format!("[{RECORD},{RECORD}]");
        let properties = decode_list(body.as_bytes()).unwrap();
        assert_eq!(properties.len(), 2);
    }

    #[test]
    fn other_shapes_become_empty() {
        assert!(decode_list(br#"{"message":"Workflow was started"}"#).unwrap().is_empty());
        assert!(decode_list(br#"{"properties":"none"}"#).unwrap().is_empty());
        assert!(decode_list(b"42").unwrap().is_empty());
    }

    #[test]
    fn loose_rows_decode_and_broken_rows_are_skipped() {
        let body = format!(
            r#"{{"properties":[
                {RECORD},
                {{"id":"PROP002","title":"Old Mill","type":"Villa","location":"Nashik","description":null,"isRental":"false"}},
                {{"id":"PROP003","title":"No Type"}},
                {{"id":"PROP004","type":"commercial","availableFrom":20250101}}
            ]}}"#
        );

        let properties = decode_list(body.as_bytes()).unwrap();
        let ids: Vec<&str> = properties.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["PROP001", "PROP002", "PROP004"]);
        assert_eq!(properties[1].description, "");
        assert!(!properties[1].is_rental);
        assert_eq!(properties[2].available_from, "20250101");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            decode_list(b"<html>502 Bad Gateway</html>"),
            Err(BackendError::Decode(_))
        ));
    }

    #[test]
    fn delete_body_carries_only_the_id() {
        let body = serde_json::to_string(&DeleteRequest { id: "PROP007" }).unwrap();
        assert_eq!(body, r#"{"id":"PROP007"}"#);
    }
}
