use reclami_core::ComplaintRecord;

use crate::{FailureKind, SearchError};

/// Decode a search response body into records.
///
/// The body must be a JSON array; the decoder's message is kept verbatim.
pub fn decode_records(body: &str) -> Result<Vec<ComplaintRecord>, SearchError> {
    serde_json::from_str(body).map_err(|err| SearchError::new(FailureKind::ParseFailed, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_array_is_no_records() {
        assert_eq!(decode_records("[]").unwrap(), Vec::new());
    }

    #[test]
    fn object_body_is_a_parse_failure() {
        let err = decode_records(r#"{"error":"nope"}"#).unwrap_err();
        assert_eq!(err.kind, FailureKind::ParseFailed);
        assert!(!err.message.is_empty());
    }

    #[test]
    fn html_body_is_a_parse_failure() {
        let err = decode_records("<html>502 Bad Gateway</html>").unwrap_err();
        assert_eq!(err.kind, FailureKind::ParseFailed);
        assert_eq!(err.to_string(), err.message);
    }
}
