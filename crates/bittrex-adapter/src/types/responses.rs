/*
[INPUT]:  Raw JSON response bodies from the exchange
[OUTPUT]: Typed response envelope shared by every endpoint
[POS]:    Data layer - response envelope definition
[UPDATE]: When the exchange changes its envelope format
*/

use serde::{Deserialize, Serialize};

/// Envelope wrapping every v1.1 response.
///
/// The client returns this verbatim and never inspects `success` or
/// `message`; callers decide how to treat application-level failures.
/// `result` is `null` on most error responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Consume the envelope, yielding the payload on `success: true`.
    ///
    /// Convenience for callers that want an error instead of inspecting
    /// the envelope by hand. `success: true` with a `null` result maps to
    /// `None`.
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.result)
        } else {
            Err(self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success_into_result() {
        let response = ApiResponse {
            success: true,
            message: String::new(),
            result: Some(42),
        };
        assert_eq!(response.into_result(), Ok(Some(42)));
    }

    #[test]
    fn test_envelope_failure_into_result() {
        let response: ApiResponse<i32> = ApiResponse {
            success: false,
            message: "INVALID_MARKET".to_string(),
            result: None,
        };
        assert_eq!(response.into_result(), Err("INVALID_MARKET".to_string()));
    }

    #[test]
    fn test_envelope_decodes_without_message() {
        let response: ApiResponse<i32> =
            serde_json::from_str(r#"{"success":true,"result":7}"#).expect("decode");
        assert!(response.success);
        assert_eq!(response.message, "");
        assert_eq!(response.result, Some(7));
    }
}
