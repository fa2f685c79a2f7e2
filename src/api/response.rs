//! Response envelope
//!
//! `{"status":"ok","data":...}` or `{"status":"error","code":...,"message":...}`,
//! always a single line.

use serde::Serialize;
use serde_json::Value;

use super::errors::ApiError;

const ENCODE_FAILED: &str = r#"{"status":"error","code":"HYPERLOCAL_SERIALIZATION_FAILED","message":"Failed to encode response"}"#;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Ok { data: Value },
    Error { code: String, message: String },
}

impl Response {
    pub fn success(data: Value) -> Self {
        Response::Ok { data }
    }

    pub fn error(err: &ApiError) -> Self {
        Response::Error {
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| ENCODE_FAILED.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Response::Ok { .. })
    }

    /// Error code, if this is an error response
    pub fn code(&self) -> Option<&str> {
        match self {
            Response::Ok { .. } => None,
            Response::Error { code, .. } => Some(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope() {
        let resp = Response::success(json!({"rows": [{"area_id": "LDH_001"}], "empty": false}));
        assert!(resp.is_success());
        assert_eq!(resp.code(), None);
        assert_eq!(
            resp.to_json(),
            r#"{"status":"ok","data":{"empty":false,"rows":[{"area_id":"LDH_001"}]}}"#
        );
    }

    #[test]
    fn test_error_envelope() {
        let resp = Response::error(&ApiError::unknown_area("PTA_404"));
        assert_eq!(resp.code(), Some("HYPERLOCAL_UNKNOWN_AREA"));

        let parsed: Value = serde_json::from_str(&resp.to_json()).unwrap();
        assert_eq!(parsed["status"], "error");
        assert_eq!(parsed["message"], "Unknown area_id: PTA_404");
    }

    #[test]
    fn test_envelope_is_one_line() {
        let resp = Response::success(json!({"csv": "area_id\nLDH_001\n"}));
        assert!(!resp.to_json().contains('\n'));
    }
}
