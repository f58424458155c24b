//! Wire types for the hosted backend's REST interface.

use serde::Deserialize;

/// Error body returned alongside non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl ApiError {
    /// One-line description for error messages
    pub fn describe(&self) -> String {
        match (&self.code, &self.details) {
            (Some(code), Some(details)) => format!("{} ({}): {}", self.message, code, details),
            (Some(code), None) => format!("{} ({})", self.message, code),
            (None, Some(details)) => format!("{}: {}", self.message, details),
            (None, None) => self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_describe() {
        let err: ApiError = serde_json::from_str(
            r#"{"code": "42501", "message": "permission denied", "details": null, "hint": null}"#,
        )
        .unwrap();
        assert_eq!(err.describe(), "permission denied (42501)");
    }
}
