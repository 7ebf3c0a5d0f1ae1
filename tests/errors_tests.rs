use shortlink_redirector::errors::{RedirectorError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_backend_transport_error() {
        let error = RedirectorError::backend_transport("connection refused");

        assert!(matches!(error, RedirectorError::BackendTransport(_)));
        assert_eq!(error.code(), "E001");
        assert!(error.to_string().contains("Backend Transport Error"));
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_backend_config_error() {
        let error = RedirectorError::backend_config("base_url missing");

        assert_eq!(error.code(), "E003");
        assert_eq!(error.message(), "base_url missing");
        assert_eq!(
            error.format_simple(),
            "Backend Configuration Error: base_url missing"
        );
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            RedirectorError::backend_transport("x"),
            RedirectorError::backend_response("x"),
            RedirectorError::backend_config("x"),
            RedirectorError::config("x"),
            RedirectorError::file_operation("x"),
            RedirectorError::serialization("x"),
            RedirectorError::template("x"),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_colored_format_contains_code_and_message() {
        let error = RedirectorError::template("missing");
        let colored = error.format_colored();
        assert!(colored.contains("E007"));
        assert!(colored.contains("missing"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error: RedirectorError = io_error.into();
        assert!(matches!(error, RedirectorError::FileOperation(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let error: RedirectorError = json_error.into();
        assert!(matches!(error, RedirectorError::Serialization(_)));
    }

    #[test]
    fn test_from_ureq_status_error() {
        let error: RedirectorError = ureq::Error::StatusCode(502).into();
        assert!(matches!(error, RedirectorError::BackendResponse(_)));
        assert!(error.message().contains("502"));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }

        let error = read_missing().unwrap_err();
        assert!(matches!(error, RedirectorError::FileOperation(_)));
        assert!(error.source().is_none());
    }
}
