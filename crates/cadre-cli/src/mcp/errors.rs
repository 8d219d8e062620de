//! Error handling utilities for MCP server

use cadre_core::WizardError;
use rmcp::ErrorData;

/// Convert a wizard error into an MCP error.
///
/// Rejected intents become `invalid_params` so the client can correct the
/// request; file and encoding failures are reported as internal errors.
pub fn to_mcp_error(message: &str, error: &WizardError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_caller_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_caller_errors_are_invalid_params() {
        let err = to_mcp_error("Failed to select persona", &WizardError::PersonaNotFound { id: 9 });
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Failed to select persona: Persona with ID 9 not found");
    }

    #[test]
    fn test_file_errors_are_internal() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = to_mcp_error(
            "Failed to load",
            &WizardError::FileSystem {
                path: "catalog.json".into(),
                source,
            },
        );
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
