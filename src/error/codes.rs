/// Error code registry for Eatsy
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Recipe validation errors
/// - 3000-3999: Registry errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;

    // Recipe validation errors (2000-2999)
    pub const RECIPE_INVALID: u16 = 2000;

    // Registry errors (3000-3999)
    pub const REGISTRY_NOT_FOUND: u16 = 3001;
    pub const REGISTRY_INTERNAL: u16 = 3002;

    // Other errors (9000-9999)
    pub const IO_ERROR: u16 = 9001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_GENERIC => "Configuration error",
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_INVALID_TOML => "Invalid TOML in configuration file",
        ErrorCode::RECIPE_INVALID => "Recipe failed validation",
        ErrorCode::REGISTRY_NOT_FOUND => "Recipe key not present in registry",
        ErrorCode::REGISTRY_INTERNAL => "Internal registry failure",
        ErrorCode::IO_ERROR => "I/O error",
        _ => "Unknown error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_have_descriptions() {
        for code in [
            ErrorCode::CONFIG_GENERIC,
            ErrorCode::CONFIG_NOT_FOUND,
            ErrorCode::CONFIG_INVALID_TOML,
            ErrorCode::RECIPE_INVALID,
            ErrorCode::REGISTRY_NOT_FOUND,
            ErrorCode::REGISTRY_INTERNAL,
            ErrorCode::IO_ERROR,
        ] {
            assert_ne!(describe_error_code(code), "Unknown error");
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(describe_error_code(4242), "Unknown error");
    }
}
