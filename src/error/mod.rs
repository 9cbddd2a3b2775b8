use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for the Eatsy recipe service
#[derive(Error, Debug)]
pub enum EatsyError {
    /// Input violates a recipe invariant. The registry is left unchanged.
    #[error("[E2000] Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// The referenced recipe key is not present in the registry
    #[error("[E3001] Recipe not found: {0}")]
    NotFound(String),

    #[error("[E3002] Internal error: {0}")]
    Internal(String),

    #[error("[E1000] Configuration error: {0}")]
    Config(String),

    #[error("[E9001] IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("[E1002] TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl EatsyError {
    /// Create an invalid recipe error
    pub fn invalid_recipe(message: impl Into<String>) -> Self {
        Self::InvalidRecipe(message.into())
    }

    /// Create a not found error for the given key
    pub fn not_found(key: impl std::fmt::Display) -> Self {
        Self::NotFound(key.to_string())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidRecipe(_) => ErrorCode::RECIPE_INVALID,
            Self::NotFound(_) => ErrorCode::REGISTRY_NOT_FOUND,
            Self::Internal(_) => ErrorCode::REGISTRY_INTERNAL,
            Self::Config(_) => ErrorCode::CONFIG_GENERIC,
            Self::Io(err) if err.kind() == std::io::ErrorKind::NotFound => {
                ErrorCode::CONFIG_NOT_FOUND
            }
            Self::Io(_) => ErrorCode::IO_ERROR,
            Self::Toml(_) => ErrorCode::CONFIG_INVALID_TOML,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Toml(_) => 2,
            Self::InvalidRecipe(_) => 3,
            Self::NotFound(_) => 4,
            Self::Io(_) => 5,
            Self::Internal(_) => 1,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidRecipe(message) => format!("Recipe rejected: {}", message),
            Self::NotFound(key) => format!("No recipe with key '{}'", key),
            Self::Internal(message) => format!("Something went wrong: {}", message),
            Self::Config(message) => format!("Configuration problem: {}", message),
            Self::Io(err) => format!("{}: {}", describe_error_code(self.code()), err),
            Self::Toml(err) => format!("Configuration file is not valid TOML: {}", err),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        format!("{:#}", self)
    }
}

/// Type alias for Results using EatsyError
pub type Result<T> = std::result::Result<T, EatsyError>;
