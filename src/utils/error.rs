use thiserror::Error;

#[derive(Error, Debug)]
pub enum BricksetError {
    #[error("Resource not found: {resource}")]
    ResourceNotFound { resource: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse resource {resource}: {source}")]
    ResourceParseError {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Query returned no records: {query}")]
    EmptyResult { query: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Load,
    Query,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl BricksetError {
    pub fn empty_result(query: impl Into<String>) -> Self {
        Self::EmptyResult {
            query: query.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ResourceNotFound { .. }
            | Self::IoError(_)
            | Self::ResourceParseError { .. }
            | Self::SerializationError(_) => ErrorCategory::Load,
            Self::EmptyResult { .. } => ErrorCategory::Query,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Query => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Load => ErrorSeverity::Critical,
        }
    }

    /// Process exit code used by the command-line front end.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ResourceNotFound { .. } => {
                "Check --data-dir and --resource, or omit --data-dir to use the bundled catalog"
            }
            Self::IoError(_) => "Check that the data file is readable",
            Self::ResourceParseError { .. } => {
                "The data file must be a JSON array of set objects with number, name and pieces"
            }
            Self::SerializationError(_) => "Retry without --json",
            Self::EmptyResult { .. } => "Try a different theme or a shorter substring",
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Check the configuration file path and syntax"
            }
            Self::InvalidConfigValueError { .. } => "Fix the configuration value and run again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ResourceNotFound { resource } => {
                format!("Could not find the catalog file '{}'", resource)
            }
            Self::ResourceParseError { resource, .. } => {
                format!("The catalog file '{}' is not valid", resource)
            }
            Self::EmptyResult { query } => format!("No sets matched: {}", query),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BricksetError>;
