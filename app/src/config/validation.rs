use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid suggestion_timeout_secs: {configured} (min: {min_limit}, max: {max_limit})")]
    SuggestionTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Unknown search provider: {id}")]
    UnknownProvider { id: String },
    #[error("Invalid accent color '{value}': {reason}")]
    InvalidAccentColor { value: String, reason: String },
    #[error("Invalid suggestions base URL '{url}': {reason}")]
    InvalidSuggestionsBase { url: String, reason: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::SuggestionTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Suggestion timeout out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update suggestion_timeout_secs in config.toml to a value between {min_limit} and {max_limit}."
                )
            }
            ConfigValidationError::UnknownProvider { id } => {
                format!(
                    "Unknown search provider!\n\n\
                    Your configured value: {id}\n\n\
                    Please set provider in the [search] section of config.toml \
                    to one of the registered provider ids (run `hearth providers`)."
                )
            }
            ConfigValidationError::InvalidAccentColor { value, reason } => {
                format!(
                    "Invalid accent color!\n\n\
                    Your configured value: {value}\n\
                    Reason: {reason}\n\n\
                    Please set accent in the [theme] section of config.toml \
                    to a hex color such as #2196f3."
                )
            }
            ConfigValidationError::InvalidSuggestionsBase { url, reason } => {
                format!(
                    "Invalid suggestions base URL!\n\n\
                    Your configured value: {url}\n\
                    Reason: {reason}\n\n\
                    Please update suggestions_base in the [search] section of config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
