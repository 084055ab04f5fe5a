use crate::error::AppError;
use crate::theme::scheme::ColorScheme;
use crate::theme::types::ColorGroup;
use crate::validation::Validator;
use std::path::PathBuf;

/// Tiers a scheme must provide so palette resolution can never come up
/// empty in either mode: accent at 100 (dark) and 600 (light), neutrals at
/// 900 (dark surface/background), 100 (light surface), and 50 (light
/// background).
const REQUIRED_TIERS: [(ColorGroup, u16); 5] = [
    (ColorGroup::Accent1, 100),
    (ColorGroup::Accent1, 600),
    (ColorGroup::Neutral1, 50),
    (ColorGroup::Neutral1, 100),
    (ColorGroup::Neutral1, 900),
];

/// Validation errors specific to scheme operations
#[derive(Debug, Clone)]
pub enum SchemeValidationError {
    InvalidSchemeName { name: String, reason: String },
    InvalidSchemePath { path: String, reason: String },
    MissingRequiredTier { group: ColorGroup, tier: u16 },
}

impl SchemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            SchemeValidationError::InvalidSchemeName { name, reason } => {
                format!(
                    "Invalid scheme name: '{name}'\n\n\
                    Reason: {reason}\n\n\
                    Please use valid scheme names (alphanumeric, hyphens, underscores only)."
                )
            }
            SchemeValidationError::InvalidSchemePath { path, reason } => {
                format!(
                    "Invalid scheme path: '{path}'\n\n\
                    Reason: {reason}\n\n\
                    Please ensure the path exists and is accessible."
                )
            }
            SchemeValidationError::MissingRequiredTier { group, tier } => {
                format!(
                    "Incomplete color scheme: missing {group} tier {tier}\n\n\
                    Palette resolution needs this tier in one of the two modes.\n\
                    Please add it to the scheme file."
                )
            }
        }
    }
}

impl From<SchemeValidationError> for AppError {
    fn from(error: SchemeValidationError) -> Self {
        AppError::Theme(error.user_message())
    }
}

/// Validator for scheme names
pub struct SchemeNameValidator;

impl Validator<str> for SchemeNameValidator {
    type Error = SchemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(SchemeValidationError::InvalidSchemeName {
                name: input.to_string(),
                reason: "Name cannot be empty".to_string(),
            });
        }

        if input.len() > 50 {
            return Err(SchemeValidationError::InvalidSchemeName {
                name: input.to_string(),
                reason: "Name too long (max 50 characters)".to_string(),
            });
        }

        if !input
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(SchemeValidationError::InvalidSchemeName {
                name: input.to_string(),
                reason: "Name contains invalid characters (only alphanumeric, hyphens, and underscores allowed)".to_string(),
            });
        }

        if input.starts_with('-')
            || input.starts_with('_')
            || input.ends_with('-')
            || input.ends_with('_')
        {
            return Err(SchemeValidationError::InvalidSchemeName {
                name: input.to_string(),
                reason: "Name cannot start or end with hyphens or underscores".to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for scheme file paths
pub struct SchemePathValidator;

impl Validator<PathBuf> for SchemePathValidator {
    type Error = SchemeValidationError;

    fn validate(&self, input: &PathBuf) -> Result<(), Self::Error> {
        if !input.exists() {
            return Err(SchemeValidationError::InvalidSchemePath {
                path: input.display().to_string(),
                reason: "Path does not exist".to_string(),
            });
        }

        if !input.is_file() {
            return Err(SchemeValidationError::InvalidSchemePath {
                path: input.display().to_string(),
                reason: "Path is not a file".to_string(),
            });
        }

        if input.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(SchemeValidationError::InvalidSchemePath {
                path: input.display().to_string(),
                reason: "Scheme files must have a .toml extension".to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for loaded scheme content
pub struct SchemeValidator;

impl Validator<ColorScheme> for SchemeValidator {
    type Error = SchemeValidationError;

    fn validate(&self, input: &ColorScheme) -> Result<(), Self::Error> {
        for (group, tier) in REQUIRED_TIERS {
            if input.color(group, tier).is_none() {
                return Err(SchemeValidationError::MissingRequiredTier { group, tier });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::scheme::DEFAULT_ACCENT;

    #[test]
    fn test_scheme_name_validator() {
        let validator = SchemeNameValidator;

        // Valid names
        assert!(validator.validate("valid_scheme").is_ok());
        assert!(validator.validate("scheme-name").is_ok());
        assert!(validator.validate("scheme123").is_ok());

        // Invalid names
        assert!(validator.validate("").is_err());
        assert!(validator.validate("_invalid").is_err());
        assert!(validator.validate("invalid-").is_err());
        assert!(validator.validate("invalid@scheme").is_err());
        assert!(validator.validate(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_scheme_validator_accepts_derived_scheme() {
        let validator = SchemeValidator;
        assert!(validator.validate(&ColorScheme::derive(DEFAULT_ACCENT)).is_ok());
    }

    #[test]
    fn test_scheme_validator_rejects_empty_scheme() {
        let validator = SchemeValidator;
        let result = validator.validate(&ColorScheme::default());
        assert!(matches!(
            result,
            Err(SchemeValidationError::MissingRequiredTier { .. })
        ));
    }
}
