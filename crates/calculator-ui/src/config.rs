//! Page configuration
//!
//! Element ids, classes and the error text live here so the mock DOM and the
//! browser binding agree on one layout. Every field has a default matching
//! the shipped page, so a partial JSON document is enough to override one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Operation;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for this config
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the page cannot use
    #[error("invalid config field `{field}`: {message}")]
    Invalid {
        /// Field name
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

/// Element ids, labels and classes of the calculator page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Id of the first operand input
    pub first_input_id: String,
    /// Id of the second operand input
    pub second_input_id: String,
    /// Id of the output region
    pub output_id: String,
    /// Class carried by every button
    pub button_class: String,
    /// Extra class carried by the clear button
    pub clear_class: String,
    /// Visible label of the clear button
    pub clear_label: String,
    /// Text written to the output on a missing or invalid operand
    pub error_text: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            first_input_id: "input1".to_string(),
            second_input_id: "input2".to_string(),
            output_id: "output".to_string(),
            button_class: "btn".to_string(),
            clear_class: "clear-button".to_string(),
            clear_label: "c".to_string(),
            error_text: "error".to_string(),
        }
    }
}

impl UiConfig {
    /// Creates the default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the error text
    #[must_use]
    pub fn with_error_text(mut self, text: &str) -> Self {
        self.error_text = text.to_string();
        self
    }

    /// Loads a config from JSON and validates it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config as pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every id and label is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("first_input_id", &self.first_input_id),
            ("second_input_id", &self.second_input_id),
            ("output_id", &self.output_id),
            ("clear_label", &self.clear_label),
            ("error_text", &self.error_text),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    message: "must not be empty".to_string(),
                });
            }
        }
        if self.first_input_id == self.second_input_id {
            return Err(ConfigError::Invalid {
                field: "second_input_id",
                message: format!("duplicates first_input_id {:?}", self.first_input_id),
            });
        }
        if self.output_id == self.first_input_id || self.output_id == self.second_input_id {
            return Err(ConfigError::Invalid {
                field: "output_id",
                message: format!("{:?} is already an input id", self.output_id),
            });
        }
        // Clear is located by its label; it must not match an operator
        if let Some(op) = Operation::ALL
            .into_iter()
            .find(|op| op.symbol() == self.clear_label)
        {
            return Err(ConfigError::Invalid {
                field: "clear_label",
                message: format!("{:?} is the label of the {} button", self.clear_label, op.name()),
            });
        }
        Ok(())
    }
}
