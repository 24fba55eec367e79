//! Structured dumps of the final working stack (JSON and YAML)
//!
//! Both formats serialize the whole stack, bottom first, not only the top token, so stray
//! markers and leftover atoms from malformed input stay visible.

use super::registry::{FormatError, Formatter};
use crate::nest::parsing::Expression;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, expression: &Expression) -> Result<String, FormatError> {
        serde_json::to_string_pretty(expression.stack())
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON token tree of the final stack"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, expression: &Expression) -> Result<String, FormatError> {
        serde_yaml::to_string(expression.stack())
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML token tree of the final stack"
    }
}
