//! Normalized text output: the rendering of the top-of-stack token

use super::registry::{FormatError, Formatter};
use crate::nest::parsing::Expression;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, expression: &Expression) -> Result<String, FormatError> {
        Ok(expression.render())
    }

    fn description(&self) -> &str {
        "Comma-separated rendering of the parsed expression"
    }
}
