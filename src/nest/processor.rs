//! Line processing API
//!
//! A [`Processor`] ties one [`NestConfig`] to a parser and a format registry and turns one
//! raw input line into one output string:
//!
//! ```rust,ignore
//! use nest::nest::config::load_defaults;
//! use nest::nest::processor::Processor;
//!
//! let processor = Processor::new(load_defaults()?)?;
//! assert_eq!(processor.process("(a (b c) d)\n")?, "(a, (b, c), d)");
//! ```

use crate::nest::config::NestConfig;
use crate::nest::formats::{FormatError, FormatRegistry};
use crate::nest::parsing::{ParseError, Parser};
use std::fmt;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    Parse(ParseError),
    Format(FormatError),
    IoError(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::Parse(err) => write!(f, "{}", err),
            ProcessingError::Format(err) => write!(f, "{}", err),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl From<ParseError> for ProcessingError {
    fn from(err: ParseError) -> Self {
        ProcessingError::Parse(err)
    }
}

impl From<FormatError> for ProcessingError {
    fn from(err: FormatError) -> Self {
        ProcessingError::Format(err)
    }
}

impl From<std::io::Error> for ProcessingError {
    fn from(err: std::io::Error) -> Self {
        ProcessingError::IoError(err.to_string())
    }
}

/// Parses and formats single lines according to a configuration
pub struct Processor {
    config: NestConfig,
    parser: Parser,
    formats: FormatRegistry,
}

impl Processor {
    /// Create a processor with the built-in formats.
    ///
    /// Fails if the configured output format is not registered.
    pub fn new(config: NestConfig) -> Result<Self, ProcessingError> {
        Self::with_registry(config, FormatRegistry::with_defaults())
    }

    pub fn with_registry(
        config: NestConfig,
        formats: FormatRegistry,
    ) -> Result<Self, ProcessingError> {
        if !formats.has(&config.output.format) {
            return Err(ProcessingError::InvalidFormat(config.output.format.clone()));
        }
        let parser = Parser::with_mode(config.parsing.mode);
        Ok(Processor {
            config,
            parser,
            formats,
        })
    }

    /// Trim one raw line, parse it and serialize it with the configured format
    pub fn process(&self, line: &str) -> Result<String, ProcessingError> {
        let expression = self.parser.parse(line.trim())?;
        let output = self
            .formats
            .serialize(&expression, &self.config.output.format)?;
        Ok(output)
    }

    /// Read exactly one line from `reader` and process it
    ///
    /// End of input is treated as an empty line. Bytes that are not valid UTF-8 are
    /// replaced with U+FFFD rather than rejected.
    pub fn process_line_from<R: BufRead>(&self, reader: &mut R) -> Result<String, ProcessingError> {
        let mut line = Vec::new();
        reader.read_until(b'\n', &mut line)?;
        self.process(&String::from_utf8_lossy(&line))
    }
}
