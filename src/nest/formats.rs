//! Output format implementations for parsed expressions
//!
//! - text: the normalized comma-separated rendering
//! - json, yaml: structured dumps of the final stack
//! - treeviz: one line per token

pub mod registry;
pub mod serialized;
pub mod text;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use text::TextFormatter;
pub use treeviz::{to_treeviz_str, TreevizFormatter};
