pub mod domain;
pub mod dto;
pub mod error;
pub mod extract;
pub mod text;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use extract::{extract_fields, scan_text, ExtractOptions, ExtractRules, KnownValues};
pub use text::{split_lines, OcrText};
