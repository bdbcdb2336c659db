pub mod error;
pub mod vcf;

pub use error::{Result, SyncError};
