//! Data models for the Guild Wars 2 API.
//!
//! Response bodies are returned as untyped JSON, so the models here are the
//! request side of the API:
//!
//! - [`primitives`] - Execution context, API version and callback types
//! - [`options`] - Per-request options and identifiers
//! - [`enums`] - Path-segment enumerations for the commerce endpoints

pub mod primitives;
pub mod options;
pub mod enums;

// Re-export commonly used types
pub use primitives::*;
pub use options::*;
pub use enums::*;
