//! Custom extractors for Axum handlers.
//!
//! These standardize boundary validation: identifiers are checked before any
//! store dispatch, and JSON bodies are validated as they are deserialized.

pub mod object_id;
pub mod validated_json;

pub use object_id::ObjectIdPath;
pub use validated_json::ValidatedJson;
