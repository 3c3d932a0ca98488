//! Value objects representing immutable domain concepts.

pub mod subject_id;

// Re-export commonly used types
pub use subject_id::{SubjectId, SUBJECT_ID_LEN};
