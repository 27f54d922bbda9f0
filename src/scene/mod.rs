//! JSON boundary model for canvas documents.

/// Serializable document/page/node definitions and the [`model::Region`] view.
pub mod model;
