//! Knobs that change how edits treat missing structure.

use serde::{Deserialize, Serialize};

/// Editing options shared by every operation.
///
/// The default fails closed: a path whose parent does not exist is an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOptions {
    /// Create missing object keys along the path as empty objects, and a
    /// missing append target as a new array. Scalars are never replaced and
    /// arrays never grow implicitly.
    #[serde(default)]
    pub create_missing_parents: bool,
}

impl EditOptions {
    /// Options with create-on-demand enabled.
    pub fn create_missing() -> Self {
        Self {
            create_missing_parents: true,
        }
    }
}
