use alloc::string::String;
use serde::{Deserialize, Serialize};

/// A pre-seeded question category.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: i32,
    /// Human-readable label (e.g. `Science`).
    #[serde(rename = "type")]
    pub kind: String,
}
