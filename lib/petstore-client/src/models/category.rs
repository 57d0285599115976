use serde::{Deserialize, Serialize};

/// A category a pet can belong to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
