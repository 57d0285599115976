use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Category, Tag};

/// A pet in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Unique identifier, assigned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// The category the pet belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// The pet's name.
    pub name: String,
    /// URLs of the pet's photos.
    pub photo_urls: Vec<String>,
    /// Free-form tags attached to the pet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Availability status in the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PetStatus>,
}

impl Pet {
    /// Creates a pet from its required fields, leaving the rest unset.
    pub fn new(name: impl Into<String>, photo_urls: Vec<String>) -> Self {
        Self {
            id: None,
            category: None,
            name: name.into(),
            photo_urls,
            tags: None,
            status: None,
        }
    }
}

/// Availability status of a pet in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    /// Ready to be sold.
    Available,
    /// Reserved, sale in progress.
    Pending,
    /// No longer available.
    Sold,
}

impl PetStatus {
    /// The wire-format spelling of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
