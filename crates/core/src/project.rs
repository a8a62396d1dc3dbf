//! Project documents and the listing filter.

use serde::{Deserialize, Serialize};

use crate::id::DocumentId;

/// The full field set of a project document.
///
/// This doubles as the create payload and the full-replace update payload:
/// a `PUT` overwrites exactly these fields, and any extra fields a caller
/// sends are dropped by serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    pub category: String,
    pub creator_email: String,
    pub creator_name: String,
    pub creator_photo_url: String,
    pub difficulty_level: String,
    pub due_date: String,
    pub project_description: String,
    pub project_thumbnail: String,
    pub project_title: String,
    pub requirements: String,
    pub total_marks: i32,
}

/// A stored project: store-assigned id plus its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(flatten)]
    pub fields: ProjectFields,
}

/// Multi-value filter over the project listing.
///
/// Each axis is a set of accepted values for one field; a document matches
/// when, for every axis present, its field value is one of the listed
/// values. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub difficulty: Option<Vec<String>>,
    pub category: Option<Vec<String>>,
}

impl ProjectFilter {
    /// Build a filter from raw query values, splitting each on `&`.
    ///
    /// `difficulty=Easy&Medium` (URL-encoded by the caller) becomes the
    /// set {Easy, Medium}. An absent axis imposes no constraint.
    pub fn from_query(difficulty: Option<&str>, category: Option<&str>) -> Self {
        Self {
            difficulty: difficulty.map(split_values),
            category: category.map(split_values),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.difficulty.is_none() && self.category.is_none()
    }

    /// Whether a document's fields satisfy every axis of this filter.
    pub fn matches(&self, fields: &ProjectFields) -> bool {
        let axis_matches = |axis: &Option<Vec<String>>, value: &str| {
            axis.as_ref()
                .map_or(true, |accepted| accepted.iter().any(|v| v == value))
        };
        axis_matches(&self.difficulty, &fields.difficulty_level)
            && axis_matches(&self.category, &fields.category)
    }
}

fn split_values(raw: &str) -> Vec<String> {
    raw.split('&').map(str::to_string).collect()
}
