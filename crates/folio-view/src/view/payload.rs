use serde::{Deserialize, Serialize};

/// Content shown in the project detail overlay
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPayload {
    /// Element id of the project card, also the `project` query value
    pub id: String,
    pub title: String,
    pub description: String,
    /// Image source for the overlay hero image
    pub image_ref: String,
    /// Outbound link for the project
    pub link: String,
}

impl ProjectPayload {
    /// Create a payload with only an id set
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}
