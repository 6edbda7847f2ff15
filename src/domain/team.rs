//! Leadership and team member profiles.

use serde::{Deserialize, Serialize};

use super::{
    default_true, null_as_default, null_as_true, optional_email, require, Entity, Ordering,
    ValidationError,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_index: i32,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub active: bool,
}

impl Entity for TeamMember {
    const TABLE: &'static str = "team_members";
    const ORDERING: Ordering = Ordering::Position;

    fn validate(&mut self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("position", &self.position)?;
        optional_email("email", self.email.as_deref())
    }
}
