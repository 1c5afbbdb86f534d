use crate::domain::foundation::{ResourceTypeId, Timestamp};
use serde::{Deserialize, Serialize};

/// Kind of resource, e.g. book, video, course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceType {
    id: ResourceTypeId,
    code: String,
    display_name: String,
    is_active: Option<bool>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ResourceType {
    pub fn new(id: ResourceTypeId, code: impl Into<String>, display_name: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            code: code.into(),
            display_name: display_name.into(),
            is_active: Some(true),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &ResourceTypeId {
        &self.id
    }

    /// Stable machine code, e.g. "book".
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Unset counts as active.
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn rename(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
        self.updated_at = Timestamp::now();
    }

    pub fn deactivate(&mut self) {
        self.is_active = Some(false);
        self.updated_at = Timestamp::now();
    }
}
