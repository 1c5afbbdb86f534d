use crate::domain::foundation::{Timestamp, TopicId};
use serde::{Deserialize, Serialize};

/// Subject a resource can be tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    id: TopicId,
    name: String,
    color: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Topic {
    pub fn new(id: TopicId, name: impl Into<String>, color: Option<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            name: name.into(),
            color,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &TopicId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display color, e.g. "#3b82f6".
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Timestamp::now();
    }

    pub fn recolor(&mut self, color: Option<String>) {
        self.color = color;
        self.updated_at = Timestamp::now();
    }
}
