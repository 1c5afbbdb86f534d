//! LearningResource aggregate.
//!
//! A resource is something the learner intends to work through: a book, a
//! course, an article. It belongs to one resource type and one or more
//! topics, referenced by id only.

use super::duration::Duration;
use super::levels::{Difficulty, EnergyLevel, ResourceStatus};
use crate::domain::foundation::{ResourceId, ResourceTypeId, Timestamp, TopicId};
use serde::{Deserialize, Serialize};

/// Values for a resource that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLearningResource {
    pub title: String,
    pub url: Option<String>,
    pub type_id: ResourceTypeId,
    pub topic_ids: Vec<TopicId>,
    pub difficulty: Difficulty,
    pub estimated_duration: Duration,
    pub energy_level: EnergyLevel,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    id: ResourceId,
    title: String,
    url: Option<String>,
    type_id: ResourceTypeId,
    topic_ids: Vec<TopicId>,
    difficulty: Difficulty,
    estimated_duration: Duration,
    energy_level: EnergyLevel,
    status: ResourceStatus,
    last_viewed: Option<Timestamp>,
    notes: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl LearningResource {
    /// Creates a pending resource.
    pub fn new(id: ResourceId, fields: NewLearningResource) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            title: fields.title,
            url: fields.url,
            type_id: fields.type_id,
            topic_ids: fields.topic_ids,
            difficulty: fields.difficulty,
            estimated_duration: fields.estimated_duration,
            energy_level: fields.energy_level,
            status: ResourceStatus::Pending,
            last_viewed: None,
            notes: fields.notes,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn type_id(&self) -> &ResourceTypeId {
        &self.type_id
    }

    pub fn topic_ids(&self) -> &[TopicId] {
        &self.topic_ids
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn estimated_duration(&self) -> &Duration {
        &self.estimated_duration
    }

    pub fn energy_level(&self) -> EnergyLevel {
        self.energy_level
    }

    pub fn status(&self) -> ResourceStatus {
        self.status
    }

    pub fn last_viewed(&self) -> Option<&Timestamp> {
        self.last_viewed.as_ref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// True if the resource is tagged with any of `topics`.
    pub fn has_any_topic(&self, topics: &[TopicId]) -> bool {
        self.topic_ids.iter().any(|id| topics.contains(id))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn rename(&mut self, title: String) {
        self.title = title;
        self.touch();
    }

    /// `None` clears the link.
    pub fn set_url(&mut self, url: Option<String>) {
        self.url = url;
        self.touch();
    }

    pub fn change_type(&mut self, type_id: ResourceTypeId) {
        self.type_id = type_id;
        self.touch();
    }

    pub fn retag(&mut self, topic_ids: Vec<TopicId>) {
        self.topic_ids = topic_ids;
        self.touch();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.touch();
    }

    pub fn set_estimated_duration(&mut self, duration: Duration) {
        self.estimated_duration = duration;
        self.touch();
    }

    pub fn set_energy_level(&mut self, energy_level: EnergyLevel) {
        self.energy_level = energy_level;
        self.touch();
    }

    pub fn set_status(&mut self, status: ResourceStatus) {
        self.status = status;
        self.touch();
    }

    /// `None` clears the notes.
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
        self.touch();
    }

    /// Records that the learner opened the resource.
    pub fn mark_viewed(&mut self) {
        self.last_viewed = Some(Timestamp::now());
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_resource() -> LearningResource {
        LearningResource::new(
            ResourceId::new(),
            NewLearningResource {
                title: "Rust in Action".to_string(),
                url: Some("https://example.com/rust".to_string()),
                type_id: ResourceTypeId::new(),
                topic_ids: vec![TopicId::new()],
                difficulty: Difficulty::Medium,
                estimated_duration: Duration::estimated(90.0),
                energy_level: EnergyLevel::Medium,
                notes: None,
            },
        )
    }

    #[test]
    fn new_resource_starts_pending_and_unviewed() {
        let resource = sample_resource();
        assert_eq!(resource.status(), ResourceStatus::Pending);
        assert!(resource.last_viewed().is_none());
        assert_eq!(resource.created_at(), resource.updated_at());
    }

    #[test]
    fn mutations_bump_updated_at() {
        let mut resource = sample_resource();
        let before = *resource.updated_at();
        std::thread::sleep(std::time::Duration::from_millis(2));

        resource.set_status(ResourceStatus::Completed);

        assert_eq!(resource.status(), ResourceStatus::Completed);
        assert!(resource.updated_at().is_after(&before));
    }

    #[test]
    fn clearing_optional_fields() {
        let mut resource = sample_resource();
        resource.set_url(None);
        resource.set_notes(None);
        assert!(resource.url().is_none());
        assert!(resource.notes().is_none());
    }

    #[test]
    fn topic_overlap() {
        let resource = sample_resource();
        let tagged = resource.topic_ids()[0];
        assert!(resource.has_any_topic(&[TopicId::new(), tagged]));
        assert!(!resource.has_any_topic(&[TopicId::new()]));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample_resource()).unwrap();
        assert!(json.get("topicIds").is_some());
        assert!(json.get("estimatedDuration").is_some());
        assert_eq!(json["status"], "pending");
    }
}
