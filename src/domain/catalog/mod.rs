//! Reference data resources are classified by.

mod resource_type;
mod topic;

pub use resource_type::ResourceType;
pub use topic::Topic;
