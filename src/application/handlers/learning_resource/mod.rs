//! Learning-resource command and query handlers.

mod add_resource;
mod delete_resource;
mod edit_resource;
mod get_resource_by_id;
mod get_resources_by_filter;
mod list_resources;
mod support;
mod toggle_resource_difficulty;
mod toggle_resource_energy;
mod toggle_resource_status;

pub use add_resource::{
    AddResourceCommand, AddResourceHandler, MAX_NOTES_LENGTH, MAX_TITLE_LENGTH,
};
pub use delete_resource::{DeleteResourceCommand, DeleteResourceHandler};
pub use edit_resource::{EditResourceCommand, EditResourceHandler, MAX_EDITED_TITLE_LENGTH};
pub use get_resource_by_id::{GetResourceByIdHandler, GetResourceByIdQuery, ResourceDetails};
pub use get_resources_by_filter::{
    GetResourcesByFilterHandler, GetResourcesByFilterQuery, ResourceFilters, ResourcesPage,
};
pub use list_resources::{ListResourcesHandler, ListResourcesResult, ResourceSummary};
pub use toggle_resource_difficulty::{
    ToggleResourceDifficultyCommand, ToggleResourceDifficultyHandler,
};
pub use toggle_resource_energy::{ToggleResourceEnergyCommand, ToggleResourceEnergyHandler};
pub use toggle_resource_status::{ToggleResourceStatusCommand, ToggleResourceStatusHandler};
