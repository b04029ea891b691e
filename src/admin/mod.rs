pub mod panel;
pub mod resource;

pub use panel::{AdminData, AdminPanel, DashboardSummary, RefreshReport};
pub use resource::{delete_question, Events, Gallery, Resource, Team};
