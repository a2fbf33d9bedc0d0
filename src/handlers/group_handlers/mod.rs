//! Group handlers: create a group from the dashboard and show one group's page.

pub mod crud;
pub mod forms;
pub mod helpers;

pub use crud::{create, detail};
pub use forms::GroupForm;
