pub mod auth_handlers;
pub mod crud;
pub mod dashboard;
pub mod event_handlers;
pub mod forms;
pub mod people_handlers;
pub mod profile_handlers;
pub mod report_handlers;
pub mod sub_admin_handlers;
