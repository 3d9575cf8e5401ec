pub mod actions;
pub mod api;
pub mod events;
pub mod validation;
