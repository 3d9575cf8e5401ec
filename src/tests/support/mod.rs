pub mod app_state_builder;
pub mod auth_helper;
pub mod events;
pub mod memory_store;
pub mod stubs;
