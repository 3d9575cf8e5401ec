pub mod auth;
pub mod contact;
pub mod email;
pub mod media;
pub mod portfolio;
pub mod project;
pub mod realtime;
