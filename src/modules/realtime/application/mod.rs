pub mod domain;
pub mod live_context;
pub mod ports;
pub mod provider;
pub mod services;
pub mod subscription;
