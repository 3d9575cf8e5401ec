pub mod domain;
pub mod ports;
pub mod project_use_cases;
pub mod use_cases;
