mod embedded_items;
mod get_portfolio;
mod update_profile;
mod update_settings;

pub use embedded_items::configure as configure_embedded_items;
pub use get_portfolio::*;
pub use update_profile::*;
pub use update_settings::*;
