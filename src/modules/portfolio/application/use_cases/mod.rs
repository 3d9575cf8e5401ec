pub mod get_portfolio;
pub mod manage_list;
pub mod update_profile;
pub mod update_settings;

pub use get_portfolio::{GetPortfolioService, GetPortfolioUseCase};
pub use manage_list::{ManageListService, ManageListUseCase};
pub use update_profile::{UpdateProfileService, UpdateProfileUseCase};
pub use update_settings::{UpdateSettingsService, UpdateSettingsUseCase};
