pub mod current_admin;
pub mod login_admin;
pub mod logout_admin;
pub mod refresh_session;
pub mod seed_admin;
