//! Content served when the store has no portfolio document yet, or cannot be
//! read at all.

use serde::Deserialize;
use std::sync::LazyLock;

use crate::modules::portfolio::application::domain::entities::PortfolioDocument;
use crate::modules::project::application::domain::entities::Project;

const DEFAULT_PORTFOLIO_JSON: &str = include_str!("default_portfolio.json");

static DEFAULTS: LazyLock<BundledDefaults> = LazyLock::new(|| {
    serde_json::from_str(DEFAULT_PORTFOLIO_JSON).expect("default_portfolio.json is valid")
});

#[derive(Debug, Clone, Deserialize)]
pub struct BundledDefaults {
    #[serde(flatten)]
    pub document: PortfolioDocument,
    pub projects: Vec<Project>,
}

pub fn bundled_defaults() -> &'static BundledDefaults {
    &DEFAULTS
}
