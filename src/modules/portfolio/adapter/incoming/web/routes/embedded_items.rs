//! CRUD routes for the arrays embedded in the portfolio document.
//!
//! Every kind gets the same three routes:
//! `POST {base}`, `PUT {base}/{id}` and `DELETE {base}/{id}`.

use actix_web::{web, HttpResponse};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::portfolio::application::domain::entities::{
    Achievement, Experience, Service, SkillCategory,
};
use crate::modules::portfolio::application::domain::forms::EmbeddedItem;
use crate::modules::portfolio::application::use_cases::ManageListUseCase;
use crate::AppState;

/// Where an item kind is mounted and which use case serves it.
pub trait ListEndpoint: EmbeddedItem {
    const PATH: &'static str;

    fn use_case(state: &AppState) -> &Arc<dyn ManageListUseCase<Self>>;
}

impl ListEndpoint for SkillCategory {
    const PATH: &'static str = "/api/admin/skills";

    fn use_case(state: &AppState) -> &Arc<dyn ManageListUseCase<Self>> {
        &state.portfolio.skills
    }
}

impl ListEndpoint for Experience {
    const PATH: &'static str = "/api/admin/experience";

    fn use_case(state: &AppState) -> &Arc<dyn ManageListUseCase<Self>> {
        &state.portfolio.experience
    }
}

impl ListEndpoint for Achievement {
    const PATH: &'static str = "/api/admin/achievements";

    fn use_case(state: &AppState) -> &Arc<dyn ManageListUseCase<Self>> {
        &state.portfolio.achievements
    }
}

impl ListEndpoint for Service {
    const PATH: &'static str = "/api/admin/services";

    fn use_case(state: &AppState) -> &Arc<dyn ManageListUseCase<Self>> {
        &state.portfolio.services
    }
}

async fn add_item<I>(
    _admin: AdminUser,
    req: web::Json<I::Input>,
    data: web::Data<AppState>,
) -> HttpResponse
where
    I: ListEndpoint,
    I::Input: DeserializeOwned,
{
    I::use_case(&data).add(req.into_inner()).into_response()
}

async fn update_item<I>(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<I::Input>,
    data: web::Data<AppState>,
) -> HttpResponse
where
    I: ListEndpoint,
    I::Input: DeserializeOwned,
{
    I::use_case(&data)
        .update(path.into_inner(), req.into_inner())
        .into_response()
}

async fn remove_item<I>(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse
where
    I: ListEndpoint,
{
    I::use_case(&data).remove(path.into_inner()).into_response()
}

fn register<I>(cfg: &mut web::ServiceConfig)
where
    I: ListEndpoint,
    I::Input: DeserializeOwned,
{
    cfg.service(web::resource(I::PATH).route(web::post().to(add_item::<I>)))
        .service(
            web::resource(format!("{}/{{id}}", I::PATH))
                .route(web::put().to(update_item::<I>))
                .route(web::delete().to(remove_item::<I>)),
        );
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    register::<SkillCategory>(cfg);
    register::<Experience>(cfg);
    register::<Achievement>(cfg);
    register::<Service>(cfg);
}
