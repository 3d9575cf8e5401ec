use std::sync::Arc;

use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use actix_web::{get, web, HttpResponse};
use futures::stream;
use tracing::debug;

use crate::modules::auth::adapter::incoming::web::extractors::OptionalAdmin;
use crate::modules::realtime::application::provider::SubscriptionProvider;
use crate::AppState;

/// Live content stream
///
/// Server-sent events. Every session receives `state` events plus a full
/// snapshot of `projects` and `portfolio` on connect and after each write;
/// admin sessions also receive `contact_submissions`. Browsers that cannot
/// set headers may pass the access token as `?access_token=`.
#[utoipa::path(
    get,
    path = "/api/live",
    tag = "live",
    params(
        ("access_token" = Option<String>, Query, description = "Admin access token"),
    ),
    responses(
        (status = 200, description = "Event stream", content_type = "text/event-stream", body = String),
    )
)]
#[get("/api/live")]
pub async fn live_events_handler(session: OptionalAdmin, data: web::Data<AppState>) -> HttpResponse {
    let live = &data.live;
    let (mut provider, events) = SubscriptionProvider::mount(
        Arc::clone(&live.source),
        live.feed.clone(),
        live.errors.clone(),
    );
    provider.on_auth_change(session.0);
    debug!(scope = ?provider.scope(), "live stream opened");

    // The provider rides along with the stream so a disconnect tears it down.
    let body = stream::unfold((provider, events), |(provider, mut events)| async move {
        let event = events.recv().await?;
        let chunk = web::Bytes::from(event.to_sse());
        Some((Ok::<_, actix_web::Error>(chunk), (provider, events)))
    });

    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/event-stream"))
        .insert_header((CACHE_CONTROL, "no-cache"))
        .streaming(body)
}
