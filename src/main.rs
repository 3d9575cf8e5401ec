pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::auth::adapter::incoming::web::extractors::SharedTokenProvider;
use crate::modules::auth::adapter::outgoing::admin_query_postgres::AdminQueryPostgres;
use crate::modules::auth::adapter::outgoing::admin_repository_postgres::AdminRepositoryPostgres;
use crate::modules::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::modules::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::token_revocation_redis::RedisTokenRevocationStore;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::outgoing::PasswordHasher;
use crate::modules::auth::application::use_cases::{
    current_admin::CurrentAdminService,
    login_admin::LoginAdminService,
    logout_admin::LogoutAdminService,
    refresh_session::RefreshSessionService,
    seed_admin::{SeedAdminCommand, SeedAdminService, SeedAdminUseCase, SeedOutcome},
};
use crate::modules::contact::adapter::outgoing::contact_query_postgres::ContactQueryPostgres;
use crate::modules::contact::adapter::outgoing::contact_repository_postgres::ContactRepositoryPostgres;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::use_cases::{
    DeleteSubmissionService, ListSubmissionsService, MarkAllSubmissionsReadService,
    MarkSubmissionReadService, SubmitContactService,
};
use crate::modules::email::adapter::outgoing::log_sender::LogEmailSender;
use crate::modules::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::modules::email::application::ports::outgoing::{ContactNotifier, EmailSender};
use crate::modules::email::application::services::ContactEmailService;
use crate::modules::media::adapter::outgoing::{GcsFileStorage, LocalFileStorage};
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::media::application::use_cases::{ServeUploadService, UploadFileService};
use crate::modules::portfolio::adapter::outgoing::portfolio_repository_postgres::PortfolioRepositoryPostgres;
use crate::modules::portfolio::application::domain::entities::{
    Achievement, Experience, Service, SkillCategory,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::use_cases::{
    GetPortfolioService, ManageListService, UpdateProfileService, UpdateSettingsService,
};
use crate::modules::project::adapter::outgoing::project_query_postgres::ProjectQueryPostgres;
use crate::modules::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::use_cases::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    UpdateProjectService,
};
use crate::modules::realtime::application::live_context::LiveContext;
use crate::modules::realtime::application::services::StoreSnapshotSource;
use crate::shared::actions::WriteDispatcher;
use crate::shared::api::custom_json_config;
use crate::shared::events::{spawn_dev_listener, ChangeFeed, ErrorEmitter};

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

const CHANGE_FEED_CAPACITY: usize = 256;
const ERROR_EMITTER_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub portfolio: PortfolioUseCases,
    pub project: ProjectUseCases,
    pub contact: ContactUseCases,
    pub media: MediaUseCases,
    pub live: LiveContext,
}

#[cfg(not(tarpaulin_include))]
fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[cfg(not(tarpaulin_include))]
async fn seed_first_admin(
    config: &AppConfig,
    db: &Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher>,
) -> anyhow::Result<()> {
    let Some(seed) = config.admin_seed.as_ref() else {
        return Ok(());
    };

    let command = SeedAdminCommand::new(&seed.email, &seed.password)?;
    let service = SeedAdminService::new(
        AdminQueryPostgres::new(Arc::clone(db)),
        AdminRepositoryPostgres::new(Arc::clone(db)),
        hasher,
    );

    match service.execute(command).await? {
        SeedOutcome::Created(admin) => info!(email = %admin.email, "seeded first admin account"),
        SeedOutcome::AlreadySeeded => info!("admin account already present, skipping seed"),
    }
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn contact_notifier(config: &AppConfig) -> anyhow::Result<Arc<dyn ContactNotifier>> {
    let recipient = config
        .contact_notify_email
        .clone()
        .or_else(|| config.admin_seed.as_ref().map(|seed| seed.email.clone()));

    let sender: Arc<dyn EmailSender> = match &config.smtp {
        Some(smtp) => Arc::new(SmtpEmailSender::from_config(smtp)?),
        None => {
            warn!("SMTP_HOST is not set, contact notifications will only be logged");
            Arc::new(LogEmailSender)
        }
    };

    let recipient = match (recipient, &config.smtp) {
        (Some(to), _) => to,
        (None, Some(smtp)) => smtp.from.clone(),
        (None, None) => "owner@localhost".to_string(),
    };

    Ok(Arc::new(ContactEmailService::new(sender, recipient)))
}

#[cfg(not(tarpaulin_include))]
fn media_use_cases(config: &AppConfig) -> MediaUseCases {
    match config.media.bucket.as_deref() {
        Some(bucket) if config.media.uses_cloud_storage() => {
            info!(bucket, "storing uploads in Google Cloud Storage");
            let storage = GcsFileStorage::new(bucket);
            MediaUseCases {
                upload: Arc::new(UploadFileService::new(storage.clone())),
                serve: Arc::new(ServeUploadService::new(storage)),
            }
        }
        _ => {
            warn!(
                dir = %config.media.upload_dir,
                "cloud storage is not configured, storing uploads on local disk"
            );
            let storage =
                LocalFileStorage::new(&config.media.upload_dir, &config.media.public_base_url);
            MediaUseCases {
                upload: Arc::new(UploadFileService::new(storage.clone())),
                serve: Arc::new(ServeUploadService::new(storage)),
            }
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // rediss:// URLs need a process-wide crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    info!("Starting application...");

    let config = AppConfig::from_env().context("invalid configuration")?;
    let server_url = config.bind_address();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
        info!("database migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("failed to create Redis pool")?;
    let redis_arc = Arc::new(redis_pool);

    // Events
    let feed = ChangeFeed::new(CHANGE_FEED_CAPACITY);
    let errors = ErrorEmitter::new(ERROR_EMITTER_CAPACITY);
    let writes = WriteDispatcher::new(feed.clone(), errors.clone());
    if config.is_development() {
        spawn_dev_listener(&errors);
    }

    // Adapters
    let admin_query = AdminQueryPostgres::new(Arc::clone(&db_arc));
    let revocations = RedisTokenRevocationStore::new(Arc::clone(&redis_arc));
    let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db_arc));
    let contact_query = ContactQueryPostgres::new(Arc::clone(&db_arc));

    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let hasher: Arc<dyn PasswordHasher> = if config.is_production() {
        Arc::new(Argon2Hasher::production())
    } else {
        Arc::new(Argon2Hasher::fast())
    };
    let token_provider: SharedTokenProvider = Arc::new(jwt_service);

    seed_first_admin(&config, &db_arc, Arc::clone(&hasher)).await?;

    // Use cases
    let auth = AuthUseCases {
        login: Arc::new(LoginAdminService::new(
            admin_query.clone(),
            Arc::clone(&hasher),
            Arc::clone(&token_provider),
        )),
        refresh: Arc::new(RefreshSessionService::new(
            revocations.clone(),
            Arc::clone(&token_provider),
        )),
        logout: Arc::new(LogoutAdminService::new(
            revocations,
            Arc::clone(&token_provider),
        )),
        current: Arc::new(CurrentAdminService::new(admin_query)),
    };

    let portfolio = PortfolioUseCases {
        get: Arc::new(GetPortfolioService::new(
            portfolio_repo.clone(),
            project_query.clone(),
        )),
        update_profile: Arc::new(UpdateProfileService::new(
            portfolio_repo.clone(),
            writes.clone(),
        )),
        update_settings: Arc::new(UpdateSettingsService::new(
            portfolio_repo.clone(),
            writes.clone(),
        )),
        skills: Arc::new(ManageListService::<_, SkillCategory>::new(
            portfolio_repo.clone(),
            writes.clone(),
        )),
        experience: Arc::new(ManageListService::<_, Experience>::new(
            portfolio_repo.clone(),
            writes.clone(),
        )),
        achievements: Arc::new(ManageListService::<_, Achievement>::new(
            portfolio_repo.clone(),
            writes.clone(),
        )),
        services: Arc::new(ManageListService::<_, Service>::new(
            portfolio_repo.clone(),
            writes.clone(),
        )),
    };

    let project = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(project_repo.clone(), writes.clone())),
        update: Arc::new(UpdateProjectService::new(project_repo.clone(), writes.clone())),
        delete: Arc::new(DeleteProjectService::new(project_repo, writes.clone())),
        list: Arc::new(GetProjectsService::new(project_query.clone())),
        single: Arc::new(GetSingleProjectService::new(project_query.clone())),
    };

    let contact = ContactUseCases {
        submit: Arc::new(SubmitContactService::new(
            contact_repo.clone(),
            portfolio_repo.clone(),
            contact_notifier(&config)?,
            writes.clone(),
        )),
        mark_read: Arc::new(MarkSubmissionReadService::new(
            contact_repo.clone(),
            writes.clone(),
        )),
        mark_all_read: Arc::new(MarkAllSubmissionsReadService::new(
            contact_repo.clone(),
            writes.clone(),
        )),
        delete: Arc::new(DeleteSubmissionService::new(contact_repo, writes)),
        list: Arc::new(ListSubmissionsService::new(contact_query.clone())),
    };

    let live = LiveContext {
        source: Arc::new(StoreSnapshotSource::new(
            portfolio_repo,
            project_query,
            contact_query,
        )),
        feed,
        errors,
    };

    let state = AppState {
        auth,
        portfolio,
        project,
        contact,
        media: media_use_cases(&config),
        live,
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{auth, contact, media, portfolio, project, realtime};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth::adapter::incoming::web::routes::login_handler);
    cfg.service(auth::adapter::incoming::web::routes::refresh_handler);
    cfg.service(auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(auth::adapter::incoming::web::routes::session_handler);
    // Portfolio
    cfg.service(portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::update_settings_handler);
    cfg.configure(portfolio::adapter::incoming::web::routes::configure_embedded_items);
    // Projects
    cfg.service(project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(project::adapter::incoming::web::routes::delete_project_handler);
    // Contact
    cfg.service(contact::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(contact::adapter::incoming::web::routes::list_submissions_handler);
    cfg.service(contact::adapter::incoming::web::routes::mark_all_submissions_read_handler);
    cfg.service(contact::adapter::incoming::web::routes::mark_submission_read_handler);
    cfg.service(contact::adapter::incoming::web::routes::delete_submission_handler);
    // Media
    cfg.service(media::adapter::incoming::web::routes::upload_file_handler);
    cfg.service(media::adapter::incoming::web::routes::serve_upload_handler);
    // Live
    cfg.service(realtime::adapter::incoming::web::routes::live_events_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
