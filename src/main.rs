pub mod modules;
pub use modules::attachment;
pub use modules::auth;
pub use modules::issue;
pub use modules::issue_type;
pub use modules::notification;
pub mod api;
pub mod health;
pub mod shared;

use crate::attachment::adapter::outgoing::attachment_repository_postgres::AttachmentRepositoryPostgres;
use crate::attachment::adapter::outgoing::attachment_store_gcs::GcsAttachmentStore;
use crate::attachment::application::ports::outgoing::AttachmentStore;
use crate::attachment::application::use_cases::{
    init_upload::{IInitUploadUseCase, InitUploadUseCase},
    list_attachments::{IListAttachmentsUseCase, ListAttachmentsUseCase},
};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::token_repository_redis::RedisTokenRepository;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::use_cases::{
    change_password::{ChangePasswordUseCase, IChangePasswordUseCase},
    delete_user::{DeleteUserUseCase, IDeleteUserUseCase},
    fetch_user::{FetchUserUseCase, IFetchUserUseCase},
    list_users::{IListUsersUseCase, ListUsersUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    signup_user::{ISignupUserUseCase, SignupUserUseCase},
    update_user::{IUpdateUserUseCase, UpdateUserUseCase},
};

use crate::issue::adapter::outgoing::issue_query_postgres::IssueQueryPostgres;
use crate::issue::adapter::outgoing::issue_repository_postgres::IssueRepositoryPostgres;
use crate::issue::adapter::outgoing::vote_repository_postgres::VoteRepositoryPostgres;
use crate::issue::application::use_cases::{
    cast_vote::{CastVoteUseCase, ICastVoteUseCase},
    close_issue::{CloseIssueUseCase, ICloseIssueUseCase},
    create_issue::{CreateIssueUseCase, ICreateIssueUseCase},
    delete_issue::{DeleteIssueUseCase, IDeleteIssueUseCase},
    fetch_issue::{FetchIssueUseCase, IFetchIssueUseCase},
    list_issues::{IListIssuesUseCase, ListIssuesUseCase},
    patch_issue::{IPatchIssueUseCase, PatchIssueUseCase},
    vote_summary::{IVoteSummaryUseCase, VoteSummaryUseCase},
};

use crate::issue_type::adapter::outgoing::issue_type_repository_postgres::IssueTypeRepositoryPostgres;
use crate::issue_type::application::services::{
    CreateIssueTypeService, DeleteIssueTypeService, GetIssueTypesService,
};
use crate::issue_type::application::IssueTypeUseCases;

use crate::notification::adapter::outgoing::notification_repository_postgres::NotificationRepositoryPostgres;
use crate::notification::application::ports::outgoing::CitizenNotifier;
use crate::notification::application::services::NotificationService;
use crate::notification::application::use_cases::{
    list_notifications::{IListNotificationsUseCase, ListNotificationsUseCase},
    mark_notification_read::{IMarkNotificationReadUseCase, MarkNotificationReadUseCase},
};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    // Auth & users
    pub register_user_orchestrator: Arc<UserRegistrationOrchestrator>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub change_password_use_case: Arc<dyn IChangePasswordUseCase + Send + Sync>,
    pub fetch_user_use_case: Arc<dyn IFetchUserUseCase + Send + Sync>,
    pub update_user_use_case: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    pub list_users_use_case: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,

    // Issues & votes
    pub create_issue_use_case: Arc<dyn ICreateIssueUseCase + Send + Sync>,
    pub fetch_issue_use_case: Arc<dyn IFetchIssueUseCase + Send + Sync>,
    pub list_issues_use_case: Arc<dyn IListIssuesUseCase + Send + Sync>,
    pub patch_issue_use_case: Arc<dyn IPatchIssueUseCase + Send + Sync>,
    pub close_issue_use_case: Arc<dyn ICloseIssueUseCase + Send + Sync>,
    pub delete_issue_use_case: Arc<dyn IDeleteIssueUseCase + Send + Sync>,
    pub cast_vote_use_case: Arc<dyn ICastVoteUseCase + Send + Sync>,
    pub vote_summary_use_case: Arc<dyn IVoteSummaryUseCase + Send + Sync>,

    // Issue types
    pub issue_type_use_cases: IssueTypeUseCases,

    // Attachments
    pub init_upload_use_case: Arc<dyn IInitUploadUseCase + Send + Sync>,
    pub list_attachments_use_case: Arc<dyn IListAttachmentsUseCase + Send + Sync>,

    // Notifications
    pub list_notifications_use_case: Arc<dyn IListNotificationsUseCase + Send + Sync>,
    pub mark_notification_read_use_case: Arc<dyn IMarkNotificationReadUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Shared services
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider> = Arc::new(jwt_service);

    let argon2_hasher = if std::env::var("RUST_ENV").as_deref() == Ok("production") {
        Argon2Hasher::from_env()
    } else {
        Argon2Hasher::fast_env()
    };
    let password_hasher_arc: Arc<dyn PasswordHasher> = Arc::new(argon2_hasher);
    let password_policy_arc: Arc<dyn PasswordPolicy> = Arc::new(BasicPasswordPolicy);

    // Repositories
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let redis_token_repo = RedisTokenRepository::new(Arc::clone(&redis_arc));
    let issue_repo = IssueRepositoryPostgres::new(Arc::clone(&db_arc));
    let issue_query = IssueQueryPostgres::new(Arc::clone(&db_arc));
    let vote_repo = VoteRepositoryPostgres::new(Arc::clone(&db_arc));
    let issue_type_repo = IssueTypeRepositoryPostgres::new(Arc::clone(&db_arc));
    let attachment_repo = AttachmentRepositoryPostgres::new(Arc::clone(&db_arc));
    let notification_repo = NotificationRepositoryPostgres::new(Arc::clone(&db_arc));
    let attachment_store: Arc<dyn AttachmentStore> = Arc::new(GcsAttachmentStore::from_env());

    // Notification recorder, shared with auth and issue flows
    let notifier: Arc<dyn CitizenNotifier> =
        Arc::new(NotificationService::new(notification_repo.clone()));

    // Auth use cases
    let signup_use_case = SignupUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&password_hasher_arc),
        Arc::clone(&password_policy_arc),
        Arc::clone(&token_provider_arc),
    );
    let signup_uc_arc: Arc<dyn ISignupUserUseCase + Send + Sync> = Arc::new(signup_use_case);
    let register_user_orchestrator =
        UserRegistrationOrchestrator::new(signup_uc_arc, Arc::clone(&notifier));

    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        Arc::clone(&password_hasher_arc),
        Arc::clone(&token_provider_arc),
    );
    let refresh_token_use_case = RefreshTokenUseCase::new(
        user_query.clone(),
        redis_token_repo.clone(),
        Arc::clone(&token_provider_arc),
    );
    let logout_user_use_case =
        LogoutUseCase::new(redis_token_repo.clone(), Arc::clone(&token_provider_arc));
    let change_password_use_case = ChangePasswordUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&password_hasher_arc),
        Arc::clone(&password_policy_arc),
    );
    let fetch_user_use_case = FetchUserUseCase::new(user_query.clone());
    let update_user_use_case = UpdateUserUseCase::new(user_repo.clone());
    let list_users_use_case = ListUsersUseCase::new(user_query.clone());
    let delete_user_use_case =
        DeleteUserUseCase::new(user_query.clone(), user_repo, redis_token_repo);

    // Issue use cases
    let create_issue_use_case =
        CreateIssueUseCase::new(issue_repo.clone(), Arc::clone(&notifier));
    let fetch_issue_use_case = FetchIssueUseCase::new(issue_query.clone());
    let list_issues_use_case = ListIssuesUseCase::new(issue_query.clone());
    let patch_issue_use_case =
        PatchIssueUseCase::new(issue_query.clone(), issue_repo.clone(), Arc::clone(&notifier));
    let patch_issue_arc: Arc<dyn IPatchIssueUseCase + Send + Sync> =
        Arc::new(patch_issue_use_case);
    let close_issue_use_case = CloseIssueUseCase::new(Arc::clone(&patch_issue_arc));
    let delete_issue_use_case = DeleteIssueUseCase::new(issue_query.clone(), issue_repo);
    let cast_vote_use_case = CastVoteUseCase::new(issue_query.clone(), vote_repo.clone());
    let vote_summary_use_case = VoteSummaryUseCase::new(issue_query.clone(), vote_repo);

    // Issue type services
    let issue_type_use_cases = IssueTypeUseCases {
        create: Arc::new(CreateIssueTypeService::new(issue_type_repo.clone())),
        get_list: Arc::new(GetIssueTypesService::new(issue_type_repo.clone())),
        delete: Arc::new(DeleteIssueTypeService::new(issue_type_repo)),
    };

    // Attachment use cases
    let init_upload_use_case = InitUploadUseCase::new(
        issue_query.clone(),
        attachment_repo.clone(),
        Arc::clone(&attachment_store),
    );
    let list_attachments_use_case =
        ListAttachmentsUseCase::new(attachment_repo, Arc::clone(&attachment_store));

    // Notification use cases
    let list_notifications_use_case =
        ListNotificationsUseCase::new(notification_repo.clone());
    let mark_notification_read_use_case =
        MarkNotificationReadUseCase::new(notification_repo);

    let state = AppState {
        register_user_orchestrator: Arc::new(register_user_orchestrator),
        login_user_use_case: Arc::new(login_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        change_password_use_case: Arc::new(change_password_use_case),
        fetch_user_use_case: Arc::new(fetch_user_use_case),
        update_user_use_case: Arc::new(update_user_use_case),
        list_users_use_case: Arc::new(list_users_use_case),
        delete_user_use_case: Arc::new(delete_user_use_case),
        create_issue_use_case: Arc::new(create_issue_use_case),
        fetch_issue_use_case: Arc::new(fetch_issue_use_case),
        list_issues_use_case: Arc::new(list_issues_use_case),
        patch_issue_use_case: patch_issue_arc,
        close_issue_use_case: Arc::new(close_issue_use_case),
        delete_issue_use_case: Arc::new(delete_issue_use_case),
        cast_vote_use_case: Arc::new(cast_vote_use_case),
        vote_summary_use_case: Arc::new(vote_summary_use_case),
        issue_type_use_cases,
        init_upload_use_case: Arc::new(init_upload_use_case),
        list_attachments_use_case: Arc::new(list_attachments_use_case),
        list_notifications_use_case: Arc::new(list_notifications_use_case),
        mark_notification_read_use_case: Arc::new(mark_notification_read_use_case),
    };

    // Clone for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(shared::api::json_config::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::change_password_handler);
    // Users
    cfg.service(crate::auth::adapter::incoming::web::routes::current_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_user_handler);
    // Issues & votes
    cfg.service(crate::issue::adapter::incoming::web::routes::create_issue_handler);
    cfg.service(crate::issue::adapter::incoming::web::routes::get_issues_handler);
    cfg.service(crate::issue::adapter::incoming::web::routes::get_single_issue_handler);
    cfg.service(crate::issue::adapter::incoming::web::routes::patch_issue_handler);
    cfg.service(crate::issue::adapter::incoming::web::routes::close_issue_handler);
    cfg.service(crate::issue::adapter::incoming::web::routes::delete_issue_handler);
    cfg.service(crate::issue::adapter::incoming::web::routes::cast_vote_handler);
    cfg.service(crate::issue::adapter::incoming::web::routes::vote_summary_handler);
    // Issue types
    cfg.service(crate::issue_type::adapter::incoming::web::routes::create_issue_type_handler);
    cfg.service(crate::issue_type::adapter::incoming::web::routes::get_issue_types_handler);
    cfg.service(crate::issue_type::adapter::incoming::web::routes::delete_issue_type_handler);
    // Attachments
    cfg.service(crate::attachment::adapter::incoming::web::routes::init_upload_handler);
    cfg.service(crate::attachment::adapter::incoming::web::routes::list_attachments_handler);
    // Notifications
    cfg.service(crate::notification::adapter::incoming::web::routes::list_notifications_handler);
    cfg.service(
        crate::notification::adapter::incoming::web::routes::mark_notification_read_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
