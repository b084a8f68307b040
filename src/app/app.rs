use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::{AdminUserConfig, AppConfig, AssetsConfig, JwtConfig, MongoConfig};
use crate::middlewares::admin_middleware::AdminAuthState;
use crate::model::user::User;
use crate::repository::glass_type_repo::MongoGlassTypeRepository;
use crate::repository::image_repo::MongoImageRepository;
use crate::repository::mongo_database;
use crate::repository::proposal_repo::MongoProposalRepository;
use crate::repository::quote_repo::MongoQuoteRepository;
use crate::repository::service_repo::MongoServiceRepository;
use crate::repository::site_text_repo::MongoSiteTextRepository;
use crate::repository::user_repo::{MongoUserRepository, UserRepository};
use crate::router::catalog_router::catalog_router;
use crate::router::document_router::document_router;
use crate::router::image_router::image_router;
use crate::router::proposal_router::proposal_router;
use crate::router::quote_router::quote_router;
use crate::router::site_text_router::site_text_router;
use crate::router::user_router::user_router;
use crate::service::catalog_service::CatalogServiceImpl;
use crate::service::document_service::DocumentServiceImpl;
use crate::service::image_service::ImageServiceImpl;
use crate::service::proposal_service::ProposalServiceImpl;
use crate::service::quote_service::QuoteServiceImpl;
use crate::service::site_text_service::SiteTextServiceImpl;
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::jwt::JwtTokenUtilsImpl;

pub struct App {
    config: AppConfig,
    router: Router,
    pub user_service: Arc<UserServiceImpl>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let jwt_config = JwtConfig::from_env().expect("JWT config error");
        let mongo_config = MongoConfig::from_env().expect("Mongo config error");
        let assets_config = AssetsConfig::from_env();

        std::fs::create_dir_all(&assets_config.assets_dir).expect("Failed to create assets directory");

        let db = mongo_database(&mongo_config).await.expect("MongoDB connection error");

        let user_repo = Arc::new(MongoUserRepository::new(&db));
        let quote_repo = Arc::new(MongoQuoteRepository::new(&db));
        let proposal_repo = Arc::new(MongoProposalRepository::new(&db));
        let glass_type_repo = Arc::new(MongoGlassTypeRepository::new(&db));
        let service_repo = Arc::new(MongoServiceRepository::new(&db));
        let image_repo = Arc::new(MongoImageRepository::new(&db));
        let site_text_repo = Arc::new(MongoSiteTextRepository::new(&db));

        let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(jwt_config));
        let user_service = Arc::new(UserServiceImpl::new(user_repo, jwt_utils.clone()));
        let quote_service = Arc::new(QuoteServiceImpl::new(quote_repo.clone()));
        let proposal_service = Arc::new(ProposalServiceImpl::new(proposal_repo.clone(), quote_repo.clone()));
        let catalog_service = Arc::new(CatalogServiceImpl::new(
            glass_type_repo.clone(),
            service_repo.clone(),
            assets_config.clone(),
        ));
        let image_service = Arc::new(ImageServiceImpl::new(image_repo.clone(), assets_config.clone()));
        let site_text_service = Arc::new(SiteTextServiceImpl::new(site_text_repo));
        let document_service = Arc::new(DocumentServiceImpl::new(
            quote_repo,
            proposal_repo,
            service_repo,
            glass_type_repo,
            image_repo,
            assets_config,
        ));

        let admin_auth_state = Arc::new(AdminAuthState {
            jwt_utils: jwt_utils.clone(),
            user_service: user_service.clone(),
        });

        let router = Router::new()
            .merge(user_router(user_service.clone(), admin_auth_state.clone()))
            .merge(quote_router(quote_service, admin_auth_state.clone()))
            .merge(proposal_router(proposal_service, admin_auth_state.clone()))
            .merge(catalog_router(catalog_service, admin_auth_state.clone()))
            .merge(image_router(image_service, admin_auth_state.clone()))
            .merge(site_text_router(site_text_service, admin_auth_state.clone()))
            .merge(document_router(document_service, admin_auth_state))
            .route("/health", get(|| async { "OK" }));

        let app = App { config, router, user_service };
        app.create_first_admin_user().await;
        app
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }

    /// Seeds the first admin account from env config when the database
    /// has no user with that email yet.
    async fn create_first_admin_user(&self) {
        let admin_conf = match AdminUserConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Admin user config not loaded: {e}");
                return;
            }
        };

        match self.user_service.user_repo.find_by_email(&admin_conf.email).await {
            Ok(Some(_)) => {
                info!("Admin user already exists, skipping creation.");
                return;
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to check for existing admin user: {e}");
                return;
            }
        }

        let user = User {
            id: None,
            name: admin_conf.name.clone(),
            email: admin_conf.email.clone(),
            password_hash: String::new(), // set by register
            role: "admin".to_string(),
            active: true,
            blocked: false,
            must_change_password: false,
            created_at: None,
            updated_at: None,
        };
        match self.user_service.register(user, admin_conf.password.clone()).await {
            Ok(_) => info!("First admin user created."),
            Err(e) => error!("Failed to create admin user: {e}"),
        }
    }
}
