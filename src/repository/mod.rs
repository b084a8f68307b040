pub mod glass_type_repo;
pub mod image_repo;
pub mod proposal_repo;
pub mod quote_repo;
pub mod repository_error;
pub mod service_repo;
pub mod site_text_repo;
pub mod user_repo;

use crate::config::mongo_conf::MongoConfig;
use mongodb::{options::{ClientOptions, Credential, ResolverConfig}, Client, Database};
use tracing::info;

/// Opens the shared database handle every repository hangs off of.
pub async fn mongo_database(config: &MongoConfig) -> Result<Database, mongodb::error::Error> {
    let mut client_options =
        ClientOptions::parse_with_resolver_config(&config.uri, ResolverConfig::cloudflare()).await?;
    client_options.app_name = Some("VidracariaBackend".to_string());
    client_options.max_pool_size = Some(config.pool_size);
    client_options.connect_timeout =
        Some(std::time::Duration::from_secs(config.connection_timeout_secs));
    client_options.server_selection_timeout =
        Some(std::time::Duration::from_secs(config.connection_timeout_secs));

    if let (Some(ref username), Some(ref password)) = (&config.username, &config.password) {
        client_options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build(),
        );
    }

    let client = Client::with_options(client_options)?;
    info!(database = %config.database, "Connected MongoDB client");
    Ok(client.database(&config.database))
}
