use dotenv::dotenv;
use tracing::{info, warn};

use vidracaria_backend::app::app::App;
use vidracaria_backend::util::logger::Logger;

#[tokio::main]
async fn main() {
    match dotenv() {
        Ok(_) => {}
        Err(e) => eprintln!("No .env file loaded: {} (using system env vars)", e),
    }

    // Guards must stay alive for the whole run or file logging stops.
    let _logger = Logger::new().expect("Failed to initialize logging");

    info!("🚀 Starting Vidraçaria Backend");
    if std::env::var("MONGO_URI").is_err() {
        warn!("MONGO_URI not set, using default localhost connection");
    }

    let app = App::new().await;
    app.start().await;
}
