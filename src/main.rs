use exchanger::{shared::LoggingUtils, AppConfig, HttpServer};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration before logging, which is configured by it
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = LoggingUtils::initialize(&config.logging.level, &config.logging.format) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Exchanger server...");

    let server = match HttpServer::new(config) {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to initialize server: {}", e);
            std::process::exit(1);
        }
    };

    info!("Server starting on {}", server.config().server_address());

    if let Err(e) = server.run().await {
        error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}
