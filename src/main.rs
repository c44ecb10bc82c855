mod api;
mod banner;
mod config;
mod errors;
mod models;

use actix_web::{middleware, App, HttpServer};
use api::{configure_routes, AppState};

#[actix_web::main]
async fn main() -> errors::Result<()> {
    // Print the startup banner
    banner::print_banner();

    // Load .env file if present; the deploy tool injects the real
    // environment in production, so a missing file is fine.
    let dotenv_result = dotenvy::dotenv();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = dotenv_result {
        log::debug!("No .env file loaded: {}", e);
    }

    let app_config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Configuration: version={} environment={}",
        app_config.app_version,
        app_config.environment
    );

    let bind_addr = app_config.bind_addr();
    let state = AppState::new(app_config);

    println!("🚀 Starting server...");
    println!("📡 Listening on http://{}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(actix_web::web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
