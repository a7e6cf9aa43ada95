use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::info;
use neurolearn_backend::chains::{LlmProgressChain, LlmStoryChain};
use neurolearn_backend::{config::Config, handlers, state::AppState};
use reqwest::Client;
use std::sync::Arc;

/// Empty origin list means no cross-origin access. A `*` entry opts in to
/// the wide-open mode the original deployment used; `Cors::permissive`
/// echoes the request origin, so credentialed requests still work there.
fn build_cors(config: &Config) -> Cors {
    if config.cors_allow_any_origin() {
        return Cors::permissive();
    }

    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);
    for origin in &config.cors_origins {
        cors = cors.allowed_origin(origin);
    }
    if config.cors_allow_credentials {
        cors = cors.supports_credentials();
    }
    cors
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let client = Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()
        .expect("failed to build reqwest client");

    let state = AppState {
        config: config.clone(),
        story_chain: Arc::new(LlmStoryChain::new(client.clone(), config.clone())),
        progress_chain: Arc::new(LlmProgressChain::new(client, config.clone())),
    };

    info!("NeuroLearn AI LangChain Backend starting");
    info!("Server running at http://localhost:{}", config.port);
    info!("Using model provider at: {}", config.llm_api_url);
    info!("Model: {}", config.llm_model);
    info!("Temperature: {}", config.temperature);
    info!("Max tokens: {}", config.max_tokens);
    if config.cors_allow_any_origin() {
        info!("CORS: any origin (NOT suitable for production)");
    } else if config.cors_origins.is_empty() {
        info!("CORS: no cross-origin access");
    } else {
        info!("CORS origins: {:?}", config.cors_origins);
    }

    let port = config.port;
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().limit(1024 * 1024))
            .wrap(Logger::default())
            .wrap(build_cors(&state.config))
            .service(web::resource("/").route(web::get().to(handlers::root)))
            .service(web::resource("/health").route(web::get().to(handlers::health)))
            .service(
                web::resource("/generate-story").route(web::post().to(handlers::generate_story)),
            )
            .service(
                web::resource("/generate-progress-summary")
                    .route(web::post().to(handlers::generate_progress_summary)),
            )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
