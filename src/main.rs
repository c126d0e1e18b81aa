use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use affinity::config::{LogFormat, Settings};
use affinity::routes::{self, AppState};
use affinity::{CompatibilityEvaluator, HttpLlmClient};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.log_format() {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }

    info!("Starting Affinity compatibility service...");

    if settings.llm.api_key.is_empty() {
        warn!("No LLM API key configured (set LLM_API_KEY); provider calls will be rejected");
    }

    let llm = HttpLlmClient::new(settings.llm.to_options()).map_err(|e| {
        error!("Failed to create LLM client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!(
        "LLM client initialized (endpoint: {}, model: {})",
        settings.llm.endpoint, settings.llm.model
    );

    let evaluator = CompatibilityEvaluator::new(Arc::new(llm))
        .with_timeout(settings.evaluation.timeout())
        .with_retry(settings.evaluation.retry_policy());

    info!(
        "Evaluator initialized (timeout: {:?}, policy: {:?})",
        evaluator.timeout(),
        evaluator.retry_policy()
    );

    let app_state = AppState { evaluator };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
