//! AutoForm server entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use secrecy::ExposeSecret;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use autoform::adapters::ai::{OpenAIConfig, OpenAIProvider};
use autoform::adapters::http::{api_router, with_web_client, AppState};
use autoform::adapters::speech::{AzureSpeechConfig, AzureSpeechSynthesizer};
use autoform::adapters::storage::{InMemoryConversationRepository, InMemoryFormRepository};
use autoform::config::{AiConfig, AiProvider, AppConfig, ServerConfig, SpeechConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    init_tracing(&config.server);

    config.validate()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        provider = ?config.ai.provider,
        "Starting AutoForm server"
    );

    let ai_provider = OpenAIProvider::new(openai_config(&config.ai))?;
    let speech_synthesizer = AzureSpeechSynthesizer::new(speech_config(&config.speech))?;

    let state = AppState::new(
        Arc::new(InMemoryFormRepository::new()),
        Arc::new(InMemoryConversationRepository::new()),
        Arc::new(ai_provider),
        Arc::new(speech_synthesizer),
    );

    if !std::path::Path::new(&config.server.static_dir).is_dir() {
        tracing::warn!(
            static_dir = %config.server.static_dir,
            "Web client directory not found; only the API will be served"
        );
    }

    let app = with_web_client(api_router(state), &config.server.static_dir)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&config.server));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn openai_config(ai: &AiConfig) -> OpenAIConfig {
    let api_key = ai
        .api_key
        .as_ref()
        .map(|k| k.expose_secret().clone())
        .unwrap_or_default();

    let config = match ai.provider {
        AiProvider::Azure => OpenAIConfig::azure(
            api_key,
            ai.endpoint.clone().unwrap_or_default(),
            ai.deployment.clone().unwrap_or_default(),
        )
        .with_api_version(&ai.api_version),
        AiProvider::OpenAI => OpenAIConfig::new(api_key)
            .with_model(&ai.model)
            .with_base_url(&ai.base_url),
    };

    config.with_timeout(ai.timeout())
}

fn speech_config(speech: &SpeechConfig) -> AzureSpeechConfig {
    let key = speech
        .subscription_key
        .as_ref()
        .map(|k| k.expose_secret().clone())
        .unwrap_or_default();

    let config = AzureSpeechConfig::new(key, speech.region.clone().unwrap_or_default())
        .with_voice(&speech.voice)
        .with_output_format(&speech.output_format)
        .with_timeout(speech.timeout());

    match &speech.endpoint {
        Some(endpoint) => config.with_endpoint(endpoint),
        None => config,
    }
}

/// Permissive when no origins are configured.
fn build_cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        if server.is_production() {
            tracing::warn!("No CORS origins configured, allowing all origins");
        }
        return CorsLayer::permissive();
    }

    tracing::info!(count = origins.len(), "CORS configured");
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

fn init_tracing(server: &ServerConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| server.log_level.clone().into());

    let fmt_layer = if server.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
