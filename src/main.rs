mod api;
mod classify;
mod resolver;
mod sentiment;

use axum::{
    routing::{get, post},
    Router,
};
use dotenv::dotenv;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use classify::ClassificationMode;

#[derive(OpenApi)]
#[openapi(
    paths(api::analyze, api::health),
    components(
        schemas(
            api::AnalyzeRequest,
            api::AnalyzeResponse,
            classify::CategoryResult,
            classify::SimpleCategories,
            classify::ExtendedCategories,
            classify::ClassificationMode,
            classify::Sentiment
        )
    ),
    tags(
        (name = "sentiment", description = "Sentiment Analysis API")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    // Classification mode is a deployment property, not a per-user choice.
    let default_mode: ClassificationMode = match env::var("CLASSIFICATION_MODE") {
        Ok(value) => value.parse()?,
        Err(_) => ClassificationMode::default(),
    };

    // One client for every outbound fetch; a dead host times out instead of
    // pinning a request task forever.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let state = Arc::new(api::AppState {
        client,
        analyzer: sentiment::SentimentIntensityAnalyzer::new(),
        default_mode,
    });

    let app = Router::new()
        .merge(SwaggerUi::new("/sentiment-api-swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/analyze", post(api::analyze))
        .route("/health", get(api::health))
        .nest_service("/", ServeDir::new("static")) // Serve Dashboard
        .layer(CorsLayer::permissive())
        .with_state(state);

    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(mode = ?default_mode, "Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
