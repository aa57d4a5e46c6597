pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::XlsxSheetWriter;
use crate::config::ServerConfig;
use crate::core::Converter;
use crate::utils::error::Result;

#[derive(Clone)]
pub struct AppState {
    pub(crate) converter: Arc<Converter<XlsxSheetWriter>>,
}

pub fn router(converter: Arc<Converter<XlsxSheetWriter>>) -> Router {
    let state = AppState { converter };

    Router::new()
        .route("/convert", post(handlers::handle_convert))
        .route("/health", get(handlers::handle_health))
        .route("/info", get(handlers::handle_info))
        .with_state(state)
}

pub async fn run(config: &ServerConfig) -> Result<()> {
    let converter = Arc::new(Converter::new(
        XlsxSheetWriter::new(),
        config.filename_prefix.clone(),
    ));
    let app = router(converter);

    let listener = tokio::net::TcpListener::bind((config.bind.as_str(), config.port)).await?;
    tracing::info!("Listening on {}:{}", config.bind, config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
