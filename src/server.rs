//! HTTP server and the document-extraction handler

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::completion::{CohereClient, CompletionClient};
use crate::config::ServerConfig;
use crate::document::{DocumentDecoder, PdfiumDecoder};
use crate::error::{Error, Result};
use crate::extract::{build_prompt, strip_code_fences};
use crate::ocr::{OcrEngine, TesseractOcr};

/// Shared handler state.
///
/// Holds the three collaborators behind their seams; all are read-only
/// after startup, so clones are cheap `Arc` bumps and requests share no
/// mutable state.
#[derive(Clone)]
pub struct AppState {
    pub decoder: Arc<dyn DocumentDecoder>,
    pub ocr: Arc<dyn OcrEngine>,
    pub completion: Arc<dyn CompletionClient>,
}

/// Build the application router around the given state.
///
/// All origins are permitted; uploads beyond `max_upload_bytes` are
/// rejected before the handler runs.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ocr-curp", post(extract_document))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Extract structured data from one uploaded identity document.
///
/// Linear flow, terminal on every failure: multipart `file` field → page
/// images (first page only) → OCR text → prompt → model reply → cleaned
/// JSON. Nothing is persisted.
async fn extract_document(
    State(state): State<AppState>,
    multipart: Option<Multipart>,
) -> Result<Json<serde_json::Value>> {
    // A request that is not multipart at all carries no file either
    let mut multipart = multipart.ok_or(Error::MissingFile)?;

    let mut upload: Option<(Vec<u8>, Option<String>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| Error::Decode {
        reason: e.to_string(),
    })? {
        if field.name() == Some("file") {
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map_err(|e| Error::Decode {
                reason: e.to_string(),
            })?;
            upload = Some((bytes.to_vec(), content_type));
            break;
        }
    }

    let (data, content_type) = upload.ok_or(Error::MissingFile)?;

    let pages = state.decoder.decode(data, content_type.as_deref()).await?;
    let image = pages.into_iter().next().ok_or_else(|| Error::Decode {
        reason: "el documento no contiene páginas".to_string(),
    })?;

    let text = state.ocr.recognize(&image).await?;
    let reply = state.completion.chat(&build_prompt(&text)).await?;

    let cleaned = strip_code_fences(&reply);
    let record: serde_json::Value =
        serde_json::from_str(&cleaned).map_err(|_| Error::InvalidModelReply { raw: reply })?;

    Ok(Json(record))
}

/// Run the extraction server until shutdown.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState {
        decoder: Arc::new(PdfiumDecoder::new()),
        ocr: Arc::new(TesseractOcr::new(config.ocr_language.clone())),
        completion: Arc::new(CohereClient::new(
            config.api_key.clone(),
            config.model.clone(),
        )),
    };

    let app = router(state, config.max_upload_bytes);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
