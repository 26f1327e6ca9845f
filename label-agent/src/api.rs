//! Relay agent HTTP API

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    middleware as axum_middleware,
    response::{IntoResponse, Response},
    routing::post,
};
use http::{HeaderName, HeaderValue};
use label_printer::{NetworkPrinter, PrintError};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::middleware;

const DEFAULT_PRINTER_PORT: u16 = 9100;

#[derive(Debug, Deserialize)]
pub struct PrintQuery {
    #[serde(rename = "printerIp")]
    printer_ip: Option<String>,
    #[serde(rename = "printerPort")]
    printer_port: Option<u16>,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Agent error type
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Printer unavailable: {0}")]
    PrinterUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AgentError {
    fn into_response(self) -> Response {
        let status = match self {
            AgentError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AgentError::PrinterUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AgentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<PrintError> for AgentError {
    fn from(err: PrintError) -> Self {
        match err {
            PrintError::Connection(_) | PrintError::Timeout(_) => {
                AgentError::PrinterUnavailable(err.to_string())
            }
            PrintError::InvalidConfig(msg) => AgentError::BadRequest(msg),
            PrintError::Io(e) => AgentError::Internal(e.to_string()),
        }
    }
}

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build the agent router
///
/// The CORS layer answers OPTIONS preflights; the browser app posts the ZPL
/// directly from its origin.
pub fn router() -> Router {
    Router::new()
        .route("/print", post(relay_print))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Request logging - outermost, executed first
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
}

/// POST /print?printerIp=&printerPort= - forward raw ZPL to a LAN printer
///
/// The body is the already-rendered ZPL text and is forwarded byte for byte.
async fn relay_print(
    Query(query): Query<PrintQuery>,
    body: String,
) -> Result<Json<MessageBody>, AgentError> {
    let printer_ip = query
        .printer_ip
        .filter(|ip| !ip.trim().is_empty())
        .ok_or_else(|| AgentError::BadRequest("Missing printerIp query parameter".into()))?;

    if body.is_empty() {
        return Err(AgentError::BadRequest(
            "No ZPL data in request body".into(),
        ));
    }

    let port = query.printer_port.unwrap_or(DEFAULT_PRINTER_PORT);
    let printer = NetworkPrinter::new(&printer_ip, port)?;

    info!(printer = %printer.addr(), bytes = body.len(), "Relaying ZPL to printer");
    printer.send(body.as_bytes()).await?;

    Ok(Json(MessageBody {
        message: "ZPL forwarded to printer".into(),
    }))
}
