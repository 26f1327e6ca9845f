//! Print API Handlers

use axum::{Json, extract::State};
use label_printer::{LabelData, NetworkPrinter};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::state::ServerState;

/// Print request body
///
/// All fields optional at the serde level so that missing required fields
/// produce a 400 with a useful message instead of a body rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintRequest {
    pub printer_ip: Option<String>,
    pub printer_port: Option<u16>,
    pub product_name: Option<String>,
    pub product_batch: Option<String>,
    pub product_expiry: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PrintResponse {
    pub message: String,
}

/// POST /api/print - Render a product label and send it to the printer
///
/// Validation happens before any network activity; the send is a single
/// attempt bounded by the configured timeout.
pub async fn print_label(
    State(state): State<ServerState>,
    Json(payload): Json<PrintRequest>,
) -> AppResult<Json<PrintResponse>> {
    let printer_ip = required(payload.printer_ip, "Printer IP is required")?;
    let product_name = required(payload.product_name, "Product name is required")?;
    let product_expiry = required(payload.product_expiry, "Product expiry is required")?;

    let label = LabelData {
        product_name,
        product_batch: payload.product_batch,
        product_expiry,
    };
    let zpl = label.to_zpl();

    let port = payload.printer_port.unwrap_or(state.config.printer_port);
    let printer =
        NetworkPrinter::new(&printer_ip, port)?.with_timeout(state.config.print_timeout());

    info!(printer = %printer.addr(), bytes = zpl.len(), "Sending label");
    printer.send(zpl.as_bytes()).await?;

    Ok(Json(PrintResponse {
        message: "Label sent to printer".to_string(),
    }))
}

fn required(value: Option<String>, msg: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(msg.to_string())),
    }
}
