//! # label-printer
//!
//! ZPL label printing library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ZPL command building
//! - Product label rendering (name/batch/expiry)
//! - Network printing (raw TCP, port 9100)
//!
//! Business logic (WHEN to print, validation, HTTP surfaces) stays in
//! application code:
//! - Direct printing → label-server
//! - LAN relay → label-agent
//!
//! ## Example
//!
//! ```ignore
//! use label_printer::{LabelData, NetworkPrinter};
//!
//! let label = LabelData {
//!     product_name: "Produto Teste".into(),
//!     product_batch: Some("LOTE123".into()),
//!     product_expiry: "2024-12-31".into(),
//! };
//!
//! // Send to a Zebra printer over raw TCP
//! let printer = NetworkPrinter::new("192.168.1.100", 9100)?;
//! printer.send(label.to_zpl().as_bytes()).await?;
//! ```

mod error;
mod label;
mod printer;
mod zpl;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use label::{LabelData, format_expiry};
pub use printer::{DEFAULT_TIMEOUT, NetworkPrinter};
pub use zpl::ZplBuilder;
