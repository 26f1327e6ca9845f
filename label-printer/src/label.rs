//! Product label rendering
//!
//! Renders the fixed product label layout (name/batch/expiry) to ZPL.

use crate::zpl::ZplBuilder;
use serde::{Deserialize, Serialize};

/// Maximum characters printed for the product name
const MAX_NAME_CHARS: usize = 20;
/// Maximum characters printed for the batch code
const MAX_BATCH_CHARS: usize = 15;

/// Product label payload
///
/// Wire names match the web form fields (camelCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelData {
    pub product_name: String,
    #[serde(default)]
    pub product_batch: Option<String>,
    pub product_expiry: String,
}

impl LabelData {
    /// Render this label to a ZPL command stream
    ///
    /// Name and batch are truncated to fit the label; a missing batch
    /// prints as "N/A". The expiry date is reformatted by [`format_expiry`].
    pub fn to_zpl(&self) -> String {
        let name = truncate_chars(&self.product_name, MAX_NAME_CHARS);
        let batch = self
            .product_batch
            .as_deref()
            .map(|b| truncate_chars(b, MAX_BATCH_CHARS))
            .unwrap_or("N/A");
        let expiry = format_expiry(&self.product_expiry);

        let mut builder = ZplBuilder::new();
        builder.utf8();
        builder.text_field(50, 50, 35, 35, &format!("Prod: {}", name));
        builder.text_field(50, 100, 30, 30, &format!("Lote: {}", batch));
        builder.text_field(50, 150, 30, 30, &format!("Val: {}", expiry));
        builder.finish()
    }
}

/// Reformat an ISO expiry date for the label
///
/// `YYYY-MM-DD` becomes `DD/MM/YYYY`; anything that is not a valid ISO date
/// passes through unchanged.
pub fn format_expiry(expiry: &str) -> String {
    match chrono::NaiveDate::parse_from_str(expiry, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => expiry.to_string(),
    }
}

/// Truncate to at most `max` characters, respecting char boundaries
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str, batch: Option<&str>, expiry: &str) -> LabelData {
        LabelData {
            product_name: name.to_string(),
            product_batch: batch.map(|b| b.to_string()),
            product_expiry: expiry.to_string(),
        }
    }

    #[test]
    fn test_render_full_label() {
        let zpl = label("Produto Teste", Some("LOTE123"), "2024-12-31").to_zpl();
        assert_eq!(
            zpl,
            "^XA\n\
             ^CI28\n\
             ^FO50,50^A0N,35,35^FDProd: Produto Teste^FS\n\
             ^FO50,100^A0N,30,30^FDLote: LOTE123^FS\n\
             ^FO50,150^A0N,30,30^FDVal: 31/12/2024^FS\n\
             ^XZ\n"
        );
    }

    #[test]
    fn test_missing_batch_prints_na() {
        let zpl = label("Produto", None, "2024-12-31").to_zpl();
        assert!(zpl.contains("^FDLote: N/A^FS"));
    }

    #[test]
    fn test_name_truncated_to_20_chars() {
        let zpl = label("ABCDEFGHIJKLMNOPQRSTUVWXY", None, "2024-12-31").to_zpl();
        assert!(zpl.contains("^FDProd: ABCDEFGHIJKLMNOPQRST^FS"));
        assert!(!zpl.contains("ABCDEFGHIJKLMNOPQRSTU"));
    }

    #[test]
    fn test_batch_truncated_to_15_chars() {
        let zpl = label("Produto", Some("0123456789ABCDEFGH"), "2024-12-31").to_zpl();
        assert!(zpl.contains("^FDLote: 0123456789ABCDE^FS"));
    }

    #[test]
    fn test_truncation_respects_multibyte_chars() {
        let name = "Pão".repeat(10); // 30 chars, multibyte 'ã'
        let zpl = label(&name, None, "2024-12-31").to_zpl();
        assert!(zpl.contains("^FDProd: PãoPãoPãoPãoPãoPãoPã^FS"));
    }

    #[test]
    fn test_format_expiry_iso_date() {
        assert_eq!(format_expiry("2024-12-31"), "31/12/2024");
        assert_eq!(format_expiry("2025-01-05"), "05/01/2025");
    }

    #[test]
    fn test_format_expiry_passthrough() {
        // Already formatted, free text, and invalid calendar dates stay as-is
        assert_eq!(format_expiry("31/12/2024"), "31/12/2024");
        assert_eq!(format_expiry("soon"), "soon");
        assert_eq!(format_expiry("2024-13-45"), "2024-13-45");
        assert_eq!(format_expiry(""), "");
    }

    #[test]
    fn test_wire_field_names() {
        let data: LabelData = serde_json::from_str(
            r#"{"productName":"Queijo","productBatch":"L1","productExpiry":"2024-12-31"}"#,
        )
        .unwrap();
        assert_eq!(data.product_name, "Queijo");
        assert_eq!(data.product_batch.as_deref(), Some("L1"));

        // batch is optional on the wire
        let data: LabelData =
            serde_json::from_str(r#"{"productName":"Queijo","productExpiry":"2024-12-31"}"#)
                .unwrap();
        assert!(data.product_batch.is_none());
    }
}
