//! ZPL command builder
//!
//! Provides a fluent API for building ZPL print data.

/// ZPL command builder
///
/// Builds the text command stream for Zebra printers. Commands are
/// newline-separated; the printer parses up to the `^XZ` end marker.
pub struct ZplBuilder {
    buf: String,
}

impl ZplBuilder {
    /// Create a new builder, starting a label format (^XA)
    pub fn new() -> Self {
        let mut buf = String::with_capacity(256);
        buf.push_str("^XA\n");
        Self { buf }
    }

    /// Switch text encoding to UTF-8 (^CI28), needed for accented characters
    pub fn utf8(&mut self) -> &mut Self {
        self.buf.push_str("^CI28\n");
        self
    }

    /// Write a text field at the given origin with font height/width in dots
    ///
    /// Emits `^FOx,y^A0N,h,w^FD<text>^FS`.
    pub fn text_field(&mut self, x: u32, y: u32, h: u32, w: u32, text: &str) -> &mut Self {
        self.buf
            .push_str(&format!("^FO{},{}^A0N,{},{}^FD{}^FS\n", x, y, h, w, text));
        self
    }

    /// End the label format (^XZ) and return the command stream
    pub fn finish(mut self) -> String {
        self.buf.push_str("^XZ\n");
        self.buf
    }
}

impl Default for ZplBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_label() {
        let zpl = ZplBuilder::new().finish();
        assert_eq!(zpl, "^XA\n^XZ\n");
    }

    #[test]
    fn test_text_field() {
        let mut builder = ZplBuilder::new();
        builder.utf8();
        builder.text_field(50, 50, 35, 35, "Prod: Teste");
        let zpl = builder.finish();
        assert_eq!(zpl, "^XA\n^CI28\n^FO50,50^A0N,35,35^FDProd: Teste^FS\n^XZ\n");
    }
}
