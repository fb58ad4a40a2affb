use crate::error::DocmatchError;
use crate::extraction::{write_temp_pdf, TextExtractor};
use std::process::Command;
use tracing::debug;

/// Text extraction backend using pdftotext (from poppler-utils).
///
/// Runs without `-layout` so text comes out in reading order, one text line
/// per output line. Pages stay separated by form feeds (`\x0c`).
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdftotextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, DocmatchError> {
        let tmpfile =
            write_temp_pdf(pdf_bytes).map_err(|e| DocmatchError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    DocmatchError::ToolNotFound {
                        tool: "pdftotext",
                        package: "poppler-utils",
                    }
                } else {
                    DocmatchError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(DocmatchError::ToolFailed {
                tool: "pdftotext",
                code,
                stderr,
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(bytes = text.len(), "pdftotext extracted text");
        Ok(text)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
