pub mod pdftoppm;
pub mod pdftotext;

use crate::error::DocmatchError;
use image::DynamicImage;

/// Trait for document text extraction backends.
pub trait TextExtractor: Send + Sync {
    /// Extract the document's text in reading order, one line per text line.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, DocmatchError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Trait for page rasterization backends.
pub trait PageRenderer: Send + Sync {
    /// Render every page at `dpi`, returning images in page order.
    fn render_pages(&self, pdf_bytes: &[u8], dpi: u32) -> Result<Vec<DynamicImage>, DocmatchError>;

    /// Name of this rendering backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Write document bytes to a named temporary file for the poppler tools.
pub(crate) fn write_temp_pdf(pdf_bytes: &[u8]) -> std::io::Result<tempfile::NamedTempFile> {
    use std::io::Write;

    let mut tmpfile = tempfile::Builder::new().suffix(".pdf").tempfile()?;
    tmpfile.write_all(pdf_bytes)?;
    tmpfile.flush()?;
    Ok(tmpfile)
}
