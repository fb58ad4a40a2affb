use crate::error::DocmatchError;
use crate::extraction::{write_temp_pdf, PageRenderer};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

const OUTPUT_PREFIX: &str = "page";

/// Page rendering backend using pdftoppm (from poppler-utils).
///
/// Renders every page to PNG in a temporary directory and loads them back
/// with the `image` crate.
pub struct PdftoppmRenderer;

impl PdftoppmRenderer {
    pub fn new() -> Self {
        PdftoppmRenderer
    }

    /// Check if pdftoppm is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftoppm")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftoppmRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for PdftoppmRenderer {
    fn render_pages(&self, pdf_bytes: &[u8], dpi: u32) -> Result<Vec<DynamicImage>, DocmatchError> {
        let tmpfile = write_temp_pdf(pdf_bytes).map_err(|e| DocmatchError::Render(e.to_string()))?;
        let out_dir = tempfile::tempdir().map_err(|e| DocmatchError::Render(e.to_string()))?;

        // pdftoppm -r 300 -png input.pdf <dir>/page -> <dir>/page-1.png, page-2.png, ...
        let output = Command::new("pdftoppm")
            .arg("-r")
            .arg(dpi.to_string())
            .arg("-png")
            .arg(tmpfile.path())
            .arg(out_dir.path().join(OUTPUT_PREFIX))
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    DocmatchError::ToolNotFound {
                        tool: "pdftoppm",
                        package: "poppler-utils",
                    }
                } else {
                    DocmatchError::Render(format!("pdftoppm failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(DocmatchError::ToolFailed {
                tool: "pdftoppm",
                code,
                stderr,
            });
        }

        let files = collect_page_files(out_dir.path())?;
        debug!(pages = files.len(), dpi, "pdftoppm rendered pages");

        let mut pages = Vec::with_capacity(files.len());
        for path in files {
            pages.push(image::open(&path)?);
        }
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftoppm"
    }
}

/// List rendered page files ordered by page number.
///
/// pdftoppm zero-pads the page number to the width of the page count, so
/// lexical order is only right by accident; sort on the parsed number.
fn collect_page_files(dir: &Path) -> Result<Vec<PathBuf>, DocmatchError> {
    let mut numbered = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(number) = page_number(name) {
            numbered.push((number, path));
        }
    }
    numbered.sort_by_key(|(number, _)| *number);
    Ok(numbered.into_iter().map(|(_, path)| path).collect())
}

/// Parse the page number out of `page-<N>.png`.
fn page_number(file_name: &str) -> Option<usize> {
    file_name
        .strip_prefix(OUTPUT_PREFIX)?
        .strip_prefix('-')?
        .strip_suffix(".png")?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_number() {
        assert_eq!(page_number("page-1.png"), Some(1));
        assert_eq!(page_number("page-07.png"), Some(7));
        assert_eq!(page_number("page-12.png"), Some(12));
        assert_eq!(page_number("page-1.ppm"), None);
        assert_eq!(page_number("other-1.png"), None);
    }

    #[test]
    fn test_collect_page_files_numeric_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["page-10.png", "page-2.png", "page-1.png", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        let files = collect_page_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["page-1.png", "page-2.png", "page-10.png"]);
    }
}
