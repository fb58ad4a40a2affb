use crate::decode::BarcodeDecoder;
use crate::error::DocmatchError;
use image::{DynamicImage, ImageFormat};
use std::process::Command;

/// Exit status zbarimg uses when the image was read but held no symbol.
const ZBAR_NO_SYMBOLS: i32 = 4;

/// Barcode decoding backend using zbarimg (from zbar-tools).
///
/// Covers the common 1D symbologies plus QR codes. Each region is written
/// to a temporary PNG and decoded with `zbarimg --raw -q`.
pub struct ZbarDecoder;

impl ZbarDecoder {
    pub fn new() -> Self {
        ZbarDecoder
    }

    /// Check if zbarimg is available on the system.
    pub fn is_available() -> bool {
        Command::new("zbarimg")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl Default for ZbarDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BarcodeDecoder for ZbarDecoder {
    fn decode(&self, region: &DynamicImage) -> Result<Option<String>, DocmatchError> {
        let tmpfile = tempfile::Builder::new().suffix(".png").tempfile()?;
        region.save_with_format(tmpfile.path(), ImageFormat::Png)?;

        let output = Command::new("zbarimg")
            .arg("--raw")
            .arg("-q")
            .arg(tmpfile.path())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    DocmatchError::ToolNotFound {
                        tool: "zbarimg",
                        package: "zbar-tools",
                    }
                } else {
                    DocmatchError::Io(e)
                }
            })?;

        match output.status.code() {
            Some(0) => Ok(first_payload(&String::from_utf8_lossy(&output.stdout))),
            Some(ZBAR_NO_SYMBOLS) => Ok(None),
            code => Err(DocmatchError::ToolFailed {
                tool: "zbarimg",
                code: code.unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            }),
        }
    }

    fn backend_name(&self) -> &str {
        "zbarimg"
    }
}

/// First non-empty line of zbarimg's `--raw` output.
fn first_payload(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim_end)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}
