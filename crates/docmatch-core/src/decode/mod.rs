pub mod zbar;

use crate::error::DocmatchError;
use crate::locate::LocatedRegion;
use crate::model::BarcodeResult;
use image::DynamicImage;
use tracing::{debug, info};

/// Trait for barcode symbol decoding backends.
pub trait BarcodeDecoder: Send + Sync {
    /// Try to decode one barcode from a cropped region.
    ///
    /// `Ok(None)` means no symbol was found. `Err` is reserved for the
    /// backend itself being unusable.
    fn decode(&self, region: &DynamicImage) -> Result<Option<String>, DocmatchError>;

    /// Name of this decoding backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Decode every located region, in order.
///
/// Regions that decode to nothing are dropped together with their position,
/// so an unreadable barcode looks exactly like a missing one and only shows
/// up later as a count or position mismatch.
pub fn decode_regions(
    located: &[LocatedRegion],
    decoder: &dyn BarcodeDecoder,
) -> Result<Vec<BarcodeResult>, DocmatchError> {
    let mut results = Vec::with_capacity(located.len());

    for item in located {
        match decoder.decode(&item.image)? {
            Some(payload) => results.push(BarcodeResult {
                payload,
                region: item.region,
            }),
            None => debug!(
                region = %item.region,
                backend = decoder.backend_name(),
                "no barcode decoded, region dropped"
            ),
        }
    }

    info!(
        regions = located.len(),
        decoded = results.len(),
        dropped = located.len() - results.len(),
        "barcode decoding finished"
    );

    Ok(results)
}
