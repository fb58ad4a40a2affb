pub mod bands;

pub use bands::WhitespaceBandLocator;

use crate::model::CandidateRegion;
use image::DynamicImage;
use tracing::debug;

/// Strategy for finding barcode candidate regions on a rendered page.
pub trait RegionLocator: Send + Sync {
    /// Return candidate regions on one page, top to bottom.
    ///
    /// `ordinal` on the returned regions is ignored;
    /// [`locate_barcode_regions`] renumbers them across the whole document.
    fn locate(&self, page_index: usize, page: &DynamicImage) -> Vec<CandidateRegion>;

    /// Name of this strategy (for diagnostics).
    fn strategy_name(&self) -> &str;
}

/// A candidate region together with the pixels cropped out of its page.
#[derive(Debug, Clone)]
pub struct LocatedRegion {
    pub region: CandidateRegion,
    pub image: DynamicImage,
}

/// Locate candidate regions on every page of a document.
///
/// Pages are processed in order and regions keep their within-page order,
/// so the returned sequence is document-wide discovery order. Each region
/// is cropped from the original page, not the grayscale copy.
pub fn locate_barcode_regions(
    pages: &[DynamicImage],
    locator: &dyn RegionLocator,
) -> Vec<LocatedRegion> {
    let mut located = Vec::new();

    for (page_index, page) in pages.iter().enumerate() {
        let regions = locator.locate(page_index, page);
        debug!(
            page = page_index + 1,
            regions = regions.len(),
            strategy = locator.strategy_name(),
            "located candidate regions"
        );

        for region in regions {
            let region = CandidateRegion {
                ordinal: located.len(),
                ..region
            };
            let image = page.crop_imm(
                region.left,
                region.top,
                region.width(),
                region.height(),
            );
            located.push(LocatedRegion { region, image });
        }
    }

    located
}
