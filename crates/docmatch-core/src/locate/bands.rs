use crate::locate::RegionLocator;
use crate::model::CandidateRegion;
use image::{DynamicImage, GrayImage};

pub const DEFAULT_WHITESPACE_THRESHOLD: u8 = 250;
pub const DEFAULT_MIN_REGION_HEIGHT: u32 = 30;

/// Finds barcodes by horizontal whitespace banding.
///
/// A row whose mean intensity exceeds `whitespace_threshold` is blank. Any
/// stretch of more than `min_region_height` rows between two blank rows is
/// taken to be a barcode. This only holds for pages where barcodes are the
/// sole non-blank content and are separated by blank margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceBandLocator {
    pub whitespace_threshold: u8,
    pub min_region_height: u32,
}

impl Default for WhitespaceBandLocator {
    fn default() -> Self {
        WhitespaceBandLocator {
            whitespace_threshold: DEFAULT_WHITESPACE_THRESHOLD,
            min_region_height: DEFAULT_MIN_REGION_HEIGHT,
        }
    }
}

impl RegionLocator for WhitespaceBandLocator {
    fn locate(&self, page_index: usize, page: &DynamicImage) -> Vec<CandidateRegion> {
        let gray = page.to_luma8();
        let bands = find_whitespace_bands(&gray, self.whitespace_threshold);
        regions_between_bands(&bands, self.min_region_height, gray.width(), page_index)
    }

    fn strategy_name(&self) -> &str {
        "whitespace-bands"
    }
}

/// Row indices whose mean intensity is strictly above `threshold`.
///
/// Compares `sum > threshold * width` to stay in integers.
pub fn find_whitespace_bands(gray: &GrayImage, threshold: u8) -> Vec<u32> {
    let width = gray.width() as usize;
    if width == 0 {
        return Vec::new();
    }
    let limit = u64::from(threshold) * width as u64;

    gray.as_raw()
        .chunks_exact(width)
        .enumerate()
        .filter(|(_, row)| row.iter().map(|&p| u64::from(p)).sum::<u64>() > limit)
        .map(|(y, _)| y as u32)
        .collect()
}

/// Full-width regions between adjacent bands more than `min_height` apart.
pub fn regions_between_bands(
    bands: &[u32],
    min_height: u32,
    width: u32,
    page_index: usize,
) -> Vec<CandidateRegion> {
    bands
        .windows(2)
        .filter(|pair| pair[1] - pair[0] > min_height)
        .map(|pair| CandidateRegion {
            page_index,
            ordinal: 0,
            left: 0,
            top: pair[0],
            right: width,
            bottom: pair[1],
        })
        .collect()
}
