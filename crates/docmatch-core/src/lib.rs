pub mod compare;
pub mod decode;
pub mod error;
pub mod extraction;
pub mod locate;
pub mod model;
pub mod parsing;
pub mod profile;

use decode::BarcodeDecoder;
use error::DocmatchError;
use extraction::{PageRenderer, TextExtractor};
use locate::RegionLocator;
use model::{DocumentStructure, ValidationOutcome};
use profile::schema::ValidationProfile;
use std::path::Path;
use tracing::info;

/// The external capabilities a pipeline run depends on.
#[derive(Clone, Copy)]
pub struct Backends<'a> {
    pub text: &'a dyn TextExtractor,
    pub renderer: &'a dyn PageRenderer,
    pub decoder: &'a dyn BarcodeDecoder,
    pub locator: &'a dyn RegionLocator,
}

/// Extract the structure (fields and barcodes) of a document on disk.
pub fn build_document_structure(
    path: &Path,
    backends: &Backends<'_>,
    profile: &ValidationProfile,
) -> Result<DocumentStructure, DocmatchError> {
    let pdf_bytes = std::fs::read(path)?;
    build_structure_from_bytes(&pdf_bytes, backends, profile)
}

/// Extract the structure (fields and barcodes) of an in-memory document.
///
/// Pages are rendered, located and decoded strictly in order; the barcode
/// sequence is compared positionally, so that order is part of the result.
pub fn build_structure_from_bytes(
    pdf_bytes: &[u8],
    backends: &Backends<'_>,
    profile: &ValidationProfile,
) -> Result<DocumentStructure, DocmatchError> {
    let text = backends.text.extract_text(pdf_bytes)?;
    let fields = parsing::parse_fields(&text);

    let pages = backends.renderer.render_pages(pdf_bytes, profile.dpi)?;
    let located = locate::locate_barcode_regions(&pages, backends.locator);
    let barcodes = decode::decode_regions(&located, backends.decoder)?;

    info!(
        fields = fields.len(),
        pages = pages.len(),
        barcodes = barcodes.len(),
        "document structure extracted"
    );

    Ok(DocumentStructure { fields, barcodes })
}

/// Validate a candidate document on disk against a reference document.
pub fn validate_documents(
    candidate_path: &Path,
    reference_path: &Path,
    backends: &Backends<'_>,
    profile: &ValidationProfile,
) -> Result<ValidationOutcome, DocmatchError> {
    let reference_bytes = std::fs::read(reference_path)?;
    let candidate_bytes = std::fs::read(candidate_path)?;
    validate_bytes(&candidate_bytes, &reference_bytes, backends, profile)
}

/// Validate an in-memory candidate document against a reference document.
///
/// Both documents go through independent pipeline runs; the candidate's
/// extracted fields and barcodes are returned along with the verdict.
pub fn validate_bytes(
    candidate_bytes: &[u8],
    reference_bytes: &[u8],
    backends: &Backends<'_>,
    profile: &ValidationProfile,
) -> Result<ValidationOutcome, DocmatchError> {
    let reference = build_structure_from_bytes(reference_bytes, backends, profile)?;
    let candidate = build_structure_from_bytes(candidate_bytes, backends, profile)?;

    let verdict = compare::compare_structures(&candidate, &reference, profile.position_tolerance);
    info!(valid = verdict.valid, message = %verdict.message, "structure comparison finished");

    Ok(ValidationOutcome {
        fields: candidate.fields,
        barcodes: candidate.barcodes,
        verdict,
    })
}
