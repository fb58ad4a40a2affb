use docmatch_core::decode::zbar::ZbarDecoder;
use docmatch_core::extraction::pdftoppm::PdftoppmRenderer;
use docmatch_core::extraction::pdftotext::PdftotextExtractor;
use docmatch_core::Backends;
use std::path::PathBuf;

use crate::commands::resolve_profile;
use crate::output;

/// Returns whether the candidate's structure matched the reference.
pub fn run(
    input_file: PathBuf,
    reference_file: PathBuf,
    preset: &str,
    config: Option<PathBuf>,
    output_format: &str,
) -> Result<bool, docmatch_core::error::DocmatchError> {
    let profile = resolve_profile(preset, config)?;

    let extractor = PdftotextExtractor::new();
    let renderer = PdftoppmRenderer::new();
    let decoder = ZbarDecoder::new();
    let locator = profile.locator();
    let backends = Backends {
        text: &extractor,
        renderer: &renderer,
        decoder: &decoder,
        locator: &locator,
    };

    let outcome =
        docmatch_core::validate_documents(&input_file, &reference_file, &backends, &profile)?;

    match output_format {
        "json" => output::json::print(&outcome)?,
        _ => output::table::print_outcome(&outcome),
    }

    Ok(outcome.verdict.valid)
}
