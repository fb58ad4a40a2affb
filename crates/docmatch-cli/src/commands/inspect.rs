use docmatch_core::decode::zbar::ZbarDecoder;
use docmatch_core::extraction::pdftoppm::PdftoppmRenderer;
use docmatch_core::extraction::pdftotext::PdftotextExtractor;
use docmatch_core::Backends;
use std::path::PathBuf;

use crate::commands::resolve_profile;
use crate::output;

pub fn run(
    input_file: PathBuf,
    preset: &str,
    config: Option<PathBuf>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), docmatch_core::error::DocmatchError> {
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

    let structure = docmatch_core::build_document_structure(&input_file, &backends, &profile)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&structure)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} field(s) and {} barcode(s), written to {}",
                structure.fields.len(),
                structure.barcodes.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&structure)?,
            _ => println!("{}", output::table::format_structure(&structure)),
        },
    }

    Ok(())
}
