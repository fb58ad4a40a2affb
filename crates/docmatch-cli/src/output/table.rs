use docmatch_core::model::{BarcodeResult, DocumentStructure, FieldMapping, ValidationOutcome};

pub fn print_outcome(outcome: &ValidationOutcome) {
    let status = if outcome.verdict.valid {
        "VALID"
    } else {
        "INVALID"
    };
    println!("=== {} ===\n", status);
    println!("  {}\n", outcome.verdict.message);

    print!("{}", format_fields(&outcome.fields));
    println!();
    print!("{}", format_barcodes(&outcome.barcodes));
}

pub fn format_structure(structure: &DocumentStructure) -> String {
    let mut out = format_fields(&structure.fields);
    out.push('\n');
    out.push_str(&format_barcodes(&structure.barcodes));
    out
}

fn format_fields(fields: &FieldMapping) -> String {
    if fields.is_empty() {
        return "Fields: none\n".to_string();
    }

    let max_key = fields.keys().map(|k| k.chars().count()).max().unwrap_or(10);

    let mut out = format!("Fields ({}):\n", fields.len());
    for entry in fields.iter() {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            entry.key,
            entry.value,
            width = max_key
        ));
    }
    out
}

fn format_barcodes(barcodes: &[BarcodeResult]) -> String {
    if barcodes.is_empty() {
        return "Barcodes: none\n".to_string();
    }

    let mut out = format!("Barcodes ({}):\n", barcodes.len());
    for (i, b) in barcodes.iter().enumerate() {
        out.push_str(&format!(
            "  {:>3}. page {:<3} at ({}, {}) {}x{}  {}\n",
            i + 1,
            b.region.page_index + 1,
            b.region.left,
            b.region.top,
            b.region.width(),
            b.region.height(),
            b.payload
        ));
    }
    out
}
