use crate::model::{CandidateRegion, DocumentStructure, FieldMapping, Mismatch, Verdict};

/// Maximum pixel drift of a barcode's top-left corner before it counts as moved.
pub const DEFAULT_POSITION_TOLERANCE: u32 = 10;

/// Compare a candidate document's structure against a reference.
///
/// See [`compare_fields_and_positions`] for the checks performed.
pub fn compare_structures(
    candidate: &DocumentStructure,
    reference: &DocumentStructure,
    tolerance: u32,
) -> Verdict {
    compare_fields_and_positions(
        &candidate.fields,
        &candidate.barcode_positions(),
        &reference.fields,
        &reference.barcode_positions(),
        tolerance,
    )
}

/// Run the structural checks in priority order and report the first failure.
///
/// 1. every reference key exists in the candidate
/// 2. the key sequences are identical
/// 3. the barcode counts are equal
/// 4. each barcode's `(left, top)` is within `tolerance` of its reference
pub fn compare_fields_and_positions(
    candidate_fields: &FieldMapping,
    candidate_positions: &[CandidateRegion],
    reference_fields: &FieldMapping,
    reference_positions: &[CandidateRegion],
    tolerance: u32,
) -> Verdict {
    let missing: Vec<String> = reference_fields
        .keys()
        .filter(|k| !candidate_fields.contains_key(k))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Verdict::fail(Mismatch::MissingKeys { keys: missing });
    }

    if !candidate_fields.keys().eq(reference_fields.keys()) {
        return Verdict::fail(Mismatch::KeyOrder);
    }

    if candidate_positions.len() != reference_positions.len() {
        return Verdict::fail(Mismatch::BarcodeCount {
            expected: reference_positions.len(),
            found: candidate_positions.len(),
        });
    }

    for (i, (reference, candidate)) in reference_positions
        .iter()
        .zip(candidate_positions)
        .enumerate()
    {
        if has_moved(reference.position(), candidate.position(), tolerance) {
            return Verdict::fail(Mismatch::BarcodeMoved {
                index: i + 1,
                expected: reference.position(),
                found: candidate.position(),
            });
        }
    }

    Verdict::pass()
}

fn has_moved(expected: (u32, u32), found: (u32, u32), tolerance: u32) -> bool {
    expected.0.abs_diff(found.0) > tolerance || expected.1.abs_diff(found.1) > tolerance
}
