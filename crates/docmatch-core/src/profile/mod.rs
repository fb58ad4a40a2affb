pub mod builtin;
pub mod schema;

use crate::error::DocmatchError;
use schema::ValidationProfile;
use std::path::Path;

/// Load a profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<ValidationProfile, DocmatchError> {
    let content = std::fs::read_to_string(path).map_err(|e| DocmatchError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<ValidationProfile, DocmatchError> {
    let profile: ValidationProfile =
        serde_json::from_str(json).map_err(|e| DocmatchError::ProfileLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<ValidationProfile, DocmatchError> {
    let profile: ValidationProfile = serde_json::from_str(json).map_err(DocmatchError::Json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile is usable.
pub fn validate_profile(profile: &ValidationProfile) -> Result<(), DocmatchError> {
    if profile.name.trim().is_empty() {
        return Err(DocmatchError::ProfileInvalid("name must not be empty".into()));
    }

    if profile.dpi == 0 {
        return Err(DocmatchError::ProfileInvalid("dpi must be positive".into()));
    }

    // A zero height would turn every pair of adjacent blank rows into a region.
    if profile.min_region_height == 0 {
        return Err(DocmatchError::ProfileInvalid(
            "min_region_height must be positive".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_profile_uses_defaults() {
        let json = r#"{ "name": "Labels", "version": "2" }"#;
        let p = parse_profile_str(json).unwrap();
        assert_eq!(p.name, "Labels");
        assert_eq!(p.dpi, 300);
        assert_eq!(p.whitespace_threshold, 250);
        assert_eq!(p.min_region_height, 30);
        assert_eq!(p.position_tolerance, 10);
    }

    #[test]
    fn test_parse_overrides() {
        let json = r#"{
            "name": "Coarse",
            "version": "1",
            "dpi": 150,
            "whitespace_threshold": 240,
            "min_region_height": 15,
            "position_tolerance": 5
        }"#;
        let p = parse_profile_str(json).unwrap();
        let locator = p.locator();
        assert_eq!(locator.whitespace_threshold, 240);
        assert_eq!(locator.min_region_height, 15);
        assert_eq!(p.dpi, 150);
    }

    #[test]
    fn test_zero_dpi_rejected() {
        let json = r#"{ "name": "Bad", "version": "1", "dpi": 0 }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_zero_min_height_rejected() {
        let json = r#"{ "name": "Bad", "version": "1", "min_region_height": 0 }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let json = r#"{ "name": "  ", "version": "1" }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let json = r#"{ "name": "Bad", "version": "1", "whitespace_threshold": 300 }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_load_profile_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "name": "File", "version": "1", "position_tolerance": 4 }}"#).unwrap();
        let p = load_profile(file.path()).unwrap();
        assert_eq!(p.position_tolerance, 4);
    }

    #[test]
    fn test_load_profile_missing_file() {
        let err = load_profile(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(matches!(err, DocmatchError::ProfileLoad { .. }));
    }
}
