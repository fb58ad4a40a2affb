use crate::error::DocmatchError;
use crate::profile::schema::ValidationProfile;

const DEFAULT_JSON: &str = include_str!("../../../../profiles/default.json");
const STRICT_JSON: &str = include_str!("../../../../profiles/strict.json");

/// Available predefined profiles.
pub const PRESETS: &[&str] = &["default", "strict"];

/// Load a predefined profile by name.
pub fn load_preset(name: &str) -> Result<ValidationProfile, DocmatchError> {
    let json = match name {
        "default" => DEFAULT_JSON,
        "strict" => STRICT_JSON,
        _ => {
            return Err(DocmatchError::ProfileInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let profile: ValidationProfile = serde_json::from_str(json)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_preset() {
        let p = load_preset("default").unwrap();
        let defaults = ValidationProfile::default();
        assert_eq!(p.dpi, defaults.dpi);
        assert_eq!(p.whitespace_threshold, defaults.whitespace_threshold);
        assert_eq!(p.min_region_height, defaults.min_region_height);
        assert_eq!(p.position_tolerance, defaults.position_tolerance);
    }

    #[test]
    fn test_strict_preset_tightens_tolerance() {
        let p = load_preset("strict").unwrap();
        assert_eq!(p.position_tolerance, 3);
        assert_eq!(p.dpi, 300);
    }

    #[test]
    fn test_all_presets_load_and_validate() {
        for name in PRESETS {
            let p = load_preset(name).unwrap();
            crate::profile::validate_profile(&p).unwrap();
        }
    }

    #[test]
    fn test_unknown_preset() {
        let err = load_preset("xyz").unwrap_err();
        assert!(err.to_string().contains("default, strict"));
    }
}
