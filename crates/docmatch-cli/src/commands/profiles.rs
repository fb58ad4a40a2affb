use docmatch_core::profile::builtin;
use docmatch_core::profile::schema::ValidationProfile;
use std::path::Path;

pub fn list() -> Result<(), docmatch_core::error::DocmatchError> {
    println!("Available predefined profiles:\n");
    for name in builtin::PRESETS {
        let p = builtin::load_preset(name)?;
        println!("  {:<8} {} (v{})", name, p.name, p.version);
        if let Some(ref desc) = p.description {
            println!("           {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), docmatch_core::error::DocmatchError> {
    let p = builtin::load_preset(preset)?;

    println!("{} (version {})\n", p.name, p.version);
    if let Some(ref desc) = p.description {
        println!("{}\n", desc);
    }
    print_settings(&p);

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), docmatch_core::error::DocmatchError> {
    let p = docmatch_core::profile::load_profile(file)?;

    println!("Profile '{}' (v{}) is valid.\n", p.name, p.version);
    print_settings(&p);

    // Settings that load fine but rarely make sense
    let mut warnings = Vec::new();
    if p.whitespace_threshold < 200 {
        warnings.push(format!(
            "whitespace_threshold {} treats light gray rows as blank",
            p.whitespace_threshold
        ));
    }
    if p.position_tolerance >= p.min_region_height {
        warnings.push(format!(
            "position_tolerance {} is not smaller than min_region_height {}",
            p.position_tolerance, p.min_region_height
        ));
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

fn print_settings(p: &ValidationProfile) {
    println!("  Render resolution:     {} DPI", p.dpi);
    println!("  Blank row threshold:   mean intensity > {}", p.whitespace_threshold);
    println!("  Minimum barcode band:  > {} px", p.min_region_height);
    println!("  Position tolerance:    {} px", p.position_tolerance);
}
