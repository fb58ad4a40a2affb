use docmatch_core::error::DocmatchError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), DocmatchError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
