use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use cardscan_core::CountryCode;
use chrono::Utc;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

const STDIN_MARKER: &str = "-";

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

/// Reads OCR text from `path`, or from stdin when absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new(STDIN_MARKER) => {
            if !path.exists() {
                return Err(not_found(format!("input file {}", path.display())));
            }
            fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))
        }
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .with_context(|| "read stdin")?;
            Ok(buffer)
        }
    }
}

pub fn resolve_country(override_code: Option<&str>, default: &CountryCode) -> Result<CountryCode> {
    match override_code {
        Some(raw) => CountryCode::new(raw)
            .map_err(|_| invalid_input(format!("invalid country code: {raw}"))),
        None => Ok(default.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_country;
    use cardscan_core::CountryCode;

    #[test]
    fn resolve_country_prefers_override() {
        let default = CountryCode::malaysia();
        let code = resolve_country(Some("+65"), &default).expect("override");
        assert_eq!(code.digits(), "65");
        assert_eq!(resolve_country(None, &default).expect("default"), default);
        assert!(resolve_country(Some("sg"), &default).is_err());
    }
}
