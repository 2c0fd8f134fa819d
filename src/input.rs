//! # Code List Input
//!
//! Product codes arrive one per line of free-form text. Lines are trimmed,
//! blank lines dropped, order kept. Spreadsheet-style inputs carry a
//! column header as their first line; `skip_header` discards it.

use std::io::Read;

use crate::error::EtiketaError;

/// Extract the code list from already-loaded text.
pub fn codes_from_str(text: &str, skip_header: bool) -> Vec<String> {
    let mut codes: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if skip_header && !codes.is_empty() {
        codes.remove(0);
    }
    codes
}

/// Read the code list from a reader (file or stdin).
pub fn read_codes<R: Read>(mut reader: R, skip_header: bool) -> Result<Vec<String>, EtiketaError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(codes_from_str(&text, skip_header))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trims_and_drops_blanks() {
        let codes = codes_from_str("  HF-1 \n\n\t\nPX-2\n", false);
        assert_eq!(codes, vec!["HF-1", "PX-2"]);
    }

    #[test]
    fn test_skip_header() {
        let codes = codes_from_str("Kód produktu\nHF-1\nHF-2\n", true);
        assert_eq!(codes, vec!["HF-1", "HF-2"]);
    }

    #[test]
    fn test_skip_header_on_empty_input() {
        assert!(codes_from_str("\n  \n", true).is_empty());
    }

    #[test]
    fn test_read_codes() {
        let codes = read_codes("HF-1\nHF-2".as_bytes(), false).unwrap();
        assert_eq!(codes, vec!["HF-1", "HF-2"]);
    }
}
