//! # Sticker Records
//!
//! A sticker pairs the human-readable product code with its barcode symbol
//! string and the code's prefix, one record per input line. Records are
//! assembled in input order because the downstream renderer lays stickers
//! out positionally; a code that fails to encode is set aside without
//! disturbing its siblings.

use serde::Serialize;

use crate::classify::{self, PrefixRegistry};
use crate::code128;
use crate::error::EtiketaError;

/// One render-ready sticker. Create-once, read-only.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Sticker {
    /// The product code as entered, trimmed and en-dash-normalized.
    pub code: String,
    /// Code128 Subset B symbol string for the classified payload.
    pub barcode: String,
    /// The code's prefix (text before the first hyphen).
    pub prefix: String,
}

impl Sticker {
    /// Classify and encode one product code.
    pub fn from_code(raw: &str, registry: &PrefixRegistry) -> Result<Self, EtiketaError> {
        let code = classify::normalize_code(raw);
        let payload = classify::classify(&code, registry);
        let barcode = code128::encode(&payload)?;
        Ok(Self {
            prefix: classify::prefix_of(&code).to_string(),
            code,
            barcode,
        })
    }
}

/// A code that could not be encoded, with its 1-based input position.
#[derive(Debug)]
pub struct Rejected {
    pub code: String,
    pub position: usize,
    pub error: EtiketaError,
}

/// Result of assembling a batch of codes.
///
/// `stickers` preserves the input order of the codes that encoded;
/// `rejected` records the ones that did not.
#[derive(Debug, Default)]
pub struct Batch {
    pub stickers: Vec<Sticker>,
    pub rejected: Vec<Rejected>,
}

/// Assemble stickers for a batch of codes.
///
/// Each code is classified and encoded independently; a failure is
/// recorded in [`Batch::rejected`] and never aborts or reorders the rest
/// of the batch.
pub fn assemble<I, S>(codes: I, registry: &PrefixRegistry) -> Batch
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut batch = Batch::default();
    for (index, raw) in codes.into_iter().enumerate() {
        match Sticker::from_code(raw.as_ref(), registry) {
            Ok(sticker) => batch.stickers.push(sticker),
            Err(error) => batch.rejected.push(Rejected {
                code: classify::normalize_code(raw.as_ref()),
                position: index + 1,
                error,
            }),
        }
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry() -> PrefixRegistry {
        PrefixRegistry::new(["HF-"])
    }

    #[test]
    fn test_sticker_fields() {
        let sticker = Sticker::from_code("HF-0042", &registry()).unwrap();
        assert_eq!(sticker.code, "HF-0042");
        assert_eq!(sticker.prefix, "HF");
        assert_eq!(sticker.barcode.chars().count(), 10);
    }

    #[test]
    fn test_code_keeps_dashes_even_when_payload_strips_them() {
        let sticker = Sticker::from_code("PX-0042", &registry()).unwrap();
        assert_eq!(sticker.code, "PX-0042");
        assert_eq!(sticker.prefix, "PX");
        // Payload is "PX0042": 6 data symbols + 3 framing symbols.
        assert_eq!(sticker.barcode.chars().count(), 9);
    }

    #[test]
    fn test_batch_preserves_order() {
        let batch = assemble(["HF-3", "HF-1", "HF-2"], &registry());
        let codes: Vec<_> = batch.stickers.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["HF-3", "HF-1", "HF-2"]);
        assert!(batch.rejected.is_empty());
    }

    #[test]
    fn test_batch_isolates_failures() {
        let batch = assemble(["HF-1", "bad\u{7}code", "HF-2"], &registry());
        let codes: Vec<_> = batch.stickers.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["HF-1", "HF-2"]);
        assert_eq!(batch.rejected.len(), 1);
        assert_eq!(batch.rejected[0].position, 2);
        assert!(matches!(
            batch.rejected[0].error,
            EtiketaError::InvalidCharacter { .. }
        ));
    }

    #[test]
    fn test_batch_encoding_independent_of_siblings() {
        let alone = assemble(["HF-2"], &registry());
        let together = assemble(["HF-1", "HF-2"], &registry());
        assert_eq!(alone.stickers[0], together.stickers[1]);
    }
}
