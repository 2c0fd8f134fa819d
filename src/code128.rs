//! # Code128 Subset B Encoding
//!
//! This module turns a product code into a symbol string that renders as a
//! scannable linear barcode when displayed in a Code128 barcode font.
//!
//! ## Symbol Layout
//!
//! | Position | Symbol | Code point |
//! |----------|--------|------------|
//! | 1 | Start B | 204 |
//! | 2..n+1 | Data characters | literal, 32-126 |
//! | n+2 | Checksum | `value + 32`, or 195-202 for reserved values |
//! | n+3 | Stop | 206 |
//!
//! The data characters are emitted verbatim; the font substitutes the
//! correct bar pattern per character. Only the checksum symbol is derived.
//!
//! ## Checksum
//!
//! Weighted modulo-103 sum: the accumulator starts at 104 (the Subset B
//! start value), then each data character adds `(code_point - 32) * i`
//! where `i` is its 1-based position. The start symbol carries weight zero.
//!
//! Checksum values 0-94 land back in printable ASCII (`value + 32`).
//! Values 95-102 correspond to the control symbols (code-set shifts, FNC
//! codes) and map to the dedicated glyph slots 195-202 that barcode fonts
//! reserve for them.
//!
//! ## Usage
//!
//! ```
//! use etiketa::code128;
//!
//! let symbols = code128::encode("HF-0042")?;
//!
//! assert_eq!(symbols.chars().count(), 10);
//! assert!(symbols.starts_with('\u{CC}'));
//! assert!(symbols.ends_with('\u{CE}'));
//! # Ok::<(), etiketa::EtiketaError>(())
//! ```
//!
//! Only Subset B is implemented. There is no character-set switching to
//! Subset A or C and no FNC1-FNC4 application identifiers.

use crate::error::EtiketaError;

/// Symbol value of the Subset B start code, seed of the checksum accumulator.
const START_B_VALUE: u32 = 104;

/// Font code point of the Subset B start symbol.
const START_GLYPH: char = '\u{CC}';

/// Font code point of the stop symbol.
const STOP_GLYPH: char = '\u{CE}';

/// Font code points for the reserved checksum values 95-102.
///
/// These are the Code128 control symbols that have no printable ASCII
/// equivalent. Index 0 corresponds to checksum value 95.
const RESERVED_GLYPHS: [char; 8] = [
    '\u{C3}', // 195
    '\u{C4}', // 196
    '\u{C5}', // 197
    '\u{C6}', // 198
    '\u{C7}', // 199
    '\u{C8}', // 200
    '\u{C9}', // 201
    '\u{CA}', // 202
];

/// First encodable code point (space).
const MIN_CODE_POINT: u32 = 32;

/// Last encodable code point (tilde).
const MAX_CODE_POINT: u32 = 126;

/// Encode `text` as a Code128 Subset B symbol string.
///
/// The result is `text` framed by the start and stop symbols, with the
/// weighted modulo-103 checksum symbol inserted before the stop. Output
/// length is always `text` length + 3.
///
/// Fails with [`EtiketaError::EmptyInput`] for empty input and
/// [`EtiketaError::InvalidCharacter`] when any character falls outside
/// printable ASCII (code points 32-126).
pub fn encode(text: &str) -> Result<String, EtiketaError> {
    if text.is_empty() {
        return Err(EtiketaError::EmptyInput);
    }

    let mut checksum = START_B_VALUE;
    for (index, character) in text.chars().enumerate() {
        let value = symbol_value(character, index + 1)?;
        checksum += value * (index as u32 + 1);
    }
    checksum %= 103;

    let mut symbols = String::with_capacity(text.len() + 6);
    symbols.push(START_GLYPH);
    symbols.push_str(text);
    symbols.push(checksum_glyph(checksum));
    symbols.push(STOP_GLYPH);
    Ok(symbols)
}

/// Symbol value (0-94) of a data character at the given 1-based position.
fn symbol_value(character: char, position: usize) -> Result<u32, EtiketaError> {
    let code_point = character as u32;
    if (MIN_CODE_POINT..=MAX_CODE_POINT).contains(&code_point) {
        Ok(code_point - MIN_CODE_POINT)
    } else {
        Err(EtiketaError::InvalidCharacter {
            character,
            code_point,
            position,
        })
    }
}

/// Font glyph for a reduced checksum value (0-102).
fn checksum_glyph(checksum: u32) -> char {
    debug_assert!(checksum <= 102);
    if checksum <= 94 {
        (checksum as u8 + MIN_CODE_POINT as u8) as char
    } else {
        RESERVED_GLYPHS[checksum as usize - 95]
    }
}
