// WHY: Standalone normalization cascade with byte-level position tracking
// Matching runs over the normalized form; censoring needs offsets into the raw bytes

use std::borrow::Cow;

use unicode_normalization::{is_nfkc_quick, IsNormalized, UnicodeNormalization};

use crate::tables::{is_invisible, map_homoglyph, map_leetspeak};

/// Result of text normalization, carrying the mapping from normalized byte
/// positions back to the preliminary (NFKC) form.
#[derive(Debug)]
pub struct NormalizedText<'a> {
    /// Raw input text, untouched.
    pub original: &'a str,
    /// NFKC form of the input. Borrowed when NFKC is an identity on the input.
    pub preliminary: Cow<'a, str>,
    /// Lowercased, homoglyph- and leetspeak-mapped, invisible-stripped form.
    pub normalized: String,
    /// For each byte of `normalized`, the byte offset of the source rune in
    /// `preliminary`. Length equals `normalized.len()`.
    pub pos_map: Vec<usize>,
}

impl NormalizedText<'_> {
    /// True when NFKC changed the input, in which case offsets projected back
    /// through `pos_map` are approximate with respect to `original`.
    pub fn preliminary_differs(&self) -> bool {
        self.preliminary != self.original
    }
}

/// Normalize text for matching: NFKC, then a single left-to-right pass that
/// strips invisible characters, lowercases, and applies the homoglyph and
/// leetspeak tables. Each emitted byte's `pos_map` entry points at the first
/// byte of the rune in the preliminary form that produced it.
pub fn normalize_text(text: &str) -> NormalizedText<'_> {
    let preliminary: Cow<str> = match is_nfkc_quick(text.chars()) {
        IsNormalized::Yes => Cow::Borrowed(text),
        _ => Cow::Owned(text.nfkc().collect()),
    };

    let mut normalized = String::with_capacity(preliminary.len());
    let mut pos_map = Vec::with_capacity(preliminary.len());
    let mut utf8_buf = [0u8; 4];

    let mut orig_pos = 0;
    for c in preliminary.chars() {
        let rune_len = c.len_utf8();
        let start_pos = orig_pos;
        orig_pos += rune_len;

        if is_invisible(c) {
            continue;
        }

        // Lowercasing may expand a rune (e.g. İ); every emitted byte of the
        // expansion maps back to the same source rune.
        for lc in c.to_lowercase() {
            let mut mapped = lc;
            if let Some(m) = map_homoglyph(mapped) {
                mapped = m;
            }
            if let Some(m) = map_leetspeak(mapped) {
                mapped = m;
            }

            let encoded = mapped.encode_utf8(&mut utf8_buf);
            normalized.push_str(encoded);
            for _ in 0..encoded.len() {
                pos_map.push(start_pos);
            }
        }
    }

    NormalizedText {
        original: text,
        preliminary,
        normalized,
        pos_map,
    }
}
