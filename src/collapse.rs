// WHY: Run-length collapse feeding the automaton; stretched spellings like
// "fuuuuck" must match dictionary entries while still reporting raw offsets

/// Byte-level position maps for a collapsed string. Both vectors have the
/// byte length of the collapsed output; all bytes of one kept rune share a
/// single start and end value, and `end_pos` covers any trailing repeats.
#[derive(Debug, Default)]
pub struct CollapsedPosInfo {
    /// Collapsed byte index -> start offset of the kept rune in the input.
    pub start_pos: Vec<usize>,
    /// Collapsed byte index -> end offset in the input after all repeats.
    pub end_pos: Vec<usize>,
}

/// Collapse immediate rune repetitions: "fuuuuck" becomes "fuck".
/// Returns the collapsed string and per-byte maps back to the input.
pub fn collapse_repeats(text: &str) -> (String, CollapsedPosInfo) {
    if text.is_empty() {
        return (String::new(), CollapsedPosInfo::default());
    }

    let mut result = String::with_capacity(text.len());
    let mut start_pos = Vec::with_capacity(text.len());
    let mut end_pos = Vec::with_capacity(text.len());

    let mut last_rune: Option<char> = None;
    let mut byte_pos = 0;
    let mut last_rune_end = 0;

    for c in text.chars() {
        let rune_len = c.len_utf8();
        let next_pos = byte_pos + rune_len;

        if last_rune == Some(c) {
            // Repeat of the previous rune; extend its end, emit nothing.
            last_rune_end = next_pos;
            byte_pos = next_pos;
            continue;
        }

        // Back-fill the previous kept rune's end bytes with the running end
        // cursor so trailing repeats are covered.
        if let Some(prev) = last_rune {
            let prev_len = prev.len_utf8();
            for entry in end_pos.iter_mut().skip(result.len() - prev_len) {
                *entry = last_rune_end;
            }
        }

        result.push(c);
        for _ in 0..rune_len {
            start_pos.push(byte_pos);
            end_pos.push(next_pos); // updated if repeats follow
        }

        last_rune = Some(c);
        last_rune_end = next_pos;
        byte_pos = next_pos;
    }

    if let Some(prev) = last_rune {
        let prev_len = prev.len_utf8();
        for entry in end_pos.iter_mut().skip(result.len() - prev_len) {
            *entry = last_rune_end;
        }
    }

    (result, CollapsedPosInfo { start_pos, end_pos })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_basic() {
        let cases = [
            ("", ""),
            ("abc", "abc"),
            ("aab", "ab"),
            ("aaabbb", "ab"),
            ("helllo", "helo"),
            ("aaaa", "a"),
            ("fuuuck", "fuck"),
        ];
        for (input, expected) in cases {
            let (collapsed, _) = collapse_repeats(input);
            assert_eq!(collapsed, expected, "input {input:?}");
        }
    }

    #[test]
    fn test_collapse_empty_maps() {
        let (collapsed, info) = collapse_repeats("");
        assert!(collapsed.is_empty());
        assert!(info.start_pos.is_empty());
        assert!(info.end_pos.is_empty());
    }

    #[test]
    fn test_collapse_position_maps() {
        let (collapsed, info) = collapse_repeats("heeello");
        assert_eq!(collapsed, "helo");
        assert_eq!(info.start_pos, vec![0, 1, 4, 6]);
        // The 'e' run spans bytes 1..4 and the 'l' run 4..6
        assert_eq!(info.end_pos, vec![1, 4, 6, 7]);
    }

    #[test]
    fn test_collapse_trailing_repeats() {
        let (collapsed, info) = collapse_repeats("abbb");
        assert_eq!(collapsed, "ab");
        assert_eq!(info.start_pos, vec![0, 1]);
        assert_eq!(info.end_pos, vec![1, 4]);
    }

    #[test]
    fn test_collapse_adjacent_distinct_runes() {
        let (collapsed, info) = collapse_repeats("abc");
        assert_eq!(collapsed, "abc");
        for (i, c) in collapsed.char_indices() {
            assert_eq!(info.end_pos[i] - info.start_pos[i], c.len_utf8());
        }
    }

    #[test]
    fn test_collapse_multibyte_runes() {
        let (collapsed, info) = collapse_repeats("ооох"); // Cyrillic, 2 bytes each
        assert_eq!(collapsed, "ох");
        assert_eq!(info.start_pos, vec![0, 0, 6, 6]);
        assert_eq!(info.end_pos, vec![6, 6, 8, 8]);
    }

    #[test]
    fn test_collapse_idempotent() {
        for input in ["", "abc", "aaabbb", "fuuuck", "ооох", "mississippi"] {
            let (once, _) = collapse_repeats(input);
            let (twice, _) = collapse_repeats(&once);
            assert_eq!(once, twice, "collapse not idempotent for {input:?}");
        }
    }
}
