// WHY: Candidate validation and back-projection tie the pipeline together
// Matches are found on the collapsed/normalized text but reported, boundary-
// checked, and censored against the raw bytes

use anyhow::{bail, Result};
use tracing::debug;

use crate::collapse::collapse_repeats;
use crate::matcher::AhoCorasick;
use crate::normalize::normalize_text;

/// Controls which characters of a censored word stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CensorMode {
    /// Replace every character with an asterisk.
    All = 0,
    /// Keep the first character visible (e.g. "f***").
    KeepFirst = 1,
    /// Keep the first and last characters visible (e.g. "f**k").
    KeepFirstLast = 2,
}

/// A validated profanity match, with byte offsets into the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MatchInfo {
    orig_start: usize,
    orig_end: usize,
    /// Index into the filter's pattern tables.
    pattern_index: usize,
}

/// Evasion-aware profanity filter over a fixed dictionary.
///
/// Construction collapses each dictionary entry (so stretched spellings can
/// be matched), drops entries whose collapsed form is empty, and coalesces
/// entries that collapse to the same key, keeping the first original seen.
/// `find_profanity` reports that retained original for the whole key.
#[derive(Debug)]
pub struct ProfanityFilter {
    automaton: AhoCorasick,
    /// Original (pre-collapse) surface forms, index-aligned with the
    /// automaton's collapsed patterns.
    originals: Vec<String>,
}

impl ProfanityFilter {
    /// Build a filter from dictionary surface forms.
    /// Fails on an empty dictionary.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collapsed_patterns = Vec::new();
        let mut originals = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for word in words {
            let word = word.as_ref();
            let (collapsed, _) = collapse_repeats(word);
            if collapsed.is_empty() {
                continue;
            }
            if seen.insert(collapsed.clone()) {
                collapsed_patterns.push(collapsed);
                originals.push(word.to_string());
            }
        }

        if originals.is_empty() {
            bail!("profanity dictionary is empty");
        }

        Ok(Self {
            automaton: AhoCorasick::new(collapsed_patterns),
            originals,
        })
    }

    /// True if the text contains any profanity, including evasion spellings
    /// (case tricks, leetspeak, homoglyphs, invisible characters, stretched
    /// words).
    pub fn is_profane(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        !self.find_matches(text).is_empty()
    }

    /// Dictionary entries found in the text, as their original surface forms,
    /// deduplicated in first-seen order. Empty when the text is clean.
    pub fn find_profanity(&self, text: &str) -> Vec<&str> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut seen = std::collections::HashSet::new();
        let mut found = Vec::new();
        for m in self.find_matches(text) {
            if seen.insert(m.pattern_index) {
                found.push(self.originals[m.pattern_index].as_str());
            }
        }
        found
    }

    /// Replace profanity with asterisks. Spans outside matches are copied
    /// byte-for-byte; each replaced span keeps its character count.
    pub fn censor(&self, text: &str, mode: CensorMode) -> String {
        if text.is_empty() {
            return String::new();
        }

        let matches = self.find_matches(text);
        if matches.is_empty() {
            return text.to_string();
        }

        let merged = merge_overlapping(matches);

        let mut result = String::with_capacity(text.len());
        let mut last_end = 0;

        for m in &merged {
            if m.orig_start > last_end {
                result.push_str(&text[last_end..m.orig_start]);
            }
            result.push_str(&build_asterisk_mask(&text[m.orig_start..m.orig_end], mode));
            last_end = m.orig_end;
        }
        if last_end < text.len() {
            result.push_str(&text[last_end..]);
        }

        result
    }

    /// Censor with [`CensorMode::All`].
    pub fn censor_default(&self, text: &str) -> String {
        self.censor(text, CensorMode::All)
    }

    /// Run the full pipeline: normalize, collapse, scan, then validate and
    /// back-project every candidate to raw byte offsets.
    fn find_matches(&self, text: &str) -> Vec<MatchInfo> {
        if text.is_empty() {
            return Vec::new();
        }

        let nt = normalize_text(text);
        let (collapsed, collapsed_pos) = collapse_repeats(&nt.normalized);

        let raw_matches = self.automaton.find_all(&collapsed);
        if raw_matches.is_empty() {
            return Vec::new();
        }

        let preliminary = nt.preliminary.as_ref();
        let approximate = nt.preliminary_differs();
        let mut results = Vec::new();

        for m in raw_matches {
            // Collapsed -> normalized offsets. end_pos covers trailing
            // repeats of the last matched rune.
            let normalized_start = collapsed_pos.start_pos.get(m.start).copied().unwrap_or(0);
            let normalized_end = if m.end > 0 && m.end <= collapsed_pos.end_pos.len() {
                collapsed_pos.end_pos[m.end - 1]
            } else {
                nt.normalized.len()
            };

            // Normalized -> preliminary offsets via pos_map; the end offset
            // extends over the full rune at the projected position.
            let mut orig_start = nt.pos_map.get(normalized_start).copied().unwrap_or(0);
            let mut orig_end = if normalized_end > 0 && normalized_end <= nt.pos_map.len() {
                let mut end = nt.pos_map[normalized_end - 1];
                if let Some(c) = preliminary[end..].chars().next() {
                    end += c.len_utf8();
                }
                end
            } else {
                text.len()
            };

            // NFKC changed the string: offsets are approximate, so clamp to
            // the raw byte range and snap outward to char boundaries.
            if approximate {
                orig_start = orig_start.min(text.len());
                orig_end = orig_end.min(text.len());
                while !text.is_char_boundary(orig_start) {
                    orig_start -= 1;
                }
                while !text.is_char_boundary(orig_end) {
                    orig_end += 1;
                }
            }

            // Word boundaries are checked on the RAW text: leetspeak mapping
            // turns punctuation into letters and would erase real boundaries
            // in the normalized form.
            if !is_word_boundary_before(text, orig_start)
                || !is_word_boundary_after(text, orig_end)
            {
                debug!(start = orig_start, end = orig_end, "rejected: word boundary");
                continue;
            }

            // Shape validation against the original (pre-collapse) form
            // rejects collapse collisions like "bass" -> "bas".
            let Some(segment) = nt.normalized.get(normalized_start..normalized_end) else {
                continue;
            };
            let original_pattern = &self.originals[m.pattern_index];
            if !is_valid_match(segment, original_pattern) {
                debug!(
                    segment,
                    collapsed = self.automaton.pattern(m.pattern_index),
                    pattern = %original_pattern,
                    "rejected: segment shape"
                );
                continue;
            }

            results.push(MatchInfo {
                orig_start,
                orig_end,
                pattern_index: m.pattern_index,
            });
        }

        results
    }
}

/// True when the rune immediately before `pos` is not a letter or digit.
/// The string endpoints are always boundaries.
fn is_word_boundary_before(text: &str, pos: usize) -> bool {
    if pos == 0 {
        return true;
    }
    let pos = pos.min(text.len());
    if !text.is_char_boundary(pos) {
        // Mid-rune offsets only arise from approximate NFKC projection;
        // the partial rune is not a word character.
        return true;
    }
    match text[..pos].chars().next_back() {
        Some(c) => !is_word_char(c),
        None => true,
    }
}

/// True when the rune at `pos` is not a letter or digit, or `pos` is at or
/// past the end of the text.
fn is_word_boundary_after(text: &str, pos: usize) -> bool {
    if pos >= text.len() {
        return true;
    }
    if !text.is_char_boundary(pos) {
        return true;
    }
    match text[pos..].chars().next() {
        Some(c) => !is_word_char(c),
        None => true,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Check that a normalized segment legitimately matches a pattern: it must
/// equal the pattern's original form, or be that form with one or more of
/// its runes repeated in place. Rejects collapse collisions where a clean
/// word ("bass") folds onto a dictionary key ("bas").
fn is_valid_match(segment: &str, pattern: &str) -> bool {
    if segment.len() < pattern.len() {
        return false;
    }
    if segment == pattern {
        return true;
    }

    let mut seg = segment.chars().peekable();
    for p in pattern.chars() {
        if seg.next() != Some(p) {
            return false;
        }
        // Consume any immediate repeats of the matched rune
        while seg.peek() == Some(&p) {
            seg.next();
        }
    }

    // Both must be exhausted together; leftover segment runes are not repeats
    seg.next().is_none()
}

/// Merge overlapping or touching intervals, extending ends. Input order is
/// preserved for ties (stable sort by start offset).
fn merge_overlapping(mut matches: Vec<MatchInfo>) -> Vec<MatchInfo> {
    if matches.len() <= 1 {
        return matches;
    }

    matches.sort_by_key(|m| m.orig_start);

    let mut result: Vec<MatchInfo> = Vec::with_capacity(matches.len());
    let mut iter = matches.into_iter();
    let mut current = iter.next().expect("len checked above");

    for m in iter {
        if m.orig_start <= current.orig_end {
            current.orig_end = current.orig_end.max(m.orig_end);
        } else {
            result.push(current);
            current = m;
        }
    }
    result.push(current);

    result
}

/// Mask a raw segment rune by rune; the output has the same rune count as
/// the input. `KeepFirstLast` behaves like `KeepFirst` for a single rune.
fn build_asterisk_mask(segment: &str, mode: CensorMode) -> String {
    let runes: Vec<char> = segment.chars().collect();
    if runes.is_empty() {
        return String::new();
    }

    let mut result: Vec<char> = vec!['*'; runes.len()];
    match mode {
        CensorMode::All => {}
        CensorMode::KeepFirst => {
            result[0] = runes[0];
        }
        CensorMode::KeepFirstLast => {
            result[0] = runes[0];
            if runes.len() >= 2 {
                result[runes.len() - 1] = runes[runes.len() - 1];
            }
        }
    }

    result.into_iter().collect()
}
