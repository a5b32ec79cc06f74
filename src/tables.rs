// WHY: Centralized evasion-mapping tables consumed by the normalizer
// Content is fixed at compile time; the filter never mutates these

/// Check whether a rune is an invisible / zero-width character that should be
/// stripped before matching (zero-width spaces and joiners, BOM, soft hyphen,
/// directional marks, invisible operators).
pub fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{200B}' // zero-width space
        | '\u{200C}' // zero-width non-joiner
        | '\u{200D}' // zero-width joiner
        | '\u{FEFF}' // byte order mark / zero-width no-break space
        | '\u{00AD}' // soft hyphen
        | '\u{200E}' // left-to-right mark
        | '\u{200F}' // right-to-left mark
        | '\u{2060}' // word joiner
        | '\u{2061}' // function application
        | '\u{2062}' // invisible times
        | '\u{2063}' // invisible separator
        | '\u{2064}' // invisible plus
        | '\u{180E}' // Mongolian vowel separator
        | '\u{034F}' // combining grapheme joiner
    )
}

/// Map leetspeak digits and punctuation to their ASCII letter equivalents.
/// Applied after lowercasing, so only the lowercase 'v' arm fires in practice.
pub fn map_leetspeak(c: char) -> Option<char> {
    let mapped = match c {
        '@' | '4' => 'a',
        '8' => 'b',
        '3' => 'e',
        '!' | '1' | '|' => 'i',
        '0' => 'o',
        '$' | '5' => 's',
        '7' | '+' => 't',
        'v' | 'V' => 'u', // common substitution for u
        _ => return None,
    };
    Some(mapped)
}

/// Map Unicode look-alike characters to their ASCII twins.
///
/// The normalizer lowercases before looking a rune up here, so the uppercase
/// arms only fire for characters whose lowercase form is itself a key (e.g.
/// fullwidth letters). Uppercase-only arms are retained so the table stands
/// alone as a description of the look-alike set.
pub fn map_homoglyph(c: char) -> Option<char> {
    let mapped = match c {
        // Cyrillic
        'а' | 'А' => 'a',
        'е' | 'Е' | 'ё' | 'Ё' => 'e',
        'о' | 'О' => 'o',
        'р' | 'Р' => 'p',
        'с' | 'С' => 'c',
        'у' | 'У' => 'y',
        'х' | 'Х' => 'x',
        'і' | 'І' | 'ї' | 'Ї' => 'i',
        'ј' | 'Ј' => 'j',
        'ӏ' | 'Ӏ' => 'l',
        'к' | 'К' => 'k',
        'м' | 'М' => 'm',
        'Н' => 'h', // looks like H
        'т' | 'Т' => 't',
        'в' | 'В' => 'b', // looks like B
        'ѕ' | 'Ѕ' => 's',
        'ԁ' | 'Ԁ' => 'd',

        // Greek
        'Α' | 'α' => 'a',
        'Β' | 'β' => 'b',
        'Ε' | 'ε' => 'e',
        'Η' => 'h',
        'η' => 'n',
        'Ι' | 'ι' => 'i',
        'Κ' | 'κ' => 'k',
        'Μ' => 'm',
        'μ' => 'u',
        'Ν' => 'n',
        'ν' => 'v',
        'Ο' | 'ο' => 'o',
        'Ρ' | 'ρ' => 'p',
        'Τ' | 'τ' => 't',
        'Υ' => 'y',
        'υ' => 'u',
        'Χ' | 'χ' => 'x',

        // Fullwidth letters and digits
        'Ａ' | 'ａ' => 'a',
        'Ｂ' | 'ｂ' => 'b',
        'Ｃ' | 'ｃ' => 'c',
        'Ｄ' | 'ｄ' => 'd',
        'Ｅ' | 'ｅ' => 'e',
        'Ｆ' | 'ｆ' => 'f',
        'Ｇ' | 'ｇ' => 'g',
        'Ｈ' | 'ｈ' => 'h',
        'Ｉ' | 'ｉ' => 'i',
        'Ｊ' | 'ｊ' => 'j',
        'Ｋ' | 'ｋ' => 'k',
        'Ｌ' | 'ｌ' => 'l',
        'Ｍ' | 'ｍ' => 'm',
        'Ｎ' | 'ｎ' => 'n',
        'Ｏ' | 'ｏ' => 'o',
        'Ｐ' | 'ｐ' => 'p',
        'Ｑ' | 'ｑ' => 'q',
        'Ｒ' | 'ｒ' => 'r',
        'Ｓ' | 'ｓ' => 's',
        'Ｔ' | 'ｔ' => 't',
        'Ｕ' | 'ｕ' => 'u',
        'Ｖ' | 'ｖ' => 'v',
        'Ｗ' | 'ｗ' => 'w',
        'Ｘ' | 'ｘ' => 'x',
        'Ｙ' | 'ｙ' => 'y',
        'Ｚ' | 'ｚ' => 'z',
        '０' => 'o',
        '１' => 'i',
        '２' => 'z',
        '３' => 'e',
        '４' => 'a',
        '５' => 's',
        '６' => 'b',
        '７' => 't',
        '８' => 'b',
        '９' => 'g',

        // Letterlike symbols (script, black-letter, double-struck)
        'ℓ' | 'ℒ' => 'l',
        'ℐ' | 'ℑ' => 'i',
        'ℊ' => 'g',
        'ℋ' | 'ℌ' | 'ℍ' => 'h',
        'ℕ' => 'n',
        'ℙ' => 'p',
        'ℚ' => 'q',
        'ℛ' | 'ℜ' | 'ℝ' => 'r',
        'ℤ' | 'ℨ' => 'z',
        'ℬ' => 'b',
        'ℭ' => 'c',
        'ℰ' => 'e',
        'ℱ' => 'f',
        'ℳ' => 'm',

        // Enclosed/circled letters
        'Ⓐ' | 'ⓐ' => 'a',
        'Ⓑ' | 'ⓑ' => 'b',
        'Ⓒ' | 'ⓒ' => 'c',
        'Ⓓ' | 'ⓓ' => 'd',
        'Ⓔ' | 'ⓔ' => 'e',
        'Ⓕ' | 'ⓕ' => 'f',
        'Ⓖ' | 'ⓖ' => 'g',
        'Ⓗ' | 'ⓗ' => 'h',
        'Ⓘ' | 'ⓘ' => 'i',
        'Ⓙ' | 'ⓙ' => 'j',
        'Ⓚ' | 'ⓚ' => 'k',
        'Ⓛ' | 'ⓛ' => 'l',
        'Ⓜ' | 'ⓜ' => 'm',
        'Ⓝ' | 'ⓝ' => 'n',
        'Ⓞ' | 'ⓞ' => 'o',
        'Ⓟ' | 'ⓟ' => 'p',
        'Ⓠ' | 'ⓠ' => 'q',
        'Ⓡ' | 'ⓡ' => 'r',
        'Ⓢ' | 'ⓢ' => 's',
        'Ⓣ' | 'ⓣ' => 't',
        'Ⓤ' | 'ⓤ' => 'u',
        'Ⓥ' | 'ⓥ' => 'v',
        'Ⓦ' | 'ⓦ' => 'w',
        'Ⓧ' | 'ⓧ' => 'x',
        'Ⓨ' | 'ⓨ' => 'y',
        'Ⓩ' | 'ⓩ' => 'z',

        _ => return None,
    };
    Some(mapped)
}
