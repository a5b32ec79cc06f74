// End-to-end tests for the public filter API over the default dictionary
// WHY: Evasion handling and false-positive rejection only show up when the
// whole pipeline runs together

use std::sync::Once;

use muzzle::{censor, censor_default, find_profanity, is_profane, CensorMode};

static INIT: Once = Once::new();

// WHY: candidate rejections are logged at debug level; a test-writer
// subscriber makes them visible under --nocapture when a case disagrees
fn init_diagnostics() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

#[test]
fn test_is_profane_detection() {
    init_diagnostics();
    let cases = [
        // Empty and clean text
        ("", false),
        ("Hello, how are you today?", false),
        ("The quick brown fox jumps over the lazy dog.", false),
        // Basic detection
        ("What the fuck", true),
        ("This is shit", true),
        ("Damn it all", true),
        ("fuck this", true),
        ("oh shit", true),
        ("what the hell is this", true),
        // Case insensitivity
        ("WHAT THE FUCK", true),
        ("What the FuCk", true),
        // Leetspeak
        ("What the fvck", true),
        ("This is sh1t", true),
        ("You are an @ss", true),
        ("sh!t", true),
        ("a$$", true),
        ("a55", true),
        ("wh4t th3 fvck 1s g01ng 0n?", true),
        // '@' maps to 'a', so this reads "fack", not "fuck"
        ("f@ck", false),
        // '(' is not in the leetspeak table
        ("fu(k", false),
        ("Hello world", false),
        // Stretched spellings
        ("What the fuuuuck", true),
        ("Oh shiiiit", true),
        // "assss" collapses past the doubled s of "ass"
        ("what an assss", false),
        // Word-boundary false positives
        ("I play bass guitar", false),
        ("This is a class", false),
        ("The assassin struck", false),
        ("The analyst reviewed it", false),
        ("Enter your password", false),
        ("Welcome to Scunthorpe", false),
        // Homoglyphs map to their ASCII twins, not to profanity
        ("fаck you", false),  // Cyrillic а -> "fack"
        ("shоt", false),      // Cyrillic о -> "shot"
        ("ｆuck", false),      // NFKC shifts offsets; boundary check rejects
        // Invisible characters
        ("fu\u{200B}ck", true),
        ("sh\u{200D}it", true),
        // Multiple hits and punctuation edges
        ("fuck this shit", true),
        ("fuck", true),
        ("fuck!", true),
        ("(shit)", true),
        (" fuck ", true),
        ("\tfuck\t", true),
        ("\nfuck\n", true),
    ];

    for (text, expected) in cases {
        assert_eq!(is_profane(text), expected, "text {text:?}");
    }
}

#[test]
fn test_censor_modes() {
    let cases = [
        ("", CensorMode::All, ""),
        ("", CensorMode::KeepFirst, ""),
        ("", CensorMode::KeepFirstLast, ""),
        ("Hello world", CensorMode::All, "Hello world"),
        ("What the fuck", CensorMode::All, "What the ****"),
        ("This is shit", CensorMode::All, "This is ****"),
        ("fuck this shit", CensorMode::All, "**** this ****"),
        ("What the fuck", CensorMode::KeepFirst, "What the f***"),
        ("This is shit", CensorMode::KeepFirst, "This is s***"),
        ("What the fuck", CensorMode::KeepFirstLast, "What the f**k"),
        ("This is shit", CensorMode::KeepFirstLast, "This is s**t"),
        ("Oh ass", CensorMode::KeepFirstLast, "Oh a*s"),
        ("before fuck after", CensorMode::All, "before **** after"),
        ("What the fuck!", CensorMode::All, "What the ****!"),
        ("A a A", CensorMode::All, "A a A"),
    ];

    for (text, mode, expected) in cases {
        assert_eq!(censor(text, mode), expected, "text {text:?} mode {mode:?}");
    }
}

#[test]
fn test_censor_default_is_all_mode() {
    let cases = [
        ("", ""),
        ("clean text", "clean text"),
        ("What the fuck", "What the ****"),
        ("fuck shit", "**** ****"),
    ];
    for (text, expected) in cases {
        assert_eq!(censor_default(text), expected, "text {text:?}");
    }
}

#[test]
fn test_censor_masks_stretched_spellings_whole() {
    assert_eq!(censor_default("fuuuuuck"), "********");
    assert_eq!(censor_default("oh fuuuck!"), "oh ******!");
}

#[test]
fn test_censor_masks_invisible_spans_per_rune() {
    // The zero-width space is one rune of the five-rune span
    assert_eq!(censor_default("fu\u{200B}ck"), "*****");
}

#[test]
fn test_find_profanity_originals() {
    assert_eq!(find_profanity(""), Vec::<&str>::new());
    assert_eq!(find_profanity("Hello world"), Vec::<&str>::new());
    assert_eq!(find_profanity("What the fuck"), vec!["fuck"]);
    assert_eq!(find_profanity("fuck this shit"), vec!["fuck", "shit"]);
    // Evasion spellings resolve to the dictionary original
    assert_eq!(find_profanity("fvck this sh1t"), vec!["fuck", "shit"]);
    // Repeats of the same entry are reported once
    assert_eq!(find_profanity("shit and more shit"), vec!["shit"]);
}

#[test]
fn test_clean_text_is_untouched() {
    init_diagnostics();
    let clean = [
        "The quick brown fox jumps over the lazy dog.",
        "I play bass guitar in a classy band.",
        "Enter your password, analyst.",
        "",
        "日本語のテキスト",
    ];
    for text in clean {
        assert!(!is_profane(text), "text {text:?}");
        assert!(find_profanity(text).is_empty(), "text {text:?}");
        for mode in [
            CensorMode::All,
            CensorMode::KeepFirst,
            CensorMode::KeepFirstLast,
        ] {
            assert_eq!(censor(text, mode), text, "text {text:?}");
        }
    }
}

#[test]
fn test_censor_preserves_rune_count() {
    let texts = [
        "What the fuck",
        "fuck this shit",
        "fuuuuuck",
        "fu\u{200B}ck yourself",
        "sh!t happens",
        "a$$ and ⓢhenanigans",
        "clean text stays clean",
    ];
    for text in texts {
        for mode in [
            CensorMode::All,
            CensorMode::KeepFirst,
            CensorMode::KeepFirstLast,
        ] {
            assert_eq!(
                censor(text, mode).chars().count(),
                text.chars().count(),
                "text {text:?} mode {mode:?}"
            );
        }
    }
}

#[test]
fn test_censor_preserves_non_match_spans() {
    let text = "before fuck middle shit after";
    let censored = censor_default(text);
    assert_eq!(censored.len(), text.len());
    for (out, orig) in censored.bytes().zip(text.bytes()) {
        assert!(out == orig || out == b'*');
    }
    assert!(censored.starts_with("before "));
    assert!(censored.ends_with(" after"));
    assert!(censored.contains(" middle "));
}

#[test]
fn test_censored_output_is_clean() {
    let texts = ["What the fuck", "fuck this shit", "fuuuuuck", "sh1t a$$"];
    for text in texts {
        let censored = censor(text, CensorMode::All);
        assert!(!is_profane(&censored), "censored {censored:?}");
        assert!(find_profanity(&censored).is_empty(), "censored {censored:?}");
    }
}

#[test]
fn test_invalid_utf8_cannot_occur_but_replacement_rune_is_clean() {
    // Lossy decoding of invalid bytes yields U+FFFD, which no dictionary
    // entry contains
    let text = String::from_utf8_lossy(b"fu\xFF\xFEck").into_owned();
    assert!(!is_profane(&text));
    assert_eq!(censor_default(&text), text);
}
