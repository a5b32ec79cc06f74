// WHY: Default forbidden-word list, bound once when the default filter is
// first used. Entries are lowercase ASCII; evasion spellings are handled by
// the normalizer, not by enumerating variants here.
//
// Entries containing 'v' are avoided: the leetspeak rule rewrites v to u in
// scanned text, so such entries could never match.

/// Default dictionary of forbidden surface forms.
pub const DEFAULT_WORDS: &[&str] = &[
    "anal",
    "anus",
    "arse",
    "arsehole",
    "ass",
    "asshat",
    "asshole",
    "ballsack",
    "bastard",
    "bitch",
    "blowjob",
    "bollocks",
    "boner",
    "boob",
    "bugger",
    "bullshit",
    "bum",
    "butthole",
    "clit",
    "cock",
    "coon",
    "crap",
    "cum",
    "cunt",
    "damn",
    "dick",
    "dickhead",
    "dildo",
    "dipshit",
    "douche",
    "douchebag",
    "dumbass",
    "dyke",
    "fag",
    "faggot",
    "fellatio",
    "fuck",
    "fucker",
    "fucking",
    "goddamn",
    "handjob",
    "hell",
    "homo",
    "horseshit",
    "hussy",
    "jackass",
    "jerk",
    "jerkoff",
    "jizz",
    "kike",
    "knob",
    "labia",
    "moron",
    "motherfucker",
    "nigga",
    "nigger",
    "nipple",
    "nutsack",
    "penis",
    "piss",
    "pissed",
    "prick",
    "pube",
    "pussy",
    "queef",
    "rectum",
    "retard",
    "scrotum",
    "semen",
    "shit",
    "shithead",
    "skank",
    "slut",
    "smegma",
    "spunk",
    "tit",
    "tits",
    "turd",
    "twat",
    "wank",
    "wanker",
    "whore",
];
