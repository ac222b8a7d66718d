//! Embedded word lists
//!
//! Fixed vocabulary compiled into the binary, one list per difficulty tier.
//! Every word is lowercase ASCII; the game compares answers against these
//! entries verbatim.

/// Easy tier (10 words)
pub const EASY: &[&str] = &[
    "apple", "banana", "school", "computer", "rainbow", "friend", "orange", "music", "water",
    "planet",
];

/// Medium tier (10 words)
pub const MEDIUM: &[&str] = &[
    "beautiful",
    "mountain",
    "elephant",
    "adventure",
    "language",
    "universe",
    "chocolate",
    "astronaut",
    "history",
    "butterfly",
];

/// Hard tier (10 words)
pub const HARD: &[&str] = &[
    "encyclopedia",
    "psychology",
    "architecture",
    "biochemistry",
    "transformation",
    "constitution",
    "circumference",
    "photosynthesis",
    "magnificent",
    "sustainability",
];

/// Extreme tier (10 words)
pub const EXTREME: &[&str] = &[
    "antidisestablishmentarianism",
    "floccinaucinihilipilification",
    "pseudopseudohypoparathyroidism",
    "supercalifragilisticexpialidocious",
    "hippopotomonstrosesquippedaliophobia",
    "pneumonoultramicroscopicsilicovolcanoconiosis",
    "honorificabilitudinitatibus",
    "thyroparathyroidectomized",
    "incomprehensibilities",
    "deinstitutionalization",
];
