//! Static pattern catalog: ordered (class, shapes, score) table.
//!
//! Classification is first-match-wins against this table, tested top to
//! bottom. A window matching `open-four` never also reports `closed-four`
//! because classification stops at the first hit.

/// A line classification, in catalog priority order (highest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PatternClass {
    Five,
    OpenFour,
    ClosedFour,
    OpenThree,
    ClosedThree,
    OpenTwo,
    ClosedTwo,
    OpenOne,
    ClosedOne,
}

impl PatternClass {
    pub fn score(self) -> i32 {
        match self {
            PatternClass::Five => FIVE,
            PatternClass::OpenFour => 1_000_000,
            PatternClass::ClosedFour => 9_000,
            PatternClass::OpenThree => 10_000,
            PatternClass::ClosedThree => 30,
            PatternClass::OpenTwo => 100,
            PatternClass::ClosedTwo => 10,
            PatternClass::OpenOne => 80,
            PatternClass::ClosedOne => 1,
        }
    }
}

pub const FIVE: i32 = 10_000_000;
pub const LOW_RISK: i32 = 100_000;
pub const MIDDLE_RISK: i32 = 500_000;
pub const HIGH_RISK: i32 = 800_000;

struct Entry {
    class: PatternClass,
    shapes: &'static [&'static str],
}

/// Catalog order is the classification order: first entry whose shape set
/// (literal or mirrored) contains the window as a substring wins. Mirroring
/// is applied at match time rather than hand-doubling every shape, since a
/// line reads the same forwards and backwards.
const CATALOG: &[Entry] = &[
    Entry {
        class: PatternClass::Five,
        shapes: &["XXXXX"],
    },
    Entry {
        class: PatternClass::OpenFour,
        shapes: &["_XXXX_"],
    },
    Entry {
        class: PatternClass::ClosedFour,
        shapes: &[
            "_XXXX", "X_XXX", "XX_XX", "XXX_X", "XXXX_", "#XXXX_", "#XXX_X", "#XX_XX", "#X_XXX",
            "_XXXX#", "X_XXX#", "XX_XX#", "XXX_X#",
        ],
    },
    Entry {
        class: PatternClass::OpenThree,
        shapes: &["_XXX__", "_XX_X_", "_X_XX_", "__XXX_"],
    },
    Entry {
        class: PatternClass::ClosedThree,
        shapes: &["#XXX__", "#XX_X_", "#X_XX_", "__XXX#", "_X_XX#", "_XX_X#"],
    },
    Entry {
        class: PatternClass::OpenTwo,
        shapes: &["__XX__", "_XX___", "___XX_", "_X_X__", "__X_X_"],
    },
    Entry {
        class: PatternClass::ClosedTwo,
        shapes: &[
            "_XX#__", "__XX#_", "__#XX_", "_#XX__", "___XX#", "#XX___", "XX____", "____XX",
        ],
    },
    Entry {
        class: PatternClass::OpenOne,
        shapes: &["__X__", "_X___", "___X_"],
    },
    Entry {
        class: PatternClass::ClosedOne,
        shapes: &[
            "__X#__", "__#X__", "_#_X__", "___#X_", "___X#_", "__X_#_", "#X____", "____X#",
        ],
    },
];

fn mirror(shape: &str) -> String {
    shape.chars().rev().collect()
}

/// Classify a 9-character window against the catalog, returning the first
/// matching class in priority order, or `None` if nothing matches.
pub fn classify(window: &str) -> Option<PatternClass> {
    for entry in CATALOG {
        for &shape in entry.shapes {
            if window.contains(shape) || window.contains(&mirror(shape)) {
                return Some(entry.class);
            }
        }
    }
    None
}
