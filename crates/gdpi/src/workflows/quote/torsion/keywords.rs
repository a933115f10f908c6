//! Keyword tables matched against normalized (lowercased, whitespace-collapsed)
//! quote text.

pub const SPRING_KEYWORDS: &[&str] = &[
    "spring",
    "springs",
    "torsion spring",
    "torsion springs",
    "spring set",
    "spring pair",
];

pub const OIL_TEMPERED_KEYWORDS: &[&str] = &[
    "oil tempered",
    "oil-tempered",
    "ot spring",
    "ot springs",
    "oil tempered springs",
];

pub const TORSION_OTHER_PART_KEYWORDS: &[&str] = &[
    // cables
    "cable",
    "cables",
    "lift cable",
    "lift cables",
    // bearings and plates
    "bearing",
    "bearings",
    "end bearing",
    "end bearings",
    "center bearing",
    "bearing plate",
    "bearing plates",
    "end plate",
    "end plates",
    "center plate",
    "center bracket",
    // hardware
    "drum",
    "drums",
    "torsion tube",
    "torsion shaft",
    "shaft",
    "tube",
    "spring anchor",
    "anchor bracket",
];

/// Includes "double doors", which also reads as a single double-wide door.
pub const MULTI_DOOR_KEYWORDS: &[&str] = &[
    "two doors",
    "2 doors",
    "both doors",
    "double doors",
    "pair of doors",
];

pub const OVERSIZE_OR_SPECIAL_KEYWORDS: &[&str] = &[
    "high lift",
    "high-lift",
    "vertical lift",
    "rv",
    "commercial",
    "custom",
    "carriage",
    "wood",
    "oversize",
    "over-sized",
    "heavy",
    "18x",
    "20x",
    "8ft",
    "10ft",
];

pub const CENTER_BEARING: &str = "center bearing";
