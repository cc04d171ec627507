//! Category colors and title styling shared by rendering and export.

use serde::Serialize;

use crate::event_type::{TECHNICAL_PROGRAM, TICKETED_EVENT};

/// Background and border color of a category, as CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Colors {
    pub background: &'static str,
    pub border: &'static str,
}

const fn colors(background: &'static str, border: &'static str) -> Colors {
    Colors { background, border }
}

/// Known categories. The misspelled networking variant appears in real sheets.
const PALETTE: &[(&str, Colors)] = &[
    ("All Conference Activities", colors("#f5f0e8", "#d4c4a8")),
    ("Council/Committee Meetings", colors("#fff2e6", "#ffccb3")),
    ("Networking and Social Functions", colors("#fff9e6", "#fff0b3")),
    ("Networking ans Social Functions", colors("#fff9e6", "#fff0b3")),
    ("Other (Workshop/Course etc…)", colors("#e6fff2", "#b3ffd6")),
    ("Registration", colors("#f0e6ff", "#d6b3ff")),
    (TECHNICAL_PROGRAM, colors("#ffe6e6", "#ffb3b3")),
    (TICKETED_EVENT, colors("#e6f4ff", "#b3d7ff")),
    ("Session", colors("#f8f9fa", "#e9ecef")),
];

/// Accent drawn along the edge of ticketed events.
pub const TICKETED_ACCENT: &str = "#4a7aff";

const ITALIC_TYPES: &[&str] = &[
    "Networking and Social Functions",
    "Networking ans Social Functions",
    "Setup",
];

/// Colors for a category; unknown or missing categories use the technical
/// program colors.
pub fn colors_for(event_type: Option<&str>) -> Colors {
    let lookup = |name: &str| {
        PALETTE
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, c)| *c)
    };
    event_type
        .and_then(lookup)
        .or_else(|| lookup(TECHNICAL_PROGRAM))
        .unwrap_or(colors("#ffe6e6", "#ffb3b3"))
}

/// Networking and setup titles are set in italics.
pub fn is_italic_title(primary_type: Option<&str>) -> bool {
    primary_type.is_some_and(|t| ITALIC_TYPES.contains(&t))
}
