//! Event type tags as the single source of truth for category strings.

/// Tag marking an event that requires a ticket. Never used as a primary type
/// unless it is the only tag.
pub const TICKETED_EVENT: &str = "Ticketed Event";

/// Primary type of rows that nest under the preceding block.
pub const SESSION: &str = "Session";

/// Category used when a type has no palette entry of its own.
pub const TECHNICAL_PROGRAM: &str = "Technical Program";

/// Splits a raw `"Event Type"` field into trimmed tags.
///
/// Empty segments (for example from a trailing `;`) are dropped.
pub fn split_event_types(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// First tag that is not the ticketed marker, falling back to the first tag.
pub fn primary_type(tags: &[String]) -> Option<&str> {
    tags.iter()
        .find(|tag| tag.as_str() != TICKETED_EVENT)
        .or_else(|| tags.first())
        .map(String::as_str)
}

pub fn is_ticketed(tags: &[String]) -> bool {
    tags.iter().any(|tag| tag == TICKETED_EVENT)
}
