//! Positional session nesting.
//!
//! Session rows belong to the nearest preceding non-session row in sheet
//! order. Attribution is purely positional; there is no shared key, so this
//! must run before any sorting.

use crate::event::EventRecord;

/// Folds session records into the `sessions` of their preceding parent.
///
/// Sessions seen before any parent are dropped.
pub fn attach_sessions<I>(records: I) -> Vec<EventRecord>
where
    I: IntoIterator<Item = EventRecord>,
{
    let (out, _) = records.into_iter().fold(
        (Vec::new(), None::<usize>),
        |(mut out, parent), record| {
            if !record.is_session() {
                let idx = out.len();
                out.push(record);
                return (out, Some(idx));
            }
            match parent {
                Some(idx) => out[idx].sessions.push(record),
                None => tracing::debug!(title = %record.title, "dropping session with no parent"),
            }
            (out, parent)
        },
    );
    out
}
