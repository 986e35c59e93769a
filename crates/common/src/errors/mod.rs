//! Error chain helpers.

use std::{error::Error, iter};

/// Walks `error` and its sources, outermost first.
pub fn sources<'a>(
    error: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    iter::successors(Some(error), |&err: &&'a (dyn Error + 'static)| err.source())
}

/// Messages of an error chain, skipping any cause whose message the previous one already
/// contains.
///
/// Transport errors tend to render as `outer: inner` and then yield `inner` as their source.
pub fn dedup_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut messages: Vec<String> = Vec::new();
    for message in sources(error).map(|err| err.to_string()) {
        let message = message.trim();
        if messages.last().is_some_and(|last| last.contains(message)) {
            continue;
        }
        messages.push(message.to_string());
    }
    messages
}

/// [`dedup_chain`] on a single line, for log fields.
pub fn display_chain(error: &(dyn Error + 'static)) -> String {
    dedup_chain(error).join("; ")
}
