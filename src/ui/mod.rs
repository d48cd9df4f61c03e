//! Plain-text rendering of the store state for the interactive driver.

pub mod commands;

use crate::app::state::{NotificationKind, Resource, State};

fn label(resource: &Resource) -> String {
    match resource.title() {
        Some(title) => format!("#{} {}", resource.id, title),
        None => format!("#{}", resource.id),
    }
}

pub fn render(state: &State) -> Vec<String> {
    let mut lines = Vec::new();

    if state.is_loading() {
        lines.push(format!("[{}]", state.loading_message));
    }

    if !state.query.is_empty() {
        lines.push(format!("Search \"{}\" ({} results)", state.query, state.search_results.len()));
        for r in &state.search_results {
            lines.push(format!("  {}", label(r)));
        }
    }

    if let Some(reference) = &state.overview_reference {
        lines.push(format!("Overview {}", label(reference)));
        for r in &state.overview_neighbors {
            lines.push(format!("  ~ {}", label(r)));
        }
    }

    lines.push(format!("Basket ({})", state.basket.len()));
    for r in &state.basket {
        lines.push(format!("  {}", label(r)));
    }

    // Each sequence item is followed by the suggestion for the gap after it.
    lines.push(format!("Sequence ({})", state.sequence.len()));
    for (i, item) in state.sequence.iter().enumerate() {
        match item {
            Some(r) => lines.push(format!("  {:>2}. {}", i, label(r))),
            None => lines.push(format!("  {:>2}. <unknown>", i)),
        }
        if let Some(Some(s)) = state.insertions.get(i) {
            let confidence = s.insertion_confidence.unwrap_or_default();
            lines.push(format!("      + {} ({:.2})", label(s), confidence));
        }
    }

    for n in &state.notifications {
        let tag = match n.kind {
            NotificationKind::Info => "info",
            NotificationKind::Error => "error",
        };
        lines.push(format!("{} [{}] {}", n.date.format("%H:%M:%S"), tag, n.message.text));
    }

    lines
}
