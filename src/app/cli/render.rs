//! Plain-text rendering of views for the terminal.

use std::fmt::Write;

use crate::domain::{FilterCriteria, FilteredView, PriceCard, PriceHistory, ViewMode};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub(super) fn view(view: &FilteredView, criteria: &FilterCriteria) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", view.mode().heading(), view.count());

    if view.is_empty() {
        let hint = match view.mode() {
            ViewMode::All if criteria.is_unconstrained() => "No prices available.",
            ViewMode::All => "No prices match the current filters.",
            ViewMode::Favorites => {
                "No favorites yet. Use `polyprice favorite <product>` to add one."
            }
        };
        let _ = writeln!(out, "{}", hint);
        return out;
    }

    for card in view.cards() {
        let _ = writeln!(out, "{}", card_line(card));
    }
    out
}

fn card_line(card: &PriceCard) -> String {
    let star = if card.is_favorite { "★" } else { "☆" };
    format!(
        "{} {:<22} {:<18} {:<20} {} {:>8}  {:<10} {}",
        star,
        card.product,
        card.location,
        card.price_range,
        card.change.direction.arrow(),
        card.price_change_percent,
        card.transit_time,
        card.last_updated.format(TIMESTAMP_FORMAT)
    )
}

pub(super) fn names(values: &[String], empty: &str) -> String {
    if values.is_empty() {
        return format!("{}\n", empty);
    }
    values.iter().fold(String::new(), |mut out, value| {
        let _ = writeln!(out, "{}", value);
        out
    })
}

pub(super) fn history(history: &PriceHistory) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} points)", history.product, history.history.len());
    for point in &history.history {
        let _ = writeln!(out, "  {}  {:>10.2}", point.date.format(TIMESTAMP_FORMAT), point.price);
    }
    out
}
