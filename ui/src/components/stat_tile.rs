use api::history::HistorySummary;
use dioxus::prelude::*;

use crate::components::pico::Grid;

#[derive(PartialEq, Clone, Copy)]
pub enum Tone {
    Positive,
    Muted,
}

impl Tone {
    fn class(&self) -> &'static str {
        match self {
            Tone::Positive => "stat-icon positive",
            Tone::Muted => "stat-icon muted",
        }
    }
}

/// A single count with an icon and label.
#[component]
pub fn StatTile(value: usize, label: &'static str, icon: &'static str, tone: Tone) -> Element {
    rsx! {
        article {
            class: "stat-tile",
            div { class: tone.class(), "{icon}" }
            div {
                p { class: "stat-value", "{value}" }
                p { class: "stat-label", "{label}" }
            }
        }
    }
}

/// The "Available" / "Not Available" pair of tiles.
#[component]
pub fn AvailabilityTiles(summary: HistorySummary) -> Element {
    rsx! {
        Grid {
            StatTile {
                value: summary.available,
                label: "Available",
                icon: "✓",
                tone: Tone::Positive,
            }
            StatTile {
                value: summary.not_available,
                label: "Not Available",
                icon: "✕",
                tone: Tone::Muted,
            }
        }
    }
}
