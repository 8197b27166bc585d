//! Shared building blocks used by the screens.
pub mod empty_state;
pub mod pico;
pub mod stat_tile;
