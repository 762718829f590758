//! Terminal UI: the interactive game view. All game rules live in [`crate::game`];
//! this layer only reads board state and forwards typed identifiers.

mod app;
mod game_view;

pub use app::App;
