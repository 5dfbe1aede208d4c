pub mod ai;
pub mod ai_player;
pub mod controller;
pub mod tui;

pub use ai::{AiKind, Strategy};
pub use ai_player::AiPlayer;
pub use controller::PlayerController;
pub use tui::TuiController;
