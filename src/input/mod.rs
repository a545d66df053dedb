pub mod direction;
pub mod handler;

pub use direction::Movement;
pub use handler::{handle_key, is_valid_control_input, key_to_token, KeyAction};
