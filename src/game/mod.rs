pub mod diff;
pub mod rules;
pub mod selection;
pub mod utils;

pub use diff::{detect_move, MoveAnimation};
pub use rules::{legal_destinations, Movement, Offset};
pub use selection::{ClickOutcome, Selection, SelectionState};
