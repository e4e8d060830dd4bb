pub mod cell;
pub mod history;
pub mod messages;
pub mod piece;
pub mod snapshot;

// Re-export important types
pub use cell::*;
pub use history::*;
pub use messages::*;
pub use piece::*;
pub use snapshot::*;
