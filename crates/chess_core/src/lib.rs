pub mod board;
pub mod movegen;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use movegen::*;
pub use types::*;
