pub mod state;
pub use state::Sm83State;

pub mod sm83;
pub use sm83::{Flag, Sm83};
