pub mod bus;
pub mod machine;

pub use bus::{Bus, InterruptLine, Irq};
pub use machine::{InputButton, Machine};
