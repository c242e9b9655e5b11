pub mod core;
pub mod cpu;
pub mod device;
pub mod system;

pub mod prelude {
    pub use crate::core::machine::{InputButton, Machine};
    pub use crate::core::{Bus, InterruptLine, Irq};
    pub use crate::cpu::Sm83;
    pub use crate::device::{Cartridge, CartridgeError};
    pub use crate::system::GameBoy;
}
