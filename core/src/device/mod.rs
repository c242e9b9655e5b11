pub mod apu;
pub mod bootrom;
pub mod cartridge;
pub mod joypad;
pub mod ppu;
pub mod serial;
pub mod timer;

pub use apu::Apu;
pub use cartridge::{Cartridge, CartridgeError};
pub use joypad::{Button, Joypad};
pub use ppu::Ppu;
pub use serial::SerialPort;
pub use timer::Timer;
