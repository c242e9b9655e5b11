//! Joypad matrix behind the 0xFF00 register.
//!
//! The register selects one of two key groups with active-low bits 4-5;
//! the low nibble reads back active-low key states for the selected
//! group(s). A press inside a selected group requests the joypad IRQ.

use crate::core::bus::{InterruptLine, Irq};

const SELECT_DIRECTIONS: u8 = 0x10;
const SELECT_BUTTONS: u8 = 0x20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Right = 0,
    Left = 1,
    Up = 2,
    Down = 3,
    A = 4,
    B = 5,
    Select = 6,
    Start = 7,
}

impl Button {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Right),
            1 => Some(Self::Left),
            2 => Some(Self::Up),
            3 => Some(Self::Down),
            4 => Some(Self::A),
            5 => Some(Self::B),
            6 => Some(Self::Select),
            7 => Some(Self::Start),
            _ => None,
        }
    }

    /// Bit within the register's low nibble.
    fn matrix_bit(self) -> u8 {
        (self as u8) % 4
    }

    fn is_direction(self) -> bool {
        (self as u8) < 4
    }
}

pub struct Joypad {
    pressed: [bool; 8],
    /// Group-select bits 4-5 as last written (active-low).
    select: u8,
}

impl Joypad {
    pub fn new() -> Self {
        Self {
            pressed: [false; 8],
            select: SELECT_DIRECTIONS | SELECT_BUTTONS,
        }
    }

    /// Latch a host key event. Requests the joypad IRQ on a fresh press
    /// while the key's group is selected.
    pub fn set_button(&mut self, button: Button, pressed: bool, irq: &mut InterruptLine) {
        let was = self.pressed[button as usize];
        self.pressed[button as usize] = pressed;

        if pressed && !was && self.group_selected(button) {
            irq.request(Irq::Joypad);
        }
    }

    fn group_selected(&self, button: Button) -> bool {
        if button.is_direction() {
            self.select & SELECT_DIRECTIONS == 0
        } else {
            self.select & SELECT_BUTTONS == 0
        }
    }

    pub fn read(&self) -> u8 {
        let mut val = 0xC0 | self.select | 0x0F;
        for (idx, &down) in self.pressed.iter().enumerate() {
            if !down {
                continue;
            }
            let button = Button::from_id(idx as u8).unwrap();
            if self.group_selected(button) {
                val &= !(1 << button.matrix_bit());
            }
        }
        val
    }

    /// Only the two group-select bits are writable.
    pub fn write(&mut self, val: u8) {
        self.select = val & (SELECT_DIRECTIONS | SELECT_BUTTONS);
    }
}

impl Default for Joypad {
    fn default() -> Self {
        Self::new()
    }
}
