use std::collections::HashMap;

use dotmatrix_core::core::machine::InputButton;
use log::warn;
use sdl2::keyboard::Scancode;

use crate::config::Config;

/// Maps SDL scancodes to machine button IDs.
pub struct KeyMap {
    map: HashMap<Scancode, u8>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a scancode to a machine button ID.
    pub fn bind(&mut self, scancode: Scancode, button_id: u8) {
        self.map.insert(scancode, button_id);
    }

    /// Look up the machine button ID for a scancode.
    pub fn get(&self, scancode: Scancode) -> Option<u8> {
        self.map.get(&scancode).copied()
    }
}

fn default_binding(name: &str) -> Option<Scancode> {
    match name {
        "Left" => Some(Scancode::Left),
        "Right" => Some(Scancode::Right),
        "Up" => Some(Scancode::Up),
        "Down" => Some(Scancode::Down),
        "A" => Some(Scancode::Z),
        "B" => Some(Scancode::X),
        "Start" => Some(Scancode::Return),
        "Select" => Some(Scancode::Space),
        _ => None,
    }
}

/// Build the key map for a machine's buttons: defaults first, then any
/// overrides from the config file (scancode names, e.g. `A = "K"`).
pub fn build_key_map(buttons: &[InputButton], config: &Config) -> KeyMap {
    let mut km = KeyMap::new();

    for button in buttons {
        let scancode = match config.keys.get(button.name) {
            Some(name) => {
                let sc = Scancode::from_name(name);
                if sc.is_none() {
                    warn!("unknown scancode name {name:?} for {}", button.name);
                }
                sc.or_else(|| default_binding(button.name))
            }
            None => default_binding(button.name),
        };

        if let Some(sc) = scancode {
            km.bind(sc, button.id);
        }
    }

    km
}
