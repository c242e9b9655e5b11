//! Serial port stub at 0xFF01-0xFF02.
//!
//! There is no link-cable peer; a transfer started by setting SC bit 7
//! just emits the SB byte. Test programs print their verdicts this way,
//! so the bytes are also collected into a capture buffer.

use log::debug;

pub struct SerialPort {
    data: u8,
    output: Vec<u8>,
}

impl SerialPort {
    pub fn new() -> Self {
        Self {
            data: 0,
            output: Vec::new(),
        }
    }

    pub fn read_data(&self) -> u8 {
        self.data
    }

    pub fn write_data(&mut self, val: u8) {
        self.data = val;
    }

    pub fn read_control(&self) -> u8 {
        0xFF
    }

    pub fn write_control(&mut self, val: u8) {
        if val & 0x80 != 0 {
            debug!("serial: 0x{:02X} ({:?})", self.data, self.data as char);
            self.output.push(self.data);
        }
    }

    /// Everything written out over the port so far, lossily as text.
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl Default for SerialPort {
    fn default() -> Self {
        Self::new()
    }
}
