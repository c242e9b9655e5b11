use dotmatrix_core::core::{Bus, InterruptLine};

/// Minimal bus for testing: flat 64KB read/write memory, no peripherals.
pub struct TestBus {
    pub memory: [u8; 0x10000],
    pub interrupts: InterruptLine,
}

impl TestBus {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
            interrupts: InterruptLine::new(),
        }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }
}

impl Bus for TestBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.memory[addr as usize] = data;
    }

    fn pending_irqs(&self) -> u8 {
        self.interrupts.pending()
    }

    fn ack_irq(&mut self, bit: u8) {
        self.interrupts.acknowledge(bit);
    }
}
