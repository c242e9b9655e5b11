//! The wired-up console: address decoding, devices, and the frame loop.

use log::info;

use crate::core::bus::{Bus, InterruptLine};
use crate::core::machine::{InputButton, Machine};
use crate::cpu::Sm83;
use crate::device::apu;
use crate::device::bootrom::BOOT_ROM;
use crate::device::ppu::{DOTS_PER_FRAME, LCD_HEIGHT, LCD_WIDTH};
use crate::device::{Apu, Button, Cartridge, Joypad, Ppu, SerialPort, Timer};

/// Master clock (Hz).
pub const CPU_HZ: u32 = 4_194_304;
/// T-cycles per video frame.
pub const CYCLES_PER_FRAME: u32 = DOTS_PER_FRAME;

const INPUT_MAP: &[InputButton] = &[
    InputButton { id: Button::Right as u8, name: "Right" },
    InputButton { id: Button::Left as u8, name: "Left" },
    InputButton { id: Button::Up as u8, name: "Up" },
    InputButton { id: Button::Down as u8, name: "Down" },
    InputButton { id: Button::A as u8, name: "A" },
    InputButton { id: Button::B as u8, name: "B" },
    InputButton { id: Button::Select as u8, name: "Select" },
    InputButton { id: Button::Start as u8, name: "Start" },
];

/// Everything on the 16-bit bus except the CPU itself. Each region has
/// exactly one owner; this struct routes every access to it.
pub struct SystemBus {
    pub cart: Cartridge,
    pub ppu: Ppu,
    pub timer: Timer,
    pub joypad: Joypad,
    pub serial: SerialPort,
    pub apu: Apu,
    pub interrupts: InterruptLine,
    iram: [u8; 0x2000],
    hram: [u8; 0x7F],
    boot_rom_enabled: bool,
}

impl SystemBus {
    pub fn new(cart: Cartridge) -> Self {
        Self {
            cart,
            ppu: Ppu::new(),
            timer: Timer::new(),
            joypad: Joypad::new(),
            serial: SerialPort::new(),
            apu: Apu::new(),
            interrupts: InterruptLine::new(),
            iram: [0; 0x2000],
            hram: [0; 0x7F],
            boot_rom_enabled: true,
        }
    }

    pub fn boot_rom_enabled(&self) -> bool {
        self.boot_rom_enabled
    }

    /// Advance the clocked devices by one instruction's cycle cost.
    pub fn tick(&mut self, cycles: u32) {
        self.ppu.step(cycles, &mut self.interrupts);
        self.timer.step(cycles, &mut self.interrupts);
    }

    /// OAM DMA: copy 160 bytes from `src * 0x100` into OAM, atomically.
    fn oam_dma(&mut self, src: u8) {
        let base = (src as u16) << 8;
        for offset in 0..0xA0u16 {
            let byte = self.read(base.wrapping_add(offset));
            self.ppu.write_oam(offset, byte);
        }
    }

    fn read_io(&mut self, addr: u16) -> u8 {
        match addr {
            0xFF00 => self.joypad.read(),
            0xFF01 => self.serial.read_data(),
            0xFF02 => self.serial.read_control(),
            0xFF04..=0xFF07 => self.timer.read(addr),
            0xFF0F => self.interrupts.read_flags(),
            0xFF10..=0xFF3F => self.apu.read(addr),
            0xFF40..=0xFF4B => self.ppu.read_reg(addr),
            0xFF50 => self.boot_rom_enabled as u8,
            _ => 0xFF,
        }
    }

    fn write_io(&mut self, addr: u16, val: u8) {
        match addr {
            0xFF00 => self.joypad.write(val),
            0xFF01 => self.serial.write_data(val),
            0xFF02 => self.serial.write_control(val),
            0xFF04..=0xFF07 => self.timer.write(addr, val),
            0xFF0F => self.interrupts.write_flags(val),
            0xFF10..=0xFF3F => self.apu.write(addr, val),
            0xFF46 => {
                self.ppu.write_reg(addr, val);
                self.oam_dma(val);
            }
            0xFF40..=0xFF4B => self.ppu.write_reg(addr, val),
            0xFF50 => {
                // Writing 1 unmaps the boot ROM for good.
                if val == 0x01 && self.boot_rom_enabled {
                    info!("boot ROM disabled");
                    self.boot_rom_enabled = false;
                }
            }
            _ => {}
        }
    }
}

impl Bus for SystemBus {
    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x00FF if self.boot_rom_enabled => BOOT_ROM[addr as usize],
            0x0000..=0x7FFF => self.cart.read(addr),
            0x8000..=0x9FFF => self.ppu.read_vram(addr - 0x8000),
            0xA000..=0xBFFF => self.cart.read(addr),
            0xC000..=0xDFFF => self.iram[(addr - 0xC000) as usize],
            // Echo of IRAM
            0xE000..=0xFDFF => self.iram[(addr - 0xE000) as usize],
            0xFE00..=0xFE9F => self.ppu.read_oam(addr - 0xFE00),
            // Unusable region
            0xFEA0..=0xFEFF => 0xFF,
            0xFF00..=0xFF7F => self.read_io(addr),
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],
            0xFFFF => self.interrupts.read_enable(),
        }
    }

    fn write(&mut self, addr: u16, val: u8) {
        match addr {
            0x0000..=0x7FFF => self.cart.write(addr, val),
            0x8000..=0x9FFF => self.ppu.write_vram(addr - 0x8000, val),
            0xA000..=0xBFFF => self.cart.write(addr, val),
            0xC000..=0xDFFF => self.iram[(addr - 0xC000) as usize] = val,
            0xE000..=0xFDFF => self.iram[(addr - 0xE000) as usize] = val,
            0xFE00..=0xFE9F => self.ppu.write_oam(addr - 0xFE00, val),
            0xFEA0..=0xFEFF => {}
            0xFF00..=0xFF7F => self.write_io(addr, val),
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = val,
            0xFFFF => self.interrupts.write_enable(val),
        }
    }

    fn pending_irqs(&self) -> u8 {
        self.interrupts.pending()
    }

    fn ack_irq(&mut self, bit: u8) {
        self.interrupts.acknowledge(bit);
    }
}

/// The whole console: CPU plus bus, driven a frame at a time.
pub struct GameBoy {
    pub cpu: Sm83,
    pub bus: SystemBus,
    /// Cycles still owed to the current frame; instruction overshoot
    /// carries into the next frame so frames stay exactly 70,224 cycles
    /// on average.
    cycle_debt: i64,
}

impl GameBoy {
    pub fn new(cart: Cartridge) -> Self {
        Self {
            cpu: Sm83::new(),
            bus: SystemBus::new(cart),
            cycle_debt: 0,
        }
    }

    /// Execute one instruction and advance the devices in lockstep.
    /// Returns the T-cycles consumed.
    pub fn step(&mut self) -> u32 {
        let cycles = self.cpu.step(&mut self.bus);
        self.bus.tick(cycles);
        cycles
    }

    /// Everything the cartridge has pushed out the serial port, as text.
    /// Test programs report their results this way.
    pub fn serial_output(&self) -> String {
        self.bus.serial.output_text()
    }
}

impl Machine for GameBoy {
    fn display_size(&self) -> (u32, u32) {
        (LCD_WIDTH as u32, LCD_HEIGHT as u32)
    }

    fn run_frame(&mut self) {
        self.cycle_debt += CYCLES_PER_FRAME as i64;
        while self.cycle_debt > 0 {
            self.cycle_debt -= self.step() as i64;
        }
    }

    fn render_frame(&self, buffer: &mut [u8]) {
        for (dst, &shade) in buffer.chunks_exact_mut(3).zip(self.bus.ppu.canvas()) {
            dst[0] = shade;
            dst[1] = shade;
            dst[2] = shade;
        }
    }

    fn set_input(&mut self, button: u8, pressed: bool) {
        if let Some(button) = Button::from_id(button) {
            self.bus
                .joypad
                .set_button(button, pressed, &mut self.bus.interrupts);
        }
    }

    fn input_map(&self) -> &[InputButton] {
        INPUT_MAP
    }

    fn reset(&mut self) {
        self.cpu.reset();
        self.bus.ppu = Ppu::new();
        self.bus.timer = Timer::new();
        self.bus.joypad = Joypad::new();
        self.bus.serial = SerialPort::new();
        self.bus.apu = Apu::new();
        self.bus.interrupts = InterruptLine::new();
        self.bus.iram = [0; 0x2000];
        self.bus.hram = [0; 0x7F];
        self.bus.boot_rom_enabled = true;
        self.cycle_debt = 0;
        // Cartridge contents (and its banking latches) are left alone.
    }

    fn fill_audio(&mut self, buffer: &mut [i16]) -> usize {
        self.bus.apu.fill(buffer)
    }

    fn audio_sample_rate(&self) -> u32 {
        apu::SAMPLE_RATE
    }

    fn frame_rate_hz(&self) -> f64 {
        CPU_HZ as f64 / CYCLES_PER_FRAME as f64
    }
}
