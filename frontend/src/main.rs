use clap::Parser;
use dotmatrix_core::core::machine::Machine;
use dotmatrix_core::device::Cartridge;
use dotmatrix_core::system::GameBoy;

mod audio;
mod config;
mod emulator;
mod input;
mod rom_path;
mod video;

#[derive(Parser)]
#[command(name = "dotmatrix", about = "Game Boy emulator", version)]
struct Args {
    /// Cartridge image: a .gb/.gbc file, or a .zip containing one.
    rom: std::path::PathBuf,

    /// Window scale factor (overrides the config file).
    #[arg(long)]
    scale: Option<u32>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = config::Config::load();
    let scale = args.scale.unwrap_or(config.scale).max(1);

    let rom = match rom_path::load_rom_bytes(&args.rom) {
        Ok(rom) => rom,
        Err(e) => {
            eprintln!("Failed to load ROM {}: {e}", args.rom.display());
            std::process::exit(1);
        }
    };

    let cart = match Cartridge::from_bytes(rom) {
        Ok(cart) => cart,
        Err(e) => {
            eprintln!("Failed to load ROM {}: {e}", args.rom.display());
            std::process::exit(1);
        }
    };

    let mut machine = GameBoy::new(cart);
    let key_map = input::build_key_map(machine.input_map(), &config);
    emulator::run(&mut machine, &key_map, scale, &args.rom);
}
