use std::path::Path;
use std::time::{Duration, Instant};

use dotmatrix_core::core::machine::Machine;
use log::{info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Scancode;

use crate::audio;
use crate::input::KeyMap;
use crate::video::{self, Video};

pub fn run(machine: &mut dyn Machine, key_map: &KeyMap, scale: u32, rom_path: &Path) {
    let sdl_context = sdl2::init().expect("Failed to initialize SDL2");
    let sdl_video = sdl_context.video().expect("Failed to init SDL video");
    let sdl_audio = sdl_context.audio().expect("Failed to init SDL audio");

    let (width, height) = machine.display_size();
    let mut video = Video::new(&sdl_video, "dotmatrix", width, height, scale);
    let mut event_pump = sdl_context.event_pump().expect("Failed to get event pump");

    let audio_queue = audio::init(&sdl_audio, machine.audio_sample_rate());
    let samples_per_frame =
        (machine.audio_sample_rate() as f64 / machine.frame_rate_hz()).ceil() as usize;
    let mut audio_chunk = vec![0i16; samples_per_frame];

    let buffer_size = (width * height * 3) as usize;
    let mut framebuffer = vec![0u8; buffer_size];

    let frame_duration = Duration::from_secs_f64(1.0 / machine.frame_rate_hz());

    'main: loop {
        let frame_start = Instant::now();
        let mut take_screenshot = false;

        // Poll all pending SDL events, translate to machine input
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::F12),
                    repeat: false,
                    ..
                } => take_screenshot = true,

                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => {
                    if let Some(button_id) = key_map.get(sc) {
                        machine.set_input(button_id, true);
                    }
                }

                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    if let Some(button_id) = key_map.get(sc) {
                        machine.set_input(button_id, false);
                    }
                }

                _ => {}
            }
        }

        // Run one frame of emulation
        machine.run_frame();

        // Render the framebuffer and present
        machine.render_frame(&mut framebuffer);
        video.present(&framebuffer);

        if take_screenshot {
            let path = rom_path.with_extension("png");
            match video::save_screenshot(&path, &framebuffer, width, height) {
                Ok(()) => info!("screenshot written to {}", path.display()),
                Err(e) => warn!("screenshot failed: {e}"),
            }
        }

        // Keep the audio queue fed (silence until the sound unit grows up)
        if let Some(queue) = &audio_queue {
            let produced = machine.fill_audio(&mut audio_chunk);
            audio::queue_samples(queue, &audio_chunk[..produced]);
        }

        // Pace to the machine's refresh rate
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }
}
