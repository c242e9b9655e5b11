use log::warn;
use sdl2::audio::{AudioQueue, AudioSpecDesired};

/// Open a mono 16-bit queue at the machine's sample rate. Returns `None`
/// (and keeps running silently) if the machine has no audio or the
/// device cannot be opened.
pub fn init(sdl_audio: &sdl2::AudioSubsystem, sample_rate: u32) -> Option<AudioQueue<i16>> {
    if sample_rate == 0 {
        return None;
    }

    let desired_spec = AudioSpecDesired {
        freq: Some(sample_rate as i32),
        channels: Some(1),
        samples: Some(512), // ~11.6 ms at 44100 Hz
    };

    match sdl_audio.open_queue::<i16, _>(None, &desired_spec) {
        Ok(queue) => {
            queue.resume();
            Some(queue)
        }
        Err(e) => {
            warn!("audio disabled: {e}");
            None
        }
    }
}

/// Queue one frame's worth of samples. If the emulator has run more than
/// five frames ahead of the device, drop the backlog instead of letting
/// latency build up.
pub fn queue_samples(queue: &AudioQueue<i16>, samples: &[i16]) {
    let frame_bytes = (samples.len() * 2) as u32;
    if queue.size() > frame_bytes * 5 {
        queue.clear();
    }
    if let Err(e) = queue.queue_audio(samples) {
        warn!("audio queue: {e}");
    }
}
