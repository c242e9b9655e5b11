/// Describes a single input button that a machine accepts.
pub struct InputButton {
    /// Machine-defined button identifier, passed to `set_input()`.
    pub id: u8,
    /// Human-readable name for display/configuration (e.g., "Start").
    pub name: &'static str,
}

/// Machine-agnostic interface for emulated systems.
///
/// The frontend is a pure rendering engine: it pumps events into
/// `set_input`, calls `run_frame`, and blits whatever `render_frame`
/// produces. It knows nothing about the hardware behind the trait.
pub trait Machine {
    /// Native display resolution as (width, height) in pixels.
    fn display_size(&self) -> (u32, u32);

    /// Run one frame of emulation (advance the clock by one frame's worth
    /// of cycles).
    fn run_frame(&mut self);

    /// Render the current video state into an RGB24 pixel buffer.
    ///
    /// The buffer must be at least `width * height * 3` bytes (from
    /// `display_size()`), left-to-right, top-to-bottom, 3 bytes per pixel.
    fn render_frame(&self, buffer: &mut [u8]);

    /// Handle an input event. `button` is a machine-defined ID from
    /// `input_map()`. `pressed` is true for key-down, false for key-up.
    ///
    /// Called per-event, not per-frame. Each call latches the button state
    /// so that `run_frame()` sees the accumulated input.
    fn set_input(&mut self, button: u8, pressed: bool);

    /// The list of input buttons this machine accepts.
    fn input_map(&self) -> &[InputButton];

    /// Reset the machine to its initial power-on state.
    fn reset(&mut self);

    /// Fill `buffer` with 16-bit mono samples; returns the sample count.
    fn fill_audio(&mut self, buffer: &mut [i16]) -> usize;

    /// Audio sample rate in Hz, or 0 if the machine produces no audio.
    fn audio_sample_rate(&self) -> u32;

    /// Native refresh rate.
    fn frame_rate_hz(&self) -> f64;
}
