use super::RenderEngine;
use crate::{
    config::StripConfig,
    errors::{Error, HardwareUnavailableSnafu},
    pins::{DataPin, PulseOutput},
    pixelstream::RenderState,
    Pixel,
};

impl RenderEngine {
    /// Creates a render engine for strips of the given configuration.
    pub const fn new(config: StripConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine encodes for.
    pub const fn config(&self) -> StripConfig {
        self.config
    }

    /// Encodes pixels into the pulse train of one frame,
    /// with `brightness` applied to every channel.
    pub fn encode<'a>(&self, pixels: &'a [Pixel], brightness: u8) -> RenderState<'a> {
        RenderState::new(pixels, brightness, self.config.mode, self.config.timing)
    }

    /// Time one frame of `pixels` LEDs occupies the line, latch included.
    pub fn frame_time_us(&self, pixels: usize) -> u32 {
        let bits = pixels
            .saturating_mul(self.config.mode.channels())
            .saturating_mul(8);
        let bits = u32::try_from(bits).unwrap_or(u32::MAX);
        bits.saturating_mul(self.config.timing.bit_ns()) / 1000 + self.config.timing.reset_us
    }

    /// Writes pixels to an LED strip.
    ///
    /// Blocks until the whole frame is sent and latched. The pulse train is
    /// sent inside a critical section, so it is never interleaved with other
    /// code; if the line is not ready, nothing is sent at all.
    ///
    /// Does not check the pin binding; strips call this from `show()`.
    pub(crate) fn write<O: PulseOutput>(
        &self,
        pin: &DataPin<O>,
        pixels: &[Pixel],
        brightness: u8,
    ) -> Result<(), Error> {
        let pin_id = pin.id();

        let Some(mut output) = pin.try_output_mut() else {
            log::error!("Pin {} is busy with another transmission.", pin_id);
            return HardwareUnavailableSnafu { pin: pin_id }.fail();
        };

        if !output.is_ready() {
            log::error!("Pin {} is not ready.", pin_id);
            return HardwareUnavailableSnafu { pin: pin_id }.fail();
        }

        log::trace!(
            "Sending {} pixels on pin {} (~{}us).",
            pixels.len(),
            pin_id,
            self.frame_time_us(pixels.len())
        );

        let mut frame = self.encode(pixels, brightness);
        critical_section::with(|_| output.send(&mut frame)).map_err(|err| {
            log::error!("Transmission on pin {} failed: {:?}", pin_id, err);
            Error::HardwareUnavailable { pin: pin_id }
        })?;

        output
            .latch(self.config.timing.reset_us)
            .map_err(|err| {
                log::error!("Latching pin {} failed: {:?}", pin_id, err);
                Error::HardwareUnavailable { pin: pin_id }
            })
    }
}
