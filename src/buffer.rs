use snafu::prelude::*;

use crate::{
    animation,
    blocking::RenderEngine,
    config::{ColorMode, StripConfig},
    errors::{Error, ExceedsCapacitySnafu, ZeroLengthSnafu},
    pins::{DataPin, PulseOutput},
    pixelstream::{PixelStream, ScaledPixels},
    window::{clamp_range, StripWindow},
    Pixel,
};

/// Brightness of a freshly created strip.
pub const DEFAULT_BRIGHTNESS: u8 = 128;

/// The pixels of one physical LED strip.
///
/// # Generics:
///
/// * `O` - the output line of the data pin
/// * `N` - the number of pixels the buffer can hold
///
/// The strip length is chosen at runtime and may be anything in `1..=N`.
/// It never changes afterwards.
///
/// Reads and writes outside of the strip never fail: writes are
/// ignored and reads return [`Pixel::BLACK`]. Animation loops tend to
/// compute transient out-of-range positions, and dropping those is
/// better than stopping the loop.
pub struct PixelBuffer<'p, O: PulseOutput, const N: usize> {
    pin: &'p DataPin<O>,
    engine: RenderEngine,
    pixels: [Pixel; N],
    len: usize,
    brightness: u8,
}

impl<'p, O: PulseOutput, const N: usize> PixelBuffer<'p, O, N> {
    /// Creates a strip of `length` LEDs driven by `pin`.
    ///
    /// Fails if `length` is zero or larger than `N`, or if another
    /// live strip is bound to `pin`.
    pub fn create(
        pin: &'p DataPin<O>,
        length: usize,
        config: impl Into<StripConfig>,
    ) -> Result<Self, Error> {
        let config = config.into();

        Self::check_length(length).map_err(|err| {
            log::warn!("Cannot create strip on pin {}: {}", pin.id(), err);
            err
        })?;
        pin.bind()?;

        log::debug!(
            "Created strip of {} LEDs on pin {} ({:?}).",
            length,
            pin.id(),
            config.mode
        );

        Ok(Self {
            pin,
            engine: RenderEngine::new(config),
            pixels: [Pixel::BLACK; N],
            len: length,
            brightness: DEFAULT_BRIGHTNESS,
        })
    }

    fn check_length(length: usize) -> Result<(), Error> {
        ensure!(length > 0, ZeroLengthSnafu);
        ensure!(
            length <= N,
            ExceedsCapacitySnafu {
                length,
                capacity: N
            }
        );
        Ok(())
    }

    /// The number of LEDs.
    pub fn length(&self) -> usize {
        self.len
    }

    /// The strip configuration.
    pub fn config(&self) -> StripConfig {
        self.engine.config()
    }

    /// The channel layout.
    pub fn mode(&self) -> ColorMode {
        self.engine.config().mode
    }

    /// The identifier of the bound pin.
    pub fn pin_id(&self) -> u8 {
        self.pin.id()
    }

    /// The current brightness.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Sets the brightness applied by the next [`show`](Self::show).
    ///
    /// Stored pixels are not modified.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Sets a pixel without transmitting it.
    pub fn set_pixel_color(&mut self, index: usize, color: Pixel) {
        if let Some(pixel) = self.pixels_mut().get_mut(index) {
            *pixel = color;
        }
    }

    /// Reads back a pixel, as set; brightness is not applied.
    pub fn get_pixel_color(&self, index: usize) -> Pixel {
        self.pixels().get(index).copied().unwrap_or(Pixel::BLACK)
    }

    /// Sets only the white channel of a pixel.
    ///
    /// Has no visible effect unless the strip is in [`ColorMode::Rgbw`].
    pub fn set_pixel_white(&mut self, index: usize, white: u8) {
        if let Some(pixel) = self.pixels_mut().get_mut(index) {
            pixel.white = white;
        }
    }

    /// The pixels of the strip.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels[..self.len]
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels[..self.len]
    }

    /// Turns all pixels off, without transmitting.
    pub fn clear(&mut self) {
        self.pixels_mut().fill(Pixel::BLACK);
    }

    /// Sends the pixels to the strip, with the brightness applied.
    ///
    /// Blocks until the frame is latched.
    pub fn show(&mut self) -> Result<(), Error> {
        self.engine
            .write(self.pin, &self.pixels[..self.len], self.brightness)
    }

    /// Sets all pixels to `color` and shows them.
    pub fn show_color(&mut self, color: Pixel) -> Result<(), Error> {
        self.pixels_mut().fill(color);
        self.show()
    }

    /// Shows `value` out of `max` as a bar graph over the whole strip.
    ///
    /// See [`StripWindow::show_bar_graph`].
    pub fn show_bar_graph(&mut self, value: i32, max: i32) -> Result<(), Error> {
        let len = self.len;
        self.range(0, len).show_bar_graph(value, max)
    }

    /// A view of `length` pixels starting at `start`.
    ///
    /// Out-of-range requests are clamped to the strip: `start` is limited
    /// to the strip length and `length` to what remains after `start`.
    pub fn range(&mut self, start: usize, length: usize) -> StripWindow<'_, 'p, O, N> {
        let (start, length) = clamp_range(self.len, start, length);
        StripWindow::new(self, start, length)
    }

    /// Moves every pixel one step toward the end; the last one wraps to
    /// the start.
    pub fn rotate(&mut self) {
        self.rotate_by(1);
    }

    /// Rotates by `offset` positions, see [`animation::rotate`].
    pub fn rotate_by(&mut self, offset: isize) {
        animation::rotate(self.pixels_mut(), offset);
    }

    /// Moves the pixels by `offset` positions, see [`animation::shift`].
    pub fn shift(&mut self, offset: isize) {
        animation::shift(self.pixels_mut(), offset);
    }

    /// Fades the pixels toward both ends, see [`animation::ease_brightness`].
    pub fn ease_brightness(&mut self) {
        animation::ease_brightness(self.pixels_mut());
    }

    /// Estimated current draw of the strip in mA, at the current brightness.
    ///
    /// About 0.7mA idle per LED, plus roughly 48mA for every 1000 units of
    /// transmitted channel intensity.
    pub fn power(&self) -> u32 {
        let intensity: u32 = PixelStream::new(
            ScaledPixels::new(self.pixels(), self.brightness),
            self.mode(),
        )
        .map(u32::from)
        .sum();

        let idle = u32::try_from(self.len).unwrap_or(u32::MAX).saturating_mul(7) / 10;
        idle + intensity.saturating_mul(480) / 10000
    }
}

impl<O: PulseOutput, const N: usize> Drop for PixelBuffer<'_, O, N> {
    fn drop(&mut self) {
        self.pin.release();
    }
}
