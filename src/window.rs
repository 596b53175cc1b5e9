use crate::{animation, colors, errors::Error, pins::PulseOutput, Pixel, PixelBuffer};

/// Shown at position 0 by an empty bar graph.
const BAR_EMPTY: Pixel = Pixel::from_packed(0x666600);

/// Limits `start` and `length` to a range of `available` pixels.
pub(crate) fn clamp_range(available: usize, start: usize, length: usize) -> (usize, usize) {
    let start = start.min(available);
    (start, length.min(available - start))
}

/// A view of a contiguous part of a [`PixelBuffer`].
///
/// Index `i` of the window is index `start + i` of the strip. Windows are
/// cheap and can be windowed again. Like the strip itself, they ignore
/// writes outside of their range and read [`Pixel::BLACK`] there.
///
/// Showing a window transmits the whole strip; a strip can only be
/// sent in one piece.
pub struct StripWindow<'b, 'p, O: PulseOutput, const N: usize> {
    strip: &'b mut PixelBuffer<'p, O, N>,
    start: usize,
    len: usize,
}

impl<'b, 'p, O: PulseOutput, const N: usize> StripWindow<'b, 'p, O, N> {
    /// `start + len` must not exceed the strip length.
    pub(crate) fn new(strip: &'b mut PixelBuffer<'p, O, N>, start: usize, len: usize) -> Self {
        debug_assert!(start + len <= strip.length());
        Self { strip, start, len }
    }

    /// The position of the first window pixel within the strip.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The number of pixels in the window.
    pub fn length(&self) -> usize {
        self.len
    }

    /// The pixels of the window.
    pub fn pixels(&self) -> &[Pixel] {
        &self.strip.pixels()[self.start..self.start + self.len]
    }

    fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.strip.pixels_mut()[self.start..self.start + self.len]
    }

    /// Sets a pixel without transmitting it.
    pub fn set_pixel_color(&mut self, index: usize, color: Pixel) {
        if let Some(pixel) = self.pixels_mut().get_mut(index) {
            *pixel = color;
        }
    }

    /// Reads back a pixel, as set.
    pub fn get_pixel_color(&self, index: usize) -> Pixel {
        self.pixels().get(index).copied().unwrap_or(Pixel::BLACK)
    }

    /// Sets only the white channel of a pixel.
    pub fn set_pixel_white(&mut self, index: usize, white: u8) {
        if let Some(pixel) = self.pixels_mut().get_mut(index) {
            pixel.white = white;
        }
    }

    /// Turns the window's pixels off, without transmitting.
    pub fn clear(&mut self) {
        self.pixels_mut().fill(Pixel::BLACK);
    }

    /// Sends the whole underlying strip.
    pub fn show(&mut self) -> Result<(), Error> {
        self.strip.show()
    }

    /// Sets the window's pixels to `color` and shows the strip.
    pub fn show_color(&mut self, color: Pixel) -> Result<(), Error> {
        self.pixels_mut().fill(color);
        self.show()
    }

    /// Shows `value` out of `max` as a bar graph and sends the strip.
    ///
    /// `value` is clamped into `0..=max`. The first `value * length / max`
    /// pixels light up in a gradient from blue to red, the rest go dark.
    /// If no pixel is lit, the first one glows dim yellow so the bar
    /// remains recognizable. A `max` of zero or less shows a single
    /// yellow pixel.
    pub fn show_bar_graph(&mut self, value: i32, max: i32) -> Result<(), Error> {
        let len = self.len;
        if len == 0 {
            return self.show();
        }

        if max <= 0 {
            self.clear();
            self.set_pixel_color(0, colors::YELLOW);
            return self.show();
        }

        let value = u64::from(value.clamp(0, max).unsigned_abs());
        let lit = (value * len as u64 / u64::from(max.unsigned_abs())) as usize;

        let last = (len - 1).max(1);
        for (i, pixel) in self.pixels_mut().iter_mut().enumerate() {
            *pixel = if i < lit {
                bar_color(i, last)
            } else {
                Pixel::BLACK
            };
        }
        if lit == 0 {
            self.set_pixel_color(0, BAR_EMPTY);
        }

        self.show()
    }

    /// A view of `length` pixels starting at `start`, relative to this window.
    ///
    /// Clamped to this window like [`PixelBuffer::range`] clamps to the strip.
    pub fn range(&mut self, start: usize, length: usize) -> StripWindow<'_, 'p, O, N> {
        let (start, length) = clamp_range(self.len, start, length);
        StripWindow::new(&mut *self.strip, self.start + start, length)
    }

    /// Rotates the window's pixels one step toward its end.
    pub fn rotate(&mut self) {
        self.rotate_by(1);
    }

    /// Rotates the window's pixels, see [`animation::rotate`].
    pub fn rotate_by(&mut self, offset: isize) {
        animation::rotate(self.pixels_mut(), offset);
    }

    /// Moves the window's pixels, see [`animation::shift`].
    pub fn shift(&mut self, offset: isize) {
        animation::shift(self.pixels_mut(), offset);
    }

    /// Fades the window toward both ends, see [`animation::ease_brightness`].
    pub fn ease_brightness(&mut self) {
        animation::ease_brightness(self.pixels_mut());
    }
}

fn bar_color(index: usize, last: usize) -> Pixel {
    let b = (index * 255 / last) as i32;
    Pixel::from_channels(b, 0, 255 - b)
}
