use crate::{
    config::{ColorMode, Timing, WireBytes},
    pins::Pulse,
    Pixel,
};

/// Pixels with the strip brightness applied.
pub(crate) struct ScaledPixels<'a> {
    pixels: core::slice::Iter<'a, Pixel>,
    brightness: u8,
}

impl<'a> ScaledPixels<'a> {
    pub(crate) fn new(pixels: &'a [Pixel], brightness: u8) -> Self {
        Self {
            pixels: pixels.iter(),
            brightness,
        }
    }
}

impl Iterator for ScaledPixels<'_> {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        self.pixels.next().map(|p| p.scale(self.brightness))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pixels.size_hint()
    }
}

/// Flattens pixels into the byte sequence of the wire.
pub(crate) struct PixelStream<I>
where
    I: Iterator<Item = Pixel>,
{
    pixel_stream: I,
    mode: ColorMode,
    bytes_iter: Option<WireBytes>,
    finished: bool,
}

impl<I> PixelStream<I>
where
    I: Iterator<Item = Pixel>,
{
    pub(crate) fn new(pixel_stream: I, mode: ColorMode) -> Self {
        Self {
            pixel_stream,
            mode,
            bytes_iter: None,
            finished: false,
        }
    }
}

impl<I> Iterator for PixelStream<I>
where
    I: Iterator<Item = Pixel>,
{
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            if self.finished {
                return None;
            }

            if self.bytes_iter.is_none() {
                let mode = self.mode;
                self.bytes_iter = self.pixel_stream.next().map(|p| mode.wire_bytes(p));
            }

            if let Some(bytes_iter) = self.bytes_iter.as_mut() {
                if let Some(byte) = bytes_iter.next() {
                    return Some(byte);
                } else {
                    self.bytes_iter = None;
                }
            } else {
                self.finished = true;
            }
        }
    }
}

/// The wire-encoded form of a strip at one instant.
///
/// Yields one [`Pulse`] per bit, MSB first, in pixel order.
/// It is produced by every `show()` and consumed by the pin right away.
pub struct RenderState<'a> {
    bytes: PixelStream<ScaledPixels<'a>>,
    timing: Timing,
    current: u8,
    remaining_bits: u8,
}

impl<'a> RenderState<'a> {
    pub(crate) fn new(pixels: &'a [Pixel], brightness: u8, mode: ColorMode, timing: Timing) -> Self {
        Self {
            bytes: PixelStream::new(ScaledPixels::new(pixels, brightness), mode),
            timing,
            current: 0,
            remaining_bits: 0,
        }
    }
}

impl Iterator for RenderState<'_> {
    type Item = Pulse;

    fn next(&mut self) -> Option<Pulse> {
        if self.remaining_bits == 0 {
            self.current = self.bytes.next()?;
            self.remaining_bits = 8;
        }
        self.remaining_bits -= 1;

        let bit = (self.current >> self.remaining_bits) & 1;
        Some(if bit == 1 {
            Pulse::new(self.timing.one_high_ns, self.timing.one_low_ns)
        } else {
            Pulse::new(self.timing.zero_high_ns, self.timing.zero_low_ns)
        })
    }
}
