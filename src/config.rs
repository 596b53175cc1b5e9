use crate::Pixel;

/// Channel layout of a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Three channels, sent in the WS2812 GRB order.
    Rgb,
    /// Four channels, sent as GRBW (SK6812 RGBW).
    Rgbw,
    /// Three channels for strips wired in plain RGB order.
    RgbRgb,
}

/// The bytes of one pixel, in wire order.
pub(crate) type WireBytes = core::iter::Take<core::array::IntoIter<u8, 4>>;

impl ColorMode {
    /// The number of bytes one pixel occupies on the wire.
    pub const fn channels(self) -> usize {
        match self {
            ColorMode::Rgb | ColorMode::RgbRgb => 3,
            ColorMode::Rgbw => 4,
        }
    }

    /// Return the raw bytes that should be sent to the LED strip.
    pub(crate) fn wire_bytes(self, pixel: Pixel) -> WireBytes {
        let Pixel {
            red,
            green,
            blue,
            white,
        } = pixel;
        let bytes = match self {
            ColorMode::Rgb | ColorMode::Rgbw => [green, red, blue, white],
            ColorMode::RgbRgb => [red, green, blue, 0],
        };
        bytes.into_iter().take(self.channels())
    }
}

/// Pulse widths of the one-wire protocol.
///
/// Every bit is a high phase followed by a low phase;
/// the length of the high phase tells a `1` from a `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// High time of a `0` bit, in nanoseconds.
    pub zero_high_ns: u16,
    /// Low time of a `0` bit, in nanoseconds.
    pub zero_low_ns: u16,
    /// High time of a `1` bit, in nanoseconds.
    pub one_high_ns: u16,
    /// Low time of a `1` bit, in nanoseconds.
    pub one_low_ns: u16,
    /// Minimum idle-low time that latches a frame, in microseconds.
    pub reset_us: u32,
}

impl Timing {
    /// WS2812 / WS2812B.
    ///
    /// Newer WS2812B revisions need a reset well above the 50us of the
    /// original datasheet, so 280us is used.
    pub const WS2812: Timing = Timing {
        zero_high_ns: 400,
        zero_low_ns: 850,
        one_high_ns: 800,
        one_low_ns: 450,
        reset_us: 280,
    };

    /// SK6812, the usual RGBW chip.
    pub const SK6812: Timing = Timing {
        zero_high_ns: 300,
        zero_low_ns: 900,
        one_high_ns: 600,
        one_low_ns: 600,
        reset_us: 80,
    };

    /// Transmission time of a single bit, in nanoseconds.
    pub const fn bit_ns(&self) -> u32 {
        let zero = self.zero_high_ns as u32 + self.zero_low_ns as u32;
        let one = self.one_high_ns as u32 + self.one_low_ns as u32;
        if zero > one {
            zero
        } else {
            one
        }
    }
}

/// Static configuration of a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Channel layout and wire order.
    pub mode: ColorMode,
    /// Protocol timing.
    pub timing: Timing,
}

impl StripConfig {
    /// Creates a configuration with the default timing for `mode`:
    /// WS2812 for RGB strips, SK6812 for RGBW strips.
    pub const fn new(mode: ColorMode) -> Self {
        let timing = match mode {
            ColorMode::Rgb | ColorMode::RgbRgb => Timing::WS2812,
            ColorMode::Rgbw => Timing::SK6812,
        };
        Self { mode, timing }
    }

    /// Replaces the protocol timing.
    pub const fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }
}

impl From<ColorMode> for StripConfig {
    fn from(mode: ColorMode) -> Self {
        Self::new(mode)
    }
}
