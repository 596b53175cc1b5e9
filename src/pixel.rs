use palette::{LinSrgb, Srgb};

/// The color of a single LED.
///
/// Channels are linear intensities, which is what the LEDs expect.
/// The `white` channel is only transmitted to RGBW strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// Red intensity.
    pub red: u8,
    /// Green intensity.
    pub green: u8,
    /// Blue intensity.
    pub blue: u8,
    /// White intensity, RGBW strips only.
    pub white: u8,
}

impl Pixel {
    /// All channels off. Also returned for reads outside of a strip.
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    /// Creates an RGB pixel with the white channel off.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self::with_white(red, green, blue, 0)
    }

    /// Creates an RGBW pixel.
    pub const fn with_white(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Creates a pixel from unbounded channel values.
    ///
    /// Every channel is clamped into `0..=255`, so noisy sensor readings
    /// can be fed in directly.
    pub fn from_channels(red: i32, green: i32, blue: i32) -> Self {
        Self::from_channels_white(red, green, blue, 0)
    }

    /// Like [`from_channels`](Pixel::from_channels), with a white channel.
    pub fn from_channels_white(red: i32, green: i32, blue: i32, white: i32) -> Self {
        Self::with_white(clamp8(red), clamp8(green), clamp8(blue), clamp8(white))
    }

    /// Unpacks a `0xRRGGBB` value. The upper byte is ignored.
    pub const fn from_packed(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Packs the color channels into `0xRRGGBB`. White is dropped.
    pub const fn packed(&self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    /// Converts a gamma-encoded sRGB color into the linear space of the LEDs.
    pub fn from_srgb(color: Srgb<u8>) -> Self {
        let linear: LinSrgb<f32> = color.into_format::<f32>().into_linear();
        let linear: LinSrgb<u8> = linear.into_format();
        linear.into()
    }

    /// Scales every channel by `brightness / 255`, rounded to nearest.
    ///
    /// `255` leaves the pixel untouched and `0` turns it off.
    pub fn scale(self, brightness: u8) -> Self {
        let scale = |channel: u8| -> u8 {
            ((u16::from(channel) * u16::from(brightness) + 127) / 255) as u8
        };
        Self::with_white(
            scale(self.red),
            scale(self.green),
            scale(self.blue),
            scale(self.white),
        )
    }

    /// Mixes two pixels. `amount` is the share of `other`,
    /// `0` returns `self` and `255` returns `other`.
    pub fn blend(self, other: Pixel, amount: u8) -> Self {
        let mix = |a: u8, b: u8| -> u8 {
            let amount = u16::from(amount);
            ((u16::from(a) * (255 - amount) + u16::from(b) * amount + 127) / 255) as u8
        };
        Self::with_white(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
            mix(self.white, other.white),
        )
    }
}

fn clamp8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Raw RGB data.
impl From<[u8; 3]> for Pixel {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

/// Raw RGBW data.
impl From<[u8; 4]> for Pixel {
    fn from([red, green, blue, white]: [u8; 4]) -> Self {
        Self::with_white(red, green, blue, white)
    }
}

/// 8-bit Linear sRGB, which is the color space
/// most NeoPixel strips are in.
///
/// Be aware that this differs from normal,
/// gamma-corrected sRGB; use [`Pixel::from_srgb`] for that.
impl From<LinSrgb<u8>> for Pixel {
    fn from(color: LinSrgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

/// Named colors.
pub mod colors {
    use super::Pixel;

    /// `#FF0000`
    pub const RED: Pixel = Pixel::from_packed(0xFF0000);
    /// `#FFA500`
    pub const ORANGE: Pixel = Pixel::from_packed(0xFFA500);
    /// `#FFFF00`
    pub const YELLOW: Pixel = Pixel::from_packed(0xFFFF00);
    /// `#00FF00`
    pub const GREEN: Pixel = Pixel::from_packed(0x00FF00);
    /// `#0000FF`
    pub const BLUE: Pixel = Pixel::from_packed(0x0000FF);
    /// `#4B0082`
    pub const INDIGO: Pixel = Pixel::from_packed(0x4B0082);
    /// `#8A2BE2`
    pub const VIOLET: Pixel = Pixel::from_packed(0x8A2BE2);
    /// `#FF00FF`
    pub const PURPLE: Pixel = Pixel::from_packed(0xFF00FF);
    /// `#FFFFFF`
    pub const WHITE: Pixel = Pixel::from_packed(0xFFFFFF);
    /// `#000000`
    pub const BLACK: Pixel = Pixel::BLACK;
}
