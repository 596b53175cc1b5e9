use crate::config::StripConfig;

mod driver;

/// Serializes pixels into the one-wire LED protocol and sends them,
/// blocking until the frame is latched.
///
/// Stateless apart from its configuration; every `show()` of a strip
/// goes through one of these.
///
/// Frames only reach a pin through the strip bound to it:
///
/// ```compile_fail
/// use micropixel::{ColorMode, DataPin, Pixel, Pulse, PulseOutput, RenderEngine, StripConfig};
///
/// struct Line;
///
/// impl PulseOutput for Line {
///     type Error = ();
///
///     fn send(&mut self, _: &mut dyn Iterator<Item = Pulse>) -> Result<(), ()> {
///         Ok(())
///     }
///
///     fn latch(&mut self, _: u32) -> Result<(), ()> {
///         Ok(())
///     }
/// }
///
/// let pin = DataPin::new(0, Line);
/// let engine = RenderEngine::new(StripConfig::new(ColorMode::Rgb));
/// engine.write(&pin, &[Pixel::BLACK], 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderEngine {
    config: StripConfig,
}
