//! The tilt demo: a control loop driving one strip from an accelerometer.
//!
//! Button presses do not touch the loop state directly. They are posted
//! as [`Event`]s and applied at the start of the next [`TiltController::tick`],
//! so they can never interrupt a transmission.

use heapless::Deque;

use crate::{errors::Error, pins::PulseOutput, Pixel, PixelBuffer};

/// Number of button presses that can be pending between two ticks.
pub const EVENT_QUEUE_CAPACITY: usize = 8;

/// Brightness the demo starts with.
pub const INITIAL_BRIGHTNESS: u8 = 100;

const BRIGHTNESS_STEP: u16 = 20;
const BRIGHTNESS_FLOOR: u8 = 5;

/// Input from the buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Toggles between rotating and feeding new colors.
    ButtonA,
    /// Raises the brightness; wraps around to a dim level past the maximum.
    ButtonB,
}

/// A three-axis accelerometer, sampled once per tick.
pub trait Accelerometer {
    /// Current acceleration along `(x, y, z)`, in milli-g.
    fn acceleration(&mut self) -> (i32, i32, i32);
}

/// State carried from one tick to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopState {
    /// Brightness applied to the strip.
    pub brightness: u8,
    /// Whether the strip rotates instead of scrolling in new colors.
    pub rotation_mode: bool,
}

impl Default for LoopState {
    fn default() -> Self {
        Self {
            brightness: INITIAL_BRIGHTNESS,
            rotation_mode: false,
        }
    }
}

impl LoopState {
    /// Applies one button press.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::ButtonA => {
                self.rotation_mode = !self.rotation_mode;
            }
            Event::ButtonB => {
                let next = u16::from(self.brightness) + BRIGHTNESS_STEP;
                self.brightness = u8::try_from(next).unwrap_or(BRIGHTNESS_FLOOR);
            }
        }
    }
}

/// Drives a strip from the accelerometer, one frame per tick.
///
/// In scroll mode every tick turns the current tilt into a color, writes
/// it to the first pixel and pushes everything one step down the strip.
/// In rotation mode the strip just cycles.
#[derive(Debug, Default)]
pub struct TiltController {
    events: Deque<Event, EVENT_QUEUE_CAPACITY>,
    state: LoopState,
}

impl TiltController {
    /// Creates a controller with the initial loop state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current loop state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Queues a button press for the next tick.
    ///
    /// Returns `false` and drops the event if the queue is full.
    pub fn post(&mut self, event: Event) -> bool {
        match self.events.push_back(event) {
            Ok(()) => true,
            Err(event) => {
                log::warn!("Event queue full, dropping {:?}.", event);
                false
            }
        }
    }

    /// Runs one iteration of the loop and shows the result.
    pub fn tick<O, A, const N: usize>(
        &mut self,
        strip: &mut PixelBuffer<'_, O, N>,
        accelerometer: &mut A,
    ) -> Result<(), Error>
    where
        O: PulseOutput,
        A: Accelerometer,
    {
        while let Some(event) = self.events.pop_front() {
            self.state.apply(event);
            log::debug!("{:?} -> {:?}", event, self.state);
        }
        strip.set_brightness(self.state.brightness);

        if self.state.rotation_mode {
            strip.rotate();
        } else {
            let (x, y, z) = accelerometer.acceleration();
            let color = Pixel::from_channels(x / 2, y / 2, z.saturating_neg() / 2);
            strip.set_pixel_color(0, color);
            strip.shift(1);
        }

        strip.show()
    }
}
