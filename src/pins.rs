use core::cell::{Cell, Ref, RefCell, RefMut};

use embedded_hal::{delay::DelayNs, digital::OutputPin};
use snafu::prelude::*;

use crate::errors::{Error, PinAlreadyBoundSnafu};

/// One bit on the data line: a high phase followed by a low phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    /// Duration of the high phase, in nanoseconds.
    pub high_ns: u16,
    /// Duration of the low phase, in nanoseconds.
    pub low_ns: u16,
}

impl Pulse {
    /// Creates a pulse.
    pub const fn new(high_ns: u16, low_ns: u16) -> Self {
        Self { high_ns, low_ns }
    }
}

/// A digital output line able to emit precisely timed pulses.
///
/// This is the hardware seam of the driver. Implementations are
/// expected to hold every pulse width within the tolerance of the
/// LED protocol (roughly +-150ns).
pub trait PulseOutput {
    /// The error the line reports when a transmission fails.
    type Error: core::fmt::Debug;

    /// Whether the line is configured and able to transmit.
    ///
    /// Checked before the first pulse of every frame, so that a
    /// misconfigured line never produces a half-sent frame.
    fn is_ready(&mut self) -> bool {
        true
    }

    /// Emits the given pulses back to back, starting now.
    fn send(&mut self, pulses: &mut dyn Iterator<Item = Pulse>) -> Result<(), Self::Error>;

    /// Holds the line low for at least `reset_us` microseconds,
    /// which makes the LEDs apply the frame.
    fn latch(&mut self, reset_us: u32) -> Result<(), Self::Error>;
}

/// A data pin that can drive at most one strip at a time.
///
/// Strips borrow the pin; binding a second strip while the first one
/// is alive fails. Dropping the strip releases the pin again.
///
/// Not `Sync`: all strip operations happen on one control thread.
#[derive(Debug)]
pub struct DataPin<O> {
    id: u8,
    bound: Cell<bool>,
    output: RefCell<O>,
}

impl<O> DataPin<O> {
    /// Wraps an output line. `id` names the pin in logs and errors.
    pub const fn new(id: u8, output: O) -> Self {
        Self {
            id,
            bound: Cell::new(false),
            output: RefCell::new(output),
        }
    }

    /// The pin identifier.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Whether a strip currently drives this pin.
    pub fn is_bound(&self) -> bool {
        self.bound.get()
    }

    /// Borrows the output line, e.g. to inspect it.
    ///
    /// # Panics
    ///
    /// Panics if called while a frame is being transmitted.
    pub fn output(&self) -> Ref<'_, O> {
        self.output.borrow()
    }

    /// Mutably borrows the output line, e.g. to reconfigure it.
    ///
    /// # Panics
    ///
    /// Panics if called while a frame is being transmitted.
    pub fn output_mut(&self) -> RefMut<'_, O> {
        self.output.borrow_mut()
    }

    /// Returns the output line.
    pub fn into_inner(self) -> O {
        self.output.into_inner()
    }

    pub(crate) fn bind(&self) -> Result<(), Error> {
        ensure!(!self.bound.get(), PinAlreadyBoundSnafu { pin: self.id });
        self.bound.set(true);
        log::debug!("Pin {} bound.", self.id);
        Ok(())
    }

    pub(crate) fn release(&self) {
        self.bound.set(false);
        log::debug!("Pin {} released.", self.id);
    }

    pub(crate) fn try_output_mut(&self) -> Option<RefMut<'_, O>> {
        self.output.try_borrow_mut().ok()
    }
}

/// Drives the data line by toggling a GPIO with busy-wait delays.
///
/// Only usable if the delay provider is accurate to a few hundred
/// nanoseconds, which typically requires a fast core and no
/// interrupts during the frame.
pub struct BitBangOutput<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> BitBangOutput<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Creates the output. The line is driven low right away.
    pub fn new(mut pin: P, delay: D) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self { pin, delay })
    }

    /// Returns the GPIO and the delay provider.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P, D> PulseOutput for BitBangOutput<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    type Error = P::Error;

    fn send(&mut self, pulses: &mut dyn Iterator<Item = Pulse>) -> Result<(), Self::Error> {
        for pulse in pulses {
            self.pin.set_high()?;
            self.delay.delay_ns(pulse.high_ns.into());
            self.pin.set_low()?;
            self.delay.delay_ns(pulse.low_ns.into());
        }
        Ok(())
    }

    fn latch(&mut self, reset_us: u32) -> Result<(), Self::Error> {
        self.pin.set_low()?;
        self.delay.delay_us(reset_us);
        Ok(())
    }
}
