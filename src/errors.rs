use snafu::prelude::*;

/// Errors of the strip driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A strip must contain at least one LED.
    #[snafu(display("A strip needs at least one LED"))]
    ZeroLength,
    /// The requested LED count does not fit into the buffer storage.
    #[snafu(display("Requested {length} LEDs, but the buffer only holds {capacity}"))]
    ExceedsCapacity {
        /// The requested number of LEDs.
        length: usize,
        /// The compile-time capacity of the buffer.
        capacity: usize,
    },
    /// The pin is already driving another live strip.
    #[snafu(display("Pin {pin} is already bound to another strip"))]
    PinAlreadyBound {
        /// The identifier of the pin.
        pin: u8,
    },
    /// The pin refused or failed the transmission.
    #[snafu(display("Pin {pin} is unavailable"))]
    HardwareUnavailable {
        /// The identifier of the pin.
        pin: u8,
    },
}

/// The category an [`Error`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad construction parameters. Not recoverable by retrying.
    InvalidConfig,
    /// The pin or the transmission failed. Reported, never retried.
    HardwareUnavailable,
}

impl Error {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ZeroLength | Error::ExceedsCapacity { .. } | Error::PinAlreadyBound { .. } => {
                ErrorKind::InvalidConfig
            }
            Error::HardwareUnavailable { .. } => ErrorKind::HardwareUnavailable,
        }
    }
}
