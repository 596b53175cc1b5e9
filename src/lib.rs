#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod animation;
pub mod controller;

mod blocking;
mod buffer;
mod config;
mod errors;
mod pins;
mod pixel;
mod pixelstream;
mod window;

pub use blocking::RenderEngine;
pub use buffer::{PixelBuffer, DEFAULT_BRIGHTNESS};
pub use config::{ColorMode, StripConfig, Timing};
pub use errors::{Error, ErrorKind};
pub use pins::{BitBangOutput, DataPin, Pulse, PulseOutput};
pub use pixel::{colors, Pixel};
pub use pixelstream::RenderState;
pub use window::StripWindow;
