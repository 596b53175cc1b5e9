#![allow(dead_code)]

use micropixel::{Pulse, PulseOutput, Timing};

/// A data line that records every frame it is asked to send.
#[derive(Debug)]
pub struct RecordingOutput {
    pub timing: Timing,
    pub ready: bool,
    pub frames: Vec<Vec<Pulse>>,
    pub latches: Vec<u32>,
}

impl RecordingOutput {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            ready: true,
            frames: Vec::new(),
            latches: Vec::new(),
        }
    }

    /// Decodes the pulses of a frame back into the bytes on the wire.
    pub fn frame_bytes(&self, frame: usize) -> Vec<u8> {
        let one = Pulse::new(self.timing.one_high_ns, self.timing.one_low_ns);
        let zero = Pulse::new(self.timing.zero_high_ns, self.timing.zero_low_ns);

        let pulses = &self.frames[frame];
        assert_eq!(pulses.len() % 8, 0, "frame is not byte aligned");

        pulses
            .chunks(8)
            .map(|bits| {
                bits.iter().fold(0u8, |byte, pulse| {
                    assert!(*pulse == one || *pulse == zero, "bad pulse {pulse:?}");
                    (byte << 1) | u8::from(*pulse == one)
                })
            })
            .collect()
    }

    pub fn last_frame_bytes(&self) -> Vec<u8> {
        self.frame_bytes(self.frames.len() - 1)
    }
}

impl PulseOutput for RecordingOutput {
    type Error = &'static str;

    fn is_ready(&mut self) -> bool {
        self.ready
    }

    fn send(&mut self, pulses: &mut dyn Iterator<Item = Pulse>) -> Result<(), Self::Error> {
        self.frames.push(pulses.collect());
        Ok(())
    }

    fn latch(&mut self, reset_us: u32) -> Result<(), Self::Error> {
        self.latches.push(reset_us);
        Ok(())
    }
}
