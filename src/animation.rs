//! In-place reordering of pixel ranges.
//!
//! None of these transmit anything; call `show()` afterwards.

use crate::Pixel;

/// Rotates the pixels by `offset` positions toward the end.
///
/// Pixels pushed past the end reappear at the start.
/// Negative offsets rotate toward the start.
pub fn rotate(pixels: &mut [Pixel], offset: isize) {
    let len = pixels.len();
    if len == 0 {
        return;
    }

    let steps = offset.unsigned_abs() % len;
    if offset >= 0 {
        pixels.rotate_right(steps);
    } else {
        pixels.rotate_left(steps);
    }
}

/// Moves the pixels by `offset` positions toward the end.
///
/// Vacated positions turn black and pixels moved past the end are
/// dropped. Negative offsets move toward the start.
pub fn shift(pixels: &mut [Pixel], offset: isize) {
    let len = pixels.len();
    let steps = offset.unsigned_abs();
    if steps >= len {
        pixels.fill(Pixel::BLACK);
        return;
    }

    if offset >= 0 {
        pixels.copy_within(..len - steps, steps);
        pixels[..steps].fill(Pixel::BLACK);
    } else {
        pixels.copy_within(steps.., 0);
        pixels[len - steps..].fill(Pixel::BLACK);
    }
}

/// Dims the pixels quadratically toward both ends of the range,
/// leaving the middle at full intensity.
pub fn ease_brightness(pixels: &mut [Pixel]) {
    let len = pixels.len();
    let mid = len / 2;
    if mid == 0 {
        return;
    }

    let mid_sq = (mid as u128).pow(2);
    for (k, pixel) in pixels.iter_mut().enumerate() {
        let distance = (if k > mid { len - 1 - k } else { k }) as u128;
        let br = (255 * distance * distance / mid_sq).min(255) as u32;
        let ease = |channel: u8| -> u8 { ((u32::from(channel) * br) >> 8) as u8 };
        *pixel = Pixel::with_white(
            ease(pixel.red),
            ease(pixel.green),
            ease(pixel.blue),
            ease(pixel.white),
        );
    }
}
