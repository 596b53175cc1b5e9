mod common;

use common::RecordingOutput;
use micropixel::{
    colors, ColorMode, DataPin, Error, ErrorKind, Pixel, PixelBuffer, StripConfig, Timing,
};

fn ws2812_pin(id: u8) -> DataPin<RecordingOutput> {
    DataPin::new(id, RecordingOutput::new(Timing::WS2812))
}

#[test]
fn set_then_get_before_show() {
    let pin = ws2812_pin(0);
    let mut strip = PixelBuffer::<_, 24>::create(&pin, 24, ColorMode::Rgb).unwrap();

    let palette = [colors::RED, colors::VIOLET, Pixel::new(1, 2, 3)];
    for i in 0..strip.length() {
        strip.set_pixel_color(i, palette[i % palette.len()]);
    }
    for i in 0..strip.length() {
        assert_eq!(strip.get_pixel_color(i), palette[i % palette.len()]);
    }
    assert!(pin.output().frames.is_empty());
}

#[test]
fn out_of_range_access() {
    let pin = ws2812_pin(0);
    let mut strip = PixelBuffer::<_, 24>::create(&pin, 24, ColorMode::Rgb).unwrap();
    let before = strip.pixels().to_vec();

    for index in [24, 25, 1000, usize::MAX] {
        strip.set_pixel_color(index, colors::RED);
        assert_eq!(strip.get_pixel_color(index), Pixel::BLACK);
    }
    assert_eq!(strip.pixels(), before.as_slice());
}

#[test]
fn show_sends_grb_with_brightness() {
    let pin = ws2812_pin(0);
    let mut strip = PixelBuffer::<_, 3>::create(&pin, 3, ColorMode::Rgb).unwrap();
    strip.set_brightness(255);
    strip.set_pixel_color(0, Pixel::new(10, 20, 30));
    strip.set_pixel_color(2, colors::WHITE);
    strip.show().unwrap();

    strip.set_brightness(128);
    strip.show().unwrap();

    let output = pin.output();
    assert_eq!(output.frames.len(), 2);
    assert_eq!(output.latches, [280, 280]);
    assert_eq!(output.frame_bytes(0), [20, 10, 30, 0, 0, 0, 255, 255, 255]);
    assert_eq!(output.frame_bytes(1), [10, 5, 15, 0, 0, 0, 128, 128, 128]);
}

#[test]
fn rgbw_frames_carry_white() {
    let pin = DataPin::new(2, RecordingOutput::new(Timing::SK6812));
    let mut strip = PixelBuffer::<_, 2>::create(&pin, 2, ColorMode::Rgbw).unwrap();
    strip.set_brightness(255);
    strip.set_pixel_color(0, Pixel::new(1, 2, 3));
    strip.set_pixel_white(0, 4);
    strip.set_pixel_color(1, Pixel::with_white(5, 6, 7, 8));
    strip.show().unwrap();

    let output = pin.output();
    assert_eq!(output.last_frame_bytes(), [2, 1, 3, 4, 6, 5, 7, 8]);
    assert_eq!(output.latches, [80]);
}

#[test]
fn custom_timing_is_used() {
    let pin = DataPin::new(0, RecordingOutput::new(Timing::SK6812));
    let config = StripConfig::new(ColorMode::RgbRgb).with_timing(Timing::SK6812);
    let mut strip = PixelBuffer::<_, 1>::create(&pin, 1, config).unwrap();
    strip.set_brightness(255);
    strip.show_color(Pixel::new(1, 2, 3)).unwrap();

    assert_eq!(pin.output().last_frame_bytes(), [1, 2, 3]);
}

#[test]
fn brightness_is_monotonic_on_the_wire() {
    let pin = ws2812_pin(0);
    let mut strip = PixelBuffer::<_, 4>::create(&pin, 4, ColorMode::Rgb).unwrap();
    strip.set_pixel_color(0, Pixel::new(255, 1, 77));
    strip.set_pixel_color(1, Pixel::new(128, 3, 200));
    strip.set_pixel_color(3, colors::ORANGE);

    for brightness in (0..=255u8).step_by(5) {
        strip.set_brightness(brightness);
        strip.show().unwrap();
    }

    let output = pin.output();
    for frame in 1..output.frames.len() {
        let previous = output.frame_bytes(frame - 1);
        let current = output.frame_bytes(frame);
        assert!(previous.iter().zip(&current).all(|(a, b)| a <= b));
    }
}

#[test]
fn rotate_length_times_restores_strip() {
    let pin = ws2812_pin(0);
    let mut strip = PixelBuffer::<_, 24>::create(&pin, 24, ColorMode::Rgb).unwrap();
    for i in 0..strip.length() {
        strip.set_pixel_color(i, Pixel::new(i as u8, 0, 0));
    }
    let original = strip.pixels().to_vec();

    strip.rotate();
    assert_eq!(strip.get_pixel_color(0), Pixel::new(23, 0, 0));
    assert_eq!(strip.get_pixel_color(1), Pixel::new(0, 0, 0));

    for _ in 1..strip.length() {
        strip.rotate();
    }
    assert_eq!(strip.pixels(), original.as_slice());
    assert!(pin.output().frames.is_empty());
}

#[test]
fn shift_is_lossy() {
    let pin = ws2812_pin(0);
    let mut strip = PixelBuffer::<_, 8>::create(&pin, 8, ColorMode::Rgb).unwrap();
    strip.show_color(colors::GREEN).unwrap();

    strip.shift(3);
    for i in 0..3 {
        assert_eq!(strip.get_pixel_color(i), Pixel::BLACK);
    }
    for i in 3..8 {
        assert_eq!(strip.get_pixel_color(i), colors::GREEN);
    }

    strip.shift(-3);
    for i in 0..5 {
        assert_eq!(strip.get_pixel_color(i), colors::GREEN);
    }
    for i in 5..8 {
        assert_eq!(strip.get_pixel_color(i), Pixel::BLACK);
    }
    assert_eq!(strip.length(), 8);
}

#[test]
fn window_on_24_pixel_strip() {
    let pin = ws2812_pin(0);
    let mut strip = PixelBuffer::<_, 24>::create(&pin, 24, ColorMode::Rgb).unwrap();

    let mut window = strip.range(10, 10);
    window.set_pixel_color(0, colors::RED);
    window.show().unwrap();

    assert_eq!(strip.get_pixel_color(10), colors::RED);
    assert_eq!(strip.get_pixel_color(9), Pixel::BLACK);

    // Showing a window sends the whole strip.
    assert_eq!(pin.output().last_frame_bytes().len(), 24 * 3);
}

#[test]
fn bar_graph_half() {
    let pin = ws2812_pin(0);
    let mut strip = PixelBuffer::<_, 24>::create(&pin, 24, ColorMode::Rgb).unwrap();

    strip.range(10, 10).show_bar_graph(5, 10).unwrap();

    for i in 10..15 {
        assert_ne!(strip.get_pixel_color(i), Pixel::BLACK, "pixel {i}");
    }
    for i in 15..20 {
        assert_eq!(strip.get_pixel_color(i), Pixel::BLACK, "pixel {i}");
    }
    assert_eq!(pin.output().frames.len(), 1);
}

#[test]
fn zero_length_is_invalid() {
    let pin = ws2812_pin(0);
    let err = PixelBuffer::<_, 24>::create(&pin, 0, ColorMode::Rgb).err();

    assert_eq!(err, Some(Error::ZeroLength));
    assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::InvalidConfig));
}

#[test]
fn pin_cannot_be_bound_twice() {
    let pin = ws2812_pin(5);
    let _first = PixelBuffer::<_, 24>::create(&pin, 24, ColorMode::Rgb).unwrap();

    let second = PixelBuffer::<_, 8>::create(&pin, 8, ColorMode::Rgb).err();
    assert_eq!(second, Some(Error::PinAlreadyBound { pin: 5 }));
    assert_eq!(second.map(|e| e.kind()), Some(ErrorKind::InvalidConfig));

    let other_pin = ws2812_pin(6);
    assert!(PixelBuffer::<_, 8>::create(&other_pin, 8, ColorMode::Rgb).is_ok());
}

#[test]
fn unready_pin_is_hardware_unavailable() {
    let pin = ws2812_pin(9);
    let mut strip = PixelBuffer::<_, 4>::create(&pin, 4, ColorMode::Rgb).unwrap();
    strip.set_pixel_color(0, colors::BLUE);
    pin.output_mut().ready = false;

    let err = strip.range(1, 2).show_color(colors::RED).err();
    assert_eq!(err, Some(Error::HardwareUnavailable { pin: 9 }));
    assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::HardwareUnavailable));
    assert!(pin.output().frames.is_empty());
    assert!(pin.output().latches.is_empty());

    // The pixels survive the failure and can be sent later.
    pin.output_mut().ready = true;
    strip.show().unwrap();
    assert_eq!(strip.get_pixel_color(1), colors::RED);
    assert_eq!(pin.output().frames.len(), 1);
}
