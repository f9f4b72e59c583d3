//! Pixel-level overlay drawing.
//!
//! Annotation emits unclamped display-space coordinates; everything here
//! silently clips to frame bounds, the way windowing toolkits do.

use ndarray::ArrayViewMut3;

use crate::annotation::domain::draw_command::DrawCommand;
use crate::shared::frame::Frame;

const DOT_RADIUS: i32 = 1;

pub fn apply(frame: &mut Frame, commands: &[DrawCommand]) {
    let width = frame.width() as i32;
    let height = frame.height() as i32;
    let mut pixels = frame.as_ndarray_mut();

    for command in commands {
        match *command {
            DrawCommand::Rect {
                left,
                top,
                right,
                bottom,
                color,
            } => draw_rect_outline(&mut pixels, width, height, left, top, right, bottom, color),
            DrawCommand::Dot { x, y, color } => draw_dot(&mut pixels, width, height, x, y, color),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_rect_outline(
    pixels: &mut ArrayViewMut3<'_, u8>,
    width: i32,
    height: i32,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    color: [u8; 3],
) {
    for x in left..=right {
        put_pixel(pixels, width, height, x, top, color);
        put_pixel(pixels, width, height, x, bottom, color);
    }
    for y in top..=bottom {
        put_pixel(pixels, width, height, left, y, color);
        put_pixel(pixels, width, height, right, y, color);
    }
}

fn draw_dot(
    pixels: &mut ArrayViewMut3<'_, u8>,
    width: i32,
    height: i32,
    x: i32,
    y: i32,
    color: [u8; 3],
) {
    for dy in -DOT_RADIUS..=DOT_RADIUS {
        for dx in -DOT_RADIUS..=DOT_RADIUS {
            put_pixel(pixels, width, height, x + dx, y + dy, color);
        }
    }
}

fn put_pixel(
    pixels: &mut ArrayViewMut3<'_, u8>,
    width: i32,
    height: i32,
    x: i32,
    y: i32,
    color: [u8; 3],
) {
    if x < 0 || y < 0 || x >= width || y >= height {
        return;
    }
    for (c, &value) in color.iter().enumerate() {
        pixels[[y as usize, x as usize, c]] = value;
    }
}
