mod whiteout;

pub use whiteout::{filter, is_near_white, whiteout_pixel, Whiteout, DEFAULT_THRESHOLD};

use image::RgbaImage;

pub trait Filter {
    fn transform_buffer(&mut self, buffer: &mut RgbaImage);
}
