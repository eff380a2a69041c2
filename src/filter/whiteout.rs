use image::{Pixel, Rgba, RgbaImage};
use rayon::prelude::*;

use super::Filter;

pub const DEFAULT_THRESHOLD: u8 = 200;

const TRANSPARENT_WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0]);

// strictly above, alpha is not looked at
pub fn is_near_white(px: &Rgba<u8>, threshold: u8) -> bool {
    px[0] > threshold && px[1] > threshold && px[2] > threshold
}

pub fn whiteout_pixel(px: Rgba<u8>, threshold: u8) -> Rgba<u8> {
    if is_near_white(&px, threshold) {
        TRANSPARENT_WHITE
    } else {
        px
    }
}

/// Returns a copy of `pixels` with every near-white pixel replaced by fully
/// transparent white, in the same order.
///
/// ```
/// use image::Rgba;
/// use whiteout::filter::{filter, DEFAULT_THRESHOLD};
///
/// let out = filter(
///     &[Rgba([201, 210, 230, 255]), Rgba([200, 255, 255, 255])],
///     DEFAULT_THRESHOLD,
/// );
/// assert_eq!(out, vec![Rgba([255, 255, 255, 0]), Rgba([200, 255, 255, 255])]);
/// ```
pub fn filter(pixels: &[Rgba<u8>], threshold: u8) -> Vec<Rgba<u8>> {
    pixels
        .iter()
        .map(|px| whiteout_pixel(*px, threshold))
        .collect()
}

pub struct Whiteout {
    threshold: u8,
    parallel: bool,
    converted: usize,
}

impl Whiteout {
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold,
            parallel: false,
            converted: 0,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn converted(&self) -> usize {
        self.converted
    }
}

impl Default for Whiteout {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Filter for Whiteout {
    fn transform_buffer(&mut self, buffer: &mut RgbaImage) {
        let threshold = self.threshold;
        let convert = |chunk: &mut [u8]| {
            let px = Rgba::from_slice_mut(chunk);
            let hit = is_near_white(px, threshold);
            *px = whiteout_pixel(*px, threshold);
            hit as usize
        };

        let raw: &mut [u8] = buffer;
        self.converted = if self.parallel {
            raw.par_chunks_mut(4).map(convert).sum()
        } else {
            raw.chunks_mut(4).map(convert).sum()
        };
    }
}
