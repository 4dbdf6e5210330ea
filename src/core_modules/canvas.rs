//! The narrow pixel accessor the filter works through.
//!
//! The algorithm only needs dimensions plus get/set by coordinate. Anything
//! that can provide those can be stylized; `image::RgbaImage` is the one the
//! codec glue hands over.

use crate::core_modules::color::color::Color;
use image::RgbaImage;

pub trait PixelCanvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn get_color(&self, x: u32, y: u32) -> Color;
    fn set_color(&mut self, x: u32, y: u32, color: Color);
}

impl PixelCanvas for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn get_color(&self, x: u32, y: u32) -> Color {
        Color::from(*self.get_pixel(x, y))
    }

    fn set_color(&mut self, x: u32, y: u32, color: Color) {
        self.put_pixel(x, y, color.into());
    }
}
