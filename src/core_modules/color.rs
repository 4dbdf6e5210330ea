// THEORY:
// The `Color` module is the most fundamental unit of the filter. It is a "dumb"
// value type for one RGBA pixel: four named integer channels and nothing else.
// Every piece of arithmetic in the crate (summing, averaging, comparing) is
// expressed on this type, never on a loose `[u8; 4]` or `Vec<u8>`.
//
// Channels are stored exactly as the codec hands them over. No clamping, no
// gamma handling, no premultiplication: averages of in-range channels are
// always in range, so there is nothing to clamp.

pub mod color {
    use image::Rgba;

    pub type Channel = u8;

    pub const CHANNELS: usize = 4;

    /// A single RGBA color with integer channels in `0..=255`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Color {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Color {
        /// Opaque black, used wherever an average has nothing to average.
        pub const BLACK: Color = Color::new(0, 0, 0, 255);

        pub const fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Color {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Channels in r, g, b, a order.
        pub const fn channels(&self) -> [Channel; CHANNELS] {
            [self.red, self.green, self.blue, self.alpha]
        }
    }

    impl From<[Channel; CHANNELS]> for Color {
        fn from([red, green, blue, alpha]: [Channel; CHANNELS]) -> Self {
            Color::new(red, green, blue, alpha)
        }
    }

    impl From<Rgba<u8>> for Color {
        fn from(pixel: Rgba<u8>) -> Self {
            Color::from(pixel.0)
        }
    }

    impl From<Color> for Rgba<u8> {
        fn from(color: Color) -> Self {
            Rgba(color.channels())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::color::*;
    use image::Rgba;

    #[test]
    fn rgba_conversion_keeps_channel_order() {
        let color = Color::new(10, 20, 30, 40);
        let pixel: Rgba<u8> = color.into();
        assert_eq!(pixel.0, [10, 20, 30, 40]);
        assert_eq!(Color::from(pixel), color);
        assert_eq!(color.channels(), [10, 20, 30, 40]);
    }
}
