// THEORY:
// The `ColorAccumulator` is the running summary of one quadrant of one block.
// Instead of collecting every pixel into a vector and averaging afterwards, it
// keeps a per-channel sum and a count, so scanning a block costs no allocation.
//
// It is instantiated fresh for every quadrant of every block and is never
// shared. The same mechanism averages exactly two colors when blending.

pub mod accumulator {
    use crate::core_modules::color::color::{CHANNELS, Channel, Color};

    pub type ChannelSum = u64;
    pub type Count = u64;

    /// Per-channel running sum of colors plus the number of colors added.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ColorAccumulator {
        sum: [ChannelSum; CHANNELS],
        count: Count,
    }

    impl ColorAccumulator {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add(&mut self, color: Color) {
            for (sum, channel) in self.sum.iter_mut().zip(color.channels()) {
                *sum += ChannelSum::from(channel);
            }
            self.count += 1;
        }

        pub fn count(&self) -> Count {
            self.count
        }

        pub fn is_empty(&self) -> bool {
            self.count == 0
        }

        /// Channel-wise floor of `sum / count`, or `None` if nothing was added.
        pub fn average(&self) -> Option<Color> {
            if self.is_empty() {
                return None;
            }
            // Every addend fits in a channel, so the quotient does too.
            let channels = self.sum.map(|sum| (sum / self.count) as Channel);
            Some(Color::from(channels))
        }
    }

    impl Extend<Color> for ColorAccumulator {
        fn extend<T: IntoIterator<Item = Color>>(&mut self, colors: T) {
            for color in colors {
                self.add(color);
            }
        }
    }

    impl FromIterator<Color> for ColorAccumulator {
        fn from_iter<T: IntoIterator<Item = Color>>(colors: T) -> Self {
            let mut accumulator = Self::new();
            accumulator.extend(colors);
            accumulator
        }
    }
}
