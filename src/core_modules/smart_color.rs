// THEORY:
// `smart_color` holds the comparative operations on colors. `Color` itself is a
// dumb container that knows nothing about other colors; everything that needs
// two of them lives here.
//
// - `closeness`: L1 distance over the four channels. It is only ever used as a
//   comparator, so it has no unit and no normalisation.
// - `blend`: floor average of exactly two colors. Two `u8` channels sum to at
//   most 510, so the per-channel sum fits a `u16` and the halved result fits
//   back into a channel.

pub mod smart_color {
    use crate::core_modules::color::color::{CHANNELS, Channel, Color};

    pub type Closeness = u32;

    /// Sum of absolute channel differences. Smaller means closer.
    pub fn closeness(a: Color, b: Color) -> Closeness {
        a.channels()
            .into_iter()
            .zip(b.channels())
            .map(|(i, j)| Closeness::from(i.abs_diff(j)))
            .sum()
    }

    /// Channel-wise `floor((a + b) / 2)`.
    pub fn blend(a: Color, b: Color) -> Color {
        let (a, b) = (a.channels(), b.channels());
        let blended: [Channel; CHANNELS] = std::array::from_fn(|k| ((u16::from(a[k]) + u16::from(b[k])) / 2) as Channel);
        Color::from(blended)
    }
}
