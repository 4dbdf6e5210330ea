pub mod image_helper {
    use crate::error::{PxlError, Result};
    use image::buffer::ConvertBuffer;
    use image::{ImageFormat, RgbImage, RgbaImage};
    use std::io::Cursor;
    use std::path::Path;

    /// Decodes a byte stream of any supported format into 8-bit RGBA, returning
    /// the detected format alongside so the output can be written back in kind.
    pub fn decode(bytes: &[u8]) -> Result<(RgbaImage, ImageFormat)> {
        let format = image::guess_format(bytes).map_err(PxlError::Decode)?;
        let image = image::load_from_memory_with_format(bytes, format).map_err(PxlError::Decode)?;
        Ok((image.to_rgba8(), format))
    }

    pub fn encode(image: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>> {
        let mut output = Cursor::new(Vec::new());
        let written = match format {
            // JPEG has no alpha channel.
            ImageFormat::Jpeg => {
                let rgb: RgbImage = image.convert();
                rgb.write_to(&mut output, format)
            }
            _ => image.write_to(&mut output, format),
        };
        written.map_err(PxlError::Encode)?;
        Ok(output.into_inner())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<(RgbaImage, ImageFormat)> {
        let bytes = std::fs::read(path)?;
        decode(&bytes)
    }

    /// Writes `image` to `path` in the format named by its extension.
    pub fn save(path: impl AsRef<Path>, image: &RgbaImage) -> Result<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path).map_err(PxlError::Encode)?;
        std::fs::write(path, encode(image, format)?)?;
        Ok(())
    }
}
