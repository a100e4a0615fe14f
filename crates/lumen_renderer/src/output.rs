//! 8-bit RGB image buffer and binary PPM output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ColorType, ImageEncoder, ImageResult};

/// Rendered pixels, 3 bytes per pixel.
///
/// Row-major with row `j = 0` at the bottom of the image, matching the
/// camera's pixel enumeration: pixel `(i, j)` lives at `3 * (i + j * width)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; 3 * width as usize * height as usize],
        }
    }

    #[inline]
    fn offset(&self, i: u32, j: u32) -> usize {
        3 * (i as usize + j as usize * self.width as usize)
    }

    /// Get the pixel at (i, j).
    pub fn get(&self, i: u32, j: u32) -> [u8; 3] {
        let o = self.offset(i, j);
        [self.pixels[o], self.pixels[o + 1], self.pixels[o + 2]]
    }

    /// Set the pixel at (i, j).
    pub fn set(&mut self, i: u32, j: u32, rgb: [u8; 3]) {
        let o = self.offset(i, j);
        self.pixels[o..o + 3].copy_from_slice(&rgb);
    }

    /// Bytes of one row.
    pub fn row(&self, j: u32) -> &[u8] {
        let start = self.offset(0, j);
        &self.pixels[start..start + 3 * self.width as usize]
    }

    /// Pixels reordered top row first, as image files expect.
    pub fn to_top_down(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len());
        for j in (0..self.height).rev() {
            bytes.extend_from_slice(self.row(j));
        }
        bytes
    }

    /// Encode as a binary PPM (P6, max value 255).
    pub fn write_ppm<W: Write>(&self, writer: W) -> ImageResult<()> {
        PnmEncoder::new(writer)
            .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
            .write_image(&self.to_top_down(), self.width, self.height, ColorType::Rgb8)
    }

    /// Save as a binary PPM file.
    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_ppm(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_and_layout() {
        let mut image = ImageBuffer::new(3, 2);
        assert_eq!(image.pixels.len(), 18);

        image.set(2, 1, [1, 2, 3]);
        assert_eq!(image.get(2, 1), [1, 2, 3]);
        assert_eq!(&image.pixels[15..18], &[1, 2, 3]);
    }

    #[test]
    fn test_top_down_flips_rows() {
        let mut image = ImageBuffer::new(1, 2);
        image.set(0, 0, [10, 10, 10]); // bottom
        image.set(0, 1, [20, 20, 20]); // top

        assert_eq!(image.to_top_down(), vec![20, 20, 20, 10, 10, 10]);
    }

    #[test]
    fn test_write_ppm() {
        let mut image = ImageBuffer::new(2, 2);
        image.set(0, 0, [255, 0, 0]);
        image.set(1, 1, [0, 0, 255]);

        let mut bytes = Vec::new();
        image.write_ppm(&mut bytes).unwrap();

        assert!(bytes.starts_with(b"P6"));
        let body = &bytes[bytes.len() - 12..];
        assert_eq!(body, image.to_top_down().as_slice());
        // Top-left of the file is pixel (0, 1)
        assert_eq!(&body[0..3], &[0, 0, 0]);
        assert_eq!(&body[3..6], &[0, 0, 255]);
        assert_eq!(&body[6..9], &[255, 0, 0]);
    }
}
