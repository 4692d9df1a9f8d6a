use std::fmt;

use eframe::egui::ColorImage;
use image::RgbaImage;

use super::error::BufferError;

/// Bytes per pixel: red, green, blue, alpha.
pub const CHANNELS: usize = 4;

// ---------------------------------------------------------------------------
// ImageBuffer – RGBA8 pixels, row-major, possibly padded rows
// ---------------------------------------------------------------------------

/// An RGBA8 image stored row by row.
///
/// Each row starts `stride` bytes after the previous one. The bytes between
/// `width * 4` and `stride` are padding: they are never read as pixels and
/// do not take part in equality.
#[derive(Clone)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// A tightly packed buffer with every channel set to zero.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = width as usize * CHANNELS;
        Self {
            width,
            height,
            stride,
            data: vec![0; stride * height as usize],
        }
    }

    /// Wrap existing bytes. `stride` is the distance in bytes between rows.
    pub fn from_raw(
        width: u32,
        height: u32,
        stride: usize,
        data: Vec<u8>,
    ) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::EmptyDimensions { width, height });
        }
        let row_bytes = (width as usize)
            .checked_mul(CHANNELS)
            .ok_or(BufferError::LayoutOverflow { width, height, stride })?;
        if stride < row_bytes {
            return Err(BufferError::StrideTooShort { stride, row_bytes });
        }
        // The last row does not need trailing padding.
        let expected = stride
            .checked_mul(height as usize - 1)
            .and_then(|n| n.checked_add(row_bytes))
            .ok_or(BufferError::LayoutOverflow { width, height, stride })?;
        if data.len() < expected {
            return Err(BufferError::DataTooShort {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Take ownership of a decoded `image` crate buffer (always tightly packed).
    pub fn from_rgba_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            stride: width as usize * CHANNELS,
            data: image.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of meaningful bytes in a row (excludes padding).
    pub fn row_bytes(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Whether `other` has the same width and height. Stride may differ.
    pub fn same_dimensions(&self, other: &ImageBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// The pixels of row `y`, without padding.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.row_bytes()]
    }

    /// Mutable pixels of row `y`, without padding.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.stride;
        let end = start + self.row_bytes();
        &mut self.data[start..end]
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = x as usize * CHANNELS;
        let row = self.row(y);
        [row[offset], row[offset + 1], row[offset + 2], row[offset + 3]]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let offset = x as usize * CHANNELS;
        self.row_mut(y)[offset..offset + CHANNELS].copy_from_slice(&rgba);
    }

    /// Tightly packed pixel bytes, row padding removed.
    pub fn packed_bytes(&self) -> Vec<u8> {
        if self.stride == self.row_bytes() {
            return self.data[..self.row_bytes() * self.height as usize].to_vec();
        }
        let mut out = Vec::with_capacity(self.row_bytes() * self.height as usize);
        for y in 0..self.height {
            out.extend_from_slice(self.row(y));
        }
        out
    }

    /// Tightly packed copy for the `image` crate encoders.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_raw(self.width, self.height, self.packed_bytes())
            .expect("packed_bytes() holds exactly width * height * 4 bytes")
    }

    /// Copy suitable for uploading as an egui texture.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.packed_bytes(),
        )
    }
}

impl PartialEq for ImageBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.same_dimensions(other) && (0..self.height).all(|y| self.row(y) == other.row(y))
    }
}

impl Eq for ImageBuffer {}

impl fmt::Debug for ImageBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .finish_non_exhaustive()
    }
}
