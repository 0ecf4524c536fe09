// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! An owned RGB8 pixel grid with row access and rectangular block copies.

use crate::math::{Extent2D, Origin2D};

/// Number of bytes per pixel. All buffers in this crate are tightly packed
/// RGB8 with no row padding.
pub const BYTES_PER_PIXEL: usize = 3;

/// A rectangular region within a [`PixelBuffer`], given as a top-left
/// origin and an extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// The top-left corner of the region.
    pub origin: Origin2D,
    /// The size of the region.
    pub extent: Extent2D,
}

impl Region {
    /// Creates a new region from its corner coordinates and size.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            origin: Origin2D::new(x, y),
            extent: Extent2D::new(width, height),
        }
    }
}

/// An owned, tightly packed RGB8 image buffer.
///
/// This is the CPU-side staging surface the capture pipeline composites
/// into and the equirectangular warp reads from. Encoding the finished
/// buffer to an on-disk format is the caller's concern; the raw bytes are
/// exposed through [`PixelBuffer::as_bytes`] and [`PixelBuffer::into_bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    extent: Extent2D,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a zero-filled (black) buffer of the given extent.
    pub fn new(extent: Extent2D) -> Self {
        Self {
            extent,
            data: vec![0; extent.area() * BYTES_PER_PIXEL],
        }
    }

    /// Creates a buffer of the given extent filled with a solid color.
    pub fn filled(extent: Extent2D, color: [u8; 3]) -> Self {
        let mut buffer = Self::new(extent);
        buffer.fill(color);
        buffer
    }

    /// The buffer's width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.extent.width
    }

    /// The buffer's height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.extent.height
    }

    /// The buffer's extent.
    #[inline]
    pub fn extent(&self) -> Extent2D {
        self.extent
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the buffer.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let offset = self.pixel_offset(x, y);
        [self.data[offset], self.data[offset + 1], self.data[offset + 2]]
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the buffer.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        let offset = self.pixel_offset(x, y);
        self.data[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&color);
    }

    /// Fills the whole buffer with a solid color.
    pub fn fill(&mut self, color: [u8; 3]) {
        for pixel in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Returns the raw bytes of row `y`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.row_stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Returns the raw bytes of row `y`, mutably.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.row_stride();
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    /// Copies a rectangular region of `source` into this buffer, placing its
    /// top-left corner at `dest`.
    ///
    /// The region is clipped against both the source and destination bounds,
    /// so an oversized region copies only the overlapping pixels.
    pub fn blit_rect(&mut self, source: &PixelBuffer, region: Region, dest: Origin2D) {
        if region.origin.x >= source.width() || region.origin.y >= source.height() {
            return;
        }
        if dest.x >= self.width() || dest.y >= self.height() {
            return;
        }
        let copy_width = region
            .extent
            .width
            .min(source.width() - region.origin.x)
            .min(self.width() - dest.x) as usize;
        let copy_height = region
            .extent
            .height
            .min(source.height() - region.origin.y)
            .min(self.height() - dest.y);

        let src_stride = source.row_stride();
        let dst_stride = self.row_stride();
        for row in 0..copy_height {
            let src_start = (region.origin.y + row) as usize * src_stride
                + region.origin.x as usize * BYTES_PER_PIXEL;
            let dst_start =
                (dest.y + row) as usize * dst_stride + dest.x as usize * BYTES_PER_PIXEL;
            let bytes = copy_width * BYTES_PER_PIXEL;
            self.data[dst_start..dst_start + bytes]
                .copy_from_slice(&source.data[src_start..src_start + bytes]);
        }
    }

    /// The raw bytes of the whole buffer, rows top-to-bottom.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns its raw bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn row_stride(&self) -> usize {
        self.extent.width as usize * BYTES_PER_PIXEL
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.extent.width && y < self.extent.height,
            "pixel ({x}, {y}) outside buffer {}x{}",
            self.extent.width,
            self.extent.height
        );
        y as usize * self.row_stride() + x as usize * BYTES_PER_PIXEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_zero_filled() {
        let buffer = PixelBuffer::new(Extent2D::new(4, 3));
        assert_eq!(buffer.as_bytes().len(), 4 * 3 * BYTES_PER_PIXEL);
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn pixel_roundtrip() {
        let mut buffer = PixelBuffer::new(Extent2D::new(8, 8));
        buffer.set_pixel(3, 5, [10, 20, 30]);
        assert_eq!(buffer.pixel(3, 5), [10, 20, 30]);
        assert_eq!(buffer.pixel(5, 3), [0, 0, 0]);
    }

    #[test]
    fn blit_copies_region() {
        let src = PixelBuffer::filled(Extent2D::new(4, 4), [7, 8, 9]);
        let mut dst = PixelBuffer::new(Extent2D::new(8, 8));
        dst.blit_rect(&src, Region::new(1, 0, 2, 4), Origin2D::new(5, 2));

        for y in 0..8 {
            for x in 0..8 {
                let expected = if (5..7).contains(&x) && (2..6).contains(&y) {
                    [7, 8, 9]
                } else {
                    [0, 0, 0]
                };
                assert_eq!(dst.pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn blit_clips_oversized_region() {
        let src = PixelBuffer::filled(Extent2D::new(4, 4), [1, 1, 1]);
        let mut dst = PixelBuffer::new(Extent2D::new(4, 4));
        // Region taller than the source and destination placed near the edge.
        dst.blit_rect(&src, Region::new(3, 0, 2, 100), Origin2D::new(3, 2));
        assert_eq!(dst.pixel(3, 2), [1, 1, 1]);
        assert_eq!(dst.pixel(3, 3), [1, 1, 1]);
        assert_eq!(dst.pixel(2, 2), [0, 0, 0]);
    }

    #[test]
    fn blit_out_of_bounds_is_a_no_op() {
        let src = PixelBuffer::filled(Extent2D::new(2, 2), [5, 5, 5]);
        let mut dst = PixelBuffer::new(Extent2D::new(4, 4));
        dst.blit_rect(&src, Region::new(2, 0, 1, 1), Origin2D::new(0, 0));
        dst.blit_rect(&src, Region::new(0, 0, 1, 1), Origin2D::new(4, 0));
        assert!(dst.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn row_access_matches_pixels() {
        let mut buffer = PixelBuffer::new(Extent2D::new(3, 2));
        buffer.set_pixel(0, 1, [1, 2, 3]);
        buffer.set_pixel(2, 1, [4, 5, 6]);
        assert_eq!(buffer.row(1), &[1, 2, 3, 0, 0, 0, 4, 5, 6]);
    }
}
