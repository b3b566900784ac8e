//! Owned RGBA pixel grid.
//!
//! The padder works purely on `Pixmap`; decoding and encoding happen at the
//! `io` boundary so nothing here depends on the `image` crate.

use super::Colour;

/// A row-major grid of RGBA pixels with its origin at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Pixmap {
    /// Create a fully transparent pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_pixel(width, height, Colour::TRANSPARENT)
    }

    /// Create a pixmap filled with a single colour.
    pub fn from_pixel(width: u32, height: u32, colour: Colour) -> Self {
        Self {
            width,
            height,
            pixels: vec![colour; width as usize * height as usize],
        }
    }

    /// Create a pixmap by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Colour) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap an existing row-major pixel buffer.
    ///
    /// Returns `None` when the buffer length doesn't match `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Colour>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Get the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the pixmap.
    pub fn get(&self, x: u32, y: u32) -> Colour {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the pixmap.
    pub fn set(&mut self, x: u32, y: u32, colour: Colour) {
        let i = self.index(x, y);
        self.pixels[i] = colour;
    }

    /// One full row of pixels.
    pub fn row(&self, y: u32) -> &[Colour] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// One full column of pixels, top to bottom.
    #[cfg(test)]
    pub fn column(&self, x: u32) -> Vec<Colour> {
        (0..self.height).map(|y| self.get(x, y)).collect()
    }

    /// Copy a `width x height` block from `src` at `(sx, sy)` into this
    /// pixmap at `(dx, dy)`. Both rectangles must lie fully inside their
    /// pixmaps.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_from(
        &mut self,
        src: &Pixmap,
        sx: u32,
        sy: u32,
        width: u32,
        height: u32,
        dx: u32,
        dy: u32,
    ) {
        let w = width as usize;
        for row in 0..height {
            let from = src.index(sx, sy + row);
            let to = self.index(dx, dy + row);
            self.pixels[to..to + w].copy_from_slice(&src.pixels[from..from + w]);
        }
    }

    /// Overwrite column `to` with the contents of column `from`.
    pub fn copy_column(&mut self, from: u32, to: u32) {
        for y in 0..self.height {
            let colour = self.get(from, y);
            self.set(to, y, colour);
        }
    }

    /// Overwrite row `to` with the contents of row `from`.
    pub fn copy_row(&mut self, from: u32, to: u32) {
        let w = self.width as usize;
        let start = self.index(0, from);
        let dest = self.index(0, to);
        self.pixels.copy_within(start..start + w, dest);
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} pixmap",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Pixmap {
        Pixmap::from_fn(width, height, |x, y| Colour::rgb(x as u8, y as u8, 0))
    }

    #[test]
    fn test_new_is_transparent() {
        let p = Pixmap::new(3, 2);
        assert_eq!(p.dimensions(), (3, 2));
        assert!(p.pixels().iter().all(|c| c.is_transparent()));
    }

    #[test]
    fn test_from_fn_row_major() {
        let p = gradient(3, 2);
        assert_eq!(p.pixels()[4], Colour::rgb(1, 1, 0));
        assert_eq!(p.get(2, 1), Colour::rgb(2, 1, 0));
    }

    #[test]
    fn test_from_pixels_length_mismatch() {
        assert!(Pixmap::from_pixels(2, 2, vec![Colour::BLACK; 3]).is_none());
        assert!(Pixmap::from_pixels(2, 2, vec![Colour::BLACK; 4]).is_some());
    }

    #[test]
    fn test_set_and_get() {
        let mut p = Pixmap::new(2, 2);
        p.set(1, 0, Colour::WHITE);
        assert_eq!(p.get(1, 0), Colour::WHITE);
        assert_eq!(p.get(0, 1), Colour::TRANSPARENT);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        Pixmap::new(2, 2).get(2, 0);
    }

    #[test]
    fn test_row_and_column() {
        let p = gradient(3, 2);
        assert_eq!(
            p.row(1),
            &[Colour::rgb(0, 1, 0), Colour::rgb(1, 1, 0), Colour::rgb(2, 1, 0)]
        );
        assert_eq!(p.column(2), vec![Colour::rgb(2, 0, 0), Colour::rgb(2, 1, 0)]);
    }

    #[test]
    fn test_copy_from_block() {
        let src = gradient(4, 4);
        let mut dst = Pixmap::new(5, 5);
        dst.copy_from(&src, 2, 2, 2, 2, 1, 3);

        assert_eq!(dst.get(1, 3), src.get(2, 2));
        assert_eq!(dst.get(2, 3), src.get(3, 2));
        assert_eq!(dst.get(1, 4), src.get(2, 3));
        assert_eq!(dst.get(2, 4), src.get(3, 3));
        assert_eq!(dst.get(0, 3), Colour::TRANSPARENT);
        assert_eq!(dst.get(3, 4), Colour::TRANSPARENT);
    }

    #[test]
    fn test_copy_column() {
        let mut p = gradient(3, 3);
        p.copy_column(2, 0);
        assert_eq!(p.column(0), p.column(2));
        assert_eq!(p.get(1, 1), Colour::rgb(1, 1, 0));
    }

    #[test]
    fn test_copy_row() {
        let mut p = gradient(3, 3);
        p.copy_row(0, 2);
        assert_eq!(p.row(2), p.row(0));
        assert_eq!(p.get(0, 1), Colour::rgb(0, 1, 0));
    }
}
