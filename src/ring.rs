//! Ring-shaped pixel frame buffer
//!
//! The strip is closed into a logical ring: every index is reduced with
//! Euclidean modulo, so offsets computed left of position 0 land on the far
//! end instead of panicking or being dropped.

use crate::color::PackedColor;

/// Fixed-size ring of packed color cells
///
/// `N` is the physical pixel count and must be even (the wave effect starts
/// at the ring midpoint).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelRing<const N: usize> {
    cells: [PackedColor; N],
}

impl<const N: usize> PixelRing<N> {
    /// Create a ring with all pixels black
    pub const fn new() -> Self {
        const {
            assert!(N > 0 && N.is_multiple_of(2), "ring length must be even");
        }
        Self {
            cells: [PackedColor::BLACK; N],
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Reduce a possibly-negative index onto the ring
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    const fn wrap(index: i32) -> usize {
        index.rem_euclid(N as i32) as usize
    }

    /// Write one pixel, wrapping the index onto the ring
    pub const fn set(&mut self, index: i32, color: PackedColor) {
        self.cells[Self::wrap(index)] = color;
    }

    /// Read one pixel, wrapping the index onto the ring
    pub const fn get(&self, index: i32) -> PackedColor {
        self.cells[Self::wrap(index)]
    }

    /// Reset every pixel to black
    pub fn clear(&mut self) {
        self.cells = [PackedColor::BLACK; N];
    }

    pub const fn as_slice(&self) -> &[PackedColor] {
        &self.cells
    }
}

impl<const N: usize> Default for PixelRing<N> {
    fn default() -> Self {
        Self::new()
    }
}
