//! Color gradients defined by stops and the colormap tables sampled
//! from them.
//!
//! - [`StopSet`]: ordered `(position, color)` stops along \[0, 1\].
//! - [`color_at`], [`sample`] and [`Sampler`]: linear interpolation
//!   between the stops, clamped to the first and last colors.
//! - [`Colormap`]: textual export of sampled colors (one row per
//!   line, or a MATLAB literal), and [`AnchorTable`].
//!
//! A few ready made stop sets live in [`presets`].
//!
//! ```
//! use gradient_stops::{StopSet, color_at, presets::{RED, GREEN, BLUE}};
//! let mut stops = StopSet::new();
//! stops.upsert(0., RED);
//! stops.upsert(0.5, GREEN);
//! stops.upsert(1., BLUE);
//! assert_eq!(color_at(&stops, 0.5).unwrap(), GREEN);
//! assert_eq!(color_at(&stops, 2.).unwrap(), BLUE);
//! ```

use std::marker::PhantomData;
pub use rgb::{RGB, RGB8, RGBA8};

mod error;
mod export;
pub mod presets;
mod sampler;
mod stops;

pub use error::{GradientError, Result};
pub use export::{format_rows, parse_anchors, AnchorTable, Colormap,
                 ColormapFormat};
pub use sampler::{cell_positions, color_at, linspace, sample, Sample, Sampler};
pub use stops::{ColorStop, StopSet};

/// A “continuous” range of colors parametrized by reals.
pub trait ColorRange<Color> {
    /// Returns the color at the position `t`.
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with their colors.  It is not
    /// required that `a <= b`.
    ///
    /// This is how a bar of `n` pixels is painted left to right:
    ///
    /// ```
    /// use gradient_stops::{ColorRange, Sampler, RGB8, presets};
    /// let sampler = Sampler::<RGB8>::new(&presets::RED_GREEN_BLUE).unwrap();
    /// let row: Vec<_> = sampler.range(0., 1., 400).map(|(_, c)| c).collect();
    /// assert_eq!(row.len(), 400);
    /// assert_eq!(row[0], presets::RED);
    /// assert_eq!(row[399], presets::BLUE);
    /// ```
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the position `k` (assuming it is in the range
    /// `0 ..= self.last`) and its color.
    fn rgb(&self, k: usize) -> (f64, Color) {
        let x = if k == 0 {
            self.a
        } else if k == self.last {
            self.b
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                let t = beta / self.flast;
                (1. - t) * self.a + t * self.b
            } else { x }
        };
        (x, self.range.rgb(x))
    }

    fn remaining(&self) -> usize { (self.j + 1).saturating_sub(self.i) }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize { self.remaining() }
}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.  Stops
/// are stored as [`RGB8`] whatever the encoding used to give them.
pub trait RGBColor: Sized {
    /// Return the red, green and blue components of the color (in
    /// \[0, 255\]).
    fn to_rgb(&self) -> RGB<f64>;

    /// Create a color from its RGB components (in \[0, 255\]).
    /// Components outside this range saturate.
    fn from_rgb(rgb: RGB<f64>) -> Self;

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGB{ r, g, b } = Self::to_rgb(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgb(RGB{ r: x, g: x, b: x })
    }
}

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { *self }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB{ r: self.r as f64, g: self.g as f64, b: self.b as f64 }
    }

    /// Rounds to the nearest intensity (`as` saturates).
    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB8 { r: c.r.round() as u8,  g: c.g.round() as u8,
               b: c.b.round() as u8 }
    }
}

/// The alpha channel is not modeled: it is dropped by `to_rgb` and set
/// to opaque by `from_rgb`.
impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB{ r: self.r as f64, g: self.g as f64, b: self.b as f64 }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        let RGB8 { r, g, b } = RGB8::from_rgb(c);
        RGBA8 { r, g, b, a: 255 }
    }
}

impl RGBColor for [u8; 3] {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB{ r: self[0] as f64, g: self[1] as f64, b: self[2] as f64 }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        let RGB8 { r, g, b } = RGB8::from_rgb(c);
        [r, g, b]
    }
}
