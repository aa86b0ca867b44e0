use std::marker::PhantomData;
use log::debug;
use rgb::{RGB, RGB8};
use crate::{ColorRange, ColorStop, GradientError, RGBColor, Result, StopSet};

/// A position of the gradient together with its color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub position: f64,
    pub color: RGB8,
}

/// Returns the color of the gradient `stops` at `position`.
///
/// Outside the stops, the color of the first (resp. last) stop is
/// returned; no extrapolation is performed.  On a stop, the color of
/// that stop is returned exactly.  Between two stops, the color is
/// linearly interpolated channel by channel and rounded to the
/// nearest intensity.  A NaN `position` gives the first color.
///
/// # Errors
///
/// [`GradientError::EmptyGradient`] if `stops` has no stop.
///
/// # Example
///
/// ```
/// use gradient_stops::{color_at, presets::{RED_GREEN_BLUE, RED}, RGB8};
/// assert_eq!(color_at(&RED_GREEN_BLUE, -1.).unwrap(), RED);
/// assert_eq!(color_at(&RED_GREEN_BLUE, 0.25).unwrap(),
///            RGB8::new(128, 128, 0));
/// ```
pub fn color_at(stops: &StopSet, position: f64) -> Result<RGB8> {
    Ok(Sampler::<RGB8>::new(stops)?.rgb(position))
}

/// Returns the color of the gradient `stops` at each of `positions`,
/// in the same order.
///
/// # Errors
///
/// [`GradientError::EmptyGradient`] if `stops` has no stop.
pub fn sample(
    stops: &StopSet, positions: impl IntoIterator<Item = f64>
) -> Result<Vec<Sample>> {
    let sampler = Sampler::<RGB8>::new(stops)?;
    let samples: Vec<_> = positions.into_iter()
        .map(|position| Sample { position, color: sampler.rgb(position) })
        .collect();
    debug!("{} samples from {} stops",
           samples.len(), stops.count());
    Ok(samples)
}

/// `n` evenly spaced positions in \[0, 1\], both bounds included.
///
/// ```
/// assert_eq!(gradient_stops::linspace(3), vec![0., 0.5, 1.]);
/// ```
pub fn linspace(n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![0.],
        _ => {
            let last = (n - 1) as f64;
            (0 .. n).map(|i| i as f64 / last).collect()
        }
    }
}

/// The left edge `i / n`, `i = 0,…,n-1`, of each of `n` equal cells
/// dividing \[0, 1\].  Note that 1 is not included.
///
/// ```
/// assert_eq!(gradient_stops::cell_positions(4), vec![0., 0.25, 0.5, 0.75]);
/// ```
pub fn cell_positions(n: usize) -> Vec<f64> {
    (0 .. n).map(|i| i as f64 / n as f64).collect()
}

/// Gradient view of a non-empty [`StopSet`].
///
/// Created by [`Sampler::new`].  See the [`ColorRange`] trait for
/// methods.  The color encoding of the results is chosen by `Color`.
pub struct Sampler<'a, Color> {
    stops: &'a [ColorStop], // Invariant: non-empty
    color: PhantomData<Color>,
}

impl<'a, Color> Sampler<'a, Color>
where Color: RGBColor {
    /// Return a sampler of the gradient `stops`.
    ///
    /// # Errors
    ///
    /// [`GradientError::EmptyGradient`] if `stops` has no stop.
    pub fn new(stops: &'a StopSet) -> Result<Self> {
        if stops.is_empty() { return Err(GradientError::EmptyGradient) }
        Ok(Self { stops: stops.stops(), color: PhantomData })
    }

    /// The stops of the gradient, by increasing position.
    pub fn stops(&self) -> &'a [ColorStop] { self.stops }
}

impl<Color> Clone for Sampler<'_, Color> {
    fn clone(&self) -> Self { *self }
}

impl<Color> Copy for Sampler<'_, Color> {}

#[inline]
fn convert<Color: RGBColor>(c: RGB8) -> Color {
    Color::from_rgb(RGBColor::to_rgb(&c))
}

#[inline]
fn lerp(c0: RGB8, c1: RGB8, alpha: f64) -> RGB<f64> {
    let beta = 1. - alpha;
    RGB { r: beta * c0.r as f64 + alpha * c1.r as f64,
          g: beta * c0.g as f64 + alpha * c1.g as f64,
          b: beta * c0.b as f64 + alpha * c1.b as f64 }
}

impl<Color> ColorRange<Color> for Sampler<'_, Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let stops = self.stops;
        let first = stops[0];
        // Negated to send NaN to the first color.
        if !(t > first.position) { return convert(first.color) }
        let last = stops[stops.len() - 1];
        if t >= last.position { return convert(last.color) }
        // Now first.position < t < last.position, hence 1 ≤ i < len.
        let i = stops.partition_point(|s| s.position < t);
        let s1 = stops[i];
        if s1.position == t { return convert(s1.color) }
        let s0 = stops[i - 1];
        // Halved so that the differences cannot overflow.
        let (t, p0, p1) = (0.5 * t, 0.5 * s0.position, 0.5 * s1.position);
        let alpha = (t - p0) / (p1 - p0);
        Color::from_rgb(lerp(s0.color, s1.color, alpha))
    }
}
