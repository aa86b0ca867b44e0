use std::cmp::Ordering;
use log::{trace, warn};
use rgb::{RGB, RGB8};
use crate::RGBColor;

/// A color anchored at a position of the gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position, meant to be in \[0, 1\] (not enforced).
    pub position: f64,
    pub color: RGB8,
}

/// The stops of a gradient, sorted by increasing position.
///
/// There is at most one stop per position: setting a color at an
/// occupied position replaces it.  Empty and single stop sets are
/// valid; see [`color_at`](crate::color_at) for how they are sampled.
///
/// A `StopSet` is plain data, mutated through `&mut self`.  Sharing it
/// between threads that modify it is up to the caller (wrap it in a
/// [`std::sync::RwLock`] for example).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StopSet {
    stops: Vec<ColorStop>, // Invariant: sorted, distinct, finite positions
}

impl StopSet {
    /// Return an empty stop set.
    pub fn new() -> Self { Self::default() }

    /// Return a stop set with the given stops.  When a position occurs
    /// several times, the last color wins.
    ///
    /// ```
    /// use gradient_stops::{StopSet, RGB8};
    /// let s = StopSet::from_stops([(1., RGB8::new(0, 0, 255)),
    ///                              (0., RGB8::new(255, 0, 0)),
    ///                              (1., RGB8::new(0, 255, 0))]);
    /// assert_eq!(s.count(), 2);
    /// assert_eq!(s.stops()[1].color, RGB8::new(0, 255, 0));
    /// ```
    pub fn from_stops<C: RGBColor>(
        stops: impl IntoIterator<Item = (f64, C)>
    ) -> Self {
        let mut s = Self::new();
        for (position, color) in stops { s.upsert(position, color) }
        s
    }

    fn search(&self, position: f64) -> std::result::Result<usize, usize> {
        // `position` is not NaN, hence comparisons are total.
        self.stops.binary_search_by(|s| {
            s.position.partial_cmp(&position).unwrap_or(Ordering::Equal) })
    }

    /// Insert a stop at `position`, or replace the color of the stop
    /// already there.  Color components are clamped to \[0, 255\].
    /// A NaN or infinite position cannot be interpolated and is ignored.
    pub fn upsert<C: RGBColor>(&mut self, position: f64, color: C) {
        if !position.is_finite() {
            warn!("ignoring a stop at the non-finite position {position}");
            return
        }
        let color = clamp(color.to_rgb());
        match self.search(position) {
            Ok(i) => {
                trace!("replace stop {i} at {position} \
                        by {color:?}");
                self.stops[i].color = color;
            }
            Err(i) => {
                trace!("insert stop {i} at {position} \
                        with {color:?}");
                self.stops.insert(i, ColorStop { position, color });
            }
        }
    }

    /// Remove the stop at exactly `position` and return its color.
    /// Does nothing if there is no such stop.
    pub fn remove_at(&mut self, position: f64) -> Option<RGB8> {
        if position.is_nan() { return None }
        let i = self.search(position).ok()?;
        trace!("remove stop {i} at {position}");
        Some(self.stops.remove(i).color)
    }

    /// Return the color of the stop at exactly `position`, if any.
    pub fn get(&self, position: f64) -> Option<RGB8> {
        if position.is_nan() { return None }
        self.search(position).ok().map(|i| self.stops[i].color)
    }

    /// Remove all stops.
    pub fn clear(&mut self) {
        trace!("clear {} stops", self.stops.len());
        self.stops.clear()
    }

    /// The stops, by increasing position.
    #[inline]
    pub fn stops(&self) -> &[ColorStop] { &self.stops }

    /// Returns the number of stops.
    #[inline]
    pub fn count(&self) -> usize { self.stops.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.stops.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorStop> {
        self.stops.iter()
    }
}

/// Clamp the components to \[0, 255\] (NaN becoming 0) and round them.
fn clamp(c: RGB<f64>) -> RGB8 {
    let in_range = |x: f64| (0. ..= 255.).contains(&x);
    if !(in_range(c.r) && in_range(c.g) && in_range(c.b)) {
        warn!("color ({}, {}, {}) clamped to [0, 255]",
              c.r, c.g, c.b);
    }
    // `as u8` saturates and maps NaN to 0.
    RGB8::from_rgb(c)
}

impl<'a> IntoIterator for &'a StopSet {
    type Item = &'a ColorStop;
    type IntoIter = std::slice::Iter<'a, ColorStop>;

    fn into_iter(self) -> Self::IntoIter { self.stops.iter() }
}

impl<C: RGBColor> FromIterator<(f64, C)> for StopSet {
    fn from_iter<I: IntoIterator<Item = (f64, C)>>(iter: I) -> Self {
        Self::from_stops(iter)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rgb::RGBA8;
    use crate::presets::{RED, GREEN, BLUE, YELLOW};

    fn positions(s: &StopSet) -> Vec<f64> {
        s.iter().map(|s| s.position).collect()
    }

    #[test]
    fn upsert_keeps_order() {
        let mut s = StopSet::new();
        for p in [0.5, 1., -0.25, 0., 0.75, 2.] { s.upsert(p, RED) }
        assert_eq!(positions(&s), vec![-0.25, 0., 0.5, 0.75, 1., 2.]);
    }

    #[test]
    fn upsert_replaces() {
        let mut s = StopSet::from_stops([(0., RED), (0.5, GREEN), (1., BLUE)]);
        s.upsert(0.5, YELLOW);
        assert_eq!(s.count(), 3);
        assert_eq!(s.get(0.5), Some(YELLOW));
        assert_eq!(positions(&s), vec![0., 0.5, 1.]);
    }

    #[test]
    fn upsert_idempotent() {
        let mut once = StopSet::from_stops([(0., RED), (1., BLUE)]);
        once.upsert(0.3, GREEN);
        let mut twice = once.clone();
        twice.upsert(0.3, GREEN);
        assert_eq!(once, twice);
    }

    #[test]
    fn signed_zero_is_one_position() {
        let mut s = StopSet::new();
        s.upsert(0., RED);
        s.upsert(-0., BLUE);
        assert_eq!(s.count(), 1);
        assert_eq!(s.get(0.), Some(BLUE));
    }

    #[test]
    fn nan_position_ignored() {
        let mut s = StopSet::from_stops([(0., RED)]);
        s.upsert(f64::NAN, BLUE);
        assert_eq!(s.count(), 1);
        assert_eq!(s.remove_at(f64::NAN), None);
        assert_eq!(s.get(f64::NAN), None);
    }

    #[test]
    fn infinite_position_ignored() {
        let mut s = StopSet::from_stops([(0., RED)]);
        s.upsert(f64::INFINITY, BLUE);
        s.upsert(f64::NEG_INFINITY, GREEN);
        assert_eq!(positions(&s), vec![0.]);
        assert_eq!(s.get(f64::INFINITY), None);
    }

    #[test]
    fn remove_at() {
        let mut s: StopSet = [(0., RED), (0.5, GREEN), (1., BLUE)]
            .into_iter().collect();
        assert_eq!(s.remove_at(0.25), None);
        assert_eq!(s.count(), 3);
        assert_eq!(s.remove_at(0.5), Some(GREEN));
        assert_eq!(positions(&s), vec![0., 1.]);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.remove_at(0.), None);
    }

    #[test]
    fn colors_clamped() {
        let mut s = StopSet::new();
        s.upsert(0., RGB { r: -10., g: 100.4, b: 1e9 });
        s.upsert(1., RGB { r: f64::NAN, g: 0., b: 255. });
        s.upsert(0.5, RGBA8::new(1, 2, 3, 4));
        assert_eq!(s.get(0.), Some(RGB8::new(0, 100, 255)));
        assert_eq!(s.get(1.), Some(RGB8::new(0, 0, 255)));
        assert_eq!(s.get(0.5), Some(RGB8::new(1, 2, 3)));
    }
}
