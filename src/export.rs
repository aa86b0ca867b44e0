//! Textual colormap tables, ready to be pasted into plotting code.

use log::debug;
use rgb::RGB8;
use crate::{sample, cell_positions, linspace, GradientError, Result, StopSet};

/// Layout of a colormap table.  Channels are always written as
/// normalized reals in \[0, 1\].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColormapFormat {
    /// One row per line, channels separated by `", "`:
    /// `1.0000, 0.0000, 0.0000`.
    #[default]
    Lines,
    /// A MATLAB matrix literal, rows separated by `"; "`:
    /// `[1.0000 0.0000 0.0000; 0.9686 0.0314 0.0000; …]`.
    Matlab,
}

/// Write the `rows` of normalized colors as a table.
pub fn format_rows(rows: &[[f64; 3]], format: ColormapFormat,
                   decimals: usize) -> String {
    let (open, col, row, close) = match format {
        ColormapFormat::Lines => ("", ", ", "\n", ""),
        ColormapFormat::Matlab => ("[", " ", "; ", "]"),
    };
    let mut s = String::from(open);
    for (i, [r, g, b]) in rows.iter().enumerate() {
        if i > 0 { s.push_str(row) }
        s.push_str(&format!("{r:.decimals$}{col}{g:.decimals$}\
                             {col}{b:.decimals$}"));
    }
    s.push_str(close);
    s
}

#[inline]
fn normalized(c: RGB8) -> [f64; 3] {
    [c.r as f64 / 255., c.g as f64 / 255., c.b as f64 / 255.]
}

/// Colormap table sampled from a [`StopSet`].
///
/// The default samples the left edge of 64 equal cells (see
/// [`cell_positions`]) and writes them with 4 decimals, one row per
/// line.
///
/// # Example
///
/// ```
/// use gradient_stops::{Colormap, ColormapFormat, presets::RED_GREEN_BLUE};
/// let table = Colormap::new().linspace(3).format(ColormapFormat::Matlab)
///     .render(&RED_GREEN_BLUE).unwrap();
/// assert_eq!(table, "[1.0000 0.0000 0.0000; 0.0000 1.0000 0.0000; \
///                     0.0000 0.0000 1.0000]");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    format: ColormapFormat,
    decimals: usize,
    positions: Vec<f64>,
}

impl Default for Colormap {
    fn default() -> Self {
        Self { format: ColormapFormat::default(), decimals: 4,
               positions: cell_positions(64) }
    }
}

impl Colormap {
    pub fn new() -> Self { Self::default() }

    /// Set the layout of the table.
    pub fn format(mut self, format: ColormapFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the number of decimals of each channel.
    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Sample the gradient at `positions`, in this order.
    pub fn positions(mut self, positions: impl IntoIterator<Item = f64>)
                     -> Self {
        self.positions = positions.into_iter().collect();
        self
    }

    /// Sample the gradient at the left edge of `n` equal cells.
    pub fn cells(self, n: usize) -> Self { self.positions(cell_positions(n)) }

    /// Sample the gradient at `n` evenly spaced positions, 0 and 1
    /// included.
    pub fn linspace(self, n: usize) -> Self { self.positions(linspace(n)) }

    /// Return the normalized colors of the table.
    ///
    /// # Errors
    ///
    /// [`GradientError::EmptyGradient`] if `stops` has no stop.
    pub fn rows(&self, stops: &StopSet) -> Result<Vec<[f64; 3]>> {
        let samples = sample(stops, self.positions.iter().copied())?;
        Ok(samples.into_iter().map(|s| normalized(s.color)).collect())
    }

    /// Return the table as text.
    ///
    /// # Errors
    ///
    /// [`GradientError::EmptyGradient`] if `stops` has no stop.
    pub fn render(&self, stops: &StopSet) -> Result<String> {
        let rows = self.rows(stops)?;
        debug!("colormap of {} rows ({:?})",
               rows.len(), self.format);
        Ok(format_rows(&rows, self.format, self.decimals))
    }
}

/// Parse a list of reals separated by commas, such as `"0.25, 0.5, 0.75"`.
///
/// # Errors
///
/// [`GradientError::InvalidAnchor`] for the first element that is not
/// a number (an empty element included).
pub fn parse_anchors(text: &str) -> Result<Vec<f64>> {
    text.split(',').enumerate()
        .map(|(index, a)| {
            let a = a.trim();
            a.parse::<f64>().map_err(|_| GradientError::InvalidAnchor {
                index, text: a.to_string() })
        })
        .collect()
}

/// Colormap derived from a single `base` intensity and a list of
/// anchor multipliers rather than from color stops.
///
/// Each anchor `a` gives the row `[base * a, base, 1]`, and two rows
/// `[1, 1, 1]` and `[1, base, base]` close the table.
///
/// ```
/// use gradient_stops::AnchorTable;
/// let t = AnchorTable::parse(0.5, "0.25, 0.5, 0.75").unwrap();
/// assert_eq!(t.render(4).lines().next(), Some("0.1250, 0.5000, 1.0000"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorTable {
    base: f64,
    anchors: Vec<f64>,
}

impl Default for AnchorTable {
    fn default() -> Self { Self::new(0.5, [0.25, 0.5, 0.75]) }
}

impl AnchorTable {
    /// `base` is meant to be in \[0, 1\].
    pub fn new(base: f64, anchors: impl IntoIterator<Item = f64>) -> Self {
        Self { base, anchors: anchors.into_iter().collect() }
    }

    /// Same as [`AnchorTable::new`] with anchors parsed by
    /// [`parse_anchors`].
    pub fn parse(base: f64, anchors: &str) -> Result<Self> {
        Ok(Self::new(base, parse_anchors(anchors)?))
    }

    pub fn base(&self) -> f64 { self.base }

    pub fn anchors(&self) -> &[f64] { &self.anchors }

    pub fn rows(&self) -> Vec<[f64; 3]> {
        let base = self.base;
        self.anchors.iter().map(|a| [base * a, base, 1.])
            .chain([[1., 1., 1.], [1., base, base]])
            .collect()
    }

    /// The table, one row per line.
    pub fn render(&self, decimals: usize) -> String {
        format_rows(&self.rows(), ColormapFormat::Lines, decimals)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::presets::{self, RED};

    #[test]
    fn lines() {
        let t = Colormap::new().positions([0., 0.25, 1.])
            .render(&presets::RED_GREEN_BLUE).unwrap();
        assert_eq!(t, "1.0000, 0.0000, 0.0000\n\
                       0.5020, 0.5020, 0.0000\n\
                       0.0000, 0.0000, 1.0000");
    }

    #[test]
    fn matlab_64_cells() {
        let t = Colormap::new().format(ColormapFormat::Matlab)
            .render(&presets::RED_GREEN_BLUE).unwrap();
        assert!(t.starts_with("[1.0000 0.0000 0.0000; "), "{t}");
        assert!(t.ends_with("]"));
        assert_eq!(t.matches("; ").count(), 63);
        // Cell 32 is on the green stop.
        assert_eq!(t[1 .. t.len() - 1].split("; ").nth(32),
                   Some("0.0000 1.0000 0.0000"));
    }

    #[test]
    fn decimals_and_rows() {
        let c = Colormap::new().cells(2).decimals(2);
        let stops = StopSet::from_stops([(0., RED)]);
        assert_eq!(c.rows(&stops), Ok(vec![[1., 0., 0.], [1., 0., 0.]]));
        assert_eq!(c.render(&stops), Ok("1.00, 0.00, 0.00\n\
                                         1.00, 0.00, 0.00".to_string()));
    }

    #[test]
    fn empty_gradient() {
        assert_eq!(Colormap::new().render(&StopSet::new()),
                   Err(GradientError::EmptyGradient));
    }

    #[test]
    fn empty_table() {
        let c = Colormap::new().positions([]);
        assert_eq!(c.render(&presets::GREYS), Ok(String::new()));
        let c = c.format(ColormapFormat::Matlab);
        assert_eq!(c.render(&presets::GREYS), Ok("[]".to_string()));
    }

    #[test]
    fn anchors() {
        assert_eq!(parse_anchors("0.25, 0.5,0.75 "), Ok(vec![0.25, 0.5, 0.75]));
        assert_eq!(parse_anchors("0.25, x"),
                   Err(GradientError::InvalidAnchor { index: 1,
                                                      text: "x".into() }));
        assert_eq!(parse_anchors("0.25,"),
                   Err(GradientError::InvalidAnchor { index: 1,
                                                      text: "".into() }));
        assert!(AnchorTable::parse(0.5, "").is_err());
    }

    #[test]
    fn anchor_table() {
        let t = AnchorTable::default();
        assert_eq!(t.rows().len(), 5);
        assert_eq!(t.render(4), "0.1250, 0.5000, 1.0000\n\
                                 0.2500, 0.5000, 1.0000\n\
                                 0.3750, 0.5000, 1.0000\n\
                                 1.0000, 1.0000, 1.0000\n\
                                 1.0000, 0.5000, 0.5000");
        assert_eq!(AnchorTable::new(0.2, []).rows(),
                   vec![[1., 1., 1.], [1., 0.2, 0.2]]);
    }
}
