//! Named colors and ready made gradients.
//!
//! The gradients are shared; clone one to edit it:
//!
//! ```
//! use gradient_stops::presets::{RED_GREEN_BLUE, YELLOW};
//! let mut stops = RED_GREEN_BLUE.clone();
//! stops.upsert(0.5, YELLOW);
//! assert_eq!(stops.count(), 3);
//! ```

use lazy_static::lazy_static;
use rgb::RGB8;
use crate::StopSet;

pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
pub const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };
pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
pub const YELLOW: RGB8 = RGB8 { r: 255, g: 255, b: 0 };

lazy_static! {
    /// Red at 0, green at ½ and blue at 1.
    pub static ref RED_GREEN_BLUE: StopSet =
        StopSet::from_stops([(0., RED), (0.5, GREEN), (1., BLUE)]);

    /// From black at 0 to white at 1.
    pub static ref GREYS: StopSet =
        StopSet::from_stops([(0., BLACK), (1., WHITE)]);
}
