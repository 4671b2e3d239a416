//! Calorimeter rings layout.
//!
//! Each event carries [`N_RINGS`] ring energies. The index range is split into
//! contiguous sampling layers, listed in [`RINGS_LAYERS`] from the
//! presampler outwards.

use std::ops::Range;

/// Number of rings per event.
pub const N_RINGS: usize = 100;

/// A named contiguous slice of ring indices (one detector sampling layer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingsLayer {
    /// Layer name as printed on plots.
    pub name: &'static str,
    /// Half-open ring index range.
    pub range: Range<usize>,
}

impl RingsLayer {
    /// First ring index of the layer.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Number of rings in the layer.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Whether the layer holds no rings.
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Layer partition of the rings vector, in drawing order.
pub static RINGS_LAYERS: &[RingsLayer] = &[
    RingsLayer { name: "PS", range: 0..8 },
    RingsLayer { name: "EM1", range: 8..72 },
    RingsLayer { name: "EM2", range: 72..80 },
    RingsLayer { name: "EM3", range: 80..88 },
    RingsLayer { name: "HAD1", range: 88..92 },
    RingsLayer { name: "HAD2", range: 92..96 },
    RingsLayer { name: "HAD3", range: 96..100 },
];

/// Interior layer boundaries (start index of every layer but the first).
pub const RINGS_LIMITS: [usize; 6] = [8, 72, 80, 88, 92, 96];

/// Layer containing ring `index`, if any.
pub fn layer_of(index: usize) -> Option<&'static RingsLayer> {
    RINGS_LAYERS.iter().find(|l| l.range.contains(&index))
}
