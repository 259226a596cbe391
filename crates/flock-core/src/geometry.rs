//! Domain bounds and boundary sampling.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle the simulation is drawn in.
///
/// Agents are not confined to it; it only defines where agents are
/// first scattered, where churned agents re-enter, and the exported
/// viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower-left corner `(MINX, MINY)`.
    pub min: DVec2,
    /// Upper-right corner `(MAXX, MAXY)`.
    pub max: DVec2,
}

impl Default for Bounds {
    /// A landscape A-series sheet in millimetres, centred on the origin.
    fn default() -> Self {
        Self {
            min: DVec2::new(-148.5, -105.0),
            max: DVec2::new(148.5, 105.0),
        }
    }
}

impl Bounds {
    /// Build bounds from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: DVec2::new(min_x, min_y),
            max: DVec2::new(max_x, max_y),
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Whether all corners are finite and the box has positive area.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.width() > 0.0 && self.height() > 0.0
    }

    /// Whether `p` lies inside or on the boundary.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Uniformly random point inside the bounds.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DVec2 {
        DVec2::new(
            rng.gen_range(self.min.x..self.max.x),
            rng.gen_range(self.min.y..self.max.y),
        )
    }

    /// Uniformly random point on the given edge.
    pub fn sample_edge<R: Rng + ?Sized>(&self, edge: BoundaryEdge, rng: &mut R) -> DVec2 {
        match edge {
            BoundaryEdge::West => DVec2::new(self.min.x, rng.gen_range(self.min.y..self.max.y)),
            BoundaryEdge::East => DVec2::new(self.max.x, rng.gen_range(self.min.y..self.max.y)),
            BoundaryEdge::South => DVec2::new(rng.gen_range(self.min.x..self.max.x), self.min.y),
            BoundaryEdge::North => DVec2::new(rng.gen_range(self.min.x..self.max.x), self.max.y),
        }
    }
}

/// One of the four sides of [`Bounds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryEdge {
    /// `x = MINX`.
    West,
    /// `x = MAXX`.
    East,
    /// `y = MINY`.
    South,
    /// `y = MAXY`.
    North,
}

impl BoundaryEdge {
    /// Every edge.
    pub const ALL: [BoundaryEdge; 4] = [
        BoundaryEdge::West,
        BoundaryEdge::East,
        BoundaryEdge::South,
        BoundaryEdge::North,
    ];

    /// Pick an edge with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}
