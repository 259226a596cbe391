//! Constant-speed traversal of a closed polyline.

use crate::beacon::Trajectory;
use crate::error::BeaconError;
use flock_core::FlockParams;
use glam::DVec2;

/// Beacon moving along a closed polyline at `BEACON_SPEED`.
///
/// The last vertex joins back to the first. Segment lengths and the
/// perimeter are computed once at construction; position is a pure
/// function of time, so `advance` is a no-op.
///
/// `offset` is a phase in `[0, 1)` expressed as a fraction of the
/// perimeter, which lets several beacons share one path without
/// stacking on top of each other.
#[derive(Clone, Debug, PartialEq)]
pub struct PathBeacon {
    vertices: Vec<DVec2>,
    offset: f64,
    lengths: Vec<f64>,
    perimeter: f64,
}

impl PathBeacon {
    /// Create a path beacon.
    ///
    /// # Errors
    ///
    /// - [`BeaconError::PathTooShort`] for fewer than two vertices.
    /// - [`BeaconError::NonFiniteVertex`] for NaN or infinite coordinates.
    /// - [`BeaconError::InvalidOffset`] unless `0 <= offset < 1`.
    /// - [`BeaconError::ZeroPerimeter`] if every vertex coincides.
    pub fn new(vertices: Vec<DVec2>, offset: f64) -> Result<Self, BeaconError> {
        if vertices.len() < 2 {
            return Err(BeaconError::PathTooShort {
                len: vertices.len(),
            });
        }
        if let Some(vertex) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(BeaconError::NonFiniteVertex { vertex });
        }
        if !(0.0..1.0).contains(&offset) {
            return Err(BeaconError::InvalidOffset { offset });
        }
        let n = vertices.len();
        let lengths: Vec<f64> = (0..n)
            .map(|i| vertices[i].distance(vertices[(i + 1) % n]))
            .collect();
        let perimeter: f64 = lengths.iter().sum();
        if perimeter <= 0.0 {
            return Err(BeaconError::ZeroPerimeter);
        }
        Ok(Self {
            vertices,
            offset,
            lengths,
            perimeter,
        })
    }

    /// Path vertices in traversal order.
    pub fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    /// Phase offset as a fraction of the perimeter.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Length of segment `i` (from vertex `i` to vertex `i + 1`, wrapping).
    pub fn segment_lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Total length of the closed path.
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Ticks needed for one lap, or `None` when the beacon is not moving.
    pub fn period(&self, params: &FlockParams) -> Option<f64> {
        (params.beacon_speed > 0.0).then(|| self.perimeter / params.beacon_speed)
    }

    /// Point at arc length `distance` from vertex 0, with `distance` in
    /// `[0, perimeter)`.
    fn point_at(&self, distance: f64) -> DVec2 {
        let n = self.vertices.len();
        let mut travelled = 0.0;
        for (i, &len) in self.lengths.iter().enumerate() {
            if travelled + len > distance {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                return a.lerp(b, (distance - travelled) / len);
            }
            travelled += len;
        }
        // Rounding can leave `distance` a hair past the accumulated sum.
        self.vertices[0]
    }
}

impl Trajectory for PathBeacon {
    fn position(&self, t: f64, params: &FlockParams) -> DVec2 {
        let distance =
            (t * params.beacon_speed + self.offset * self.perimeter).rem_euclid(self.perimeter);
        self.point_at(distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square(side: f64) -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(side, 0.0),
            DVec2::new(side, side),
            DVec2::new(0.0, side),
        ]
    }

    #[test]
    fn precomputes_lengths_and_perimeter() {
        let p = PathBeacon::new(square(100.0), 0.0).unwrap();
        assert_eq!(p.segment_lengths(), &[100.0; 4]);
        assert_eq!(p.perimeter(), 400.0);
    }

    #[test]
    fn walks_the_square_at_beacon_speed() {
        let params = FlockParams::default();
        let p = PathBeacon::new(square(100.0), 0.0).unwrap();
        assert_eq!(p.position(0.0, &params), DVec2::new(0.0, 0.0));
        assert_eq!(p.position(50.0, &params), DVec2::new(50.0, 0.0));
        assert_eq!(p.position(150.0, &params), DVec2::new(100.0, 50.0));
        assert_eq!(p.position(350.0, &params), DVec2::new(0.0, 50.0));
    }

    #[test]
    fn offset_shifts_the_phase() {
        let params = FlockParams::default();
        let p = PathBeacon::new(square(100.0), 0.5).unwrap();
        assert_eq!(p.position(0.0, &params), DVec2::new(100.0, 100.0));
    }

    #[test]
    fn returns_home_after_one_perimeter() {
        let params = FlockParams::default();
        let p = PathBeacon::new(square(100.0), 0.0).unwrap();
        let start = p.position(0.0, &params);
        let lap = p.period(&params).unwrap();
        assert_eq!(lap, 400.0);
        assert!(p.position(lap, &params).distance(start) < 1e-9);
    }

    #[test]
    fn zero_length_segments_are_skipped() {
        let params = FlockParams::default();
        let vs = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 0.0),
        ];
        let p = PathBeacon::new(vs, 0.0).unwrap();
        assert_eq!(p.perimeter(), 20.0);
        assert_eq!(p.position(15.0, &params), DVec2::new(5.0, 0.0));
    }

    #[test]
    fn stationary_at_zero_speed() {
        let params = FlockParams {
            beacon_speed: 0.0,
            ..FlockParams::default()
        };
        let p = PathBeacon::new(square(10.0), 0.25).unwrap();
        assert_eq!(p.period(&params), None);
        assert_eq!(p.position(999.0, &params), DVec2::new(10.0, 0.0));
    }

    #[test]
    fn rejects_bad_construction() {
        assert_eq!(
            PathBeacon::new(vec![DVec2::ZERO], 0.0),
            Err(BeaconError::PathTooShort { len: 1 })
        );
        assert_eq!(
            PathBeacon::new(vec![DVec2::ZERO, DVec2::ZERO], 0.0),
            Err(BeaconError::ZeroPerimeter)
        );
        assert!(matches!(
            PathBeacon::new(square(1.0), 1.0),
            Err(BeaconError::InvalidOffset { .. })
        ));
        assert!(matches!(
            PathBeacon::new(square(1.0), -0.1),
            Err(BeaconError::InvalidOffset { .. })
        ));
    }

    proptest! {
        #[test]
        fn periodic_in_perimeter_over_speed(
            t in 0.0..5000.0f64,
            offset in 0.0..1.0f64,
            speed in 0.05..2.0f64,
        ) {
            let params = FlockParams { beacon_speed: speed, ..FlockParams::default() };
            let vs = vec![
                DVec2::new(-80.0, 0.0),
                DVec2::new(0.0, 60.0),
                DVec2::new(80.0, 0.0),
                DVec2::new(0.0, -60.0),
            ];
            let p = PathBeacon::new(vs, offset).unwrap();
            let lap = p.perimeter() / speed;
            let a = p.position(t, &params);
            let b = p.position(t + lap, &params);
            prop_assert!(a.distance(b) < 1e-6, "{a} vs {b}");
        }
    }
}
