//! Random walk along the edges of a [`Graph`].

use crate::beacon::Trajectory;
use crate::graph::{Graph, Neighbours};
use flock_core::FlockParams;
use glam::DVec2;
use rand::Rng;
use std::sync::Arc;

/// Upper bound on vertex crossings in a single [`advance`](Trajectory::advance).
///
/// Past this many crossings the walker drops the remaining whole edges
/// and keeps only the fractional progress.
pub const MAX_HOPS_PER_ADVANCE: usize = 4096;

/// Beacon travelling edge by edge through a shared [`Graph`].
///
/// State is the current edge `from → to` and the fraction `progress`
/// of that edge already covered, always in `[0, 1)`. Each
/// [`advance`](Trajectory::advance) moves `BEACON_SPEED` units along the
/// edge. On arrival the walker picks its next destination uniformly
/// among the arrival vertex's neighbours, excluding the vertex it just
/// left. When that leaves nothing (a dead end with a single neighbour)
/// it turns back the way it came.
#[derive(Clone, Debug)]
pub struct GraphBeacon {
    graph: Arc<Graph>,
    from: usize,
    to: usize,
    progress: f64,
}

impl GraphBeacon {
    /// Place a walker at a random point of a random edge.
    ///
    /// The start vertex and progress are uniform; the first destination
    /// is drawn from the start vertex's neighbours with nothing excluded.
    pub fn new<R: Rng + ?Sized>(graph: Arc<Graph>, rng: &mut R) -> Self {
        let from = rng.gen_range(0..graph.len());
        let progress = rng.gen::<f64>();
        let to = choose_next(&graph, from, None, rng);
        Self {
            graph,
            from,
            to,
            progress,
        }
    }

    /// Place a walker on a specific edge. `progress` is wrapped into `[0, 1)`.
    ///
    /// Returns `None` if `to` is not a neighbour of `from`.
    pub fn on_edge(graph: Arc<Graph>, from: usize, to: usize, progress: f64) -> Option<Self> {
        if from >= graph.len() || !graph.neighbours(from).contains(&to) {
            return None;
        }
        let progress = progress.rem_euclid(1.0);
        Some(Self {
            graph,
            from,
            to,
            progress: if progress < 1.0 { progress } else { 0.0 },
        })
    }

    /// The graph being walked.
    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    /// Vertex the current edge started from.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Vertex the current edge leads to.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Fraction of the current edge covered, in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        self.progress
    }
}

/// Pick the next destination from `at`, avoiding `departed` when possible.
fn choose_next<R: Rng + ?Sized>(
    graph: &Graph,
    at: usize,
    departed: Option<usize>,
    rng: &mut R,
) -> usize {
    let neighbours = graph.neighbours(at);
    let candidates: Neighbours = neighbours
        .iter()
        .copied()
        .filter(|&v| Some(v) != departed)
        .collect();
    let pool: &[usize] = if candidates.is_empty() {
        neighbours
    } else {
        &candidates
    };
    pool[rng.gen_range(0..pool.len())]
}

impl Trajectory for GraphBeacon {
    fn position(&self, _t: f64, _params: &FlockParams) -> DVec2 {
        self.graph
            .vertex(self.from)
            .lerp(self.graph.vertex(self.to), self.progress)
    }

    fn advance<R: Rng + ?Sized>(&mut self, _t: f64, params: &FlockParams, rng: &mut R) {
        let length = self.graph.edge_length(self.from, self.to);
        let travelled = self.progress + params.beacon_speed / length;
        let whole = travelled.floor();
        let rest = travelled - whole;
        self.progress = if rest.is_finite() && rest < 1.0 { rest } else { 0.0 };
        // Fast beacons on short edges may cross several vertices per tick.
        let hops = if whole < MAX_HOPS_PER_ADVANCE as f64 {
            whole as usize
        } else {
            MAX_HOPS_PER_ADVANCE
        };
        for _ in 0..hops {
            let departed = self.from;
            self.from = self.to;
            self.to = choose_next(&self.graph, self.from, Some(departed), rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn two_vertex() -> Arc<Graph> {
        Arc::new(
            Graph::new(
                vec![DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0)],
                [[1usize], [0]],
            )
            .unwrap(),
        )
    }

    /// Triangle with a tail: 0-1-2 form a cycle, 3 hangs off 2.
    fn kite() -> Arc<Graph> {
        let a: &[&[usize]] = &[&[1, 2], &[0, 2], &[0, 1, 3], &[2]];
        Arc::new(
            Graph::new(
                vec![
                    DVec2::new(0.0, 0.0),
                    DVec2::new(20.0, 0.0),
                    DVec2::new(10.0, 15.0),
                    DVec2::new(10.0, 40.0),
                ],
                a,
            )
            .unwrap(),
        )
    }

    fn on_segment(p: DVec2, a: DVec2, b: DVec2) -> bool {
        let ab = b - a;
        let s = (p - a).dot(ab) / ab.length_squared();
        let closest = a + ab * s.clamp(0.0, 1.0);
        (-1e-12..=1.0 + 1e-12).contains(&s) && closest.distance(p) < 1e-9
    }

    #[test]
    fn initial_state_is_on_an_edge() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let w = GraphBeacon::new(kite(), &mut rng);
            assert!(w.graph().neighbours(w.from()).contains(&w.to()));
            assert!((0.0..1.0).contains(&w.progress()));
        }
    }

    #[test]
    fn advance_moves_beacon_speed_units() {
        let params = FlockParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut w = GraphBeacon::on_edge(two_vertex(), 0, 1, 0.0).unwrap();
        w.advance(1.0, &params, &mut rng);
        assert!((w.progress() - 0.1).abs() < 1e-12);
        assert!((w.position(1.0, &params) - DVec2::new(1.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn single_neighbour_turns_back() {
        let params = FlockParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut w = GraphBeacon::on_edge(two_vertex(), 0, 1, 0.95).unwrap();
        w.advance(1.0, &params, &mut rng);
        assert_eq!(w.from(), 1);
        assert_eq!(w.to(), 0);
        assert!(w.progress() < 0.1);
    }

    #[test]
    fn never_retraces_when_alternatives_exist() {
        let params = FlockParams {
            beacon_speed: 2.0,
            ..FlockParams::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut w = GraphBeacon::new(kite(), &mut rng);
        for t in 0..5000 {
            let (from, to) = (w.from(), w.to());
            w.advance(t as f64, &params, &mut rng);
            if w.from() == to && w.graph().neighbours(to).len() > 1 {
                assert_ne!(w.to(), from, "walker retraced {from}->{to} at tick {t}");
            }
        }
    }

    #[test]
    fn fast_walker_crosses_several_vertices_in_one_tick() {
        let params = FlockParams {
            beacon_speed: 35.0,
            ..FlockParams::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut w = GraphBeacon::on_edge(two_vertex(), 0, 1, 0.0).unwrap();
        w.advance(1.0, &params, &mut rng);
        assert!((0.0..1.0).contains(&w.progress()));
        // 3.5 edges: 0->1, 1->0, 0->1, then halfway along 1->0.
        assert_eq!((w.from(), w.to()), (1, 0));
        assert!((w.progress() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn enormous_speed_caps_crossings() {
        let params = FlockParams {
            beacon_speed: 1e20,
            ..FlockParams::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut w = GraphBeacon::on_edge(two_vertex(), 0, 1, 0.3).unwrap();
        w.advance(1.0, &params, &mut rng);
        assert!((0.0..1.0).contains(&w.progress()));
        // MAX_HOPS_PER_ADVANCE is even, so the shuttle ends on its start edge.
        assert_eq!((w.from(), w.to()), (0, 1));
        assert!(w.position(1.0, &params).is_finite());
    }

    #[test]
    fn on_edge_rejects_non_edges() {
        assert!(GraphBeacon::on_edge(kite(), 0, 3, 0.0).is_none());
        assert!(GraphBeacon::on_edge(kite(), 9, 0, 0.0).is_none());
    }

    proptest! {
        #[test]
        fn position_stays_on_current_edge(
            seed in any::<u64>(),
            speed in 0.0..3.0f64,
            ticks in 1usize..400,
        ) {
            let params = FlockParams { beacon_speed: speed, ..FlockParams::default() };
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut w = GraphBeacon::new(kite(), &mut rng);
            for t in 0..ticks {
                w.advance(t as f64, &params, &mut rng);
                prop_assert!((0.0..1.0).contains(&w.progress()));
                let g = w.graph();
                let p = w.position(t as f64, &params);
                prop_assert!(on_segment(p, g.vertex(w.from()), g.vertex(w.to())));
            }
        }
    }
}
