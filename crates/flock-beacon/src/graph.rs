//! Vertex graphs walked by [`GraphBeacon`](crate::GraphBeacon).

use crate::error::BeaconError;
use glam::DVec2;
use smallvec::SmallVec;

/// Neighbour list of one vertex. Most hand-drawn graphs have degree ≤ 4.
pub type Neighbours = SmallVec<[usize; 4]>;

/// A set of 2-D vertices with adjacency lists.
///
/// Construction guarantees that the graph is non-empty, every vertex
/// has at least one neighbour, every neighbour index is in range, and
/// every edge has positive length. Symmetry and connectivity are the
/// caller's responsibility; a walker still behaves on an asymmetric
/// graph, it just cannot retrace one-way edges.
///
/// # Examples
///
/// ```
/// use flock_beacon::Graph;
/// use glam::DVec2;
///
/// let g = Graph::new(
///     vec![DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0)],
///     [vec![1usize], vec![0]],
/// ).unwrap();
/// assert_eq!(g.len(), 2);
/// assert_eq!(g.neighbours(0), &[1]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    vertices: Vec<DVec2>,
    adjacency: Vec<Neighbours>,
}

impl Graph {
    /// Build a graph from vertex coordinates and one adjacency list per vertex.
    ///
    /// # Errors
    ///
    /// - [`BeaconError::EmptyGraph`] if `vertices` is empty.
    /// - [`BeaconError::AdjacencyMismatch`] if the list count differs.
    /// - [`BeaconError::NonFiniteVertex`] for NaN or infinite coordinates.
    /// - [`BeaconError::IsolatedVertex`] for an empty adjacency list.
    /// - [`BeaconError::NeighbourOutOfRange`] for an unknown neighbour.
    /// - [`BeaconError::DegenerateEdge`] for a zero-length edge.
    pub fn new<A, N>(vertices: Vec<DVec2>, adjacency: A) -> Result<Self, BeaconError>
    where
        A: IntoIterator<Item = N>,
        N: AsRef<[usize]>,
    {
        if vertices.is_empty() {
            return Err(BeaconError::EmptyGraph);
        }
        let adjacency: Vec<Neighbours> = adjacency
            .into_iter()
            .map(|list| list.as_ref().iter().copied().collect())
            .collect();
        if adjacency.len() != vertices.len() {
            return Err(BeaconError::AdjacencyMismatch {
                vertices: vertices.len(),
                lists: adjacency.len(),
            });
        }
        if let Some(vertex) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(BeaconError::NonFiniteVertex { vertex });
        }
        for (vertex, list) in adjacency.iter().enumerate() {
            if list.is_empty() {
                return Err(BeaconError::IsolatedVertex { vertex });
            }
            for &neighbour in list {
                let Some(&other) = vertices.get(neighbour) else {
                    return Err(BeaconError::NeighbourOutOfRange { vertex, neighbour });
                };
                if vertices[vertex].distance_squared(other) == 0.0 {
                    return Err(BeaconError::DegenerateEdge {
                        from: vertex,
                        to: neighbour,
                    });
                }
            }
        }
        Ok(Self {
            vertices,
            adjacency,
        })
    }

    /// Number of vertices. Always at least one.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always returns `false`; construction rejects empty graphs.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Coordinates of vertex `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn vertex(&self, i: usize) -> DVec2 {
        self.vertices[i]
    }

    /// All vertex coordinates, by index.
    pub fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    /// Neighbours of vertex `i`. Never empty.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn neighbours(&self, i: usize) -> &[usize] {
        &self.adjacency[i]
    }

    /// Length of the edge between `a` and `b`.
    pub fn edge_length(&self, a: usize, b: usize) -> f64 {
        self.vertices[a].distance(self.vertices[b])
    }
}
