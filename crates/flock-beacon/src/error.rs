//! Error types for beacon construction.

use std::fmt;

/// Errors arising when building a beacon or the graph it walks.
///
/// Construction is the only fallible step: once built, every beacon
/// yields a finite position for every finite time.
#[derive(Clone, Debug, PartialEq)]
pub enum BeaconError {
    /// A graph was given no vertices.
    EmptyGraph,
    /// The number of adjacency lists differs from the number of vertices.
    AdjacencyMismatch {
        /// Number of vertices supplied.
        vertices: usize,
        /// Number of adjacency lists supplied.
        lists: usize,
    },
    /// A vertex has no neighbours, so a walker arriving there could not leave.
    IsolatedVertex {
        /// Index of the vertex.
        vertex: usize,
    },
    /// An adjacency list names a vertex that does not exist.
    NeighbourOutOfRange {
        /// Vertex whose list is malformed.
        vertex: usize,
        /// The out-of-range neighbour index.
        neighbour: usize,
    },
    /// An edge joins two coincident points (including self-loops).
    DegenerateEdge {
        /// One endpoint.
        from: usize,
        /// The other endpoint.
        to: usize,
    },
    /// A vertex coordinate is NaN or infinite.
    NonFiniteVertex {
        /// Index of the vertex.
        vertex: usize,
    },
    /// A closed path needs at least two vertices.
    PathTooShort {
        /// Number of vertices supplied.
        len: usize,
    },
    /// Every vertex of a closed path coincides.
    ZeroPerimeter,
    /// A path phase offset outside `[0, 1)`.
    InvalidOffset {
        /// The rejected offset.
        offset: f64,
    },
    /// An orbit radius that is not finite and positive.
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },
}

impl fmt::Display for BeaconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGraph => write!(f, "graph must have at least one vertex"),
            Self::AdjacencyMismatch { vertices, lists } => {
                write!(f, "{vertices} vertices but {lists} adjacency lists")
            }
            Self::IsolatedVertex { vertex } => {
                write!(f, "vertex {vertex} has no neighbours")
            }
            Self::NeighbourOutOfRange { vertex, neighbour } => {
                write!(f, "vertex {vertex} lists unknown neighbour {neighbour}")
            }
            Self::DegenerateEdge { from, to } => {
                write!(f, "edge {from}-{to} has zero length")
            }
            Self::NonFiniteVertex { vertex } => {
                write!(f, "vertex {vertex} has a non-finite coordinate")
            }
            Self::PathTooShort { len } => {
                write!(f, "closed path needs at least 2 vertices, got {len}")
            }
            Self::ZeroPerimeter => write!(f, "closed path has zero perimeter"),
            Self::InvalidOffset { offset } => {
                write!(f, "path offset must be in [0, 1), got {offset}")
            }
            Self::InvalidRadius { radius } => {
                write!(f, "orbit radius must be finite and positive, got {radius}")
            }
        }
    }
}

impl std::error::Error for BeaconError {}
