use serde::{Deserialize, Serialize};

/// The offsets of the eight neighbors of a node, row by row.
const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A grid intersection, i.e. a place where the ball can rest.
///
/// `x` grows to the right and `y` grows downwards, so `y == 0` is the top goal line.
/// Nodes are plain values; nothing about the field is stored in them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Node {
    pub x: i8,
    pub y: i8,
}

impl Node {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance between two nodes.
    pub fn distance(self, other: Node) -> i16 {
        let dx = (i16::from(self.x) - i16::from(other.x)).abs();
        let dy = (i16::from(self.y) - i16::from(other.y)).abs();
        dx.max(dy)
    }

    /// Is `other` one of the eight nodes surrounding this one?
    ///
    /// A node is never adjacent to itself.
    pub fn is_adjacent_to(self, other: Node) -> bool {
        self.distance(other) == 1
    }

    /// The eight surrounding nodes, without any regard for the field or for drawn lines.
    ///
    /// Offsets that would leave the `i8` coordinate range are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = Node> {
        NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            Some(Node {
                x: self.x.checked_add(dx)?,
                y: self.y.checked_add(dy)?,
            })
        })
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A line between two adjacent nodes.
///
/// The direction in which the line was drawn doesn't matter: `Edge::new(a, b)` and
/// `Edge::new(b, a)` are the same edge. This is achieved by always storing the
/// smaller node first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[Node; 2]", into = "[Node; 2]")]
pub struct Edge {
    a: Node,
    b: Node,
}

impl Edge {
    pub fn new(a: Node, b: Node) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Both ends of the edge, smaller node first.
    pub fn endpoints(self) -> (Node, Node) {
        (self.a, self.b)
    }
}

impl From<[Node; 2]> for Edge {
    fn from([a, b]: [Node; 2]) -> Self {
        Edge::new(a, b)
    }
}

impl From<Edge> for [Node; 2] {
    fn from(edge: Edge) -> Self {
        [edge.a, edge.b]
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}
