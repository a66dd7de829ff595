use std::collections::BTreeSet;

use crate::{Edge, Node};

/// Number of columns of the grid. Valid x coordinates are `0..=COLS`.
pub const COLS: i8 = 10;
/// Number of rows of the grid. Valid y coordinates are `0..=ROWS`.
pub const ROWS: i8 = 13;

/// Leftmost x coordinate of both goal mouths (inclusive).
pub const GOAL_MIN_X: i8 = COLS / 2 - 1;
/// Rightmost x coordinate of both goal mouths (inclusive).
pub const GOAL_MAX_X: i8 = COLS / 2 + 1;

/// Where the ball is placed at the start of a game.
pub const CENTER: Node = Node::new(COLS / 2, ROWS / 2);

const FIELD_LEFT: i8 = 1;
const FIELD_RIGHT: i8 = COLS - 1;
const FIELD_TOP: i8 = 1;
const FIELD_BOTTOM: i8 = ROWS - 1;

/// Is the node inside the playing field, including its boundary?
pub fn is_in_field(node: Node) -> bool {
    (FIELD_LEFT..=FIELD_RIGHT).contains(&node.x) && (FIELD_TOP..=FIELD_BOTTOM).contains(&node.y)
}

fn is_between_posts(x: i8) -> bool {
    (GOAL_MIN_X..=GOAL_MAX_X).contains(&x)
}

/// Is the node on the top goal line, between the posts?
pub fn is_in_top_goal(node: Node) -> bool {
    node.y == 0 && is_between_posts(node.x)
}

/// Is the node on the bottom goal line, between the posts?
pub fn is_in_bottom_goal(node: Node) -> bool {
    node.y == ROWS && is_between_posts(node.x)
}

/// Is the node on one of the four sides of the field?
///
/// The top and bottom sides include the nodes in front of the goals.
pub fn is_on_boundary(node: Node) -> bool {
    node.x == FIELD_LEFT || node.x == FIELD_RIGHT || node.y == FIELD_TOP || node.y == FIELD_BOTTOM
}

/// The single node on the top and on the bottom side that lies on the goals' center line.
pub fn is_goal_front_center(node: Node) -> bool {
    node.x == COLS / 2 && (node.y == FIELD_TOP || node.y == FIELD_BOTTOM)
}

/// The set of lines that can no longer be drawn.
///
/// Besides the lines drawn by the players, this contains the sides of the field, so
/// that the ball cannot travel along them. The gap in the top and bottom sides is the
/// goal mouth. Lines are only ever added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawnLines {
    edges: BTreeSet<Edge>,
}

impl DrawnLines {
    /// A set without any lines, not even the field's sides.
    pub fn empty() -> Self {
        Self {
            edges: BTreeSet::new(),
        }
    }

    /// The lines forming the sides of the field, which exist before the first move.
    ///
    /// The top and bottom sides have a gap under the goal mouth.
    pub fn with_boundaries() -> Self {
        let mut lines = Self::empty();
        for x in FIELD_LEFT..FIELD_RIGHT {
            if x < GOAL_MIN_X || x >= GOAL_MAX_X {
                lines.insert(Edge::new(Node::new(x, FIELD_TOP), Node::new(x + 1, FIELD_TOP)));
                lines.insert(Edge::new(
                    Node::new(x, FIELD_BOTTOM),
                    Node::new(x + 1, FIELD_BOTTOM),
                ));
            }
        }
        for y in FIELD_TOP..FIELD_BOTTOM {
            lines.insert(Edge::new(Node::new(FIELD_LEFT, y), Node::new(FIELD_LEFT, y + 1)));
            lines.insert(Edge::new(Node::new(FIELD_RIGHT, y), Node::new(FIELD_RIGHT, y + 1)));
        }
        lines
    }

    /// Has a line between `a` and `b` been drawn, in either direction?
    pub fn contains(&self, a: Node, b: Node) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    /// Returns `false` if the line had already been drawn.
    pub fn insert(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_idempotent() {
        assert_eq!(DrawnLines::with_boundaries(), DrawnLines::with_boundaries());
    }

    #[test]
    fn boundary_line_count() {
        // 6 segments each on top and bottom (8 minus the 2 under the goal),
        // 11 segments each on the left and right.
        assert_eq!(DrawnLines::with_boundaries().len(), 2 * 6 + 2 * 11);
    }

    #[test]
    fn goal_mouth_gap() {
        let lines = DrawnLines::with_boundaries();
        for y in [FIELD_TOP, FIELD_BOTTOM] {
            for x in FIELD_LEFT..FIELD_RIGHT {
                let a = Node::new(x, y);
                let b = Node::new(x + 1, y);
                let under_goal = (GOAL_MIN_X..GOAL_MAX_X).contains(&x);
                assert_eq!(lines.contains(a, b), !under_goal, "segment {a}-{b}");
            }
        }
    }

    #[test]
    fn sides_have_no_gap() {
        let lines = DrawnLines::with_boundaries();
        for y in FIELD_TOP..FIELD_BOTTOM {
            assert!(lines.contains(Node::new(FIELD_LEFT, y + 1), Node::new(FIELD_LEFT, y)));
            assert!(lines.contains(Node::new(FIELD_RIGHT, y), Node::new(FIELD_RIGHT, y + 1)));
        }
    }

    #[test]
    fn no_boundary_line_leaves_the_field() {
        for edge in DrawnLines::with_boundaries().iter() {
            let (a, b) = edge.endpoints();
            assert!(is_on_boundary(a) && is_on_boundary(b), "{edge}");
        }
    }

    #[test]
    fn goal_geometry() {
        assert_eq!(CENTER, Node::new(5, 6));
        assert!(is_in_top_goal(Node::new(4, 0)));
        assert!(is_in_top_goal(Node::new(6, 0)));
        assert!(!is_in_top_goal(Node::new(3, 0)));
        assert!(!is_in_top_goal(Node::new(7, 0)));
        assert!(is_in_bottom_goal(Node::new(5, ROWS)));
        assert!(!is_in_bottom_goal(Node::new(5, ROWS - 1)));
        assert!(is_goal_front_center(Node::new(5, 1)));
        assert!(is_goal_front_center(Node::new(5, 12)));
        assert!(!is_goal_front_center(Node::new(4, 1)));
        assert!(!is_goal_front_center(Node::new(5, 6)));
    }
}
