#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The letter adjacency graph built from a box layout.
//!
//! One node per letter occurrence, identified by `(side, position)`. Two nodes are
//! adjacent iff they lie on different sides. Nodes are stored densely in side-major
//! order so a `NodeId` doubles as a bit index for coverage sets.

use crate::puzzle::layout::Layout;
use smallvec::SmallVec;
use std::fmt::Display;

/// Dense index of a letter node inside its `LetterGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The index as a `usize`, for bit sets and slices.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The identity of a letter occurrence: which side, and where on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    /// Index of the side in the layout.
    pub side: usize,
    /// Position of the letter within its side.
    pub position: usize,
}

impl Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.side, self.position)
    }
}

/// A single letter occurrence in the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterNode {
    /// Where the letter sits.
    pub key: NodeKey,
    /// The letter itself.
    pub letter: char,
}

/// Undirected graph over letter nodes; an edge joins every pair on different sides.
#[derive(Debug, Clone, Default)]
pub struct LetterGraph {
    nodes: Vec<LetterNode>,
    neighbours: Vec<SmallVec<[NodeId; 12]>>,
}

impl LetterGraph {
    /// Builds the graph for `layout`. An empty layout gives an empty graph.
    #[must_use]
    pub fn new(layout: &Layout) -> Self {
        let nodes: Vec<LetterNode> = layout
            .sides()
            .iter()
            .enumerate()
            .flat_map(|(side, letters)| {
                letters
                    .iter()
                    .enumerate()
                    .map(move |(position, &letter)| LetterNode {
                        key: NodeKey { side, position },
                        letter,
                    })
            })
            .collect();

        let neighbours = nodes
            .iter()
            .map(|node| {
                nodes
                    .iter()
                    .enumerate()
                    .filter(|(_, other)| other.key.side != node.key.side)
                    .map(|(i, _)| NodeId(i))
                    .collect()
            })
            .collect();

        Self { nodes, neighbours }
    }

    /// Number of letter nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the box holds no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbours.iter().map(SmallVec::len).sum::<usize>() / 2
    }

    /// The node stored at `id`.
    ///
    /// # Panics
    ///
    /// If `id` does not belong to this graph.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &LetterNode {
        &self.nodes[id.index()]
    }

    /// Iterates all node ids in side-major order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Nodes reachable in one step from `id`.
    #[must_use]
    pub fn neighbours(&self, id: NodeId) -> &[NodeId] {
        &self.neighbours[id.index()]
    }

    /// `true` if an edge joins `a` and `b`.
    #[must_use]
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbours(a).contains(&b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sided_box() {
        let graph = LetterGraph::new(&Layout::from([['a', 'b'], ['c', 'd']]));

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edge_count(), 4);

        let a = NodeId(0);
        let b = NodeId(1);
        let c = NodeId(2);
        let d = NodeId(3);
        assert!(!graph.is_adjacent(a, b));
        assert!(!graph.is_adjacent(c, d));
        assert!(graph.is_adjacent(a, c));
        assert!(graph.is_adjacent(a, d));
        assert!(graph.is_adjacent(b, c));
        assert!(graph.is_adjacent(b, d));
        assert_eq!(graph.node(d).key, NodeKey { side: 1, position: 1 });
        assert_eq!(graph.node(d).letter, 'd');
    }

    #[test]
    fn test_no_same_side_edges() {
        let graph = LetterGraph::new(&Layout::from(crate::puzzle::layout::EXAMPLE_LAYOUT));

        for id in graph.ids() {
            for &other in graph.neighbours(id) {
                assert_ne!(graph.node(id).key.side, graph.node(other).key.side);
                assert!(graph.is_adjacent(other, id));
            }
        }
        // 12 nodes, each joined to the 9 on other sides.
        assert_eq!(graph.edge_count(), 12 * 9 / 2);
    }

    #[test]
    fn test_repeated_letters_are_distinct_nodes() {
        let graph = LetterGraph::new(&Layout::from([['a', 'b'], ['a', 'c']]));
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.node(NodeId(0)).letter, graph.node(NodeId(2)).letter);
        assert!(graph.is_adjacent(NodeId(0), NodeId(2)));
    }

    #[test]
    fn test_empty_layout() {
        let graph = LetterGraph::new(&Layout::default());
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
