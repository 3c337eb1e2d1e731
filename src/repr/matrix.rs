use crate::repr::macros::{check_new_edge, impl_common_graph_ops};

use super::*;

/// Representation using an Adjacency-Matrix.
///
/// The table has `capacity x capacity` cells (row-major) of which the upper-left `n x n` are in use;
/// all other cells are always `None`.
#[derive(Debug, Clone)]
pub struct AdjMatrix {
    kind: GraphKind,
    weights: Vec<Weight>,
    num_edges: NumEdges,
    capacity: usize,
    cells: Vec<Option<Weight>>,
}

impl_common_graph_ops!(AdjMatrix);

impl AdjMatrix {
    /// Returns the number of nodes the table can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn index(&self, u: Node, v: Node) -> usize {
        u as usize * self.capacity + v as usize
    }

    #[inline]
    fn cell(&self, u: Node, v: Node) -> Option<Weight> {
        self.cells[self.index(u, v)]
    }

    #[inline]
    fn cell_mut(&mut self, u: Node, v: Node) -> &mut Option<Weight> {
        let idx = self.index(u, v);
        &mut self.cells[idx]
    }

    /// Reallocates the table with `new_capacity` and copies all cells in use
    fn grow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > self.capacity);
        let n = self.len();
        let mut cells = vec![None; new_capacity * new_capacity];
        for u in 0..n {
            let old = u * self.capacity;
            cells[u * new_capacity..u * new_capacity + n].copy_from_slice(&self.cells[old..old + n]);
        }
        self.cells = cells;
        self.capacity = new_capacity;
    }
}

impl GraphNew for AdjMatrix {
    const MAX_ORDER: NumNodes = 1 << 12;

    fn new(n: NumNodes, kind: GraphKind) -> Self {
        let capacity = n as usize;
        Self {
            kind,
            weights: vec![DEFAULT_NODE_WEIGHT; capacity],
            num_edges: 0,
            capacity,
            cells: vec![None; capacity * capacity],
        }
    }
}

impl AdjacencyList for AdjMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        assert!(self.contains_node(u));
        self.vertices_range()
            .filter_map(move |v| self.cell(u, v).map(|w| (v, w)))
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        assert!(self.contains_node(u));
        self.vertices_range()
            .filter_map(move |v| self.cell(v, u).map(|w| (v, w)))
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        if self.is_directed() {
            self.in_neighbors_of(u).count() as NumNodes
        } else {
            self.out_degree_of(u)
        }
    }
}

impl AdjacencyTest for AdjMatrix {
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight> {
        assert!(self.contains_node(u) && self.contains_node(v));
        self.cell(u, v)
    }
}

impl GraphEdgeEditing for AdjMatrix {
    fn insert_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool> {
        check_new_edge!(self, u, v);

        let weight = stored_edge_weight(self.kind, weight);
        let is_new = self.cell_mut(u, v).replace(weight).is_none();
        if self.is_undirected() {
            *self.cell_mut(v, u) = Some(weight);
        }

        if is_new {
            self.num_edges += 1;
        }
        Ok(is_new)
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Result<Weight> {
        self.check_node(u)?;
        self.check_node(v)?;

        let weight = self
            .cell_mut(u, v)
            .take()
            .ok_or(GraphError::EdgeNotFound(Edge(u, v)))?;
        if self.is_undirected() {
            *self.cell_mut(v, u) = None;
        }

        self.num_edges -= 1;
        Ok(weight)
    }
}

impl GraphNodeEditing for AdjMatrix {
    fn insert_vertex(&mut self) -> Node {
        let u = self.number_of_nodes();
        if self.len() == self.capacity {
            self.grow((2 * self.capacity).max(1));
        }
        self.weights.push(DEFAULT_NODE_WEIGHT);
        u
    }

    fn delete_vertex(&mut self, x: Node) -> Result<()> {
        self.check_node(x)?;

        self.num_edges -= self.total_degree_of(x) as NumEdges;

        // Shift rows and columns after `x` one step up/left; every read
        // position lies at or after the written one, so this works in place.
        let n = self.len();
        let x = x as usize;
        for r in 0..n - 1 {
            let src_r = if r >= x { r + 1 } else { r };
            for c in 0..n - 1 {
                let src_c = if c >= x { c + 1 } else { c };
                self.cells[r * self.capacity + c] = self.cells[src_r * self.capacity + src_c];
            }
        }

        for i in 0..n {
            self.cells[(n - 1) * self.capacity + i] = None;
            self.cells[i * self.capacity + n - 1] = None;
        }

        self.weights.remove(x);
        Ok(())
    }
}
