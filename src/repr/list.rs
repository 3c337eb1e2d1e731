use crate::repr::macros::{check_new_edge, impl_common_graph_ops};

use super::*;

/// Representation using an Adjacency-List.
///
/// Directed graphs additionally store incoming neighborhoods to answer in-degree queries in `O(1)`.
/// For undirected graphs `in_nbs` stays empty.
#[derive(Debug, Clone)]
pub struct AdjList {
    kind: GraphKind,
    weights: Vec<Weight>,
    num_edges: NumEdges,
    out_nbs: Vec<Neighborhood>,
    in_nbs: Vec<Neighborhood>,
}

impl_common_graph_ops!(AdjList);

impl GraphNew for AdjList {
    fn new(n: NumNodes, kind: GraphKind) -> Self {
        let n = n as usize;
        Self {
            kind,
            weights: vec![DEFAULT_NODE_WEIGHT; n],
            num_edges: 0,
            out_nbs: vec![Neighborhood::new(); n],
            in_nbs: if kind.directed {
                vec![Neighborhood::new(); n]
            } else {
                Vec::new()
            },
        }
    }
}

impl AdjList {
    /// Neighborhood holding the edges `(v, u)` for all `v`
    fn incoming(&self, u: Node) -> &Neighborhood {
        if self.is_directed() {
            &self.in_nbs[u as usize]
        } else {
            &self.out_nbs[u as usize]
        }
    }

    /// Neighborhood that mirrors the edge `(u, v)` at `v`
    fn mirror_mut(&mut self, v: Node) -> &mut Neighborhood {
        if self.is_directed() {
            &mut self.in_nbs[v as usize]
        } else {
            &mut self.out_nbs[v as usize]
        }
    }
}

impl AdjacencyList for AdjList {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.out_nbs[u as usize].neighbors()
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.incoming(u).neighbors()
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].num_of_neighbors()
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.incoming(u).num_of_neighbors()
    }
}

impl AdjacencyTest for AdjList {
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight> {
        assert!(self.contains_node(v));
        self.out_nbs[u as usize].weight_to(v)
    }
}

impl GraphEdgeEditing for AdjList {
    fn insert_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool> {
        check_new_edge!(self, u, v);

        let weight = stored_edge_weight(self.kind, weight);
        let is_new = self.out_nbs[u as usize].upsert_neighbor(v, weight);
        let mirrored = self.mirror_mut(v).upsert_neighbor(u, weight);
        debug_assert_eq!(is_new, mirrored);

        if is_new {
            self.num_edges += 1;
        }
        Ok(is_new)
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Result<Weight> {
        self.check_node(u)?;
        self.check_node(v)?;

        let weight = self.out_nbs[u as usize]
            .try_remove_neighbor(v)
            .ok_or(GraphError::EdgeNotFound(Edge(u, v)))?;
        let mirrored = self.mirror_mut(v).try_remove_neighbor(u);
        debug_assert!(mirrored.is_some());

        self.num_edges -= 1;
        Ok(weight)
    }
}

impl GraphNodeEditing for AdjList {
    fn insert_vertex(&mut self) -> Node {
        let u = self.number_of_nodes();
        self.weights.push(DEFAULT_NODE_WEIGHT);
        self.out_nbs.push(Neighborhood::new());
        if self.is_directed() {
            self.in_nbs.push(Neighborhood::new());
        }
        u
    }

    fn delete_vertex(&mut self, x: Node) -> Result<()> {
        self.check_node(x)?;
        let xi = x as usize;

        let out = std::mem::take(&mut self.out_nbs[xi]);
        for (v, _) in out.neighbors() {
            self.mirror_mut(v).try_remove_neighbor(x);
        }
        let mut removed = out.num_of_neighbors();

        if self.is_directed() {
            let incoming = std::mem::take(&mut self.in_nbs[xi]);
            for (v, _) in incoming.neighbors() {
                self.out_nbs[v as usize].try_remove_neighbor(x);
            }
            removed += incoming.num_of_neighbors();
            self.in_nbs.remove(xi);
        }

        self.out_nbs.remove(xi);
        self.weights.remove(xi);
        self.num_edges -= removed as NumEdges;

        for nbs in self.out_nbs.iter_mut().chain(self.in_nbs.iter_mut()) {
            nbs.shift_after_removal(x);
        }

        Ok(())
    }
}
