use itertools::Itertools;

use super::*;

/// Global structural properties
pub trait GraphProperties: AdjacencyList + AdjacencyTest + GraphEdgeOrder + Sized {
    /// Returns *true* if every pair of distinct nodes is joined by an edge.
    /// Directed graphs need both arcs `(u, v)` and `(v, u)` for every pair.
    /// Graphs with at most one node are complete.
    fn is_complete(&self) -> bool {
        let order = self.len() as u64;
        let arcs_per_pair = if self.is_directed() { 1 } else { 2 };
        if arcs_per_pair * self.number_of_edges() as u64 != order * order.saturating_sub(1) {
            return false;
        }

        self.vertices_range()
            .tuple_combinations()
            .all(|(u, v)| self.has_edge(u, v) && self.has_edge(v, u))
    }

    /// Returns *true* if the graph is connected and has exactly `n - 1` edges.
    /// A graph without nodes is no tree.
    fn is_tree(&self) -> bool {
        self.count_components() == 1 && self.number_of_edges() as usize + 1 == self.len()
    }
}

impl<G> GraphProperties for G where G: AdjacencyList + AdjacencyTest + GraphEdgeOrder + Sized {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn complete() {
        for n in 0..6 {
            let mut graph = AdjMatrix::new(n, GraphKind::undirected());
            graph.connect_clique(0..n).unwrap();
            assert!(graph.is_complete());

            if n > 1 {
                graph.remove_edge(0, n - 1).unwrap();
                assert!(!graph.is_complete());
            }
        }

        let mut graph = AdjList::new(3, GraphKind::directed());
        graph.add_edges([(0, 1), (2, 1), (0, 2)]).unwrap();
        assert!(!graph.is_complete());
        graph.add_edges([(1, 0), (1, 2), (2, 0)]).unwrap();
        assert!(graph.is_complete());
        graph.remove_edge(2, 1).unwrap();
        assert!(!graph.is_complete());
    }

    #[test]
    fn directed_complete_needs_both_arcs() {
        for n in 2..6 {
            let mut matrix = AdjMatrix::new(n, GraphKind::directed());
            let mut list = AdjList::new(n, GraphKind::directed());
            for (u, v) in (0..n).tuple_combinations() {
                matrix.add_edge(u, v).unwrap();
                list.add_edge(u, v).unwrap();
            }
            assert!(!matrix.is_complete());
            assert!(!list.is_complete());

            for (u, v) in (0..n).tuple_combinations() {
                matrix.add_edge(v, u).unwrap();
                list.add_edge(v, u).unwrap();
            }
            assert!(matrix.is_complete());
            assert!(list.is_complete());
        }
    }

    #[test]
    fn trees() {
        assert!(!AdjList::new(0, GraphKind::undirected()).is_tree());
        assert!(AdjList::new(1, GraphKind::undirected()).is_tree());

        let mut graph = AdjList::new(5, GraphKind::undirected());
        graph.add_edges([(0, 1), (0, 2), (2, 3), (2, 4)]).unwrap();
        assert!(graph.is_tree());

        graph.add_edge(1, 4).unwrap();
        assert!(!graph.is_tree());

        let mut forest = AdjMatrix::new(4, GraphKind::directed());
        forest.add_edges([(0, 1), (2, 3)]).unwrap();
        assert!(!forest.is_tree());
        forest.add_edge(3, 1).unwrap();
        assert!(forest.is_tree());
    }

    #[test]
    fn tree_iff_connected_with_n_minus_one_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        for n in [2, 5, 12] {
            for p in [0.1, 0.3, 0.6] {
                let graph = AdjList::gnp(rng, n, GraphKind::undirected(), p);
                assert_eq!(
                    graph.is_tree(),
                    graph.is_connected() && graph.number_of_edges() == n - 1
                );
            }
        }
    }
}
