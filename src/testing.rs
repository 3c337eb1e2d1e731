use itertools::Itertools;
use rand::Rng;

use crate::{ops::*, *};

/// Creates a list of at most `m_ub` random edges without loops for nodes `0..n`.
/// Edges of undirected graphs are normalized; the list is sorted and free of duplicates.
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges, directed: bool) -> Vec<Edge> {
    let mut edges = (0..m_ub)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
        .filter(|e| !e.is_loop())
        .map(|e| if directed { e } else { e.normalized() })
        .collect_vec();
    edges.sort_unstable();
    edges.dedup();
    edges
}

/// Plain adjacency table serving as reference model in randomized tests
#[derive(Debug, Clone)]
pub(crate) struct ReferenceGraph {
    pub directed: bool,
    pub out_nbs: Vec<NodeBitSet>,
}

impl ReferenceGraph {
    pub fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            directed,
            out_nbs: vec![NodeBitSet::with_capacity(n as usize); n as usize],
        }
    }

    pub fn len(&self) -> usize {
        self.out_nbs.len()
    }

    pub fn insert(&mut self, Edge(u, v): Edge) -> bool {
        let is_new = !self.out_nbs[u as usize].put(v as usize);
        if !self.directed {
            self.out_nbs[v as usize].insert(u as usize);
        }
        is_new
    }

    pub fn remove(&mut self, Edge(u, v): Edge) -> bool {
        let existed = self.out_nbs[u as usize].contains(v as usize);
        self.out_nbs[u as usize].set(v as usize, false);
        if !self.directed {
            self.out_nbs[v as usize].set(u as usize, false);
        }
        existed
    }

    pub fn number_of_edges(&self) -> usize {
        let arcs: usize = self.out_nbs.iter().map(|nbs| nbs.count_ones(..)).sum();
        if self.directed { arcs } else { arcs / 2 }
    }

    pub fn in_nbs(&self, u: Node) -> NodeBitSet {
        node_bitset_with(
            self.len() as NumNodes,
            (0..self.len())
                .filter(|&v| self.out_nbs[v].contains(u as usize))
                .map(|v| v as Node),
        )
    }

    /// Removes `x` and renames all larger nodes
    pub fn delete(&mut self, x: Node) {
        let x = x as usize;
        self.out_nbs.remove(x);
        let n = self.len();
        for nbs in self.out_nbs.iter_mut() {
            let renamed = node_bitset_with(
                n as NumNodes,
                nbs.ones()
                    .filter(|&v| v != x)
                    .map(|v| (if v > x { v - 1 } else { v }) as Node),
            );
            *nbs = renamed;
        }
    }
}

/// Asserts that `graph` stores exactly the edges of `reference`
pub(crate) fn assert_matches_reference<G>(graph: &G, reference: &ReferenceGraph)
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder,
{
    let n = graph.number_of_nodes();
    assert_eq!(graph.len(), reference.len());
    assert_eq!(graph.number_of_edges() as usize, reference.number_of_edges());

    for u in graph.vertices_range() {
        let expected = &reference.out_nbs[u as usize];
        assert_eq!(&node_bitset_with(n, graph.neighbor_nodes_of(u)), expected);
        assert_eq!(graph.degree_of(u) as usize, expected.count_ones(..));

        let expected_in = reference.in_nbs(u);
        assert_eq!(
            node_bitset_with(n, graph.in_neighbors_of(u).map(|(v, _)| v)),
            expected_in
        );
        assert_eq!(graph.in_degree_of(u) as usize, expected_in.count_ones(..));

        for v in graph.vertices_range() {
            assert_eq!(graph.has_edge(u, v), expected.contains(v as usize));
        }
    }
}

/// Runs the shared contract tests of a graph representation in a module `$env`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident) => {
        #[cfg(test)]
        mod $env {
            use crate::{error::*, ops::*, repr::*, testing::*, *};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            const KINDS: [GraphKind; 2] = [GraphKind::undirected(), GraphKind::directed()];

            test_graph_ops!($graph: GraphNew);
            test_graph_ops!($graph: AdjacencyList);
            test_graph_ops!($graph: GraphEdgeEditing);
            test_graph_ops!($graph: GraphNodeEditing);
            test_graph_ops!($graph: Weights);
            test_graph_ops!($graph: Errors);
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for kind in KINDS {
                for n in 0..30 {
                    let graph = <$graph>::new(n, kind);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.kind(), kind);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert!(graph.degrees().all(|d| d == 0));
                }
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn adjacency_matches_reference() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for kind in KINDS {
                for n in [10 as NumNodes, 20, 40] {
                    for m_ub in [n * 2, n * 5] {
                        for _ in 0..5 {
                            let edges = random_edges(rng, n, m_ub, kind.directed);
                            let mut reference = ReferenceGraph::new(n, kind.directed);
                            for &e in &edges {
                                reference.insert(e);
                            }

                            let graph = <$graph>::from_edges(n, kind, edges.iter()).unwrap();

                            assert_matches_reference(&graph, &reference);
                            assert_eq!(graph.unique_edges().sorted().collect_vec(), edges);
                            assert_eq!(
                                graph.total_degrees().map(|d| d as usize).sum::<usize>(),
                                2 * edges.len()
                            );
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn edge_editing_matches_reference() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for kind in KINDS {
                for n in [10 as NumNodes, 30] {
                    for _ in 0..5 {
                        let mut graph = <$graph>::new(n, kind);
                        let mut reference = ReferenceGraph::new(n, kind.directed);

                        for _ in 0..(n * 6) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);
                            if u == v {
                                continue;
                            }

                            if rng.random_bool(0.7) {
                                assert_eq!(graph.add_edge(u, v).unwrap(), reference.insert(Edge(u, v)));
                            } else if reference.remove(Edge(u, v)) {
                                graph.remove_edge(u, v).unwrap();
                            } else {
                                assert!(matches!(
                                    graph.remove_edge(u, v),
                                    Err(GraphError::EdgeNotFound(_))
                                ));
                            }
                        }

                        assert_matches_reference(&graph, &reference);
                    }
                }
            }
        }

        #[test]
        fn undirected_edges_are_symmetric() {
            let mut graph = <$graph>::new(3, GraphKind::undirected());
            assert!(graph.add_edge(2, 0).unwrap());
            assert!(!graph.add_edge(0, 2).unwrap());
            assert!(graph.has_edge(0, 2) && graph.has_edge(2, 0));
            assert_eq!(graph.number_of_edges(), 1);

            graph.remove_edge(0, 2).unwrap();
            assert!(!graph.has_edge(2, 0));
            assert!(graph.is_singleton_graph());
        }

        #[test]
        fn directed_edges_are_distinct() {
            let mut graph = <$graph>::new(3, GraphKind::directed());
            assert!(graph.add_edge(0, 1).unwrap());
            assert!(graph.add_edge(1, 0).unwrap());
            assert_eq!(graph.number_of_edges(), 2);
            assert!(graph.is_adjacent(0, 1));

            graph.remove_edge(1, 0).unwrap();
            assert!(graph.has_edge(0, 1));
            assert!(!graph.has_edge(1, 0));
            assert!(graph.is_adjacent(1, 0));
        }
    };
    ($graph:ident: GraphNodeEditing) => {
        #[test]
        fn delete_vertex_matches_reference() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for kind in KINDS {
                for n in [5 as NumNodes, 15, 30] {
                    let edges = random_edges(rng, n, n * 4, kind.directed);
                    let mut graph = <$graph>::from_edges(n, kind, edges.iter()).unwrap();
                    let mut reference = ReferenceGraph::new(n, kind.directed);
                    for &e in &edges {
                        reference.insert(e);
                    }

                    while !graph.is_empty() {
                        let x = rng.random_range(0..graph.number_of_nodes());
                        graph.delete_vertex(x).unwrap();
                        reference.delete(x);
                        assert_matches_reference(&graph, &reference);
                    }
                    assert!(graph.is_singleton_graph());
                }
            }
        }

        #[test]
        fn insert_vertex_appends_singleton() {
            for kind in KINDS {
                let mut graph = <$graph>::from_edges(3, kind, [(0, 1), (1, 2)]).unwrap();
                let u = graph.insert_vertex();

                assert_eq!(u, 3);
                assert_eq!(graph.number_of_nodes(), 4);
                assert_eq!(graph.total_degree_of(u), 0);
                assert_eq!(graph.vertex_weight(u), DEFAULT_NODE_WEIGHT);

                graph.add_edge(u, 0).unwrap();
                assert!(graph.has_edge(3, 0));
                assert_eq!(graph.number_of_edges(), 3);
            }
        }
    };
    ($graph:ident: Weights) => {
        #[test]
        fn edge_weights_depend_on_kind() {
            let mut weighted = <$graph>::new(3, GraphKind::undirected().with_edge_weights());
            weighted.insert_edge(0, 1, 2.5).unwrap();
            assert_eq!(weighted.edge_weight(1, 0), Some(2.5));
            assert!(!weighted.insert_edge(0, 1, 4.0).unwrap());
            assert_eq!(weighted.edge_weight(0, 1), Some(4.0));
            assert_eq!(weighted.remove_edge(1, 0).unwrap(), 4.0);

            let mut plain = <$graph>::new(3, GraphKind::directed());
            plain.insert_edge(0, 1, 2.5).unwrap();
            assert_eq!(plain.edge_weight(0, 1), Some(DEFAULT_EDGE_WEIGHT));
            assert_eq!(plain.edge_weight(1, 0), None);
        }

        #[test]
        fn vertex_weights_follow_renaming() {
            let mut graph = <$graph>::new(4, GraphKind::undirected().with_vertex_weights());
            for u in 0..4 {
                graph.set_vertex_weight(u, u as Weight * 10.0).unwrap();
            }
            graph.delete_vertex(1).unwrap();
            assert_eq!(
                graph.vertices().map(|u| graph.vertex_weight(u)).collect_vec(),
                vec![0.0, 20.0, 30.0]
            );
        }
    };
    ($graph:ident: Errors) => {
        #[test]
        fn failed_operations_leave_graph_unchanged() {
            for kind in KINDS {
                let mut graph = <$graph>::from_edges(3, kind, [(0, 1), (1, 2)]).unwrap();

                assert!(matches!(
                    graph.add_edge(1, 1),
                    Err(GraphError::SelfLoopRejected(1))
                ));
                assert!(matches!(
                    graph.add_edge(0, 3),
                    Err(GraphError::InvalidVertexId { id: 3, order: 3 })
                ));
                assert!(matches!(
                    graph.remove_edge(0, 2),
                    Err(GraphError::EdgeNotFound(Edge(0, 2)))
                ));
                assert!(matches!(
                    graph.delete_vertex(5),
                    Err(GraphError::InvalidVertexId { id: 5, .. })
                ));
                assert!(graph.set_vertex_weight(3, 1.0).is_err());
                assert!(graph.try_degree_of(3).is_err());

                assert_eq!(graph.number_of_nodes(), 3);
                assert_eq!(graph.number_of_edges(), 2);
                assert_eq!(graph.try_degree_of(1).unwrap(), if kind.directed { 1 } else { 2 });
            }
        }
    };
}

pub(crate) use test_graph_ops;
