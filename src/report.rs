//! Descriptive summary of a graph as printed by the `wgraphs` binary.

use std::fmt::{self, Display};

use crate::{algo::*, prelude::*};

/// Flags and structural properties of a graph, computed once by [`GraphReport::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphReport {
    pub order: NumNodes,
    pub edges: NumEdges,
    pub directed: bool,
    pub vertex_weighted: bool,
    pub edge_weighted: bool,
    /// Degree of node `0`, `None` for the empty graph
    pub first_degree: Option<NumNodes>,
    pub components: NumNodes,
    pub complete: bool,
    pub bipartite: bool,
    pub tree: bool,
    pub bridge: bool,
    pub articulation_point: bool,
}

impl GraphReport {
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + AdjacencyTest + GraphEdgeOrder,
    {
        Self {
            order: graph.number_of_nodes(),
            edges: graph.number_of_edges(),
            directed: graph.is_directed(),
            vertex_weighted: graph.is_vertex_weighted(),
            edge_weighted: graph.is_edge_weighted(),
            first_degree: graph.try_degree_of(0).ok(),
            components: graph.count_components(),
            complete: graph.is_complete(),
            bipartite: graph.is_bipartite(),
            tree: graph.is_tree(),
            bridge: graph.has_bridge(),
            articulation_point: graph.has_articulation_point(),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

impl Display for GraphReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== Graph description ==========")?;
        writeln!(f, "Order: {}", self.order)?;
        writeln!(f, "Edges: {}", self.edges)?;
        writeln!(f, "Directed: {}", yes_no(self.directed))?;
        writeln!(f, "Weighted vertices: {}", yes_no(self.vertex_weighted))?;
        writeln!(f, "Weighted edges: {}", yes_no(self.edge_weighted))?;
        match self.first_degree {
            Some(degree) => writeln!(f, "Degree of vertex 1: {degree}")?,
            None => writeln!(f, "Degree of vertex 1: -")?,
        }
        writeln!(f, "Connected components: {}", self.components)?;
        writeln!(f, "Complete: {}", yes_no(self.complete))?;
        writeln!(f, "Bipartite: {}", yes_no(self.bipartite))?;
        writeln!(f, "Tree: {}", yes_no(self.tree))?;
        writeln!(f, "Bridge: {}", yes_no(self.bridge))?;
        writeln!(f, "Articulation point: {}", yes_no(self.articulation_point))?;
        write!(f, "=======================================")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;

    #[test]
    fn cycle_of_four() {
        let mut graph = AdjList::new(4, GraphKind::undirected());
        graph.connect_cycle([0, 1, 2, 3]).unwrap();

        let report = GraphReport::new(&graph);
        assert_eq!(
            report,
            GraphReport {
                order: 4,
                edges: 4,
                directed: false,
                vertex_weighted: false,
                edge_weighted: false,
                first_degree: Some(2),
                components: 1,
                complete: false,
                bipartite: true,
                tree: false,
                bridge: false,
                articulation_point: false,
            }
        );

        let text = report.to_string();
        assert!(text.contains("Order: 4\n"));
        assert!(text.contains("Bipartite: yes\n"));
        assert!(text.contains("Tree: no\n"));
    }

    #[test]
    fn path_of_three() {
        let mut graph = AdjMatrix::new(3, GraphKind::undirected());
        graph.connect_path([0, 1, 2]).unwrap();

        let report = GraphReport::new(&graph);
        assert!(report.tree && report.bipartite && report.bridge && report.articulation_point);
        assert_eq!(report.first_degree, Some(1));
    }

    #[test]
    fn empty() {
        let report = GraphReport::new(&AdjList::new(0, GraphKind::directed()));
        assert_eq!(report.first_degree, None);
        assert_eq!(report.components, 0);
        assert!(!report.tree);
        assert!(report.to_string().contains("Degree of vertex 1: -\n"));
    }
}
