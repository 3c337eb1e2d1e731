use super::{
    bridges::{Frame, UndirectedArcs},
    *,
};

/// Articulation points are nodes whose removal increases the number of connected components.
pub trait ArticulationPoints: AdjacencyList + Sized {
    /// Returns *true* if the graph contains at least one articulation point.
    /// Stops at the first node whose removal increases the number of components.
    fn has_articulation_point(&self) -> bool {
        let components = self.count_components();
        self.vertices()
            .any(|u| self.count_components_without_node(u) > components)
    }

    /// Returns all articulation points in ascending order
    /// by deleting every node in turn and recounting components
    fn articulation_points(&self) -> Vec<Node> {
        let components = self.count_components();
        self.vertices()
            .filter(|&u| self.count_components_without_node(u) > components)
            .collect()
    }

    /// Returns all articulation points in ascending order using a single depth-first search.
    /// Yields the same set as [`ArticulationPoints::articulation_points`] in `O(n + m)`.
    fn articulation_points_lowlink(&self) -> Vec<Node> {
        ArticulationPointSearch::new(self)
            .compute()
            .ones()
            .map(|u| u as Node)
            .collect()
    }
}

impl<G> ArticulationPoints for G where G: AdjacencyList + Sized {}

struct ArticulationPointSearch {
    arcs: UndirectedArcs,
    dfs_num: Vec<Node>,
    low_point: Vec<Node>,
    current_dfs_num: Node,
    articulation_points: NodeBitSet,
}

impl ArticulationPointSearch {
    fn new<G: AdjacencyList>(graph: &G) -> Self {
        let n = graph.len();
        Self {
            arcs: UndirectedArcs::new(graph),
            dfs_num: vec![0; n],
            low_point: vec![0; n],
            current_dfs_num: 0,
            articulation_points: NodeBitSet::with_capacity(n),
        }
    }

    fn compute(mut self) -> NodeBitSet {
        for root in 0..self.dfs_num.len() {
            if self.dfs_num[root] == 0 {
                self.compute_from(root as Node);
            }
        }
        self.articulation_points
    }

    fn visit(&mut self, u: Node) {
        self.current_dfs_num += 1;
        self.dfs_num[u as usize] = self.current_dfs_num;
        self.low_point[u as usize] = self.current_dfs_num;
    }

    fn compute_from(&mut self, root: Node) {
        self.visit(root);
        let mut tree_neighbors_of_root = 0;
        let mut stack = vec![Frame {
            node: root,
            via: None,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let u = frame.node as usize;

            if let Some(&(v, id)) = self.arcs.incident[u].get(frame.next) {
                frame.next += 1;
                if frame.via == Some(id) {
                    continue;
                }

                if self.dfs_num[v as usize] == 0 {
                    // tree edge
                    if u == root as usize {
                        tree_neighbors_of_root += 1;
                    }
                    self.visit(v);
                    stack.push(Frame {
                        node: v,
                        via: Some(id),
                        next: 0,
                    });
                } else {
                    self.low_point[u] = self.low_point[u].min(self.dfs_num[v as usize]);
                }
                continue;
            }

            stack.pop();

            if let Some(parent) = stack.last() {
                let p = parent.node as usize;
                self.low_point[p] = self.low_point[p].min(self.low_point[u]);
                if p != root as usize && self.low_point[u] >= self.dfs_num[p] {
                    self.articulation_points.insert(p);
                }
            }
        }

        if tree_neighbors_of_root > 1 {
            self.articulation_points.insert(root as usize);
        }
    }
}
