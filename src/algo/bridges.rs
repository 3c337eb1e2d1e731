use super::*;

/// Bridges are edges whose removal increases the number of connected components.
///
/// Edges are reported as returned by [`AdjacencyList::unique_edges`]:
/// normalized for undirected graphs, in their orientation for directed graphs.
/// In directed graphs, two antiparallel arcs between the same nodes are never bridges.
pub trait Bridges: AdjacencyList + Sized {
    /// Returns *true* if the graph contains at least one bridge.
    /// Stops at the first edge whose removal increases the number of components.
    fn has_bridge(&self) -> bool {
        let components = self.count_components();
        self.unique_edges()
            .any(|e| self.count_components_without_edge(e) > components)
    }

    /// Returns all bridges by deleting every edge in turn and recounting components
    fn bridges(&self) -> Vec<Edge> {
        let components = self.count_components();
        self.unique_edges()
            .filter(|&e| self.count_components_without_edge(e) > components)
            .collect()
    }

    /// Returns all bridges using a single depth-first search (Tarjan's low-link values).
    /// Yields the same set as [`Bridges::bridges`] in `O(n + m)`.
    fn bridges_lowlink(&self) -> Vec<Edge> {
        BridgeSearch::new(self).compute()
    }
}

impl<G> Bridges for G where G: AdjacencyList + Sized {}

/// The underlying undirected multigraph: every stored edge gets an id
/// and is listed at both of its endpoints.
pub(super) struct UndirectedArcs {
    pub edges: Vec<Edge>,
    pub incident: Vec<Vec<(Node, usize)>>,
}

impl UndirectedArcs {
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        let edges: Vec<Edge> = graph.unique_edges().collect();
        let mut incident = vec![Vec::new(); graph.len()];
        for (id, &Edge(u, v)) in edges.iter().enumerate() {
            incident[u as usize].push((v, id));
            incident[v as usize].push((u, id));
        }
        Self { edges, incident }
    }
}

/// Frame of the explicit DFS stack.
/// `via` is the id of the edge used to enter `node`; it is skipped exactly once,
/// so parallel edges back to the parent count as back edges.
#[derive(Clone, Copy)]
pub(super) struct Frame {
    pub node: Node,
    pub via: Option<usize>,
    pub next: usize,
}

struct BridgeSearch {
    arcs: UndirectedArcs,
    discovery: Vec<Node>,
    low: Vec<Node>,
    time: Node,
    bridges: Vec<Edge>,
}

impl BridgeSearch {
    fn new<G: AdjacencyList>(graph: &G) -> Self {
        let n = graph.len();
        Self {
            arcs: UndirectedArcs::new(graph),
            discovery: vec![0; n],
            low: vec![0; n],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> Vec<Edge> {
        for root in 0..self.discovery.len() {
            if self.discovery[root] == 0 && !self.arcs.incident[root].is_empty() {
                self.compute_from(root as Node);
            }
        }
        self.bridges
    }

    fn visit(&mut self, u: Node) {
        self.time += 1;
        self.discovery[u as usize] = self.time;
        self.low[u as usize] = self.time;
    }

    fn compute_from(&mut self, root: Node) {
        self.visit(root);
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

                if self.discovery[v as usize] == 0 {
                    self.visit(v);
                    stack.push(Frame {
                        node: v,
                        via: Some(id),
                        next: 0,
                    });
                } else {
                    self.low[u] = self.low[u].min(self.discovery[v as usize]);
                }
                continue;
            }

            let Frame { via, .. } = *frame;
            stack.pop();

            if let (Some(id), Some(parent)) = (via, stack.last()) {
                let p = parent.node as usize;
                self.low[p] = self.low[p].min(self.low[u]);
                if self.low[u] > self.discovery[p] {
                    self.bridges.push(self.arcs.edges[id]);
                }
            }
        }
    }
}
