use std::{cmp::Ordering, collections::BinaryHeap};

use super::*;

/// Weighted distances where both edges and nodes contribute to the length of a path.
pub trait ShortestPath: AdjacencyList + VertexWeights + Sized {
    /// Returns the length of a shortest path from `origin` to `dest` using Dijkstra's algorithm.
    ///
    /// The length of a path `v_0, ..., v_k` is the weight of `v_0` plus, for every step `v_{i-1} -> v_i`,
    /// the weight of the edge and the weight of `v_i`. Directed graphs follow edges in their orientation.
    /// Returns `None` if `dest` is unreachable or one of the ids is not a node.
    ///
    /// Weights are expected to be non-negative.
    fn shortest_distance(&self, origin: Node, dest: Node) -> Option<Weight> {
        if !self.contains_node(origin) || !self.contains_node(dest) {
            return None;
        }

        let mut distances = vec![Weight::INFINITY; self.len()];
        let mut done = self.vertex_bitset_unset();
        let mut heap = BinaryHeap::new();

        distances[origin as usize] = self.vertex_weight(origin);
        heap.push(HeapEntry(distances[origin as usize], origin));

        while let Some(HeapEntry(dist, u)) = heap.pop() {
            if u == dest {
                return Some(dist);
            }
            if done.put(u as usize) {
                continue;
            }

            for (v, weight) in self.neighbors_of(u) {
                let candidate = dist + weight + self.vertex_weight(v);
                if candidate < distances[v as usize] {
                    distances[v as usize] = candidate;
                    heap.push(HeapEntry(candidate, v));
                }
            }
        }

        None
    }
}

impl<G> ShortestPath for G where G: AdjacencyList + VertexWeights + Sized {}

/// Min-heap entry ordered by distance, then by node
#[derive(Debug, Clone, Copy)]
struct HeapEntry(Weight, Node);

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.total_cmp(&self.0).then_with(|| other.1.cmp(&self.1))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn weighted_square(kind: GraphKind) -> AdjList {
        //  0 --1.0-- 1
        //  |         |
        // 5.0       1.0
        //  |         |
        //  3 --1.0-- 2
        let mut graph = AdjList::new(4, kind.with_edge_weights().with_vertex_weights());
        graph.insert_edge(0, 1, 1.0).unwrap();
        graph.insert_edge(1, 2, 1.0).unwrap();
        graph.insert_edge(2, 3, 1.0).unwrap();
        graph.insert_edge(0, 3, 5.0).unwrap();
        graph
    }

    #[test]
    fn edge_weights() {
        let graph = weighted_square(GraphKind::undirected());
        assert_eq!(graph.shortest_distance(0, 3), Some(3.0));
        assert_eq!(graph.shortest_distance(3, 0), Some(3.0));
        assert_eq!(graph.shortest_distance(0, 0), Some(0.0));
    }

    #[test]
    fn vertex_weights_count_on_path() {
        let mut graph = weighted_square(GraphKind::undirected());
        graph.set_vertex_weight(0, 2.0).unwrap();
        graph.set_vertex_weight(1, 10.0).unwrap();

        // origin weight plus edge 0-3 and weight of 3
        assert_eq!(graph.shortest_distance(0, 3), Some(7.0));
        assert_eq!(graph.shortest_distance(0, 0), Some(2.0));
        assert_eq!(graph.shortest_distance(3, 1), Some(12.0));
    }

    #[test]
    fn directed_and_unreachable() {
        let graph = weighted_square(GraphKind::directed());
        assert_eq!(graph.shortest_distance(0, 3), Some(3.0));
        assert_eq!(graph.shortest_distance(3, 0), None);

        let mut graph = AdjMatrix::new(3, GraphKind::undirected());
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.shortest_distance(0, 1), Some(1.0));
        assert_eq!(graph.shortest_distance(0, 2), None);
        assert_eq!(graph.shortest_distance(0, 7), None);
    }
}
