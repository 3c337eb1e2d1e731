use super::*;

/// Ordered sequence of `(neighbor, weight)` pairs of a single node.
/// Insertion order is kept; there is at most one entry per neighbor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Neighborhood {
    nbs: Vec<(Node, Weight)>,
}

impl Neighborhood {
    /// Creates an empty Neighborhood
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of neighbors in the Neighborhood
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    /// Returns an iterator over all neighbors with their weights
    pub fn neighbors(&self) -> std::iter::Copied<std::slice::Iter<'_, (Node, Weight)>> {
        self.nbs.iter().copied()
    }

    /// Returns the weight towards `v` if `v` is a neighbor
    pub fn weight_to(&self, v: Node) -> Option<Weight> {
        self.nbs.iter().find(|&&(u, _)| u == v).map(|&(_, w)| w)
    }

    /// Returns *true* if `v` is in the Neighborhood
    pub fn has_neighbor(&self, v: Node) -> bool {
        self.weight_to(v).is_some()
    }

    /// Adds `v` with the given weight or overwrites the weight if `v` is already present.
    /// Returns *true* if `v` was not in the Neighborhood before.
    pub fn upsert_neighbor(&mut self, v: Node, weight: Weight) -> bool {
        match self.nbs.iter_mut().find(|(u, _)| *u == v) {
            Some(entry) => {
                entry.1 = weight;
                false
            }
            None => {
                self.nbs.push((v, weight));
                true
            }
        }
    }

    /// Removes `v` keeping the order of the remaining neighbors.
    /// Returns its weight if `v` was in the Neighborhood.
    pub fn try_remove_neighbor(&mut self, v: Node) -> Option<Weight> {
        let pos = self.nbs.iter().position(|&(u, _)| u == v)?;
        Some(self.nbs.remove(pos).1)
    }

    /// Renames every neighbor `v > removed` to `v - 1`.
    /// `removed` must not be a neighbor anymore.
    pub fn shift_after_removal(&mut self, removed: Node) {
        debug_assert!(!self.has_neighbor(removed));
        for (v, _) in self.nbs.iter_mut() {
            if *v > removed {
                *v -= 1;
            }
        }
    }
}
