use super::*;

/// Removes redundant nodes from `cover`.
///
/// Nodes are tried in order; a node is dropped if the remaining nodes still form a cover,
/// otherwise it stays at its position. The scan repeats until no node can be dropped, hence the
/// result is a minimal cover with respect to single removals and the procedure is idempotent.
/// Entries that are duplicates or not nodes of the graph are always dropped.
///
/// If `cover` does not cover the graph in the first place, it is returned unchanged.
pub fn local_search<G>(graph: &G, cover: Cover) -> Cover
where
    G: AdjacencyList,
{
    if !graph.verify_cover(&cover) {
        return cover;
    }

    let mut multiplicity = vec![0u32; graph.len()];
    for &u in cover.iter().filter(|&&u| graph.contains_node(u)) {
        multiplicity[u as usize] += 1;
    }

    let is_redundant = |multiplicity: &[u32], u: Node| {
        !graph.contains_node(u)
            || multiplicity[u as usize] > 1
            || graph
                .undirected_neighbors_of(u)
                .all(|v| multiplicity[v as usize] > 0)
    };

    // Dropping a node never makes another node redundant,
    // so nodes kept once stay and a single pass suffices.
    let mut improved = cover;
    let mut i = 0;
    while i < improved.len() {
        let u = improved[i];
        if is_redundant(&multiplicity, u) {
            improved.remove(i);
            if graph.contains_node(u) {
                multiplicity[u as usize] -= 1;
            }
        } else {
            i += 1;
        }
    }

    improved
}
