use std::io::BufRead;

use tracing::{debug, warn};

use super::*;

/// Reader for the graph description format described in the [module documentation](super).
///
/// # Example
/// ```
/// use wgraphs::{prelude::*, io::*};
///
/// let input = "4 1 1 1\n0.5 1 1 2\n1 2 3.0\n2 3 1.5\n4 1 2.0\n";
/// let graph: AdjMatrix = DescriptionReader::new().try_read_graph(input.as_bytes()).unwrap();
///
/// assert!(graph.is_directed());
/// assert_eq!(graph.number_of_edges(), 3);
/// assert_eq!(graph.edge_weight(3, 0), Some(2.0));
/// assert_eq!(graph.vertex_weight(3), 2.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DescriptionReader {
    one_based: bool,
    pub(super) max_order: NumNodes,
}

impl Default for DescriptionReader {
    fn default() -> Self {
        Self {
            one_based: true,
            max_order: DEFAULT_MAX_ORDER,
        }
    }
}

/// Largest order accepted by a [`DescriptionReader`] unless configured otherwise.
/// Representations with a smaller [`GraphNew::MAX_ORDER`] lower the limit further.
pub const DEFAULT_MAX_ORDER: NumNodes = 1 << 24;

impl DescriptionReader {
    /// Creates a reader expecting 1-based vertex ids in the edge lines
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether vertex ids in edge lines start at `1` (default) or at `0`
    pub fn one_based(mut self, one_based: bool) -> Self {
        self.one_based = one_based;
        self
    }

    /// Sets the largest number of vertices a header may declare.
    /// Larger headers are rejected with [`GraphError::MalformedInput`] before any memory is allocated.
    pub fn max_order(mut self, max_order: NumNodes) -> Self {
        self.max_order = max_order;
        self
    }

    /// Reads a description from `tokens` into a graph created by `create`.
    /// Returns the graph together with the number of skipped edge lines.
    pub(crate) fn read_description<R, G, F>(
        &self,
        tokens: &mut Tokens<R>,
        create: F,
    ) -> Result<(G, usize)>
    where
        R: BufRead,
        G: GraphEdgeEditing + VertexWeights,
        F: FnOnce(NumNodes, GraphKind) -> G,
    {
        let order: NumNodes = parse_next_token!(tokens, "number of vertices");
        raise_error_unless!(
            order <= self.max_order,
            tokens.line(),
            format!("{order} vertices exceed the limit of {}", self.max_order)
        );
        let directed = parse_flag(tokens, "directed flag")?;
        let vertex_weighted = parse_flag(tokens, "vertex weighted flag")?;
        let edge_weighted = parse_flag(tokens, "edge weighted flag")?;

        let mut kind = if directed {
            GraphKind::directed()
        } else {
            GraphKind::undirected()
        };
        if vertex_weighted {
            kind = kind.with_vertex_weights();
        }
        if edge_weighted {
            kind = kind.with_edge_weights();
        }

        let mut graph = create(order, kind);

        if vertex_weighted {
            for u in 0..order {
                let weight: Weight = parse_next_token!(tokens, "vertex weight");
                graph.set_vertex_weight(u, weight)?;
            }
        }
        tokens.finish_line()?;

        let offset = Node::from(self.one_based);
        let mut edges = 0usize;
        let mut skipped = 0usize;
        while let Some(line) = tokens.next_line()? {
            let number = tokens.line();
            raise_error_unless!(
                line.len() == 2 || line.len() == 3,
                number,
                format!("expected `source dest [weight]`, found {} tokens", line.len())
            );

            let mut values = line.iter();
            let source: Node = parse_next_value!(values, number, "source vertex");
            let dest: Node = parse_next_value!(values, number, "destination vertex");
            let weight: Weight = if line.len() == 3 {
                parse_next_value!(values, number, "edge weight")
            } else {
                1.0
            };

            let (Some(u), Some(v)) = (source.checked_sub(offset), dest.checked_sub(offset)) else {
                warn!(line = number, source, dest, "vertex ids start at 1, skipping edge");
                skipped += 1;
                continue;
            };

            match graph.insert_edge(u, v, weight) {
                Ok(_) => edges += 1,
                Err(err) => {
                    warn!(line = number, error = %err, kind = err.kind(), "skipping edge");
                    skipped += 1;
                }
            }
        }

        debug!(order, directed, edges, skipped, "read graph description");
        Ok((graph, skipped))
    }
}

fn parse_flag<R: BufRead>(tokens: &mut Tokens<R>, name: &str) -> Result<bool> {
    let flag: u8 = parse_next_token!(tokens, name);
    raise_error_unless!(
        flag <= 1,
        tokens.line(),
        format!("{name} must be 0 or 1, found {flag}")
    );
    Ok(flag == 1)
}

impl<G> GraphReader<G> for DescriptionReader
where
    G: GraphNew + GraphEdgeEditing + VertexWeights,
{
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead,
    {
        let mut tokens = Tokens::new(reader);
        let (graph, _) = self
            .max_order(self.max_order.min(G::MAX_ORDER))
            .read_description(&mut tokens, G::new)?;
        Ok(graph)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn read<G>(input: &str) -> Result<G>
    where
        G: GraphNew + GraphEdgeEditing + VertexWeights,
    {
        DescriptionReader::new().try_read_graph(input.as_bytes())
    }

    #[test]
    fn undirected_unweighted() {
        let graph: AdjList = read("4 0 0 0\n1 2\n2 3\n\n3 4\n4 1\n").unwrap();

        assert_eq!(graph.number_of_nodes(), 4);
        assert!(graph.is_undirected());
        assert!(!graph.is_vertex_weighted());
        assert!(!graph.is_edge_weighted());
        assert_eq!(graph.number_of_edges(), 4);
        assert!(graph.has_edge(0, 1) && graph.has_edge(1, 0));
        assert!(graph.has_edge(3, 0));
        assert_eq!(graph.edge_weight(1, 2), Some(1.0));
    }

    #[test]
    fn weights_ignored_unless_edge_weighted() {
        let graph: AdjMatrix = read("3 0 0 0\n1 2 7\n2 3 9.5\n").unwrap();
        assert_eq!(graph.edge_weight(0, 1), Some(1.0));

        let graph: AdjMatrix = read("3 0 0 1\n1 2 7\n2 3 9.5\n").unwrap();
        assert_eq!(graph.edge_weight(1, 0), Some(7.0));
        assert_eq!(graph.edge_weight(2, 1), Some(9.5));
    }

    #[test]
    fn vertex_weights_may_span_lines() {
        let graph: AdjList = read("3 1 1 0\n1.5\n2.5 3.5\n1 3\n").unwrap();

        assert!(graph.is_directed());
        assert_eq!(graph.vertex_weight(0), 1.5);
        assert_eq!(graph.vertex_weight(2), 3.5);
        assert!(graph.has_edge(0, 2));
        assert!(!graph.has_edge(2, 0));
    }

    #[test]
    fn rejected_edges_are_skipped() {
        let reader = DescriptionReader::new();
        let mut tokens = Tokens::new("3 0 0 0\n1 1\n1 4\n0 2\n1 2\n".as_bytes());
        let (graph, skipped) = reader
            .read_description(&mut tokens, AdjList::new)
            .unwrap();

        assert_eq!(skipped, 3);
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.has_edge(0, 1));
    }

    #[test]
    fn zero_based() {
        let graph: AdjList = DescriptionReader::new()
            .one_based(false)
            .try_read_graph("3 0 0 0\n0 2\n".as_bytes())
            .unwrap();
        assert!(graph.has_edge(0, 2));
    }

    #[test]
    fn malformed() {
        for (input, line) in [
            ("", 0),
            ("3 0 0", 1),
            ("x 0 0 0", 1),
            ("3 2 0 0", 1),
            ("3 0 0 0 5\n", 1),
            ("3 0 1 0\n1.0 2.0\n", 2),
            ("3 0 0 0\n1 2\n1\n", 3),
            ("3 0 0 0\n1 2 3 4\n", 2),
            ("3 0 0 1\n1 two 3\n", 2),
            ("3 0 0 1\n\n1 2 heavy\n", 3),
            ("4294967295 0 0 0\n", 1),
        ] {
            match read::<AdjList>(input) {
                Err(GraphError::MalformedInput { line: l, .. }) => assert_eq!(l, line, "{input:?}"),
                other => panic!("{input:?} yields {other:?}"),
            }
        }
    }

    #[test]
    fn order_limit() {
        let input = "5000 0 0 0\n1 5000\n";
        let graph: AdjList = read(input).unwrap();
        assert!(graph.has_edge(0, 4999));

        assert!(matches!(
            read::<AdjMatrix>(input),
            Err(GraphError::MalformedInput { line: 1, .. })
        ));
        let limited: Result<AdjList> = DescriptionReader::new()
            .max_order(3)
            .try_read_graph("4 0 0 0\n".as_bytes());
        assert!(matches!(limited, Err(GraphError::MalformedInput { line: 1, .. })));
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "2 0 0 0\n1 2\n").unwrap();

        let graph: AdjMatrix = DescriptionReader::new()
            .try_read_graph_file(file.path())
            .unwrap();
        assert_eq!(graph.number_of_edges(), 1);

        let missing = file.path().with_extension("missing");
        let err = <DescriptionReader as GraphReader<AdjMatrix>>::try_read_graph_file(
            &DescriptionReader::new(),
            &missing,
        )
        .unwrap_err();
        match err {
            GraphError::UnreadableSource { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected {other:?}"),
        }
    }
}
