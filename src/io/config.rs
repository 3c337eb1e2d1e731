use std::io::BufRead;

use tracing::debug;

use super::*;

/// Reader for configuration files: a backend name followed by a graph description.
///
/// The backend token is parsed by [`Backend::from_str`](std::str::FromStr), the rest by a [`DescriptionReader`].
/// Unknown backends yield [`GraphError::UnknownBackend`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigReader {
    description: DescriptionReader,
}

impl ConfigReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reader used for the graph description following the backend
    pub fn description(mut self, description: DescriptionReader) -> Self {
        self.description = description;
        self
    }
}

impl GraphReader<AnyGraph> for ConfigReader {
    fn try_read_graph<R>(&self, reader: R) -> Result<AnyGraph>
    where
        R: BufRead,
    {
        let mut tokens = Tokens::new(reader);
        let backend: Backend = match tokens.next_token()? {
            Some(token) => token.parse()?,
            None => {
                return Err(GraphError::MalformedInput {
                    line: tokens.line(),
                    reason: "missing backend".into(),
                });
            }
        };
        debug!(%backend, "selected backend");

        let description = self
            .description
            .max_order(self.description.max_order.min(backend.max_order()));
        let (graph, _) = description
            .read_description(&mut tokens, |n, kind| AnyGraph::new(backend, n, kind))?;
        Ok(graph)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn read(input: &str) -> Result<AnyGraph> {
        ConfigReader::new().try_read_graph(input.as_bytes())
    }

    #[test]
    fn backends() {
        let description = "3 1 0 1\n1 2 4.0\n3 2 1.0\n";
        for (name, backend) in [
            ("matriz", Backend::Matrix),
            ("matrix", Backend::Matrix),
            ("lista", Backend::List),
            ("LIST", Backend::List),
        ] {
            let graph = read(&format!("{name}\n{description}")).unwrap();
            assert_eq!(graph.backend(), backend);
            assert!(graph.is_directed());
            assert_eq!(graph.number_of_edges(), 2);
            assert_eq!(graph.edge_weight(0, 1), Some(4.0));
            assert_eq!(graph.in_degree_of(1), 2);
        }
    }

    #[test]
    fn backend_on_header_line() {
        let graph = read("matriz 2 0 0 0\n1 2\n").unwrap();
        assert_eq!(graph.backend(), Backend::Matrix);
        assert!(graph.has_edge(1, 0));
    }

    #[test]
    fn errors() {
        assert!(matches!(
            read("tabela\n2 0 0 0\n"),
            Err(GraphError::UnknownBackend(s)) if s == "tabela"
        ));
        assert!(matches!(
            read("\n\n"),
            Err(GraphError::MalformedInput { line: 2, .. })
        ));
        assert!(matches!(
            read("lista\n2 0\n"),
            Err(GraphError::MalformedInput { .. })
        ));
    }

    #[test]
    fn order_limit_follows_backend() {
        assert!(matches!(
            read("matriz\n10000 0 0 0\n"),
            Err(GraphError::MalformedInput { line: 2, .. })
        ));
        let graph = read("lista\n10000 0 0 0\n").unwrap();
        assert_eq!(graph.number_of_nodes(), 10000);
    }
}
