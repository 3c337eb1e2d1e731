/*!
# IO

Loaders for the two plain-text inputs understood by this crate.

## Graph description

```text
<order> <directed:0|1> <vertexWeighted:0|1> <edgeWeighted:0|1>
[<w_0> ... <w_{order-1}>]
<source> <dest> [<weight>]
...
```

The header and the vertex weights (present iff the graph is vertex weighted) are read as a
stream of whitespace separated tokens and may span several lines. After them, every non-blank
line describes one edge with *1-based* endpoints; the weight column is optional.
Edges the store rejects (self loops, ids out of range) are skipped with a warning.
Orders above the reader's limit (see [`DescriptionReader::max_order`] and [`GraphNew::MAX_ORDER`])
are rejected before the graph is allocated. See [`DescriptionReader`].

## Configuration

A single case-insensitive token naming the backend (`matriz`/`matrix` or `lista`/`list`) followed by a graph
description. See [`ConfigReader`].

```rust
use wgraphs::{prelude::*, io::*};

let config = "lista\n3 0 0 0\n1 2\n2 3\n";
let graph = ConfigReader::new().try_read_graph(config.as_bytes()).unwrap();

assert_eq!(graph.backend(), Backend::List);
assert_eq!(graph.number_of_edges(), 2);
assert!(graph.has_edge(1, 0));
```
*/

pub mod config;
pub mod description;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    vec::IntoIter,
};

use itertools::Itertools;

use crate::prelude::*;

pub use config::*;
pub use description::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnreadableSource`] if the file cannot be opened or read,
    /// and any error of [`GraphReader::try_read_graph`] otherwise.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GraphError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        })?;

        self.try_read_graph(BufReader::new(file))
            .map_err(|err| match err {
                GraphError::UnreadableSource { source, .. } => GraphError::UnreadableSource {
                    path: path.to_path_buf(),
                    source,
                },
                err => err,
            })
    }
}

/// Whitespace separated tokens of a line-based input, tagged with 1-based line numbers.
///
/// Tokens can be consumed one by one across line breaks ([`Tokens::next_token`]) or
/// line by line ([`Tokens::next_line`]).
pub(crate) struct Tokens<R> {
    lines: std::io::Lines<R>,
    line: usize,
    pending: IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            pending: Vec::new().into_iter(),
        }
    }

    /// Line number of the most recently read line
    pub fn line(&self) -> usize {
        self.line
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            None => Ok(None),
            Some(Ok(line)) => {
                self.line += 1;
                Ok(Some(line))
            }
            Some(Err(source)) => Err(GraphError::UnreadableSource {
                path: Default::default(),
                source,
            }),
        }
    }

    /// Returns the next token, reading further lines if the current one is exhausted
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.next() {
                return Ok(Some(token));
            }

            match self.read_line()? {
                None => return Ok(None),
                Some(line) => {
                    self.pending = split(&line).into_iter();
                }
            }
        }
    }

    /// Fails if unconsumed tokens are left on the current line
    pub fn finish_line(&mut self) -> Result<()> {
        let rest = self.pending.by_ref().collect_vec();
        raise_error_unless!(
            rest.is_empty(),
            self.line,
            format!("unexpected trailing tokens {rest:?}")
        );
        Ok(())
    }

    /// Returns the tokens of the next non-blank line.
    /// Must only be called after the current line was finished.
    pub fn next_line(&mut self) -> Result<Option<Vec<String>>> {
        while let Some(line) = self.read_line()? {
            let tokens = split(&line);
            if !tokens.is_empty() {
                return Ok(Some(tokens));
            }
        }
        Ok(None)
    }
}

fn split(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

/// Shorthand for returning `Err(GraphError::MalformedInput)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $line : expr, $reason : expr) => {
        if !($cond) {
            return Err(GraphError::MalformedInput {
                line: $line,
                reason: $reason,
            });
        }
    };
}

/// Tries to parse the next value of a token iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $line : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(GraphError::MalformedInput {
                line: $line,
                reason: format!("premature end of input when parsing {}", $name),
            });
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(GraphError::MalformedInput {
                    line: $line,
                    reason: format!("cannot parse {} from {:?}", $name, token),
                });
            }
        }
    }};
}

/// Like [`parse_next_value`] but pulls the token from a [`Tokens`] stream
macro_rules! parse_next_token {
    ($tokens : expr, $name : expr) => {{
        let token = $tokens.next_token()?;
        let line = $tokens.line();
        parse_next_value!(token.into_iter(), line, $name)
    }};
}

use parse_next_token;
use parse_next_value;
use raise_error_unless;
