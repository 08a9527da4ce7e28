//! Text loader for the edge-list graph format.
//!
//! ```text
//! 4          <- node count
//! 3          <- edge count
//! 0, 1, 5    <- source, target[, cost]
//! 1, 2, 2
//! 2, 3, 1
//! ```
//!
//! Weighted graphs require three fields per edge line, unweighted graphs two (every
//! cost is then one). Blank lines are ignored anywhere.

use crate::error::{GraphError, Result};
use crate::graph::cost::Cost;
use crate::graph::model::{Graph, GraphKind, NodeId};
use std::io::BufRead;
use std::str::FromStr;

/// Parses a graph from an in-memory string.
///
/// # Errors
/// Returns [`GraphError::MalformedGraph`] for any format violation.
pub fn parse_graph<C>(input: &str, kind: GraphKind) -> Result<Graph<C>>
where
    C: Cost + FromStr,
{
    load(input.lines().map(|line| Ok(line.to_owned())), kind)
}

/// Reads a graph from any buffered reader.
///
/// # Errors
/// Returns [`GraphError::MalformedGraph`] for any format violation or I/O failure.
pub fn read_graph<C, R>(reader: R, kind: GraphKind) -> Result<Graph<C>>
where
    C: Cost + FromStr,
    R: BufRead,
{
    load(reader.lines(), kind)
}

fn load<C, I>(lines: I, kind: GraphKind) -> Result<Graph<C>>
where
    C: Cost + FromStr,
    I: Iterator<Item = std::io::Result<String>>,
{
    let mut lines = NumberedLines {
        inner: lines,
        line: 0,
    };

    let (node_line, text) = lines
        .next_content()?
        .ok_or_else(|| GraphError::malformed(0, "missing node count"))?;
    let node_count: usize = parse_field(&text, node_line, "node count")?;

    let (line, text) = lines
        .next_content()?
        .ok_or_else(|| GraphError::malformed(0, "missing edge count"))?;
    let declared_edges: usize = parse_field(&text, line, "edge count")?;

    let expected_fields = if kind.weighted { 3 } else { 2 };
    // The count is untrusted input, so allocation failure must not abort.
    let mut graph = Graph::try_with_nodes(kind, node_count).map_err(|err| {
        GraphError::malformed(node_line, format!("node count {node_count} is too large: {err}"))
    })?;

    while let Some((line, text)) = lines.next_content()? {
        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        if fields.len() != expected_fields {
            return Err(GraphError::malformed(
                line,
                format!(
                    "expected {expected_fields} fields, found {}",
                    fields.len()
                ),
            ));
        }

        let source: usize = parse_field(fields[0], line, "source node")?;
        let target: usize = parse_field(fields[1], line, "target node")?;
        let cost = if kind.weighted {
            parse_field(fields[2], line, "cost")?
        } else {
            C::one()
        };

        graph
            .add_edge(NodeId::new(source), NodeId::new(target), cost)
            .map_err(|err| GraphError::malformed(line, err.to_string()))?;
    }

    if graph.edge_count() != declared_edges {
        return Err(GraphError::malformed(
            0,
            format!(
                "declared {declared_edges} edges, found {}",
                graph.edge_count()
            ),
        ));
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed = kind.directed,
        weighted = kind.weighted,
        "parsed graph"
    );
    Ok(graph)
}

fn parse_field<T: FromStr>(text: &str, line: usize, what: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| GraphError::malformed(line, format!("invalid {what} `{}`", text.trim())))
}

/// Line iterator that tracks one-based line numbers and skips blank lines.
struct NumberedLines<I> {
    inner: I,
    line: usize,
}

impl<I> NumberedLines<I>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    fn next_content(&mut self) -> Result<Option<(usize, String)>> {
        for next in self.inner.by_ref() {
            self.line += 1;
            let text = next.map_err(|err| GraphError::malformed(self.line, err.to_string()))?;
            if !text.trim().is_empty() {
                return Ok(Some((self.line, text)));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_weighted() {
        let g: Graph<i64> = parse_graph("4\n3\n0, 1, 5\n1,2,2\n\n2, 3, -1\n", GraphKind::directed())
            .unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edges()[2].cost, -1);
        assert_eq!(g.edges()[0].target, NodeId::new(1));
    }

    #[test]
    fn test_read_unweighted_from_reader() {
        let input = Cursor::new("3\n2\n0, 1\n1, 2\n");
        let g: Graph<i32> = read_graph(input, GraphKind::undirected().unweighted()).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert!(g.edges().iter().all(|e| e.cost == 1));
        assert_eq!(g.neighbours(NodeId::new(1)).len(), 2);
    }

    #[test]
    fn test_field_count_mismatch() {
        let err = parse_graph::<i32>("2\n1\n0, 1\n", GraphKind::directed()).unwrap_err();
        assert_eq!(err, GraphError::malformed(3, "expected 3 fields, found 2"));

        let err = parse_graph::<i32>("2\n1\n0, 1, 4\n", GraphKind::directed().unweighted())
            .unwrap_err();
        assert_eq!(err, GraphError::malformed(3, "expected 2 fields, found 3"));
    }

    #[test]
    fn test_declared_edge_count_mismatch() {
        let err = parse_graph::<i32>("2\n2\n0, 1, 4\n", GraphKind::directed()).unwrap_err();
        assert_eq!(err, GraphError::malformed(0, "declared 2 edges, found 1"));
    }

    #[test]
    fn test_unallocatable_node_count() {
        let err = parse_graph::<i64>("18446744073709551615\n0\n", GraphKind::directed())
            .unwrap_err();
        assert!(matches!(err, GraphError::MalformedGraph { line: 1, .. }));

        let err = parse_graph::<i64>("\n10000000000000000\n0\n", GraphKind::directed())
            .unwrap_err();
        assert!(matches!(err, GraphError::MalformedGraph { line: 2, .. }));
    }

    #[test]
    fn test_bad_numbers_and_ranges() {
        let err = parse_graph::<i32>("two\n0\n", GraphKind::directed()).unwrap_err();
        assert_eq!(err, GraphError::malformed(1, "invalid node count `two`"));

        let err = parse_graph::<i32>("2\n1\n0, 1, x\n", GraphKind::directed()).unwrap_err();
        assert_eq!(err, GraphError::malformed(3, "invalid cost `x`"));

        let err = parse_graph::<i32>("2\n1\n0, 7, 1\n", GraphKind::directed()).unwrap_err();
        assert!(matches!(err, GraphError::MalformedGraph { line: 3, .. }));

        let err = parse_graph::<f64>("2\n1\n0, 1, inf\n", GraphKind::directed()).unwrap_err();
        assert!(matches!(err, GraphError::MalformedGraph { line: 3, .. }));

        assert_eq!(
            parse_graph::<i32>("", GraphKind::directed()).unwrap_err(),
            GraphError::malformed(0, "missing node count")
        );
    }
}
