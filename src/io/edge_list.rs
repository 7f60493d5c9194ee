//! # EdgeList
//!
//! The EdgeList-Format consists of a header `n m`, followed by `m` non-comment-lines
//! `u v [w]` representing the edge `Edge(u - 1, v - 1)` with optional weight `w ∈ {0, 1}`.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Result, Write},
    path::Path,
};

use tracing::debug;

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    directed: bool,
    weighted: bool,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    /// Undirected, unweighted and `c` as comment identifier
    fn default() -> Self {
        Self {
            directed: false,
            weighted: false,
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the read graph is directed
    pub fn directed(mut self, directed: bool) -> EdgeListReader {
        self.directed = directed;
        self
    }

    /// Whether every edge line carries a third column with a 0/1 weight
    pub fn weighted(mut self, weighted: bool) -> EdgeListReader {
        self.weighted = weighted;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphEdgeEditing> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut edges_reader = EdgeListEdgesReader::try_new(reader, self)?;
        let n = edges_reader.number_of_nodes();
        let m = edges_reader.number_of_edges();

        let mut graph = G::new(n, self.directed);
        for _ in 0..m {
            let (u, v, w) = edges_reader.parse_edge_line()?;
            graph
                .try_add_weighted_edge(u, v, w)
                .map_err(|err| io_error!(ErrorKind::InvalidData, err))?;
        }

        debug!(nodes = n, edges = m, directed = self.directed, "edge list read");
        Ok(graph)
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings (undirected, unweighted)
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphEdgeEditing,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Line-wise parser behind [`EdgeListReader`]
struct EdgeListEdgesReader<'a, R> {
    lines: Lines<R>,
    number_of_nodes: NumNodes,
    number_of_edges: NumEdges,
    settings: &'a EdgeListReader,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Parses the first non-comment-line as the header
    fn try_new(reader: R, settings: &'a EdgeListReader) -> Result<Self> {
        let mut edges_reader = Self {
            lines: reader.lines(),
            number_of_nodes: 0,
            number_of_edges: 0,
            settings,
        };

        let header = edges_reader
            .next_non_comment_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        let mut parts = header.split_whitespace();
        edges_reader.number_of_nodes = parse_next_value!(parts, "Number of nodes");
        edges_reader.number_of_edges = parse_next_value!(parts, "Number of edges");

        Ok(edges_reader)
    }

    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.trim().is_empty() => continue,
                Some(Ok(line)) if line.starts_with(&self.settings.comment_identifier) => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    /// Parses the next edge and converts it to 0-based endpoints
    fn parse_edge_line(&mut self) -> Result<(Node, Node, EdgeWeight)> {
        let line = self.next_non_comment_line()?.ok_or(io_error!(
            ErrorKind::UnexpectedEof,
            format!("Expected {} edges", self.number_of_edges)
        ))?;
        let mut parts = line.split_whitespace();

        let from: Node = parse_next_value!(parts, "Source node");
        let dest: Node = parse_next_value!(parts, "Target node");

        let weight = if self.settings.weighted {
            let w: u8 = parse_next_value!(parts, "Edge weight");
            match EdgeWeight::try_from(w) {
                Ok(weight) => weight,
                Err(w) => {
                    return Err(io_error!(
                        ErrorKind::InvalidData,
                        format!("Edge weight {w} is neither 0 nor 1")
                    ));
                }
            }
        } else {
            EdgeWeight::One
        };

        for u in [from, dest] {
            raise_error_unless!(
                (1..=self.number_of_nodes).contains(&u),
                ErrorKind::InvalidData,
                format!("Node {u} is not in 1..={}", self.number_of_nodes)
            );
        }

        Ok((from - 1, dest - 1, weight))
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    weighted: bool,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the weight of every edge is written as third column
    pub fn weighted(mut self, weighted: bool) -> EdgeListWriter {
        self.weighted = weighted;
        self
    }
}

impl<G: AdjacencyList> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "{} {}",
            graph.number_of_nodes(),
            graph.number_of_edges()
        )?;

        for (id, Edge(u, v)) in graph.edges().enumerate() {
            if self.weighted {
                let w = graph.weight_of(id as EdgeId).cost();
                writeln!(writer, "{} {} {}", u + 1, v + 1, w)?;
            } else {
                writeln!(writer, "{} {}", u + 1, v + 1)?;
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn read_undirected() {
        let input = "c example\n4 3\n1 2\nc in between\n2 3\n\n4 4\n";
        let graph = AdjArrayGraph::try_read_edge_list(input.as_bytes()).unwrap();

        assert!(graph.is_undirected());
        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(
            graph.edges().collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(3, 3)]
        );
    }

    #[test]
    fn read_directed_weighted() {
        let input = "3 2\n1 2 0\n3 1 1\n";
        let graph: AdjArrayGraph = EdgeListReader::new()
            .directed(true)
            .weighted(true)
            .try_read_graph(input.as_bytes())
            .unwrap();

        assert!(graph.is_directed());
        assert!(graph.has_edge(0, 1) && !graph.has_edge(1, 0));
        assert_eq!(graph.weight_of(0), EdgeWeight::Zero);
        assert_eq!(graph.weight_of(1), EdgeWeight::One);
    }

    #[test]
    fn write_then_read() {
        let graph = AdjArrayGraph::from_weighted_edges(
            4,
            true,
            [(0, 1, EdgeWeight::One), (3, 2, EdgeWeight::Zero)],
        );

        let mut buffer = Vec::new();
        EdgeListWriter::new()
            .weighted(true)
            .try_write_graph(&graph, &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "4 2\n1 2 1\n4 3 0\n");

        let read: AdjArrayGraph = EdgeListReader::new()
            .directed(true)
            .weighted(true)
            .try_read_graph(buffer.as_slice())
            .unwrap();
        assert_eq!(read.edges().collect_vec(), graph.edges().collect_vec());
        assert_eq!(read.weight_of(1), EdgeWeight::Zero);
    }

    #[test]
    fn invalid_input() {
        let kind = |input: &str| {
            AdjArrayGraph::try_read_edge_list(input.as_bytes())
                .unwrap_err()
                .kind()
        };

        assert_eq!(kind(""), ErrorKind::NotFound);
        assert_eq!(kind("3\n"), ErrorKind::InvalidData);
        assert_eq!(kind("3 1\n1 4\n"), ErrorKind::InvalidData);
        assert_eq!(kind("3 1\n0 1\n"), ErrorKind::InvalidData);
        assert_eq!(kind("3 1\n1 x\n"), ErrorKind::InvalidData);
        assert_eq!(kind("3 2\n1 2\n"), ErrorKind::UnexpectedEof);

        let weighted: Result<AdjArrayGraph> = EdgeListReader::new()
            .weighted(true)
            .try_read_graph("2 1\n1 2 2\n".as_bytes());
        assert_eq!(weighted.unwrap_err().kind(), ErrorKind::InvalidData);
    }
}
