use crate::{Error, Graph};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit1, multispace0, space0, space1},
    combinator::{eof, map_res},
    multi::count,
    sequence::{pair, preceded, separated_pair, terminated},
    IResult,
};
use std::io::{self, Write};
use std::path::Path;

/// Largest vertex count accepted in an instance header. The graph keeps an
/// n×n adjacency matrix, so this bounds memory at about 16 MiB per graph.
pub const MAX_VERTICES: usize = 4096;

/// Parse line ending (handles both \n and \r\n)
fn line_ending(input: &str) -> IResult<&str, &str> {
    alt((tag("\n"), tag("\r\n")))(input)
}

/// Parse a single unsigned integer
fn parse_usize(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

/// Parse a line holding exactly two space-separated integers; the line
/// ending may only be omitted at end of input
fn parse_pair_line(input: &str) -> IResult<&str, (usize, usize)> {
    terminated(
        separated_pair(preceded(space0, parse_usize), space1, parse_usize),
        pair(space0, alt((line_ending, eof))),
    )(input)
}

/// An edge list as read, before range checks
struct RawGraph {
    n: usize,
    edges: Vec<(usize, usize)>,
}

/// Parse a single graph: `n m` header followed by `m` edge lines
fn parse_graph(input: &str) -> IResult<&str, RawGraph> {
    let (input, (n, m)) = parse_pair_line(input)?;
    let (input, edges) = count(parse_pair_line, m)(input)?;
    Ok((input, RawGraph { n, edges }))
}

/// Parse host and pattern, allowing blank lines between and after them
fn parse_two_raw_graphs(input: &str) -> IResult<&str, (RawGraph, RawGraph)> {
    let (input, _) = multispace0(input)?;
    let (input, host) = parse_graph(input)?;
    let (input, _) = multispace0(input)?;
    let (input, pattern) = parse_graph(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, (host, pattern)))
}

fn build_graph(raw: RawGraph) -> Result<Graph, Error> {
    let RawGraph { n, edges } = raw;
    if n > MAX_VERTICES {
        return Err(Error::TooManyVertices { n, max: MAX_VERTICES });
    }
    if let Some(&(u, v)) = edges.iter().find(|&&(u, v)| u >= n || v >= n) {
        return Err(Error::VertexOutOfRange { u, v, n });
    }
    Ok(Graph::from_edges(n, &edges))
}

/// Parse an instance: the host graph, then the pattern graph.
///
/// Each graph is a `n m` line followed by `m` lines `u v`. Self-loops and
/// repeated edges are accepted and ignored; endpoints outside `0..n` are not,
/// and neither is `n` above [`MAX_VERTICES`].
pub fn parse_two_graphs(input: &str) -> Result<(Graph, Graph), Error> {
    let (rest, (host, pattern)) =
        parse_two_raw_graphs(input).map_err(|e| Error::Parse(e.to_string()))?;
    if !rest.is_empty() {
        return Err(Error::TrailingInput(rest.chars().take(32).collect()));
    }
    Ok((build_graph(host)?, build_graph(pattern)?))
}

/// Parse input file containing the host and pattern descriptions
pub fn parse_input_file(path: &Path) -> Result<(Graph, Graph), Error> {
    let content = std::fs::read_to_string(path)?;
    parse_two_graphs(&content)
}

/// Write a graph in the format [`parse_two_graphs`] reads
pub fn write_graph<W: Write>(writer: &mut W, graph: &Graph) -> io::Result<()> {
    writeln!(writer, "{} {}", graph.num_vertices(), graph.num_edges())?;
    for (u, v) in graph.edges() {
        writeln!(writer, "{} {}", u, v)?;
    }
    Ok(())
}

/// Write a host/pattern instance, separated by a blank line
pub fn write_instance<W: Write>(writer: &mut W, host: &Graph, pattern: &Graph) -> io::Result<()> {
    write_graph(writer, host)?;
    writeln!(writer)?;
    write_graph(writer, pattern)
}
