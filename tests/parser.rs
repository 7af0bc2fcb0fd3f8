use induced_subgraph_search::parser::{
    parse_input_file, parse_two_graphs, write_instance, MAX_VERTICES,
};
use induced_subgraph_search::{Error, Graph};
use std::io::Write;

const PATH_AND_EDGE: &str = "4 3\n0 1\n1 2\n2 3\n\n2 1\n0 1\n";

#[test]
fn test_parse_simple_instance() {
    let (host, pattern) = parse_two_graphs(PATH_AND_EDGE).unwrap();
    assert_eq!(host, Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]));
    assert_eq!(pattern, Graph::from_edges(2, &[(0, 1)]));
}

#[test]
fn test_parse_tolerates_crlf_and_padding() {
    let input = "\r\n 3 2 \r\n0 1\r\n 1  2\r\n\r\n\r\n1 0\r\n\r\n";
    let (host, pattern) = parse_two_graphs(input).unwrap();
    assert_eq!(host.num_edges(), 2);
    assert!(host.has_edge(2, 1));
    assert_eq!(pattern.num_vertices(), 1);
}

#[test]
fn test_parse_without_trailing_newline() {
    let (host, pattern) = parse_two_graphs("3 1\n0 2\n2 0").unwrap();
    assert!(host.has_edge(0, 2));
    assert_eq!(pattern, Graph::new(2));
}

#[test]
fn test_parse_ignores_self_loops_and_repeats() {
    let (host, _) = parse_two_graphs("3 3\n0 1\n1 0\n2 2\n1 0\n").unwrap();
    assert_eq!(host.num_edges(), 1);
    assert_eq!(host.degree(2), 0);
}

#[test]
fn test_parse_rejects_out_of_range_vertex() {
    let err = parse_two_graphs("3 1\n0 3\n1 0\n").unwrap_err();
    assert!(matches!(err, Error::VertexOutOfRange { u: 0, v: 3, n: 3 }));
}

#[test]
fn test_parse_rejects_oversized_header() {
    let err = parse_two_graphs("18446744073709551615 0\n\n1 0\n").unwrap_err();
    assert!(matches!(err, Error::TooManyVertices { n: usize::MAX, max: MAX_VERTICES }));

    let pattern_too_big = format!("2 0\n{} 0\n", MAX_VERTICES + 1);
    assert!(matches!(
        parse_two_graphs(&pattern_too_big),
        Err(Error::TooManyVertices { .. })
    ));

    let at_limit = format!("{} 0\n1 0\n", MAX_VERTICES);
    let (host, _) = parse_two_graphs(&at_limit).unwrap();
    assert_eq!(host.num_vertices(), MAX_VERTICES);
}

#[test]
fn test_parse_requires_one_pair_per_line() {
    let err = parse_two_graphs("4 3 0 1\n1 2\n2 3\n\n2 1\n0 1\n").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    let err = parse_two_graphs("3 1\n0 1 2\n1 0\n").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_parse_rejects_missing_edges() {
    let err = parse_two_graphs("3 2\n0 1\n").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_parse_rejects_trailing_input() {
    let err = parse_two_graphs("2 0\n1 0\nextra\n").unwrap_err();
    assert!(matches!(err, Error::TrailingInput(ref rest) if rest.starts_with("extra")));
}

#[test]
fn test_written_instance_reads_back() {
    let host = Graph::from_edges(5, &[(4, 0), (1, 3), (2, 3)]);
    let pattern = Graph::from_edges(3, &[(0, 2)]);
    let mut buf = Vec::new();
    write_instance(&mut buf, &host, &pattern).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "5 3\n0 4\n1 3\n2 3\n\n3 1\n0 2\n");
    assert_eq!(parse_two_graphs(&text).unwrap(), (host, pattern));
}

#[test]
fn test_parse_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PATH_AND_EDGE.as_bytes()).unwrap();
    let (host, pattern) = parse_input_file(file.path()).unwrap();
    assert_eq!(host.num_vertices(), 4);
    assert_eq!(pattern.num_edges(), 1);
}

#[test]
fn test_parse_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_input_file(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
