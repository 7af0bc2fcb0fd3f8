use thiserror::Error;

/// Errors raised while reading instances or rendering results.
///
/// The graph and the search never fail; these only come from the I/O side.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Unexpected input after the pattern graph: {0:?}")]
    TrailingInput(String),
    #[error("Edge ({u}, {v}) references a vertex outside 0..{n}")]
    VertexOutOfRange { u: usize, v: usize, n: usize },
    #[error("Graph declares {n} vertices, more than the supported {max}")]
    TooManyVertices { n: usize, max: usize },
    #[error("Mapping does not fit: expected {expected} host vertices below {host_vertices}, got {found:?}")]
    MappingMismatch {
        expected: usize,
        host_vertices: usize,
        found: Vec<usize>,
    },
    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),
}
