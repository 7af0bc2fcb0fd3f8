//! SVG rendering of a single graph and of a host/pattern comparison.
//!
//! Vertices are laid out on a circle in index order. In the comparison the
//! host sits on the left with the matched subgraph drawn in red, and the
//! pattern sits on the right.

use crate::{Error, Graph};
use itertools::Itertools;
use std::f64::consts::PI;
use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

const VERTEX_RADIUS: f64 = 15.0;
const HIGHLIGHT: &str = "red";
const PLAIN_FILL: &str = "lightblue";

#[derive(Debug, Clone, Copy)]
struct Point {
    x: f64,
    y: f64,
}

/// Circle placement for a set of vertices
#[derive(Debug, Clone, Copy)]
struct Layout {
    center: Point,
    radius: f64,
    total: usize,
}

impl Layout {
    fn position(&self, index: usize) -> Point {
        let angle = 2.0 * PI * index as f64 / self.total.max(1) as f64;
        Point {
            x: self.center.x + self.radius * angle.cos(),
            y: self.center.y + self.radius * angle.sin(),
        }
    }
}

fn header(out: &mut String, width: u32, height: u32) -> std::fmt::Result {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
        width, height
    )
}

fn line(out: &mut String, a: Point, b: Point, stroke: &str, width: u32) -> std::fmt::Result {
    writeln!(
        out,
        r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
        a.x, a.y, b.x, b.y, stroke, width
    )
}

fn vertex(out: &mut String, p: Point, label: usize, fill: &str) -> std::fmt::Result {
    writeln!(
        out,
        r#"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" stroke="black" stroke-width="2"/>"#,
        p.x, p.y, VERTEX_RADIUS, fill
    )?;
    writeln!(
        out,
        r#"  <text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="12" font-weight="bold">{}</text>"#,
        p.x,
        p.y + 5.0,
        label
    )
}

fn title(out: &mut String, x: f64, caption: &str, graph: &Graph) -> std::fmt::Result {
    writeln!(
        out,
        r#"  <text x="{:.2}" y="20" text-anchor="middle" font-size="16" font-weight="bold">{}</text>"#,
        x, caption
    )?;
    writeln!(
        out,
        r#"  <text x="{:.2}" y="40" text-anchor="middle" font-size="14">{} vertices, {} edges</text>"#,
        x,
        graph.num_vertices(),
        graph.num_edges()
    )
}

/// Render `graph` alone.
pub fn render_graph(graph: &Graph) -> Result<String, Error> {
    let (width, height) = (600, 300);
    let layout = Layout {
        center: Point {
            x: f64::from(width) * 0.25,
            y: f64::from(height) * 0.5,
        },
        radius: f64::from(width.min(height)) * 0.3,
        total: graph.num_vertices(),
    };

    let mut out = String::new();
    header(&mut out, width, height)?;
    for (i, j) in graph.edges() {
        line(&mut out, layout.position(i), layout.position(j), "black", 3)?;
    }
    for v in 0..graph.num_vertices() {
        vertex(&mut out, layout.position(v), v, PLAIN_FILL)?;
    }
    title(&mut out, layout.center.x, "Host graph", graph)?;
    writeln!(out, "</svg>")?;
    Ok(out)
}

/// Render `host` next to `pattern`, highlighting the image of `mapping` in the host.
pub fn render_comparison(host: &Graph, pattern: &Graph, mapping: &[usize]) -> Result<String, Error> {
    let n_h = host.num_vertices();
    let n_p = pattern.num_vertices();
    if mapping.len() != n_p || mapping.iter().any(|&v| v >= n_h) || !mapping.iter().all_unique() {
        return Err(Error::MappingMismatch {
            expected: n_p,
            host_vertices: n_h,
            found: mapping.to_vec(),
        });
    }

    let (width, height) = (800, 400);
    let radius = f64::from((width / 2).min(height)) * 0.3;
    let center_y = f64::from(height) * 0.5;
    let left = Layout {
        center: Point {
            x: f64::from(width) * 0.25,
            y: center_y,
        },
        radius,
        total: n_h,
    };
    let right = Layout {
        center: Point {
            x: f64::from(width) * 0.75,
            y: center_y,
        },
        radius,
        total: n_p,
    };

    let mut out = String::new();
    header(&mut out, width, height)?;

    for (i, j) in host.edges() {
        line(&mut out, left.position(i), left.position(j), "black", 2)?;
    }
    for (i, j) in pattern.edges() {
        line(
            &mut out,
            left.position(mapping[i]),
            left.position(mapping[j]),
            HIGHLIGHT,
            4,
        )?;
    }
    let mut matched = vec![false; n_h];
    for &v in mapping {
        matched[v] = true;
    }
    for (v, &is_matched) in matched.iter().enumerate() {
        let fill = if is_matched { HIGHLIGHT } else { PLAIN_FILL };
        vertex(&mut out, left.position(v), v, fill)?;
    }

    for (i, j) in pattern.edges() {
        line(&mut out, right.position(i), right.position(j), HIGHLIGHT, 4)?;
    }
    for v in 0..n_p {
        vertex(&mut out, right.position(v), v, HIGHLIGHT)?;
    }

    title(&mut out, left.center.x, "Host graph", host)?;
    title(&mut out, right.center.x, "Matched pattern", pattern)?;

    let pairs: Vec<String> = mapping
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{}→{}", i, v))
        .collect();
    writeln!(
        out,
        r#"  <text x="{}" y="{}" text-anchor="middle" font-size="14">Mapping: {}</text>"#,
        width / 2,
        height - 20,
        pairs.join(", ")
    )?;
    writeln!(out, "</svg>")?;
    Ok(out)
}

pub fn save_svg(path: &Path, contents: &str) -> Result<(), Error> {
    std::fs::write(path, contents)?;
    debug!(path = %path.display(), bytes = contents.len(), "svg written");
    Ok(())
}
