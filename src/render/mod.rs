//! Graph output: Graphviz DOT text and SVG
//!
//! DOT is generated directly; SVG delegates layout to the Graphviz `dot`
//! executable, fed over stdin.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::errors::Error;
use crate::graph::DepGraph;

/// Serialize the graph to Graphviz DOT text.
pub fn to_dot(graph: &DepGraph) -> String {
    let mut out = String::from("strict digraph kubegraph {\n");
    for node in graph.nodes() {
        out.push_str(&format!(
            "    \"{}\" [shape={}];\n",
            escape(&node.label),
            node.shape.as_dot()
        ));
    }
    out.push('\n');
    for edge in graph.edges() {
        out.push_str(&format!(
            "    \"{}\" -> \"{}\";\n",
            escape(&edge.from),
            escape(&edge.to)
        ));
    }
    out.push_str("}\n");
    out
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

pub fn write_dot(graph: &DepGraph, path: &Path) -> Result<(), Error> {
    std::fs::write(path, to_dot(graph))
        .map_err(|e| Error::Render(format!("writing {}: {e}", path.display())))
}

/// Render the graph to SVG by piping DOT through Graphviz.
pub fn write_svg(graph: &DepGraph, path: &Path) -> Result<(), Error> {
    let mut child = Command::new("dot")
        .arg("-Tsvg")
        .arg("-o")
        .arg(path)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| Error::Render(format!("running graphviz \"dot\": {e}")))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| Error::Render("graphviz \"dot\" stdin unavailable".to_string()))?;
    stdin
        .write_all(to_dot(graph).as_bytes())
        .map_err(|e| Error::Render(format!("feeding graphviz \"dot\": {e}")))?;
    drop(stdin);

    let status = child
        .wait()
        .map_err(|e| Error::Render(format!("waiting for graphviz \"dot\": {e}")))?;
    if !status.success() {
        return Err(Error::Render(format!(
            "graphviz \"dot\" exited with {status}"
        )));
    }
    Ok(())
}
