// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Writes [`Graph`]s in the Graphviz DOT language.

use anyhow::Result;
use std::io::Write;

use crate::{Graph, NodeKind};

/// Line justification of a multi-line DOT label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Justify {
    Left,
    Right,
    #[default]
    Center,
}

const OUTSIDE_FILL: &str = "aliceblue";
const UNRESOLVED_FILL: &str = "red";

/// Escapes a string for use inside a double-quoted DOT ID.
pub fn escape_dot_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escapes a string for use as a DOT label.
///
/// Newlines become `\l` or `\r` line breaks for left and right
/// justification. Centered labels keep their newlines as is.
pub fn escape_dot_label(s: &str, justify: Justify) -> String {
    let escaped = escape_dot_string(s);
    match justify {
        Justify::Left => escaped.replace('\n', "\\l"),
        Justify::Right => escaped.replace('\n', "\\r"),
        Justify::Center => escaped,
    }
}

fn quoted(name: &str) -> String {
    format!("\"{}\"", escape_dot_string(name))
}

fn write_node_group<W: Write>(w: &mut W, graph: &Graph, kind: NodeKind, fill: &str) -> Result<()> {
    let mut names = graph.nodes_of(kind).peekable();
    if names.peek().is_none() {
        return Ok(());
    }
    writeln!(w, "{{ node [fillcolor={fill}]")?;
    for name in names {
        writeln!(w, "{}", quoted(name))?;
    }
    writeln!(w, "}}")?;
    Ok(())
}

/// Renders `graph` as a DOT digraph.
///
/// Unresolved names are filled red and outside packages light blue. If
/// `warning` is given, it is shown as the left-justified graph label.
pub fn render_dot<W: Write>(mut w: W, graph: &Graph, warning: Option<&str>) -> Result<()> {
    writeln!(w, "digraph {{")?;
    writeln!(w, "node [style=filled]")?;
    if let Some(warning) = warning {
        writeln!(w, "label=\"{}\"", escape_dot_label(warning, Justify::Left))?;
    }
    write_node_group(&mut w, graph, NodeKind::Unresolved, UNRESOLVED_FILL)?;
    write_node_group(&mut w, graph, NodeKind::Outside, OUTSIDE_FILL)?;
    for name in graph.nodes_of(NodeKind::Normal) {
        writeln!(w, "{}", quoted(name))?;
    }
    for edge in &graph.edges {
        match &edge.label {
            Some(label) => writeln!(
                w,
                "{} -> {} [label=\"{}\"]",
                quoted(&edge.from),
                quoted(&edge.to),
                escape_dot_label(label, Justify::Center)
            )?,
            None => writeln!(w, "{} -> {}", quoted(&edge.from), quoted(&edge.to))?,
        }
    }
    writeln!(w, "}}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Edge;
    use pretty_assertions::assert_eq;

    fn render(graph: &Graph, warning: Option<&str>) -> Result<String> {
        let mut out = Vec::new();
        render_dot(&mut out, graph, warning)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_escape_dot_string() {
        assert_eq!(escape_dot_string("plain"), "plain");
        assert_eq!(escape_dot_string(r#"a"b"#), r#"a\"b"#);
        assert_eq!(escape_dot_string(r"a\b"), r"a\\b");
        assert_eq!(escape_dot_string(r#"\""#), r#"\\\""#);
    }

    #[test]
    fn test_escape_dot_label() {
        assert_eq!(escape_dot_label("a\nb\n", Justify::Left), r"a\lb\l");
        assert_eq!(escape_dot_label("a\nb", Justify::Right), r"a\rb");
        assert_eq!(escape_dot_label("a\nb", Justify::Center), "a\nb");
        assert_eq!(escape_dot_label("\"q\"\n", Justify::Left), r#"\"q\"\l"#);
    }

    #[test]
    fn test_render_dot() -> Result<()> {
        let mut graph = Graph::default();
        graph.add_node("B", NodeKind::Normal);
        graph.add_node("A", NodeKind::Outside);
        graph.add_node("C", NodeKind::Outside);
        graph.add_node("ghost", NodeKind::Unresolved);
        graph.edges = vec![
            Edge::new("B", "A", Some("lib:liba")),
            Edge::new("C", "B", None),
        ];
        assert_eq!(
            render(&graph, None)?,
            r#"digraph {
node [style=filled]
{ node [fillcolor=red]
"ghost"
}
{ node [fillcolor=aliceblue]
"A"
"C"
}
"B"
"B" -> "A" [label="lib:liba"]
"C" -> "B"
}
"#
        );
        Ok(())
    }

    #[test]
    fn test_render_dot_with_warning() -> Result<()> {
        let mut graph = Graph::default();
        graph.add_node("say \"hi\"", NodeKind::Normal);
        assert_eq!(
            render(&graph, Some("careful\nnow\n"))?,
            r#"digraph {
node [style=filled]
label="careful\lnow\l"
"say \"hi\""
}
"#
        );
        Ok(())
    }

    #[test]
    fn test_render_empty_graph() -> Result<()> {
        assert_eq!(render(&Graph::default(), None)?, "digraph {\nnode [style=filled]\n}\n");
        Ok(())
    }
}
