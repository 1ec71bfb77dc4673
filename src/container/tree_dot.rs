//! Graphviz DOT output for [`SearchTree`].
//!
//! Render with `dot -Tpdf < tree-view.dot > tree-view.pdf` (png, svg, ... work too).

use std::io::{self, Write};

use crate::container::search_tree::{Colour, SearchTree, TreeKind, TreeNode};

const DOT_HEADER: &str = "digraph tree {\nnode [shape = Mrecord, penwidth = 2];\n";
const DOT_FOOTER: &str = "}\n";

enum Step<'a> {
    Node(&'a TreeNode),
    Edge {
        parent: &'a TreeNode,
        child: &'a TreeNode,
        port: &'static str,
    },
}

/// Writes one record per node and one edge per parent/child link.
///
/// A node's record comes first, then its left subtree followed by the edge
/// to the left child, then the right subtree followed by the edge to the
/// right child. Nodes are coloured red only in a red-black tree.
pub fn write_dot<W: Write>(tree: &SearchTree, out: &mut W) -> io::Result<()> {
    out.write_all(DOT_HEADER.as_bytes())?;
    let show_red = tree.kind() == TreeKind::RedBlack;
    let mut stack: Vec<Step<'_>> = tree.root().map(Step::Node).into_iter().collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Node(node) => {
                let colour = if show_red && node.colour == Colour::Red {
                    "red"
                } else {
                    "black"
                };
                writeln!(
                    out,
                    "\"{key}\"[label=\"{{<f0>{key}:{freq}|{{<f1>|<f2>}}}}\"color={colour}];",
                    key = node.key,
                    freq = node.frequency,
                    colour = colour
                )?;
                // pushed in reverse so the left side is written first
                if let Some(right) = node.right.as_deref() {
                    stack.push(Step::Edge {
                        parent: node,
                        child: right,
                        port: "f2",
                    });
                    stack.push(Step::Node(right));
                }
                if let Some(left) = node.left.as_deref() {
                    stack.push(Step::Edge {
                        parent: node,
                        child: left,
                        port: "f1",
                    });
                    stack.push(Step::Node(left));
                }
            }
            Step::Edge {
                parent,
                child,
                port,
            } => {
                writeln!(out, "\"{}\":{} -> \"{}\":f0;", parent.key, port, child.key)?;
            }
        }
    }

    out.write_all(DOT_FOOTER.as_bytes())
}
