use std::fmt::{Display, Write};

use crate::{node::Node, IntervalTree};

impl<T, C> IntervalTree<T, C>
where
    T: Display,
{
    /// Render the tree structure as a graphviz `dot` digraph.
    ///
    /// Each node is labelled with its interval, the number of equal intervals
    /// it holds, its subtree max and its AVL height.
    pub fn to_dot(&self) -> String {
        let mut buf = String::new();

        print_dot(self.root(), &mut buf).expect("writes to a String are infallible");
        buf
    }
}

fn print_dot<T, W>(root: Option<&Node<T>>, buf: &mut W) -> std::fmt::Result
where
    T: Display,
    W: Write,
{
    writeln!(buf, "digraph {{")?;
    writeln!(buf, r#"bgcolor = "transparent";"#)?;
    writeln!(
        buf,
        r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
    )?;
    if let Some(n) = root {
        recurse(n, buf)?;
    }
    writeln!(buf, "}}")
}

fn recurse<T, W>(n: &Node<T>, buf: &mut W) -> std::fmt::Result
where
    T: Display,
    W: Write,
{
    let max = match n.subtree_max() {
        std::ops::Bound::Included(v) => format!("{v}]"),
        std::ops::Bound::Excluded(v) => format!("{v})"),
        std::ops::Bound::Unbounded => "+∞".to_string(),
    };

    writeln!(
        buf,
        r#""{}" [label="{} | x{} | {{ max={} | h={} }}"];"#,
        n.interval(),
        n.interval(),
        n.len(),
        max,
        n.height(),
    )?;

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(
                    buf,
                    "\"{}\" -> \"{}\" [color = \"orange1\";];",
                    n.interval(),
                    v.interval()
                )?;
                recurse(v, buf)?;
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.interval())?;
                writeln!(
                    buf,
                    "\"{}\" -> \"null_{}\" [style=invis];",
                    n.interval(),
                    n.interval()
                )?;
            }
        };
    }

    Ok(())
}
