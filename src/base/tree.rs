pub mod fordrill;

use crate::base;

/// Text tree. Top-level nodes are written flush left; their descendants are
/// indented with the charset's tree glyphs.
pub struct Tree<'cs> {
    charset: &'cs base::Charset,
    root: Node,
}

#[derive(Default)]
pub struct Node {
    data: String,
    children: Vec<Self>,
}

impl Node {
    pub fn new<S>(data: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            data: data.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child and returns it.
    pub fn push(&mut self, child: Self) -> &mut Self {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }
}

impl<'cs> Tree<'cs> {
    pub fn new(charset: &'cs base::Charset, root: Node) -> Self {
        Self { charset, root }
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

impl std::fmt::Display for Tree<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_children(
            f: &mut std::fmt::Formatter,
            children: &[Node],
            indent: &mut String,
            charset: &base::Charset,
        ) -> std::fmt::Result {
            for (i, child) in children.iter().enumerate() {
                let is_last = i + 1 == children.len();
                let (head, tail) = if is_last {
                    (charset.tree_corner, charset.tree_space)
                } else {
                    (charset.tree_sideways_t, charset.tree_pipe_gap)
                };
                writeln!(f, "{}{}{}", indent, head, child.data)?;
                indent.push_str(tail);
                write_children(f, &child.children, indent, charset)?;
                indent.truncate(indent.len() - tail.len());
            }
            Ok(())
        }

        let mut indent = String::new();
        for top in &self.root.children {
            writeln!(f, "{}", top.data)?;
            write_children(f, &top.children, &mut indent, self.charset)?;
        }
        Ok(())
    }
}
