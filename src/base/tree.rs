pub mod forsum;

use crate::base;

pub struct Tree<'cs> {
    charset: &'cs base::Charset,
    root: Node,
}

#[derive(Default)]
pub struct Node {
    data: std::borrow::Cow<'static, str>,
    children: Vec<Self>,
}

impl Node {
    pub fn new(data: std::borrow::Cow<'static, str>) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }

    /// Appends a child and returns it.
    pub fn push(&mut self, data: std::borrow::Cow<'static, str>) -> &mut Self {
        self.children.push(Self::new(data));
        let i = self.children.len() - 1;
        &mut self.children[i]
    }
}

impl<'cs> Tree<'cs> {
    pub fn new(charset: &'cs base::Charset, root: Node) -> Self {
        Self { charset, root }
    }
}

impl std::fmt::Display for Tree<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_node(
            node: &Node,
            f: &mut std::fmt::Formatter,
            preprefix: &mut String,
            is_last_child_of_parent: bool,
            charset: &base::Charset,
        ) -> std::fmt::Result {
            let (prefix_tail, child_prefix_tail) = if is_last_child_of_parent {
                (charset.tree_corner, charset.tree_space)
            } else {
                (charset.tree_sideways_t, charset.tree_pipe_gap)
            };
            writeln!(f, "{}{}{}", preprefix, prefix_tail, node.data)?;
            preprefix.push_str(child_prefix_tail);
            for (i, child) in node.children.iter().enumerate() {
                write_node(child, f, preprefix, i >= node.children.len() - 1, charset)?;
            }
            preprefix.truncate(preprefix.len() - child_prefix_tail.len());
            Ok(())
        }

        let mut preprefix = String::new();
        for lv1 in self.root.children.iter() {
            writeln!(f, "{}", lv1.data)?;
            for (i, lv2) in lv1.children.iter().enumerate() {
                write_node(
                    lv2,
                    f,
                    &mut preprefix,
                    i >= lv1.children.len() - 1,
                    self.charset,
                )?;
            }
        }
        Ok(())
    }
}
