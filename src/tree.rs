/// In-memory description of the directories and files to be written. Built
/// immediately before materialization and discarded after; never persisted.
#[derive(Debug)]
pub enum TemplateNode {
    /// Ordered mapping from path segment to child node.
    Dir(Vec<(String, TemplateNode)>),
    /// Literal text content of a file.
    File(String),
}

impl TemplateNode {
    pub fn dir() -> Self {
        TemplateNode::Dir(Vec::new())
    }

    pub fn file(content: impl Into<String>) -> Self {
        TemplateNode::File(content.into())
    }

    /// Append a child directory under `name`.
    pub fn with_dir(mut self, name: impl Into<String>, child: TemplateNode) -> Self {
        if let TemplateNode::Dir(children) = &mut self {
            children.push((name.into(), child));
        }
        self
    }

    /// Append a file named `name` with the given literal content.
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        if let TemplateNode::Dir(children) = &mut self {
            children.push((name.into(), TemplateNode::file(content)));
        }
        self
    }
}

/// A single root directory node owning the whole description.
#[derive(Debug)]
pub struct TemplateTree {
    root: TemplateNode,
}

impl TemplateTree {
    /// Wrap a root directory node. A `File` root is not meaningful; it is
    /// normalized to an empty directory.
    pub fn new(root: TemplateNode) -> Self {
        let root = match root {
            dir @ TemplateNode::Dir(_) => dir,
            TemplateNode::File(_) => TemplateNode::dir(),
        };
        Self { root }
    }

    pub fn root(&self) -> &TemplateNode {
        &self.root
    }
}

/// Path segments must be non-empty and free of separators.
pub fn valid_segment(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\'])
}
