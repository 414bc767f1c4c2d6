use anyhow::Result;

use crate::ident;
use crate::templates;
use crate::tree::{TemplateNode, TemplateTree};

/// Build the fixed Python module layout for `module_name`. The tree is the
/// contents of the module root directory; the caller picks where that root
/// lands on disk.
pub fn module_tree(module_name: &str, author: &str, year: i32) -> Result<TemplateTree> {
    let class_name = ident::pascal_case(module_name);

    let package = TemplateNode::dir()
        .with_file("__init__.py", render_package_init(module_name))
        .with_file("main.py", render_main(&class_name));

    let src = TemplateNode::dir()
        .with_dir(module_name, package)
        .with_file("__init__.py", "");

    let tests = TemplateNode::dir()
        .with_file("__init__.py", "")
        .with_file(
            format!("test_{module_name}.py"),
            render_test(module_name, &class_name),
        );

    let docs = TemplateNode::dir()
        .with_file("index.rst", render_docs_index(module_name))
        .with_file("conf.py", render_docs_conf(module_name, author, year));

    let root = TemplateNode::dir()
        .with_dir("src", src)
        .with_dir("tests", tests)
        .with_dir("docs", docs)
        .with_file("README.md", render_readme(module_name, &class_name))
        .with_file("pyproject.toml", render_pyproject(module_name))
        .with_file("requirements.txt", templates::get_string("python/requirements.txt")?)
        .with_file(".gitignore", templates::get_string("python/gitignore")?)
        .with_file("LICENSE", render_license(author, year)?);

    Ok(TemplateTree::new(root))
}

fn render_package_init(module_name: &str) -> String {
    format!("# __init__.py for {module_name}\n\n__version__ = '0.1.0'\n")
}

fn render_main(class_name: &str) -> String {
    format!(
        "# main.py

class {class_name}:
    def __init__(self):
        pass

    def example_method(self):
        return 'Hello from {class_name}!'

if __name__ == '__main__':
    obj = {class_name}()
    print(obj.example_method())
"
    )
}

fn render_test(module_name: &str, class_name: &str) -> String {
    format!(
        "# test_{module_name}.py

import unittest
from src.{module_name}.main import {class_name}

class Test{class_name}(unittest.TestCase):
    def setUp(self):
        self.obj = {class_name}()

    def test_example_method(self):
        self.assertEqual(self.obj.example_method(), 'Hello from {class_name}!')

if __name__ == '__main__':
    unittest.main()
"
    )
}

fn render_docs_index(module_name: &str) -> String {
    format!(
        "{module_name} Documentation
====================

Welcome to the {module_name} documentation.
"
    )
}

fn render_docs_conf(module_name: &str, author: &str, year: i32) -> String {
    format!(
        "# conf.py

project = '{module_name}'
copyright = '{year}, {author}'
author = '{author}'
release = '0.1.0'

extensions = ['sphinx.ext.autodoc', 'sphinx.ext.napoleon']
templates_path = ['_templates']
exclude_patterns = ['_build', 'Thumbs.db', '.DS_Store']
html_theme = 'alabaster'
html_static_path = ['_static']
"
    )
}

fn render_readme(module_name: &str, class_name: &str) -> String {
    format!(
        "# {module_name}

A Python module for [describe your module here].

## Installation

```bash
pip install {module_name}
```

## Usage

```python
from {module_name} import {class_name}

obj = {class_name}()
print(obj.example_method())
```

## Development

- Clone the repository
- Install dependencies: `pip install -r requirements.txt`
- Run tests: `python -m unittest discover tests`
"
    )
}

fn render_pyproject(module_name: &str) -> String {
    format!(
        "[project]
name = \"{module_name}\"
version = \"0.1.0\"
description = \"A Python module for [describe your module here]\"
readme = \"README.md\"
requires-python = \">=3.8\"
dependencies = []

[project.optional-dependencies]
test = [\"pytest\", \"pytest-cov\"]
dev = [\"black\", \"isort\", \"flake8\"]

[build-system]
requires = [\"setuptools>=61.0\"]
build-backend = \"setuptools.build_meta\"
"
    )
}

fn render_license(author: &str, year: i32) -> Result<String> {
    let template = templates::get_string("python/license.tmpl")?;
    Ok(template
        .replace("{{year}}", &year.to_string())
        .replace("{{author}}", author))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materialize::materialize;
    use crate::tree::TemplateNode;
    use camino::Utf8PathBuf;
    use std::fs;

    #[test]
    fn root_has_exactly_the_fixed_entries() {
        let tree = module_tree("widget_kit", "Your Name", 2025).unwrap();
        let TemplateNode::Dir(children) = tree.root() else {
            panic!("expected a directory root");
        };
        let names: Vec<&str> = children.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            [
                "src",
                "tests",
                "docs",
                "README.md",
                "pyproject.toml",
                "requirements.txt",
                ".gitignore",
                "LICENSE"
            ]
        );
    }

    #[test]
    fn widget_kit_end_to_end() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = Utf8PathBuf::from_path_buf(tmp.path().join("widget_kit")).unwrap();

        let tree = module_tree("widget_kit", "Your Name", 2025).unwrap();
        let errors = materialize(&tree, &dest).unwrap();
        assert!(errors.is_empty());

        let main_py = fs::read_to_string(dest.join("src/widget_kit/main.py")).unwrap();
        assert!(main_py.contains("class WidgetKit:"));
        assert!(main_py.contains("return 'Hello from WidgetKit!'"));

        let test_py = fs::read_to_string(dest.join("tests/test_widget_kit.py")).unwrap();
        assert!(test_py.contains("from src.widget_kit.main import WidgetKit"));
        assert!(test_py.contains("'Hello from WidgetKit!'"));
    }

    #[test]
    fn license_is_parameterized() {
        let tree = module_tree("widget_kit", "Ada Lovelace", 2026).unwrap();
        let TemplateNode::Dir(children) = tree.root() else {
            panic!("expected a directory root");
        };
        let license = children
            .iter()
            .find_map(|(name, node)| match (name.as_str(), node) {
                ("LICENSE", TemplateNode::File(content)) => Some(content.clone()),
                _ => None,
            })
            .expect("LICENSE entry");
        assert!(license.contains("Copyright (c) 2026 Ada Lovelace"));
    }
}
