use std::fmt;
use std::fs;
use std::io;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

use crate::tree::{TemplateNode, TemplateTree, valid_segment};

/// A file that could not be written. Recorded and reported; never aborts the
/// rest of the tree.
#[derive(Debug)]
pub struct FileError {
    pub path: Utf8PathBuf,
    pub cause: io::Error,
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to write {}: {}", self.path, self.cause)
    }
}

/// Write `tree` under `dest`, creating `dest` itself if absent.
///
/// Directories are created recursively and idempotently; existing ones are
/// not an error. Files are opened in truncate mode, so a second run yields
/// identical contents. A failed file write is recorded and remaining
/// siblings are still attempted; a failed directory creation aborts the
/// whole operation, since nothing below it can be materialized.
pub fn materialize(tree: &TemplateTree, dest: &Utf8Path) -> Result<Vec<FileError>> {
    fs::create_dir_all(dest).with_context(|| format!("creating directory {dest}"))?;

    let mut errors = Vec::new();
    materialize_dir(tree.root(), dest, &mut errors)?;
    Ok(errors)
}

fn materialize_dir(node: &TemplateNode, dest: &Utf8Path, errors: &mut Vec<FileError>) -> Result<()> {
    let TemplateNode::Dir(children) = node else {
        return Ok(());
    };

    for (name, child) in children {
        let path = dest.join(name.as_str());
        match child {
            TemplateNode::Dir(_) => {
                if !valid_segment(name) {
                    anyhow::bail!("invalid directory name `{name}` under {dest}");
                }
                fs::create_dir_all(&path).with_context(|| format!("creating directory {path}"))?;
                tracing::debug!("created directory {path}");
                materialize_dir(child, &path, errors)?;
            }
            TemplateNode::File(content) => {
                if !valid_segment(name) {
                    errors.push(FileError {
                        path,
                        cause: io::Error::new(
                            io::ErrorKind::InvalidInput,
                            format!("invalid file name `{name}`"),
                        ),
                    });
                    continue;
                }
                match fs::write(&path, content) {
                    Ok(()) => tracing::debug!("wrote {path}"),
                    Err(cause) => errors.push(FileError { path, cause }),
                }
            }
        }
    }

    Ok(())
}

/// Print the paths `materialize` would create, without touching the disk.
pub fn preview(tree: &TemplateTree, dest: &Utf8Path) {
    println!("[dry-run] would create {dest}");
    preview_dir(tree.root(), dest);
}

fn preview_dir(node: &TemplateNode, dest: &Utf8Path) {
    let TemplateNode::Dir(children) = node else {
        return;
    };
    for (name, child) in children {
        let path = dest.join(name.as_str());
        println!("[dry-run] would create {path}");
        preview_dir(child, &path);
    }
}
