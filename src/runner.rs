use anyhow::{Result, bail};
use chrono::Datelike;

use crate::cli::Cli;
use crate::{config, ident, layout, materialize};

pub fn run(cli: Cli) -> Result<()> {
    // Reject bad names before anything touches the filesystem.
    if !ident::is_valid(&cli.module_name) {
        bail!("`{}` is not a valid module identifier", cli.module_name);
    }

    let author = match cli.author {
        Some(author) => author,
        None => config::load()?
            .author
            .unwrap_or_else(|| config::DEFAULT_AUTHOR.to_owned()),
    };
    let year = chrono::Utc::now().year();

    let tree = layout::module_tree(&cli.module_name, &author, year)?;
    let dest = cli.path.join(&cli.module_name);

    if cli.dry_run {
        materialize::preview(&tree, &dest);
        return Ok(());
    }

    let errors = materialize::materialize(&tree, &dest)?;
    for error in &errors {
        eprintln!("error: {error}");
    }

    println!(
        "Created Python module structure for `{}` at {}",
        cli.module_name, dest
    );
    if !errors.is_empty() {
        println!("{} file(s) could not be written; see errors above.", errors.len());
    }
    Ok(())
}
