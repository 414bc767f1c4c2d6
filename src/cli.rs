use camino::Utf8PathBuf;
use clap::Parser;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "modkit", version, about = "Generate Python module boilerplate")]
pub struct Cli {
    /// Name of the module to create (a valid Python identifier).
    pub module_name: String,

    /// Base path where the module directory is created.
    #[arg(short = 'p', long = "path", default_value = ".")]
    pub path: Utf8PathBuf,

    /// Author name used in the generated LICENSE and docs config.
    #[arg(long = "author")]
    pub author: Option<String>,

    /// Print what would be created without writing anything.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
