//! Command-line interface for docsync
//! This binary regenerates the fenced example blocks of a documentation
//! file from the current contents of the example data files.
//!
//! Usage:
//!   docsync                      - Synchronize using the built-in defaults
//!   docsync --config `<path>`      - Layer a TOML configuration file
//!   docsync --document `<path>`    - Override the target document path

use clap::{Arg, Command};
use docsync::docsync::config::{Loader, SyncConfig};
use docsync::docsync::pipeline::{SyncError, Synchronizer};

fn main() {
    let matches = Command::new("docsync")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Regenerates fenced example blocks in documentation from example data files")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("document")
                .long("document")
                .short('d')
                .help("Path of the document to rewrite (overrides configuration)"),
        )
        .get_matches();

    let config = build_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("document"),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let synchronizer = Synchronizer::new(config);
    let report = synchronizer.run().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    for tag in &report.replaced {
        println!(
            "updated '{}' block in {}",
            tag,
            synchronizer.config().document.path
        );
    }
}

/// Build the run configuration from the embedded defaults, an optional
/// user file, and CLI overrides. Without an explicit --config, a
/// docsync.toml in the working directory is layered when present.
fn build_config(
    config_path: Option<&String>,
    document_path: Option<&String>,
) -> Result<SyncConfig, SyncError> {
    let mut loader = match config_path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("docsync.toml"),
    };

    if let Some(path) = document_path {
        loader = loader
            .set_override("document.path", path.as_str())
            .map_err(|e| SyncError::Config(e.to_string()))?;
    }

    loader.build().map_err(|e| SyncError::Config(e.to_string()))
}
