// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cliutil::{cli_main, handle_top_level_result, Config};
use depgraph::{run, EdgeMode, Operation, Options, WARNING};
use hpkg::{DiscoveryConfig, InstalledPackages};
use std::{io::BufWriter, path::PathBuf, process::ExitCode};

#[derive(Parser, Debug)]
#[command(name = "pkgdeps")]
#[command(about = "Inspects dependencies between installed packages", long_about = None)]
#[command(after_help = WARNING)]
struct Cli {
    /// Removes the nagging warnings.
    #[arg(long, global = true)]
    i_know_what_im_doing: bool,

    /// Scans this directory for packages instead of the system and user
    /// package directories. Can be repeated.
    #[arg(long = "package-dir", value_name = "DIR", global = true)]
    package_dirs: Vec<PathBuf>,

    /// The tool used to read package metadata.
    #[arg(long, value_name = "PATH", default_value = "/bin/package", global = true)]
    package_tool: PathBuf,

    /// The tool used to locate the package directories.
    #[arg(long, value_name = "PATH", default_value = "/bin/finddir", global = true)]
    finddir_tool: PathBuf,

    /// Defaults to `leaves`.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lists packages that are not depended on.
    Leaves,
    /// Outputs a DOT graph of dependencies.
    Graph(GraphArgs),
}

#[derive(Args, Debug)]
struct GraphArgs {
    /// Draws an edge for every dependency between two packages.
    #[arg(long)]
    all_edges: bool,

    /// Recursively visits all the requirements of the given packages.
    #[arg(long, requires = "packages")]
    all_requirements: bool,

    /// Packages to include in the graph (along with their dependencies).
    /// If no package is specified, uses all found ones.
    #[arg(value_name = "PACKAGE")]
    packages: Vec<String>,
}

impl Cli {
    fn operation(&self) -> Operation {
        match &self.command {
            None | Some(Commands::Leaves) => Operation::Leaves,
            Some(Commands::Graph(args)) if args.all_requirements => Operation::GraphClosure {
                seeds: args.packages.clone(),
            },
            Some(Commands::Graph(args)) => Operation::GraphBounded {
                interest: args.packages.clone(),
                edges: if args.all_edges {
                    EdgeMode::AllEdges
                } else {
                    EdgeMode::Deduplicated
                },
            },
        }
    }

    fn discovery_config(&self) -> DiscoveryConfig {
        DiscoveryConfig {
            package_tool: self.package_tool.clone(),
            finddir_tool: self.finddir_tool.clone(),
            directories: self.package_dirs.clone(),
        }
    }
}

fn do_main(cli: Cli) -> Result<()> {
    let operation = cli.operation();
    let options = Options {
        show_warnings: !cli.i_know_what_im_doing,
    };
    tracing::debug!("Running {operation:?}");

    let source = InstalledPackages::new(cli.discovery_config());
    let stdout = std::io::stdout();
    run(
        &operation,
        &options,
        &source,
        BufWriter::new(stdout.lock()),
        std::io::stderr(),
    )
}

fn main() -> ExitCode {
    // Usage errors exit here, before logging is set up or packages are read.
    let cli = Cli::parse();
    match Config::from_env() {
        Ok(config) => cli_main(|| do_main(cli), config),
        Err(error) => handle_top_level_result::<(), _>(Err(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("pkgdeps").chain(args.iter().copied()))
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_leaves() -> Result<()> {
        let cli = parse(&[])?;
        assert_eq!(cli.operation(), Operation::Leaves);
        assert!(!cli.i_know_what_im_doing);
        Ok(())
    }

    #[test]
    fn test_graph_bounded() -> Result<()> {
        let cli = parse(&["--i-know-what-im-doing", "graph", "--all-edges", "a", "b"])?;
        assert_eq!(
            cli.operation(),
            Operation::GraphBounded {
                interest: vec!["a".to_owned(), "b".to_owned()],
                edges: EdgeMode::AllEdges,
            }
        );
        assert!(cli.i_know_what_im_doing);
        Ok(())
    }

    #[test]
    fn test_graph_closure() -> Result<()> {
        let cli = parse(&["graph", "--all-requirements", "vim"])?;
        assert_eq!(
            cli.operation(),
            Operation::GraphClosure {
                seeds: vec!["vim".to_owned()],
            }
        );
        Ok(())
    }

    #[test]
    fn test_graph_closure_requires_packages() {
        let error = parse(&["graph", "--all-requirements"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_discovery_config() -> Result<()> {
        let cli = parse(&[
            "--package-dir",
            "/a",
            "--package-dir",
            "/b",
            "--package-tool",
            "/opt/package",
            "leaves",
        ])?;
        let config = cli.discovery_config();
        assert_eq!(config.directories, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        assert_eq!(config.package_tool, PathBuf::from("/opt/package"));
        assert_eq!(config.finddir_tool, PathBuf::from("/bin/finddir"));
        Ok(())
    }
}
