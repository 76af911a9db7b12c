//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// docroute: route table builder for documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docroute.toml)
    #[arg(short = 'C', long, global = true, default_value = "docroute.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Collect content, build the route table and write artifacts
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Build the route table and check navbar/footer links without writing
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },

    /// Show which route a URL path resolves to
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Remove the output directory before writing
    #[arg(short, long)]
    pub clean: bool,

    /// Output directory (relative to the site root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Override the base URL every route is served under.
    ///
    /// Useful for deploying the same site under a sub-path, e.g. a GitHub
    /// Pages project site:
    ///   docroute build --base-url /my-project/
    #[arg(short = 'U', long = "base-url")]
    pub base_url: Option<String>,

    /// Keep draft docs and posts
    #[arg(short = 'D', long)]
    pub include_drafts: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Treat broken links as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,

    /// Keep draft docs and posts
    #[arg(short = 'D', long)]
    pub include_drafts: bool,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Browser paths to resolve (e.g. `/docs/intro`)
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Print results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Keep draft docs and posts
    #[arg(short = 'D', long)]
    pub include_drafts: bool,
}

impl Cli {
    /// Whether drafts are kept for the current command.
    pub const fn include_drafts(&self) -> bool {
        match &self.command {
            Commands::Build { build_args } => build_args.include_drafts,
            Commands::Validate { args } => args.include_drafts,
            Commands::Resolve { args } => args.include_drafts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from([
            "docroute",
            "build",
            "--clean",
            "-o",
            "out",
            "--base-url",
            "/sub/",
            "-V",
        ]);
        let Commands::Build { build_args } = &cli.command else {
            panic!("expected build");
        };
        assert!(build_args.clean);
        assert!(build_args.verbose);
        assert_eq!(build_args.output.as_deref(), Some(std::path::Path::new("out")));
        assert_eq!(build_args.base_url.as_deref(), Some("/sub/"));
        assert_eq!(cli.config, PathBuf::from("docroute.toml"));
    }

    #[test]
    fn test_parse_resolve_with_global_config() {
        let cli = Cli::parse_from(["docroute", "resolve", "/docs/intro", "/x", "--json", "-C", "site.toml"]);
        let Commands::Resolve { args } = &cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.paths, ["/docs/intro", "/x"]);
        assert!(args.json);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }

    #[test]
    fn test_resolve_requires_path() {
        assert!(Cli::try_parse_from(["docroute", "resolve"]).is_err());
    }
}
