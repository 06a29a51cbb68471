//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for facetr using the `clap` crate.
//! The binary is a thin host around [`crate::browse::Explorer`]: it loads a
//! JSON array of records, applies the filters given as flags and prints the
//! resulting window.
//!
//! # Commands
//!
//! - **explore**: filter, sort and page a record file (default view: models)
//! - **facets**: print the facet menus with per-option counts
//! - **preview**: print the deterministic preview image of every gallery
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use facetr::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["facetr", "explore", "records.json", "-s", "neon", "-t", "t1"]);
//! assert!(matches!(cli.command, Commands::Explore { .. }));
//! ```

use crate::browse::ViewKind;
use crate::filters::{ContentType, SizeBucket};
use crate::records::Visibility;
use crate::search::MatchMode;
use crate::sort::SortOption;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "facetr")]
#[command(about = "Faceted search, filtering and paging over record collections", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Filter, sort and page a record file
    #[command(visible_alias = "e")]
    Explore {
        /// JSON file holding an array of records
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        view: ViewArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Sort order (recent, alpha, size-desc, size-asc, entries-desc, entries-asc)
        #[arg(long = "sort", value_name = "SORT")]
        sort: Option<SortOption>,

        /// Number of "load more" batches to reveal before printing
        #[arg(short = 'p', long = "pages", value_name = "N", default_value_t = 1)]
        pages: usize,

        /// Override the configured search matching mode (substring, all-tokens)
        #[arg(long = "match-mode", value_name = "MODE")]
        match_mode: Option<MatchMode>,
    },

    /// Show facet options and counts for a record file
    #[command(visible_alias = "f")]
    Facets {
        /// JSON file holding an array of records
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show the preview image picked for each gallery
    Preview {
        /// JSON file holding an array of records
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Which list view to emulate
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// List view: models, images or galleries
    #[arg(long = "view", value_name = "VIEW", default_value_t = ViewKind::Models)]
    pub view: ViewKind,
}

/// Facet selections and search text
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Free-text search
    #[arg(short = 's', long = "search", value_name = "QUERY")]
    pub search: Option<String>,

    /// Owner id
    #[arg(short = 'o', long = "owner", value_name = "ID")]
    pub owner: Option<String>,

    /// Visibility (public, private)
    #[arg(long = "visibility", value_name = "VISIBILITY")]
    pub visibility: Option<Visibility>,

    /// Content type (type:<tag id>, has-images, has-models, empty)
    #[arg(short = 'c', long = "content-type", value_name = "TYPE")]
    pub content_type: Option<ContentType>,

    /// Size bucket (unknown, small, medium, large)
    #[arg(long = "size", value_name = "BUCKET")]
    pub size: Option<SizeBucket>,

    /// Tag ids; records must carry every one
    #[arg(short = 't', long = "tag", value_name = "TAG", num_args = 1..)]
    pub tags: Vec<String>,
}

impl Commands {
    /// Record file the command reads
    #[must_use]
    pub const fn file(&self) -> &PathBuf {
        match self {
            Self::Explore { file, .. } | Self::Facets { file, .. } | Self::Preview { file } => file,
        }
    }

    /// View the command targets; previews always concern galleries
    #[must_use]
    pub const fn view(&self) -> ViewKind {
        match self {
            Self::Explore { view, .. } | Self::Facets { view, .. } => view.view,
            Self::Preview { .. } => ViewKind::Galleries,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explore_with_filters() {
        let cli = Cli::parse_from([
            "facetr", "explore", "records.json", "--view", "images", "-s", "neon cat", "-o", "u1",
            "--visibility", "private", "-c", "type:lora", "--size", "medium", "-t", "t1", "t2",
            "--sort", "size-desc", "-p", "3",
        ]);

        let Commands::Explore { file, view, filters, sort, pages, match_mode } = cli.command else {
            panic!("Expected Explore command");
        };
        assert_eq!(file, PathBuf::from("records.json"));
        assert_eq!(view.view, ViewKind::Images);
        assert_eq!(filters.search.as_deref(), Some("neon cat"));
        assert_eq!(filters.owner.as_deref(), Some("u1"));
        assert_eq!(filters.visibility, Some(Visibility::Private));
        assert_eq!(filters.content_type, Some(ContentType::TypeTag("lora".to_string())));
        assert_eq!(filters.size, Some(SizeBucket::Medium));
        assert_eq!(filters.tags, vec!["t1", "t2"]);
        assert_eq!(sort, Some(SortOption::SizeDesc));
        assert_eq!(pages, 3);
        assert_eq!(match_mode, None);
    }

    #[test]
    fn test_explore_defaults() {
        let cli = Cli::parse_from(["facetr", "e", "records.json"]);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert_eq!(cli.command.view(), ViewKind::Models);
        let Commands::Explore { pages, sort, filters, .. } = cli.command else {
            panic!("Expected Explore command");
        };
        assert_eq!(pages, 1);
        assert_eq!(sort, None);
        assert!(filters.tags.is_empty());
    }

    #[test]
    fn test_rejects_unknown_sort() {
        let result = Cli::try_parse_from(["facetr", "explore", "r.json", "--sort", "popular"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["facetr", "facets", "r.json", "-q", "--config", "/tmp/c.toml"]);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(cli.command.file(), &PathBuf::from("r.json"));
    }

    #[test]
    fn test_preview_targets_galleries() {
        let cli = Cli::parse_from(["facetr", "preview", "g.json"]);
        assert_eq!(cli.command.view(), ViewKind::Galleries);
    }
}
