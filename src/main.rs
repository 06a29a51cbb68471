//! Facetr CLI application entry point
//!
//! A thin host around the exploration engine: records are read from a JSON
//! file, the flags become explorer transitions, and the resulting window is
//! printed.
//!
//! # Usage
//!
//! ```bash
//! # First page of the model library, newest first
//! facetr explore models.json
//!
//! # Search, narrow by tag and size, show three batches
//! facetr explore models.json -s "neon cat" -t t1 --size small -p 3
//!
//! # Galleries with images, most entries first
//! facetr explore galleries.json --view galleries -c has-images --sort entries-desc
//!
//! # Facet menus with counts
//! facetr facets images.json --view images
//!
//! # Preview image of every gallery
//! facetr preview galleries.json
//!
//! # Debug logging
//! RUST_LOG=facetr=debug facetr explore models.json
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/facetr/config.toml` on Linux) unless `--config` names a file.

use facetr::{
    FacetrError,
    browse::{Explorer, ViewKind},
    cli::{Cli, Commands, FilterArgs},
    config::FacetrConfig,
    output, records,
    records::Record,
    sampler,
    search::MatchMode,
    sort::SortOption,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type Result<T> = std::result::Result<T, FacetrError>;

/// Apply command-line filter flags as explorer transitions
fn apply_filters(explorer: &mut Explorer, filters: FilterArgs) {
    if let Some(search) = filters.search {
        explorer.set_search(search);
    }
    explorer.set_owner(filters.owner);
    explorer.set_visibility(filters.visibility);
    explorer.set_content_type(filters.content_type);
    explorer.set_size_bucket(filters.size);
    for tag in filters.tags {
        explorer.add_tag(tag);
    }
}

/// Handle the explore command
///
/// # Errors
/// Returns `FacetrError::InvalidInput` if the sort order is not offered by
/// the chosen view.
#[allow(clippy::too_many_arguments)]
fn handle_explore_command(
    config: &FacetrConfig,
    records: Vec<Record>,
    view: ViewKind,
    filters: FilterArgs,
    sort: Option<SortOption>,
    pages: usize,
    match_mode: Option<MatchMode>,
    quiet: bool,
) -> Result<()> {
    let settings = config.view(view);
    let mut explorer = Explorer::builder(view)
        .batch_size(settings.batch_size)
        .default_sort(settings.default_sort)
        .match_mode(match_mode.unwrap_or(config.match_mode))
        .search_delay(config.search_delay())
        .records(records)
        .build();

    if let Some(sort) = sort {
        if !SortOption::for_view(view).contains(&sort) {
            return Err(FacetrError::InvalidInput(format!(
                "Sort '{sort}' is not available for {view}"
            )));
        }
        explorer.set_sort(sort);
    }

    apply_filters(&mut explorer, filters);

    for _ in 1..pages {
        if !explorer.load_more() {
            break;
        }
    }

    let view = explorer.view();
    if !quiet {
        println!("{}", output::summary_line(&view));
        if !view.chips.is_empty() {
            println!("{}", output::chips_line(&view.chips));
        }
    }

    for record in &view.items {
        println!("{}", output::record_line(record, quiet));
    }

    if !quiet && let Some(load_more) = view.load_more {
        println!("{}", output::load_more_line(load_more));
    }
    Ok(())
}

/// Handle the facets command
fn handle_facets_command(config: &FacetrConfig, records: Vec<Record>, view: ViewKind, quiet: bool) {
    let mut explorer = Explorer::from_config(view, config);
    explorer.replace_records(records);
    let facets = explorer.facets();

    let mut groups = vec![
        ("Owner", &facets.owners),
        ("Visibility", &facets.visibility),
        ("Type", &facets.content_types),
    ];
    if view != ViewKind::Galleries {
        groups.push(("Size", &facets.sizes));
        groups.push(("Tags", &facets.tags));
    }

    for (title, options) in groups {
        print!("{}", output::facet_group(title, options, quiet));
    }

    if !quiet {
        let sorts: Vec<&str> = SortOption::for_view(view).iter().map(|s| s.id()).collect();
        println!("Sort: {}", sorts.join(", "));
    }
}

/// Handle the preview command
fn handle_preview_command(records: &[Record], quiet: bool) {
    let galleries: Vec<&Record> = records.iter().filter(|r| r.is_gallery()).collect();
    if galleries.is_empty() && !quiet {
        println!("No galleries found.");
    }
    for gallery in galleries {
        println!("{}", output::preview_line(gallery, sampler::preview_entry(gallery), quiet));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("facetr=warn")))
        .init();

    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => FacetrConfig::load_from(path)?,
        None => FacetrConfig::load()?,
    };

    let records = records::load_records(cli.command.file())?;

    match cli.command {
        Commands::Explore { view, filters, sort, pages, match_mode, .. } => {
            handle_explore_command(&config, records, view.view, filters, sort, pages, match_mode, cli.quiet)?;
        }
        Commands::Facets { view, .. } => {
            handle_facets_command(&config, records, view.view, cli.quiet);
        }
        Commands::Preview { .. } => {
            handle_preview_command(&records, cli.quiet);
        }
    }

    Ok(())
}
