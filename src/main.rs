//! CLI entry point for repotree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use repotree::{
    ContentSource, DirSource, Entry, EntryKind, EnhancedFormatter, GitSource, JsonReport,
    ListingSource, RenderOptions, SourceError, TreeSource, collect_stats, normalize_path,
    print_json, print_rendered, render_plain,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "repotree")]
#[command(about = "Show a repository's files as a directory tree, or print one file")]
#[command(version)]
struct Args {
    /// Path inside the repository. A directory renders a tree, a file prints its content
    #[arg(default_value = "")]
    path: String,

    /// Repository (or, with --fs, directory) to read
    #[arg(short = 'C', long = "repo", default_value = ".")]
    repo: PathBuf,

    /// Revision to list: branch, tag or commit (default: HEAD)
    #[arg(short = 'b', long = "branch", value_name = "REV")]
    branch: Option<String>,

    /// Walk the directory on disk instead of reading git objects
    #[arg(long = "fs", conflicts_with_all = ["branch", "listing"])]
    fs: bool,

    /// With --fs, include hidden and .gitignore'd files
    #[arg(short, long, requires = "fs")]
    all: bool,

    /// Read a JSON tree listing from FILE ("-" for stdin)
    #[arg(long = "listing", value_name = "FILE", conflicts_with = "branch")]
    listing: Option<PathBuf>,

    /// Plain listing: files before directories, no annotations, no summary
    #[arg(long = "plain", conflicts_with_all = ["size", "level", "ext", "no_stats", "json"])]
    plain: bool,

    /// Show file sizes, and file counts and sizes for directories
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_parser = parse_level)]
    level: Option<usize>,

    /// Only show files with this extension (can be used multiple times)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    ext: Vec<String>,

    /// Omit the summary line
    #[arg(long = "no-stats")]
    no_stats: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log what is being read to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Parse a `--level` value; levels start at 1.
fn parse_level(s: &str) -> Result<usize, String> {
    let level: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;
    if level == 0 {
        return Err("level must be at least 1".to_string());
    }
    Ok(level)
}

/// Accept `ts` as well as `.ts`.
fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "repotree=debug,warn" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Where entries (and possibly file content) come from.
enum Source {
    Git(GitSource),
    Dir(DirSource),
    Listing(ListingSource),
}

impl Source {
    fn open(args: &Args) -> repotree::Result<Self> {
        if let Some(listing) = &args.listing {
            return Ok(Source::Listing(ListingSource::from_path(listing)?));
        }
        if args.fs {
            return Ok(Source::Dir(DirSource::new(&args.repo).show_all(args.all)));
        }
        Ok(Source::Git(GitSource::open(&args.repo, args.branch.as_deref())?))
    }

    fn tree(&self) -> &dyn TreeSource {
        match self {
            Source::Git(source) => source,
            Source::Dir(source) => source,
            Source::Listing(source) => source,
        }
    }

    fn content(&self) -> Option<&dyn ContentSource> {
        match self {
            Source::Git(source) => Some(source),
            Source::Dir(source) => Some(source),
            Source::Listing(_) => None,
        }
    }

    fn repository(&self) -> Option<String> {
        match self {
            Source::Git(source) => source.coordinate().map(|c| c.to_string()),
            _ => None,
        }
    }
}

fn is_file_entry(entries: &[Entry], path: &str) -> bool {
    !path.is_empty()
        && entries
            .iter()
            .any(|e| e.kind == EntryKind::File && normalize_path(&e.path) == path)
}

fn run(args: &Args) -> repotree::Result<()> {
    let source = Source::open(args)?;
    let entries = source.tree().entries()?;
    let path = normalize_path(&args.path);

    if is_file_entry(&entries, &path) {
        let content = source
            .content()
            .ok_or_else(|| SourceError::ContentUnavailable(path.clone()))?;
        print!("{}", content.read_file(&path)?);
        return Ok(());
    }

    if args.plain {
        print_rendered(&render_plain(&entries, &path), should_use_color(args.color))?;
        return Ok(());
    }

    let options = RenderOptions::default()
        .with_size(args.size)
        .with_max_depth(args.level)
        .with_stats(!args.no_stats)
        .with_extensions(args.ext.iter().map(|e| normalize_extension(e)));
    let formatter = EnhancedFormatter::new(options.clone());
    let tree = formatter.build(&entries, &path);

    if args.json {
        let report = JsonReport {
            repository: source.repository(),
            path,
            stats: collect_stats(&tree, &options),
            tree,
        };
        print_json(&report)?;
    } else {
        print_rendered(&formatter.format(&tree), should_use_color(args.color))?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("repotree: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("3"), Ok(3));
        assert_eq!(parse_level(" 1 "), Ok(1));
        assert!(parse_level("0").is_err());
        assert!(parse_level("-1").is_err());
        assert!(parse_level("deep").is_err());
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("ts"), ".ts");
        assert_eq!(normalize_extension(".ts"), ".ts");
        assert_eq!(normalize_extension(".d.ts"), ".d.ts");
    }

    #[test]
    fn test_is_file_entry() {
        let entries = vec![Entry::dir("src"), Entry::file("src/main.rs", 1)];
        assert!(is_file_entry(&entries, "src/main.rs"));
        assert!(!is_file_entry(&entries, "src"));
        assert!(!is_file_entry(&entries, ""));
    }

    #[test]
    fn test_args_conflicts() {
        assert!(Args::try_parse_from(["repotree", "--plain", "--size"]).is_err());
        assert!(Args::try_parse_from(["repotree", "--fs", "--branch", "main"]).is_err());
        assert!(Args::try_parse_from(["repotree", "--all"]).is_err());
        let args = Args::try_parse_from(["repotree", "src", "-s", "-L", "2", "-e", "rs"]).unwrap();
        assert_eq!(args.path, "src");
        assert_eq!(args.level, Some(2));
        assert_eq!(args.ext, vec!["rs".to_string()]);
    }
}
