//! CLI entry point for importfix

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use importfix::config::{DEFAULT_ALIAS, DEFAULT_ROOT, DEFAULT_SHARED_TARGET};
use importfix::{ChangeReporter, ConsoleReporter, JsonReporter, RewriteConfig, RewriteMode, run};

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
#[command(name = "importfix")]
#[command(about = "Rewrite relative TypeScript imports into alias-prefixed form")]
#[command(version)]
struct Args {
    /// Source root to rewrite
    #[arg(default_value = DEFAULT_ROOT)]
    path: PathBuf,

    /// Rewrite rule set to apply
    #[arg(short, long, value_enum, default_value_t = RewriteMode::Folder)]
    mode: RewriteMode,

    /// Alias prefix for folder and resolve rewrites
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_ALIAS)]
    alias: String,

    /// Known top-level source folder (can be used multiple times, replaces the default list)
    #[arg(long = "folder", value_name = "NAME")]
    folders: Vec<String>,

    /// Target that consolidated imports are rewritten to
    #[arg(long = "shared", value_name = "TARGET", default_value = DEFAULT_SHARED_TARGET)]
    shared: String,

    /// File extension to rewrite (can be used multiple times, default: ts, tsx)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Skip entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Report what would change without writing files
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Output a JSON summary instead of one line per file
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn rewrite_config(&self) -> RewriteConfig {
        let defaults = RewriteConfig::default();
        RewriteConfig {
            root: self.path.clone(),
            mode: self.mode,
            alias: self.alias.clone(),
            folders: if self.folders.is_empty() {
                defaults.folders.clone()
            } else {
                self.folders.clone()
            },
            shared_target: self.shared.clone(),
            extensions: if self.extensions.is_empty() {
                defaults.extensions.clone()
            } else {
                self.extensions
                    .iter()
                    .map(|e| e.trim_start_matches('.').to_string())
                    .collect()
            },
            ignore_patterns: self.ignore.clone(),
            dry_run: self.dry_run,
        }
    }
}

fn main() {
    let args = Args::parse();

    let env = if args.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    let config = args.rewrite_config();

    let mut reporter: Box<dyn ChangeReporter> = if args.json {
        Box::new(JsonReporter::stdout())
    } else {
        Box::new(ConsoleReporter::stdout(should_use_color(args.color)))
    };

    if let Err(e) = run(&config, reporter.as_mut()) {
        eprintln!("importfix: {}", e);
        process::exit(1);
    }
}
