use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use sqlite_link::{DirectiveSet, Flags, LinkConfig, TargetOs};

#[derive(Parser, Debug)]
#[command(
    name = "sqlite-link",
    author,
    version,
    about = "Print the flags needed to build against a system sqlite",
    long_about = None
)]
struct Args {
    /// Target operating system, in cargo's `target_os` spelling [default: host]
    #[arg(short, long, value_name = "OS")]
    target: Option<TargetOs>,

    /// Link the system sqlite
    #[arg(long)]
    libsqlite3: bool,

    /// Enable the ICU extension
    #[arg(long, alias = "sqlite-icu")]
    icu: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::List)]
    format: Format,

    /// Ignore path overrides from the environment
    #[arg(long)]
    no_env: bool,

    /// More logging, repeat for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// One directive per line
    List,
    /// Compiler flags only
    Cflags,
    /// Linker flags only
    Ldflags,
    /// `cargo::` instructions for a build script
    Cargo,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to initialize logger")?;

    let target = args.target.clone().unwrap_or_else(TargetOs::host);
    let flags = Flags::new(args.libsqlite3, args.icu);
    let config = if args.no_env {
        LinkConfig::default()
    } else {
        LinkConfig::from_env(&flags, &target, |name: &str| std::env::var_os(name))
            .context("invalid path override")?
    };
    log::debug!("{config:?}");

    let directives = sqlite_link::resolve(&flags, &target, &config);
    if directives.is_empty() {
        log::warn!("nothing to link, pass --libsqlite3 and/or --icu");
    }

    let mut stdout = io::stdout().lock();
    for line in render(args.format, &directives) {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

fn render(format: Format, directives: &DirectiveSet) -> Vec<String> {
    match format {
        Format::List => directives.iter().map(ToString::to_string).collect(),
        Format::Cflags => vec![directives.cflags()],
        Format::Ldflags => vec![directives.ldflags()],
        Format::Cargo => directives.cargo_instructions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn macos_with_icu() -> DirectiveSet {
        sqlite_link::resolve(
            &Flags::new(true, true),
            &TargetOs::Darwin,
            &LinkConfig::default(),
        )
    }

    #[test]
    fn test_render_ldflags() {
        assert_eq!(
            render(Format::Ldflags, &macos_with_icu()),
            ["-L/opt/homebrew/opt/sqlite/lib -lsqlite3 \
              -L/opt/homebrew/opt/icu4c/lib -licuuc -licui18n"]
        );
    }

    #[test]
    fn test_render_cargo() {
        let directives =
            sqlite_link::resolve(&Flags::new(true, false), &TargetOs::Linux, &LinkConfig::default());
        assert_eq!(
            render(Format::Cargo, &directives),
            [
                "cargo::rustc-link-lib=sqlite3",
                "cargo::metadata=cflags=-DUSE_LIBSQLITE3",
            ]
        );
    }

    #[test]
    fn test_render_list_and_cflags() {
        let directives = macos_with_icu();
        assert_eq!(render(Format::List, &directives).len(), directives.len());
        assert_eq!(
            render(Format::Cflags, &directives),
            ["-DUSE_LIBSQLITE3 -I/opt/homebrew/opt/sqlite/include \
              -DSQLITE_ENABLE_ICU -I/opt/homebrew/opt/icu4c/include"]
        );
        assert_eq!(render(Format::Ldflags, &DirectiveSet::new()), [""]);
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from([
            "sqlite-link",
            "--target",
            "macos",
            "--libsqlite3",
            "--sqlite-icu",
            "-f",
            "ldflags",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.target, Some(TargetOs::Darwin));
        assert!(args.libsqlite3 && args.icu);
        assert_eq!(args.format, Format::Ldflags);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sqlite-link"]).unwrap();
        assert_eq!(args.target, None);
        assert_eq!(args.format, Format::List);
        assert!(!args.libsqlite3 && !args.icu && !args.no_env);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
