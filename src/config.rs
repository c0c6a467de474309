use crate::{
    directive::DirectiveSet,
    error::{Error, Result},
    flags::{read_var, Flags},
    icu,
    platform::TargetOs,
    system,
};
use std::ffi::OsString;

/// Where Homebrew lives on Apple silicon
pub const DEFAULT_HOMEBREW_PREFIX: &str = "/opt/homebrew";

const HOMEBREW_PREFIX: &str = "HOMEBREW_PREFIX";
const SQLITE3_INCLUDE_DIR: &str = "SQLITE3_INCLUDE_DIR";
const SQLITE3_LIB_DIR: &str = "SQLITE3_LIB_DIR";
const ICU_INCLUDE_DIR: &str = "ICU_INCLUDE_DIR";
const ICU_LIB_DIR: &str = "ICU_LIB_DIR";

/// Explicit header and library directories for one native library
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibDirs {
    pub include: Option<String>,
    pub lib: Option<String>,
}

/// Path overrides on top of the per-platform defaults.
///
/// Everything is optional, [`LinkConfig::default`] reproduces the stock
/// behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkConfig {
    /// replaces [`DEFAULT_HOMEBREW_PREFIX`] for macOS paths
    pub homebrew_prefix: Option<String>,
    pub sqlite3: LibDirs,
    pub icu: LibDirs,
}

impl LinkConfig {
    /// Collect overrides from the environment.
    ///
    /// Only variables that can change the result are read, so an unrelated
    /// `ICU_LIB_DIR` does not matter to a build without ICU, and
    /// `HOMEBREW_PREFIX` only matters on macOS.
    pub fn from_env<F>(flags: &Flags, target: &TargetOs, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = Self::default();
        if !flags.libsqlite3 && !flags.icu {
            return Ok(config);
        }

        if target.is_darwin() {
            config.homebrew_prefix = read_override(&lookup, HOMEBREW_PREFIX)?;
        }
        if flags.libsqlite3 {
            config.sqlite3 = LibDirs {
                include: read_override(&lookup, SQLITE3_INCLUDE_DIR)?,
                lib: read_override(&lookup, SQLITE3_LIB_DIR)?,
            };
        }
        if flags.icu {
            config.icu = LibDirs {
                include: read_override(&lookup, ICU_INCLUDE_DIR)?,
                lib: read_override(&lookup, ICU_LIB_DIR)?,
            };
        }
        Ok(config)
    }

    /// Every variable [`LinkConfig::from_env`] may read.
    pub fn env_vars() -> [&'static str; 5] {
        [
            HOMEBREW_PREFIX,
            SQLITE3_INCLUDE_DIR,
            SQLITE3_LIB_DIR,
            ICU_INCLUDE_DIR,
            ICU_LIB_DIR,
        ]
    }

    pub fn homebrew_prefix(&self) -> &str {
        self.homebrew_prefix
            .as_deref()
            .unwrap_or(DEFAULT_HOMEBREW_PREFIX)
    }

    /// Directories to search for a library installed as Homebrew `formula`.
    ///
    /// Overrides win on every platform; without them only macOS gets
    /// paths, the other platforms rely on the compiler's default search.
    pub(crate) fn lib_dirs(&self, target: &TargetOs, formula: &str, dirs: &LibDirs) -> LibDirs {
        let keg = format!("{}/opt/{formula}", self.homebrew_prefix());
        let (include, lib) = if target.is_darwin() {
            (Some(format!("{keg}/include")), Some(format!("{keg}/lib")))
        } else {
            (None, None)
        };
        LibDirs {
            include: dirs.include.clone().or(include),
            lib: dirs.lib.clone().or(lib),
        }
    }
}

fn read_override<F>(lookup: &F, name: &str) -> Result<Option<String>>
where
    F: Fn(&str) -> Option<OsString>,
{
    match read_var(lookup, name)? {
        Some(value) if value.trim().is_empty() => Err(Error::EmptyOverride(name.to_string())),
        value => Ok(value),
    }
}

/// All directives for `flags` on `target`.
///
/// The system library unit comes first, then ICU. When both are active the
/// result is their plain concatenation.
pub fn resolve(flags: &Flags, target: &TargetOs, config: &LinkConfig) -> DirectiveSet {
    log::debug!("resolving sqlite link directives for {target} with {flags:?}");
    system::directives(flags, target, config).union(icu::directives(flags, target, config))
}

const TARGET_OS: &str = "CARGO_CFG_TARGET_OS";

/// Resolve directives from inside a build script.
///
/// Features and target come from the variables cargo sets for `build.rs`,
/// overrides as in [`LinkConfig::from_env`].
pub fn resolve_from_env<F>(lookup: F) -> Result<DirectiveSet>
where
    F: Fn(&str) -> Option<OsString>,
{
    let target = read_var(&lookup, TARGET_OS)?
        .map(|os| TargetOs::from_cargo(&os))
        .ok_or_else(|| Error::MissingEnv(TARGET_OS.to_string()))?;
    let flags = Flags::from_cargo_env(&lookup);
    let config = LinkConfig::from_env(&flags, &target, &lookup)?;
    Ok(resolve(&flags, &target, &config))
}
