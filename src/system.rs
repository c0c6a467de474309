//! Link a system-installed sqlite instead of the embedded amalgamation.

use crate::{
    config::LinkConfig,
    directive::{Directive, DirectiveSet},
    flags::Flags,
    platform::TargetOs,
};

/// Tells the C side not to compile the embedded engine
pub const DEFINE: &str = "USE_LIBSQLITE3";
pub const LIB: &str = "sqlite3";
/// Homebrew formula providing sqlite on macOS
pub const FORMULA: &str = "sqlite";

/// Directives for the system library, empty unless `flags.libsqlite3` is set.
///
/// Nothing checks that the library is actually installed, a missing one
/// shows up as a link error.
pub fn directives(flags: &Flags, target: &TargetOs, config: &LinkConfig) -> DirectiveSet {
    let mut set = DirectiveSet::new();
    if !flags.libsqlite3 {
        return set;
    }

    set.push(Directive::define(DEFINE));

    let dirs = config.lib_dirs(target, FORMULA, &config.sqlite3);
    if let Some(include) = dirs.include {
        set.push(Directive::IncludeDir(include));
    }
    if let Some(lib) = dirs.lib {
        set.push(Directive::LinkSearch(lib));
    }

    if links_by_name(target) {
        set.push(Directive::link_lib(LIB));
    }

    log::debug!("system sqlite on {target}: {} directives", set.len());
    set
}

// other targets get the define only
fn links_by_name(target: &TargetOs) -> bool {
    matches!(
        target,
        TargetOs::Linux | TargetOs::Darwin | TargetOs::OpenBsd | TargetOs::Solaris
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled() {
        for target in [TargetOs::Linux, TargetOs::Darwin] {
            assert!(directives(&Flags::new(false, true), &target, &LinkConfig::default()).is_empty());
        }
    }

    #[test]
    fn test_linux() {
        let set = directives(&Flags::new(true, false), &TargetOs::Linux, &LinkConfig::default());
        assert_eq!(set.cflags(), "-DUSE_LIBSQLITE3");
        assert_eq!(set.ldflags(), "-lsqlite3");
    }

    #[test]
    fn test_darwin() {
        let set = directives(&Flags::new(true, false), &TargetOs::Darwin, &LinkConfig::default());
        assert_eq!(
            set.cflags(),
            "-DUSE_LIBSQLITE3 -I/opt/homebrew/opt/sqlite/include"
        );
        assert_eq!(set.ldflags(), "-L/opt/homebrew/opt/sqlite/lib -lsqlite3");
    }

    #[test]
    fn test_other_target_gets_define_only() {
        let target = TargetOs::Other("windows".into());
        let set = directives(&Flags::new(true, false), &target, &LinkConfig::default());
        assert_eq!(set.cflags(), "-DUSE_LIBSQLITE3");
        assert_eq!(set.ldflags(), "");
    }

    #[test]
    fn test_override_on_linux() {
        let config = LinkConfig {
            sqlite3: crate::LibDirs {
                include: Some("/usr/local/include".into()),
                lib: Some("/usr/local/lib".into()),
            },
            ..Default::default()
        };
        let set = directives(&Flags::new(true, false), &TargetOs::Linux, &config);
        assert_eq!(set.cflags(), "-DUSE_LIBSQLITE3 -I/usr/local/include");
        assert_eq!(set.ldflags(), "-L/usr/local/lib -lsqlite3");
    }
}
