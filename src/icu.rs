//! SQLite's ICU extension: unicode aware collation and case folding.

use crate::{
    config::LinkConfig,
    directive::{Directive, DirectiveSet},
    flags::Flags,
    platform::TargetOs,
};

pub const DEFINE: &str = "SQLITE_ENABLE_ICU";
/// ICU common, then i18n
pub const LIBS: [&str; 2] = ["icuuc", "icui18n"];
pub const FORMULA: &str = "icu4c";

/// Directives for the ICU extension, empty unless `flags.icu` is set.
pub fn directives(flags: &Flags, target: &TargetOs, config: &LinkConfig) -> DirectiveSet {
    let mut set = DirectiveSet::new();
    if !flags.icu {
        return set;
    }

    set.push(Directive::define(DEFINE));

    let dirs = config.lib_dirs(target, FORMULA, &config.icu);
    if let Some(include) = dirs.include {
        set.push(Directive::IncludeDir(include));
    }
    if let Some(lib) = dirs.lib {
        set.push(Directive::LinkSearch(lib));
    }

    for lib in LIBS {
        set.push(Directive::link_lib(lib));
    }
    // OpenBSD's ICU build expects the system sqlite next to it
    if *target == TargetOs::OpenBsd {
        set.push(Directive::link_lib(crate::system::LIB));
    }

    log::debug!("icu on {target}: {} directives", set.len());
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled() {
        assert!(directives(&Flags::new(true, false), &TargetOs::Darwin, &LinkConfig::default()).is_empty());
    }

    #[test]
    fn test_linux() {
        let set = directives(&Flags::new(false, true), &TargetOs::Linux, &LinkConfig::default());
        assert_eq!(set.cflags(), "-DSQLITE_ENABLE_ICU");
        assert_eq!(set.ldflags(), "-licuuc -licui18n");
    }

    #[test]
    fn test_darwin() {
        let set = directives(&Flags::new(false, true), &TargetOs::Darwin, &LinkConfig::default());
        assert_eq!(
            set.cflags(),
            "-DSQLITE_ENABLE_ICU -I/opt/homebrew/opt/icu4c/include"
        );
        assert_eq!(set.ldflags(), "-L/opt/homebrew/opt/icu4c/lib -licuuc -licui18n");
    }

    #[test]
    fn test_openbsd_also_links_sqlite() {
        let set = directives(&Flags::new(false, true), &TargetOs::OpenBsd, &LinkConfig::default());
        assert_eq!(set.ldflags(), "-licuuc -licui18n -lsqlite3");
    }

    #[test]
    fn test_other_target_still_links_icu() {
        let target = TargetOs::Other("freebsd".into());
        let set = directives(&Flags::new(false, true), &target, &LinkConfig::default());
        assert_eq!(set.cflags(), "-DSQLITE_ENABLE_ICU");
        assert_eq!(set.ldflags(), "-licuuc -licui18n");
    }
}
