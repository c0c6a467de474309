use crate::error::{Error, Result};
use std::ffi::OsString;

/// Cargo feature that selects the system sqlite
pub const LIBSQLITE3: &str = "libsqlite3";
/// Cargo features that enable ICU, both spellings mean the same
pub const ICU: [&str; 2] = ["sqlite_icu", "icu"];

/// Build-time switches, fixed for the whole build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// link a system sqlite instead of compiling the embedded one
    pub libsqlite3: bool,
    /// enable the ICU extension
    pub icu: bool,
}

impl Flags {
    pub fn new(libsqlite3: bool, icu: bool) -> Self {
        Self { libsqlite3, icu }
    }

    /// Read the active features of the running build script.
    ///
    /// Cargo exports every enabled feature as `CARGO_FEATURE_<NAME>`,
    /// uppercased with `-` turned into `_`.
    pub fn from_cargo_env<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let enabled = |feature: &str| lookup(&feature_var(feature)).is_some();
        Self {
            libsqlite3: enabled(LIBSQLITE3),
            icu: ICU.iter().any(|&feature| enabled(feature)),
        }
    }

    /// Names of every variable [`Flags::from_cargo_env`] looks at.
    pub fn env_vars() -> Vec<String> {
        std::iter::once(LIBSQLITE3)
            .chain(ICU)
            .map(feature_var)
            .collect()
    }
}

pub(crate) fn feature_var(feature: &str) -> String {
    format!(
        "CARGO_FEATURE_{}",
        feature.to_uppercase().replace('-', "_")
    )
}

/// Look a variable up, treating non-unicode values as an error.
pub(crate) fn read_var<F>(lookup: &F, name: &str) -> Result<Option<String>>
where
    F: Fn(&str) -> Option<OsString>,
{
    lookup(name)
        .map(|value| {
            value
                .into_string()
                .map_err(|_| Error::NotUnicode(name.to_string()))
        })
        .transpose()
}
