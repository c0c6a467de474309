use std::{fmt::Display, str::FromStr};

/// Target operating system, as far as linking sqlite is concerned.
///
/// Only the platforms with their own link policy get a variant,
/// every other target collapses into [`TargetOs::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetOs {
    /// Linux and Android
    Linux,
    /// macOS and iOS, packages come from Homebrew
    Darwin,
    OpenBsd,
    /// Solaris and illumos
    Solaris,
    Other(String),
}

impl TargetOs {
    /// Parse cargo's `target_os` spelling. Never fails.
    pub fn from_cargo(target_os: &str) -> Self {
        match target_os {
            "linux" | "android" => Self::Linux,
            "macos" | "darwin" | "ios" => Self::Darwin,
            "openbsd" => Self::OpenBsd,
            "solaris" | "illumos" => Self::Solaris,
            other => Self::Other(other.to_string()),
        }
    }

    /// The operating system this binary was compiled for.
    pub fn host() -> Self {
        Self::from_cargo(std::env::consts::OS)
    }

    pub fn is_darwin(&self) -> bool {
        matches!(self, Self::Darwin)
    }
}

impl FromStr for TargetOs {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_cargo(s))
    }
}

impl Display for TargetOs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linux => f.write_str("linux"),
            Self::Darwin => f.write_str("macos"),
            Self::OpenBsd => f.write_str("openbsd"),
            Self::Solaris => f.write_str("solaris"),
            Self::Other(os) => f.write_str(os),
        }
    }
}
