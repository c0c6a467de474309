use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Possible errors while reading the build configuration
///
/// Resolving directives never fails, only collecting its inputs can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// a variable cargo always sets for build scripts is absent
    #[error("environment variable `{0}` is not set, is this running outside a build script?")]
    MissingEnv(String),
    #[error("environment variable `{0}` is not valid unicode")]
    NotUnicode(String),
    /// an override is set but carries no path
    #[error("environment variable `{0}` is set but empty")]
    EmptyOverride(String),
}
