#![doc = include_str!("../README.md")]

mod config;
mod directive;
mod error;
mod flags;
mod platform;

pub mod icu;
pub mod system;

pub use config::{resolve, resolve_from_env, LibDirs, LinkConfig, DEFAULT_HOMEBREW_PREFIX};
pub use directive::{Directive, DirectiveSet};
pub use error::{Error, Result};
pub use flags::Flags;
pub use platform::TargetOs;
