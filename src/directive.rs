use std::fmt::Display;

/// A single compiler or linker instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `-DNAME` or `-DNAME=value`
    Define { name: String, value: Option<String> },
    /// `-I<path>`
    IncludeDir(String),
    /// `-L<path>`
    LinkSearch(String),
    /// `-l<name>`
    LinkLib(String),
}

impl Directive {
    pub fn define(name: impl Into<String>) -> Self {
        Self::Define {
            name: name.into(),
            value: None,
        }
    }

    pub fn include_dir(path: impl Into<String>) -> Self {
        Self::IncludeDir(path.into())
    }

    pub fn link_search(path: impl Into<String>) -> Self {
        Self::LinkSearch(path.into())
    }

    pub fn link_lib(name: impl Into<String>) -> Self {
        Self::LinkLib(name.into())
    }

    /// Whether this belongs on the compiler command line rather than the linker's.
    pub fn is_compiler(&self) -> bool {
        matches!(self, Self::Define { .. } | Self::IncludeDir(_))
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Define { name, value: None } => write!(f, "-D{name}"),
            Self::Define {
                name,
                value: Some(value),
            } => write!(f, "-D{name}={value}"),
            Self::IncludeDir(path) => write!(f, "-I{path}"),
            Self::LinkSearch(path) => write!(f, "-L{path}"),
            Self::LinkLib(name) => write!(f, "-l{name}"),
        }
    }
}

/// Ordered directives contributed by one or more configuration units.
///
/// Merging keeps every entry, duplicates included. Sorting out conflicts
/// is left to the compiler and linker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveSet {
    directives: Vec<Directive>,
}

impl DirectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, directive: Directive) {
        log::trace!("directive {directive}");
        self.directives.push(directive);
    }

    /// Append all of `other`, preserving its order.
    pub fn union(mut self, other: DirectiveSet) -> Self {
        self.directives.extend(other.directives);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Directive> {
        self.directives.iter()
    }

    pub fn contains(&self, directive: &Directive) -> bool {
        self.directives.contains(directive)
    }

    pub fn defines(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.iter().filter_map(|directive| match directive {
            Directive::Define { name, value } => Some((name.as_str(), value.as_deref())),
            _ => None,
        })
    }

    pub fn include_dirs(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(|directive| match directive {
            Directive::IncludeDir(path) => Some(path.as_str()),
            _ => None,
        })
    }

    pub fn link_search(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(|directive| match directive {
            Directive::LinkSearch(path) => Some(path.as_str()),
            _ => None,
        })
    }

    pub fn link_libs(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(|directive| match directive {
            Directive::LinkLib(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Defines and include dirs, space separated.
    pub fn cflags(&self) -> String {
        join(self.iter().filter(|directive| directive.is_compiler()))
    }

    /// Search paths and libraries, space separated.
    pub fn ldflags(&self) -> String {
        join(self.iter().filter(|directive| !directive.is_compiler()))
    }

    /// Instructions for cargo, one per line, to be printed from `build.rs`.
    ///
    /// Compiler flags travel as `cflags` metadata, dependants of a crate
    /// with a `links` key read them back from `DEP_<LINKS>_CFLAGS`.
    pub fn cargo_instructions(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.len() + 1);
        for directive in self.iter() {
            match directive {
                Directive::LinkSearch(path) => {
                    lines.push(format!("cargo::rustc-link-search=native={path}"))
                }
                Directive::LinkLib(name) => lines.push(format!("cargo::rustc-link-lib={name}")),
                Directive::Define { .. } | Directive::IncludeDir(_) => (),
            }
        }
        let cflags = self.cflags();
        if !cflags.is_empty() {
            lines.push(format!("cargo::metadata=cflags={cflags}"));
        }
        lines
    }

    /// Hand defines and include dirs to a C build.
    #[cfg(feature = "cc")]
    pub fn apply_to(&self, build: &mut cc::Build) {
        for (name, value) in self.defines() {
            build.define(name, value);
        }
        for path in self.include_dirs() {
            build.include(path);
        }
    }
}

impl<'a> IntoIterator for &'a DirectiveSet {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Directive> for DirectiveSet {
    fn from_iter<T: IntoIterator<Item = Directive>>(iter: T) -> Self {
        Self {
            directives: iter.into_iter().collect(),
        }
    }
}

fn join<'a>(directives: impl Iterator<Item = &'a Directive>) -> String {
    directives
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
