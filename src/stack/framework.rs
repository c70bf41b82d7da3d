//! Framework classification
//!
//! Frameworks are detected by an ordered rule table. Config-file markers come
//! before dependency checks, so a Next.js app that also depends on `react` is
//! still classified as `next`.

use super::{FileSet, FrameworkId, Manifest};

/// Evidence a rule looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkSignal {
    /// Any of these relative paths is present
    MarkerFile(&'static [&'static str]),
    /// The manifest `dependencies` lists this package
    Dependency(&'static str),
}

impl FrameworkSignal {
    pub fn matches(&self, files: &FileSet, manifest: Option<&Manifest>) -> bool {
        match self {
            FrameworkSignal::MarkerFile(markers) => files.contains_any(markers),
            FrameworkSignal::Dependency(name) => {
                manifest.is_some_and(|m| m.has_dependency(name))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkRule {
    pub framework: FrameworkId,
    pub signal: FrameworkSignal,
}

/// Evaluated top to bottom; the first match wins.
pub static FRAMEWORK_RULES: &[FrameworkRule] = &[
    FrameworkRule {
        framework: FrameworkId::Nuxt,
        signal: FrameworkSignal::MarkerFile(&["nuxt.config.js", "nuxt.config.ts"]),
    },
    FrameworkRule {
        framework: FrameworkId::Next,
        signal: FrameworkSignal::MarkerFile(&["next.config.js", "next.config.ts"]),
    },
    FrameworkRule {
        framework: FrameworkId::Vue,
        signal: FrameworkSignal::MarkerFile(&["vue.config.js"]),
    },
    FrameworkRule {
        framework: FrameworkId::React,
        signal: FrameworkSignal::Dependency("react"),
    },
    FrameworkRule {
        framework: FrameworkId::Node,
        signal: FrameworkSignal::Dependency("express"),
    },
];

pub fn detect_framework(files: &FileSet, manifest: Option<&Manifest>) -> FrameworkId {
    FRAMEWORK_RULES
        .iter()
        .find(|rule| rule.signal.matches(files, manifest))
        .map(|rule| rule.framework)
        .unwrap_or(FrameworkId::Unknown)
}
