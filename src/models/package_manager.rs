use serde::Deserialize;
use std::fmt;

/// Runtime dependencies added to every scaffolded project
pub const RUNTIME_DEPENDENCIES: &[&str] = &[
    "@tanstack/react-query",
    "@tanstack/react-query-devtools",
    "axios",
    "jsonwebtoken",
    "zod",
    "zustand",
    "react-hook-form",
    "@types/jsonwebtoken",
];

/// Development-only dependencies added to every scaffolded project
pub const DEV_DEPENDENCIES: &[&str] = &["@tanstack/eslint-plugin-query", "orval"];

/// JavaScript package manager used to install dependencies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Yarn,
    Npm,
    Pnpm,
}

impl PackageManager {
    /// Executable name
    pub const fn program(self) -> &'static str {
        match self {
            Self::Yarn => "yarn",
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
        }
    }

    /// Subcommand and flags that add packages, before the package list
    pub fn add_args(self, dev: bool) -> Vec<&'static str> {
        match (self, dev) {
            (Self::Yarn | Self::Pnpm, false) => vec!["add"],
            (Self::Yarn | Self::Pnpm, true) => vec!["add", "-D"],
            (Self::Npm, false) => vec!["install"],
            (Self::Npm, true) => vec!["install", "--save-dev"],
        }
    }

    /// Command that starts the Next.js dev server
    pub const fn dev_command(self) -> &'static str {
        match self {
            Self::Yarn => "yarn dev",
            Self::Npm => "npm run dev",
            Self::Pnpm => "pnpm dev",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}
