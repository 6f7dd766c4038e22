// Project name checks
//
// Names are never rejected: the scaffolder gets the name verbatim and makes
// its own decision. These checks only produce warnings for the log.

use regex::Regex;
use std::path::{Component, Path};
use std::sync::LazyLock;

/// npm package name rules that `create-next-app` applies to the final path segment
static NPM_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9~-][a-z0-9._~-]*/)?[a-z0-9~-][a-z0-9._~-]*$")
        .expect("npm name pattern is valid")
});

/// Warnings about a project name that is likely to misbehave
pub fn project_name_warnings(name: &str) -> Vec<String> {
    let mut warnings = Vec::new();
    let path = Path::new(name);

    if path.is_absolute() {
        warnings.push(format!(
            "Project name '{name}' is an absolute path; the project will be created outside the current directory"
        ));
    }

    if path.components().any(|c| c == Component::ParentDir) {
        warnings.push(format!(
            "Project name '{name}' contains '..'; the project will be created outside the current directory"
        ));
    }

    if name.chars().any(char::is_whitespace) {
        warnings.push(format!("Project name '{name}' contains whitespace"));
    }

    // `@scope/name` is one package name, not a directory plus a name
    let package_name = if name.starts_with('@') {
        name
    } else {
        path.file_name()
            .and_then(|segment| segment.to_str())
            .unwrap_or(name)
    };
    if !NPM_NAME.is_match(package_name) {
        warnings.push(format!(
            "'{package_name}' is not a valid npm package name; create-next-app may refuse it"
        ));
    }

    warnings
}
