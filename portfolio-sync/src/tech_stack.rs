//! Technology stack detection.
//!
//! Labels come from the repository's language and topics, followed by a fixed
//! table of heuristics over the top-level file names.

use crate::github::RepositoryMetadata;
use serde::Serialize;

/// Literal used when neither the stack nor the language yields a label.
pub const DEFAULT_TECH_LABEL: &str = "Various technologies";

/// Deduplicated technology labels in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechStack(Vec<String>);

impl TechStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a label unless it is already present.
    pub fn insert(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.contains(&label) {
            self.0.push(label);
        }
    }

    /// Returns true if `label` is present.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|existing| existing == label)
    }

    /// Returns true if no labels were detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates labels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Joins the labels with `", "`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// Predicate over a repository's top-level file names.
enum Rule {
    /// Any of the named files is present.
    File(&'static [&'static str]),
    /// Any file ends with one of the extensions.
    Extension(&'static [&'static str]),
}

impl Rule {
    fn matches(&self, files: &[String]) -> bool {
        match self {
            Self::File(names) => files.iter().any(|f| names.contains(&f.as_str())),
            Self::Extension(exts) => files
                .iter()
                .any(|f| exts.iter().any(|ext| f.ends_with(ext))),
        }
    }
}

/// Ordered detection table. Each matching rule contributes its label once.
const RULES: &[(Rule, &str)] = &[
    (Rule::File(&["package.json"]), "Node.js"),
    (Rule::File(&["requirements.txt", "setup.py"]), "Python"),
    (Rule::File(&["Gemfile"]), "Ruby"),
    (Rule::File(&["pom.xml", "build.gradle"]), "Java"),
    (Rule::File(&["Cargo.toml"]), "Rust"),
    (Rule::File(&["go.mod"]), "Go"),
    (Rule::File(&["Dockerfile"]), "Docker"),
    (Rule::Extension(&[".tsx", ".jsx"]), "React"),
    (Rule::File(&["angular.json"]), "Angular"),
    (Rule::File(&["vue.config.js"]), "Vue.js"),
    (Rule::File(&["next.config.js"]), "Next.js"),
    (Rule::File(&["tsconfig.json"]), "TypeScript"),
    (Rule::File(&["tailwind.config.js"]), "Tailwind CSS"),
];

/// Detects the technology stack of a repository.
///
/// Languages come first, then topics, then labels from the rule table.
/// Identical inputs always produce the same order.
#[must_use]
pub fn detect(files: &[String], languages: &[String], topics: &[String]) -> TechStack {
    let mut stack = TechStack::new();

    for label in languages.iter().chain(topics) {
        stack.insert(label.as_str());
    }

    for (rule, label) in RULES {
        if rule.matches(files) {
            stack.insert(*label);
        }
    }

    stack
}

/// Detects the stack for `repo` from its language, topics and file listing.
#[must_use]
pub fn detect_for(repo: &RepositoryMetadata, files: &[String]) -> TechStack {
    let languages: Vec<String> = repo.language.iter().cloned().collect();
    detect(files, &languages, &repo.topics)
}

/// Short phrases describing project hygiene visible from the file listing.
#[must_use]
pub fn feature_highlights(files: &[String]) -> Vec<&'static str> {
    let has = |name: &str| files.iter().any(|f| f == name);
    let mut features = Vec::new();

    if has("README.md") {
        features.push("Well documented");
    }
    if files.iter().any(|f| f.contains("test")) {
        features.push("Includes tests");
    }
    if has(".github") {
        features.push("CI/CD enabled");
    }
    if has("LICENSE") {
        features.push("Open source");
    }

    features
}

/// Builds the heuristic description used when there is no README or AI text.
#[must_use]
pub fn fallback_description(
    repo: &RepositoryMetadata,
    files: &[String],
    stack: &TechStack,
) -> String {
    if let Some(description) = &repo.description {
        return description.clone();
    }

    if files.is_empty() {
        return format!("A project by {}.", repo.owner);
    }

    let mut description = format!(
        "This is a {} project",
        repo.language.as_deref().unwrap_or("software")
    );
    if !stack.is_empty() {
        let leading: Vec<&str> = stack.iter().take(3).collect();
        description.push_str(" built with ");
        description.push_str(&leading.join(", "));
    }
    description.push('.');

    let features = feature_highlights(files);
    if !features.is_empty() {
        description.push(' ');
        description.push_str(&features.join(". "));
        description.push('.');
    }

    description
}
