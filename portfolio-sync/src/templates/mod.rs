//! Project card synthesis.
//!
//! Turns repository metadata, an optional README and the detected stack into
//! the markdown document written to the output directory.

mod error;
mod excerpt;
mod renderer;

pub use error::TemplateError;
pub use excerpt::{readme_excerpt, EXCERPT_LINES};
pub use renderer::{create_handlebars_registry, ProjectRenderer, PROJECT_TEMPLATE};

use crate::github::RepositoryMetadata;
use crate::tech_stack::{TechStack, DEFAULT_TECH_LABEL};
use chrono::{DateTime, Utc};

/// How a README is turned into the document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStyle {
    /// The README is used verbatim.
    FullReadme,
    /// Only a short prose excerpt of the README is used.
    Excerpt,
}

/// Everything needed to synthesize one project card.
#[derive(Debug, Clone)]
pub struct SynthesisInput<'a> {
    /// Repository the card describes.
    pub repository: &'a RepositoryMetadata,
    /// Decoded README, if the repository has one.
    pub readme: Option<&'a str>,
    /// Generated description, if a text generator produced one.
    pub ai_description: Option<&'a str>,
    /// Heuristic description used when nothing better is available.
    pub fallback_description: &'a str,
    /// Detected technology stack.
    pub tech_stack: &'a TechStack,
    /// README treatment.
    pub body_style: BodyStyle,
}

impl SynthesisInput<'_> {
    /// Selects the body: README, then generated text, then the fallback.
    #[must_use]
    pub fn body(&self) -> String {
        let readme = self
            .readme
            .filter(|readme| !readme.trim().is_empty())
            .and_then(|readme| match self.body_style {
                BodyStyle::FullReadme => Some(readme.to_string()),
                BodyStyle::Excerpt => {
                    let excerpt = readme_excerpt(readme);
                    (!excerpt.is_empty()).then_some(excerpt)
                }
            });

        readme
            .or_else(|| self.ai_description.map(str::to_string))
            .unwrap_or_else(|| self.fallback_description.to_string())
    }
}

/// A markdown link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Visible text.
    pub label: String,
    /// Target URL.
    pub url: String,
}

/// Derives the display title from a repository name.
///
/// Format: hyphen-separated segments capitalized and joined with spaces,
/// e.g. "my-cool-project" -> "My Cool Project".
#[must_use]
pub fn derive_title(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Formats the creation date as `YYYY-MM-DD` (UTC).
#[must_use]
pub fn derive_date(created_at: &DateTime<Utc>) -> String {
    created_at.format("%Y-%m-%d").to_string()
}

/// Builds the `tech` front-matter value; never empty.
#[must_use]
pub fn tech_label(stack: &TechStack, language: Option<&str>) -> String {
    if !stack.is_empty() {
        return stack.joined();
    }
    language
        .filter(|language| !language.is_empty())
        .unwrap_or(DEFAULT_TECH_LABEL)
        .to_string()
}

/// Link to the repository's canonical web page.
#[must_use]
pub fn source_link(repo: &RepositoryMetadata) -> Link {
    Link {
        label: format!("github.com/{}/{}", repo.owner, repo.name),
        url: repo.html_url(),
    }
}

/// Link to the live site: the homepage, else the GitHub Pages site, else none.
#[must_use]
pub fn live_link(repo: &RepositoryMetadata) -> Option<Link> {
    if let Some(homepage) = &repo.homepage {
        return Some(Link {
            label: homepage.clone(),
            url: homepage.clone(),
        });
    }
    if repo.has_pages {
        return Some(Link {
            label: format!("{}.github.io/{}", repo.owner, repo.name),
            url: format!("https://{}.github.io/{}/", repo.owner, repo.name),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_repo() -> RepositoryMetadata {
        RepositoryMetadata {
            owner: "octo".to_string(),
            name: "my-cool-project".to_string(),
            description: Some("Does things".to_string()),
            homepage: None,
            language: Some("Rust".to_string()),
            topics: Vec::new(),
            archived: false,
            private: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap(),
            has_pages: false,
        }
    }

    fn input<'a>(
        repo: &'a RepositoryMetadata,
        stack: &'a TechStack,
        readme: Option<&'a str>,
        ai: Option<&'a str>,
        style: BodyStyle,
    ) -> SynthesisInput<'a> {
        SynthesisInput {
            repository: repo,
            readme,
            ai_description: ai,
            fallback_description: "Fallback text",
            tech_stack: stack,
            body_style: style,
        }
    }

    #[test]
    fn test_derive_title() {
        assert_eq!(derive_title("my-cool-project"), "My Cool Project");
        assert_eq!(derive_title("widget"), "Widget");
        assert_eq!(derive_title("api-v2"), "Api V2");
    }

    #[test]
    fn test_derive_date() {
        assert_eq!(derive_date(&sample_repo().created_at), "2024-01-31");
    }

    #[test]
    fn tech_label_falls_back_to_language_then_default() {
        let mut stack = TechStack::new();
        assert_eq!(tech_label(&stack, Some("Rust")), "Rust");
        assert_eq!(tech_label(&stack, None), "Various technologies");
        assert_eq!(tech_label(&stack, Some("")), "Various technologies");

        stack.insert("Rust");
        stack.insert("Docker");
        assert_eq!(tech_label(&stack, Some("Go")), "Rust, Docker");
    }

    #[test]
    fn homepage_takes_precedence_over_pages() {
        let mut repo = sample_repo();
        repo.homepage = Some("https://x.io".to_string());
        repo.has_pages = true;

        let live = live_link(&repo).unwrap();
        assert_eq!(live.url, "https://x.io");
        assert_eq!(live.label, "https://x.io");
    }

    #[test]
    fn pages_link_is_synthesized() {
        let mut repo = sample_repo();
        repo.has_pages = true;

        let live = live_link(&repo).unwrap();
        assert_eq!(live.label, "octo.github.io/my-cool-project");
        assert_eq!(live.url, "https://octo.github.io/my-cool-project/");
    }

    #[test]
    fn no_live_link_without_homepage_or_pages() {
        assert_eq!(live_link(&sample_repo()), None);
    }

    #[test]
    fn body_priority_readme_then_ai_then_fallback() {
        let repo = sample_repo();
        let stack = TechStack::new();

        let body = input(&repo, &stack, Some("# Readme\nText"), Some("AI"), BodyStyle::FullReadme).body();
        assert_eq!(body, "# Readme\nText");

        let body = input(&repo, &stack, None, Some("AI"), BodyStyle::FullReadme).body();
        assert_eq!(body, "AI");

        let body = input(&repo, &stack, None, None, BodyStyle::FullReadme).body();
        assert_eq!(body, "Fallback text");
    }

    #[test]
    fn excerpt_style_truncates_readme() {
        let repo = sample_repo();
        let stack = TechStack::new();

        let body = input(&repo, &stack, Some("# Readme\nText"), None, BodyStyle::Excerpt).body();
        assert_eq!(body, "Text");
    }

    #[test]
    fn empty_excerpt_falls_through_to_fallback() {
        let repo = sample_repo();
        let stack = TechStack::new();

        let body = input(&repo, &stack, Some("# Only a heading"), None, BodyStyle::Excerpt).body();
        assert_eq!(body, "Fallback text");
    }

    #[test]
    fn blank_readme_counts_as_absent() {
        let repo = sample_repo();
        let stack = TechStack::new();

        let body = input(&repo, &stack, Some(""), Some("AI"), BodyStyle::FullReadme).body();
        assert_eq!(body, "AI");

        let body = input(&repo, &stack, Some(" \n\t\n"), None, BodyStyle::FullReadme).body();
        assert_eq!(body, "Fallback text");
    }
}
