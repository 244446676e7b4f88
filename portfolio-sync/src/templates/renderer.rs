//! Project card renderer.

use super::{derive_date, derive_title, live_link, source_link, tech_label, SynthesisInput};
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Handlebars template for a project card.
///
/// The `Live:` link sits on the same line as the `if` block so that omitting
/// it leaves no stray blank line.
pub const PROJECT_TEMPLATE: &str = "---
title: \"{{title}}\"
date: {{date}}
layout: {{layout}}
tech: \"{{tech}}\"
---

{{body}}

Source: [{{source_label}}]({{source_url}}){{#if live_url}}

Live: [{{live_label}}]({{live_url}}){{/if}}
";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Renders project cards.
pub struct ProjectRenderer {
    handlebars: Handlebars<'static>,
    layout: String,
}

impl Default for ProjectRenderer {
    fn default() -> Self {
        Self::new("project")
    }
}

impl ProjectRenderer {
    /// Creates a renderer writing `layout` into every card's front-matter.
    #[must_use]
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            handlebars: create_handlebars_registry(),
            layout: layout.into(),
        }
    }

    /// Returns the configured layout.
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Synthesizes the full markdown document for one repository.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn synthesize(&self, input: &SynthesisInput<'_>) -> Result<String, super::TemplateError> {
        let repo = input.repository;
        let source = source_link(repo);
        let live = live_link(repo);

        let data = json!({
            "title": derive_title(&repo.name),
            "date": derive_date(&repo.created_at),
            "layout": self.layout,
            "tech": tech_label(input.tech_stack, repo.language.as_deref()),
            "body": input.body(),
            "source_label": source.label,
            "source_url": source.url,
            "live_label": live.as_ref().map_or("", |l| l.label.as_str()),
            "live_url": live.as_ref().map_or("", |l| l.url.as_str()),
        });

        self.render_template(PROJECT_TEMPLATE, &data)
    }

    /// Renders a template with the given data.
    fn render_template(
        &self,
        template: &str,
        data: &Value,
    ) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::RepositoryMetadata;
    use crate::tech_stack::TechStack;
    use crate::templates::BodyStyle;
    use chrono::{TimeZone, Utc};

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
            created_at: Utc.with_ymd_and_hms(2023, 7, 14, 8, 30, 0).unwrap(),
            has_pages: false,
        }
    }

    fn render(repo: &RepositoryMetadata, stack: &TechStack, readme: Option<&str>) -> String {
        ProjectRenderer::default()
            .synthesize(&SynthesisInput {
                repository: repo,
                readme,
                ai_description: None,
                fallback_description: "Does things",
                tech_stack: stack,
                body_style: BodyStyle::FullReadme,
            })
            .unwrap()
    }

    fn front_matter_keys(document: &str) -> Vec<String> {
        document
            .split("---")
            .nth(1)
            .unwrap()
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.split(':').next().unwrap().to_string())
            .collect()
    }

    #[test]
    fn renders_complete_document() {
        let mut repo = sample_repo();
        repo.homepage = Some("https://x.io".to_string());
        let mut stack = TechStack::new();
        stack.insert("Rust");
        stack.insert("Docker");

        let document = render(&repo, &stack, Some("# Cool\n\nA cool project."));

        assert_eq!(
            document,
            "---
title: \"My Cool Project\"
date: 2023-07-14
layout: project
tech: \"Rust, Docker\"
---

# Cool

A cool project.

Source: [github.com/octo/my-cool-project](https://github.com/octo/my-cool-project)

Live: [https://x.io](https://x.io)
"
        );
    }

    #[test]
    fn omits_live_line_without_homepage_or_pages() {
        let document = render(&sample_repo(), &TechStack::new(), None);

        assert!(document.ends_with(
            "Does things\n\nSource: [github.com/octo/my-cool-project](https://github.com/octo/my-cool-project)\n"
        ));
        assert!(!document.contains("Live:"));
    }

    #[test]
    fn pages_site_used_when_no_homepage() {
        let mut repo = sample_repo();
        repo.has_pages = true;

        let document = render(&repo, &TechStack::new(), None);

        assert!(document.ends_with(
            "\n\nLive: [octo.github.io/my-cool-project](https://octo.github.io/my-cool-project/)\n"
        ));
    }

    #[test]
    fn front_matter_has_exactly_four_keys_and_non_empty_tech() {
        let mut repo = sample_repo();
        repo.language = None;

        let document = render(&repo, &TechStack::new(), None);

        assert_eq!(front_matter_keys(&document), vec!["title", "date", "layout", "tech"]);
        assert!(document.contains("tech: \"Various technologies\""));
    }

    #[test]
    fn custom_layout_is_written() {
        let repo = sample_repo();
        let stack = TechStack::new();
        let document = ProjectRenderer::new("card")
            .synthesize(&SynthesisInput {
                repository: &repo,
                readme: None,
                ai_description: Some("Generated summary."),
                fallback_description: "unused",
                tech_stack: &stack,
                body_style: BodyStyle::FullReadme,
            })
            .unwrap();

        assert!(document.contains("layout: card\n"));
        assert!(document.contains("\n\nGenerated summary.\n\n"));
    }

    #[test]
    fn no_html_escaping() {
        let repo = sample_repo();
        let document = render(&repo, &TechStack::new(), Some("<b>bold</b> & \"quoted\""));

        // Should NOT escape HTML entities
        assert!(document.contains("<b>bold</b> & \"quoted\""));
    }
}
