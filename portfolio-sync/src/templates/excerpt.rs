//! Short-form README excerpts.

use regex::Regex;
use std::sync::LazyLock;

/// Number of README lines kept in an excerpt.
pub const EXCERPT_LINES: usize = 5;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#.*$").expect("valid heading pattern"));

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid code fence pattern"));

/// Reduces a README to its first few prose lines.
///
/// Heading lines and fenced code blocks are removed, blank lines dropped, and
/// the first [`EXCERPT_LINES`] remaining lines are joined with blank lines.
#[must_use]
pub fn readme_excerpt(readme: &str) -> String {
    let without_headings = HEADING.replace_all(readme, "");
    let without_code = FENCED_CODE.replace_all(&without_headings, "");

    without_code
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(EXCERPT_LINES)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_headings_code_and_blank_lines() {
        let readme = "# Widget\n\
\n\
Line one.\n\
```bash\n\
cargo run\n\
```\n\
Line two.\n\
\n\
Line three.\n\
Line four.\n\
Line five.\n\
Line six.\n\
Line seven.\n\
Line eight.\n";

        let excerpt = readme_excerpt(readme);

        assert_eq!(
            excerpt,
            "Line one.\n\nLine two.\n\nLine three.\n\nLine four.\n\nLine five."
        );
        assert!(!excerpt.contains('#'));
        assert!(!excerpt.contains("cargo run"));
    }

    #[test]
    fn keeps_everything_when_short() {
        assert_eq!(readme_excerpt("Only line"), "Only line");
    }

    #[test]
    fn headings_only_yield_empty_excerpt() {
        assert_eq!(readme_excerpt("# Title\n## Subtitle\n"), "");
    }

    #[test]
    fn code_fence_with_comment_lines_is_removed() {
        let readme = "Intro\n```sh\n# install\nmake\n```\nOutro";
        assert_eq!(readme_excerpt(readme), "Intro\n\nOutro");
    }
}
