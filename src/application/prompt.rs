use crate::domain::entities::article::Article;
use std::fmt::Write;

/// How much of each article lands in the prompt. Full content is the
/// richer default; `Brief` keeps the prompt within tighter input limits
/// at lower cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptVerbosity {
    /// Title and description only.
    Brief,
    /// Title, description, and full article content.
    #[default]
    Full,
}

/// Rendered classification request, ready for a single-turn completion
/// call. Built fresh per invocation and never persisted.
#[derive(Debug, Clone)]
pub struct PromptPayload(String);

impl PromptPayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The exact answer contract the parser depends on: one JSON object with
/// a free-text `Reasoning` and a boolean `ValueWillDrop`, nothing else.
const ANSWER_SCHEMA: &str =
    "{\"Reasoning\": \"[explanation with quotes]\", \"ValueWillDrop\": [true/false]}";

/// Render the selected articles plus the asset name into the prompt.
/// Deterministic for identical inputs. Articles with empty descriptions
/// or content keep their slot with an empty segment, so per-article
/// indexing stays stable when debugging a classifier response.
pub fn build(articles: &[Article], asset_name: &str, verbosity: PromptVerbosity) -> PromptPayload {
    let mut prompt = format!(
        "Act as a cryptocurrency specialist and analyze the following news \
         articles about {asset_name} and determine if the market sentiment \
         indicates a price drop.\n\n\
         Then, answer using the exact following JSON pattern:\n\n\
         ```json\n{ANSWER_SCHEMA}\n```\n\n\
         DATA:\n\"\"\"\n"
    );

    for article in articles {
        let _ = write!(
            prompt,
            "- Title: {}\n  Description: {}\n",
            article.title, article.description
        );
        if verbosity == PromptVerbosity::Full {
            let _ = write!(prompt, "  Content: {}\n", article.content);
        }
        prompt.push('\n');
    }
    prompt.push_str("\"\"\"");

    PromptPayload(prompt)
}
