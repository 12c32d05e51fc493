use async_trait::async_trait;

use crate::errors::ComplianceResult;

/// A single web search hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

/// Web search capability bound to the agent
#[async_trait]
pub trait SearchTool: Send + Sync {
    /// Run `query` and return the hits in ranking order
    async fn search(&self, query: &str) -> ComplianceResult<Vec<SearchHit>>;
}

/// Render hits as the plain text the agent reads
pub fn format_hits(query: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("No results found for '{}'.", query);
    }

    let mut out = format!("Search results for '{}':\n", query);
    for hit in hits {
        out.push_str(&format!("---\nTitle: {}\nLink: {}\nSnippet: {}\n", hit.title, hit.link, hit.snippet));
    }
    out
}
