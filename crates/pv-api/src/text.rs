//! Text section endpoints

use pv_core::Result;
use serde::Serialize;

use crate::client::{accept, Client};
use crate::models::*;

#[derive(Serialize)]
struct ProcessTextRequest<'a> {
    text: &'a str,
}

impl Client {
    /// `GET /api/text/articles`
    pub async fn text_articles(&self) -> Result<Vec<ArticleEntry>> {
        let url = self.endpoint(&["api", "text", "articles"]);
        let resp: ArticlesResponse = self.get(url).await?;
        accept(&resp.status, resp.message, resp.articles, "articles")
    }

    /// `GET /api/text/analyze/{name}` — full analysis of a stored article.
    pub async fn text_analysis(&self, name: &str) -> Result<TextAnalysis> {
        let url = self.endpoint(&["api", "text", "analyze", name]);
        let resp: TextAnalysisResponse = self.get(url).await?;
        accept(&resp.status, resp.message, resp.result, "text analysis")
    }

    /// `POST /api/text/process` — analyze caller-provided text.
    pub async fn text_process(&self, text: &str) -> Result<TextAnalysis> {
        let url = self.endpoint(&["api", "text", "process"]);
        let resp: TextAnalysisResponse = self.post(url, &ProcessTextRequest { text }).await?;
        accept(&resp.status, resp.message, resp.result, "text analysis")
    }
}
