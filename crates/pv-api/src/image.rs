//! Image section endpoints

use pv_core::Result;

use crate::client::{accept, Client};
use crate::models::*;

impl Client {
    /// `GET /api/image/stats`
    pub async fn image_stats(&self) -> Result<ImageStats> {
        let url = self.endpoint(&["api", "image", "stats"]);
        let resp: ImageStatsResponse = self.get(url).await?;
        accept(&resp.status, resp.message, resp.stats, "image stats")
    }

    /// `GET /api/image/logos`
    pub async fn image_logos(&self) -> Result<Vec<LogoEntry>> {
        let url = self.endpoint(&["api", "image", "logos"]);
        let resp: LogosResponse = self.get(url).await?;
        accept(&resp.status, resp.message, resp.logos, "logos")
    }

    /// `GET /api/image/analyze/{name}` — dominant colors of one logo.
    pub async fn image_analysis(&self, name: &str) -> Result<ImageAnalysis> {
        let url = self.endpoint(&["api", "image", "analyze", name]);
        let resp: ImageAnalysisResponse = self.get(url).await?;
        accept(&resp.status, resp.message, resp.image, "image analysis")
    }

    /// `GET /api/image/histograms/{name}` — RGB/HSV channel histograms.
    pub async fn image_histograms(&self, name: &str) -> Result<ImageHistograms> {
        let url = self.endpoint(&["api", "image", "histograms", name]);
        let resp: ImageHistogramsResponse = self.get(url).await?;
        accept(&resp.status, resp.message, resp.histograms, "histograms")
    }

    /// `GET /api/image/comparison?limit=N` — top colors per club.
    pub async fn image_comparison(&self, limit: usize) -> Result<Vec<ClubPalette>> {
        let mut url = self.endpoint(&["api", "image", "comparison"]);
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        let resp: ComparisonResponse = self.get(url).await?;
        accept(&resp.status, resp.message, resp.clubs, "comparison")
    }

    /// `GET /api/image/global-analysis`
    pub async fn image_global_analysis(&self) -> Result<GlobalAnalysis> {
        let url = self.endpoint(&["api", "image", "global-analysis"]);
        let resp: GlobalAnalysisResponse = self.get(url).await?;
        accept(&resp.status, resp.message, resp.analysis, "global analysis")
    }
}
