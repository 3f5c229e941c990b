//! CSV section endpoints

use std::collections::HashMap;

use pv_core::Result;
use serde::Serialize;

use crate::client::{accept, Client};
use crate::models::*;

#[derive(Serialize)]
struct MultipleColumnsRequest<'a> {
    columns: &'a [String],
    limit: usize,
}

impl Client {
    /// `GET /api/csv/stats`
    pub async fn csv_stats(&self) -> Result<CsvStats> {
        let url = self.endpoint(&["api", "csv", "stats"]);
        let resp: CsvStatsResponse = self.get(url).await?;
        accept(&resp.status, resp.message, resp.stats, "csv stats")
    }

    /// `GET /api/csv/columns`
    pub async fn csv_columns(&self) -> Result<Vec<ColumnSummary>> {
        let url = self.endpoint(&["api", "csv", "columns"]);
        let resp: CsvColumnsResponse = self.get(url).await?;
        accept(&resp.status, resp.message, resp.columns, "csv columns")
    }

    /// `GET /api/csv/column/{name}/data?limit=N`
    pub async fn csv_column_data(&self, column: &str, limit: usize) -> Result<SeriesData> {
        let mut url = self.endpoint(&["api", "csv", "column", column, "data"]);
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        let resp: ColumnDataResponse = self.get(url).await?;
        accept(&resp.status, resp.message, resp.data, "column data")
    }

    /// `POST /api/csv/multiple-columns` — several columns in one request,
    /// used by the scatter chart for its X/Y pair.
    pub async fn csv_multiple_columns(
        &self,
        columns: &[String],
        limit: usize,
    ) -> Result<HashMap<String, SeriesData>> {
        let url = self.endpoint(&["api", "csv", "multiple-columns"]);
        let body = MultipleColumnsRequest { columns, limit };
        let resp: MultipleColumnsResponse = self.post(url, &body).await?;
        accept(&resp.status, resp.message, resp.data, "multiple columns")
    }

    /// `GET /api/csv/random-visualization[?chart_type=T]`
    ///
    /// The backend picks a column suited to the requested chart type and
    /// returns its data alongside the pairing.
    pub async fn csv_sample_visualization(
        &self,
        chart_type: Option<&str>,
    ) -> Result<SampleVisualization> {
        let mut url = self.endpoint(&["api", "csv", "random-visualization"]);
        if let Some(kind) = chart_type {
            url.query_pairs_mut().append_pair("chart_type", kind);
        }
        let resp: SampleVisualizationResponse = self.get(url).await?;
        accept(
            &resp.status,
            resp.message,
            resp.visualization,
            "sample visualization",
        )
    }
}
