use std::time::Duration;

use async_trait::async_trait;
use log::{ debug, info, warn };
use serde::Deserialize;

use crate::config::Credentials;
use crate::errors::{ ComplianceError, ComplianceResult };
use crate::implementations::config::AgentConfig;
use crate::traits::search_tool::{ SearchHit, SearchTool };

#[derive(Debug, Deserialize)]
struct SerperOrganic {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperOrganic>,
}

/// Google search through the Serper API
#[derive(Clone)]
pub struct SerperSearchTool {
    endpoint: String,
    api_key: String,
    results: usize,
    http_client: reqwest::Client,
}

impl SerperSearchTool {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        results: usize,
        timeout: Duration
    ) -> ComplianceResult<Self> {
        let http_client = reqwest::Client
            ::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ComplianceError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            results,
            http_client,
        })
    }

    pub fn from_config(config: &AgentConfig, credentials: &Credentials) -> ComplianceResult<Self> {
        let api_key = credentials
            .search_key()
            .ok_or_else(|| ComplianceError::MissingCredential("SERPER_API_KEY".to_string()))?;
        Self::new(
            config.search_endpoint.clone(),
            api_key,
            config.search_results,
            Duration::from_secs(config.request_timeout_secs)
        )
    }
}

#[async_trait]
impl SearchTool for SerperSearchTool {
    async fn search(&self, query: &str) -> ComplianceResult<Vec<SearchHit>> {
        info!("Searching: {}", query);

        let body = serde_json::json!({ "q": query, "num": self.results });
        let response = self.http_client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send().await
            .map_err(|e| {
                warn!("Search request failed: {}", e);
                ComplianceError::NetworkError(format!("Network error when calling Serper API: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            warn!("Search API error: HTTP {} - {}", status, error_text);
            return Err(ComplianceError::HttpError {
                service: "serper".to_string(),
                status,
                message: error_text,
            });
        }

        let text = response
            .text().await
            .map_err(|e| ComplianceError::SearchError(e.to_string()))?;
        let hits = parse_serper_response(&text)?;
        debug!("Search returned {} results", hits.len());
        Ok(hits)
    }
}

pub fn parse_serper_response(body: &str) -> ComplianceResult<Vec<SearchHit>> {
    let response: SerperResponse = serde_json
        ::from_str(body)
        .map_err(|e| ComplianceError::SearchError(format!("Invalid search response: {}", e)))?;

    Ok(
        response.organic
            .into_iter()
            .map(|o| SearchHit {
                title: o.title,
                link: o.link,
                snippet: o.snippet,
            })
            .collect()
    )
}
