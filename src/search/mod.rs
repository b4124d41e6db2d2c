//! 检索客户端 - 与神经论文检索服务交互

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::CacheManager;
use crate::config::SearchConfig;
use crate::error::ApiError;

pub mod types;
pub use types::{Authors, PaperRecord, SearchRequest, SearchResponse};

/// 检索缓存类别
pub const CACHE_CATEGORY: &str = "search";

/// 检索请求的发送通道，测试中可替换为脚本化实现
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn send(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError>;
}

/// 基于reqwest的生产环境通道
pub struct HttpSearchTransport {
    http: reqwest::Client,
    api_base_url: String,
    api_key: String,
}

impl HttpSearchTransport {
    pub fn new(config: &SearchConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(Self {
            http,
            api_base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl SearchTransport for HttpSearchTransport {
    async fn send(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        let response = self
            .http
            .post(&self.api_base_url)
            .header("x-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(ApiError::classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}

/// 检索客户端
///
/// 调用失败返回归类后的错误，调用方应将其视为"暂无引用可用"而不是
/// 中断整条生成链。
pub struct SearchClient {
    config: SearchConfig,
    transport: Arc<dyn SearchTransport>,
    cache: Arc<CacheManager>,
}

impl SearchClient {
    /// 创建生产环境的检索客户端
    pub fn new(config: SearchConfig, cache: Arc<CacheManager>) -> Result<Self, ApiError> {
        let transport = Arc::new(HttpSearchTransport::new(&config)?);
        Ok(Self::with_transport(config, transport, cache))
    }

    /// 使用自定义通道创建检索客户端
    pub fn with_transport(
        config: SearchConfig,
        transport: Arc<dyn SearchTransport>,
        cache: Arc<CacheManager>,
    ) -> Self {
        Self {
            config,
            transport,
            cache,
        }
    }

    /// 执行一次神经检索，返回论文记录列表
    ///
    /// 字节级相同的查询在同一进程内只触发一次外部请求。
    pub async fn search(&self, query: &str) -> Result<Vec<PaperRecord>, ApiError> {
        let request = SearchRequest {
            query: query.to_string(),
            search_type: String::from("neural"),
            category: String::from("research paper"),
            use_autoprompt: true,
            num_results: self.config.num_results,
        };
        let payload =
            serde_json::to_string(&request).map_err(|e| ApiError::Request(e.to_string()))?;

        if let Some(results) = self.cache.get::<Vec<PaperRecord>>(CACHE_CATEGORY, &payload) {
            return Ok(results);
        }

        let response = self.transport.send(&request).await?;
        self.cache.set(CACHE_CATEGORY, &payload, &response.results);
        Ok(response.results)
    }
}
