//! 补全客户端 - 提供统一的聊天补全服务接口

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::CacheManager;
use crate::config::CompletionConfig;
use crate::error::ApiError;

pub mod types;
pub use types::{ChatMessage, ChatRequest, ChatResponse};

/// 补全缓存类别
pub const CACHE_CATEGORY: &str = "completion";

/// 补全请求的发送通道，测试中可替换为脚本化实现
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;
}

/// 基于reqwest的生产环境通道
pub struct HttpCompletionTransport {
    http: reqwest::Client,
    api_base_url: String,
    api_key: String,
}

impl HttpCompletionTransport {
    pub fn new(config: &CompletionConfig) -> Result<Self, ApiError> {
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
impl CompletionTransport for HttpCompletionTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let response = self
            .http
            .post(&self.api_base_url)
            .bearer_auth(&self.api_key)
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
            .json::<ChatResponse>()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}

/// 补全客户端
///
/// 负责请求构建、缓存复用与错误归类。每次失败都是该调用的终态，
/// 不做自动重试。
pub struct CompletionClient {
    config: CompletionConfig,
    transport: Arc<dyn CompletionTransport>,
    cache: Arc<CacheManager>,
}

impl CompletionClient {
    /// 创建生产环境的补全客户端
    pub fn new(config: CompletionConfig, cache: Arc<CacheManager>) -> Result<Self, ApiError> {
        let transport = Arc::new(HttpCompletionTransport::new(&config)?);
        Ok(Self::with_transport(config, transport, cache))
    }

    /// 使用自定义通道创建补全客户端
    pub fn with_transport(
        config: CompletionConfig,
        transport: Arc<dyn CompletionTransport>,
        cache: Arc<CacheManager>,
    ) -> Self {
        Self {
            config,
            transport,
            cache,
        }
    }

    fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            max_completion_tokens: self.config.max_completion_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            messages: vec![ChatMessage {
                role: String::from("user"),
                content: prompt.to_string(),
            }],
        }
    }

    /// 发送单条用户消息并返回首个补全文本
    ///
    /// 字节级相同的提示词在同一进程内只触发一次外部请求。
    pub async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        let request = self.build_request(prompt);
        let payload =
            serde_json::to_string(&request).map_err(|e| ApiError::Request(e.to_string()))?;

        if let Some(content) = self.cache.get::<String>(CACHE_CATEGORY, &payload) {
            return Ok(content);
        }

        let response = self.transport.send(&request).await?;
        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ApiError::MalformedResponse(String::from("response contains no choices"))
            })?;

        self.cache.set(CACHE_CATEGORY, &payload, &content);
        Ok(content)
    }
}
