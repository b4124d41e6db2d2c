use std::sync::Arc;

use anyhow::Result;

use crate::cache::CacheManager;
use crate::config::Config;
use crate::llm::{CompletionClient, CompletionTransport};
use crate::search::{SearchClient, SearchTransport};

/// 应用上下文
///
/// 启动时构建一次，显式传递给编排与出口层；两个客户端共享同一个
/// 进程生命周期的缓存管理器。
pub struct AppContext {
    /// 配置
    pub config: Config,
    /// 补全客户端
    pub completion: CompletionClient,
    /// 检索客户端
    pub search: SearchClient,
    /// 缓存管理器
    pub cache: Arc<CacheManager>,
}

impl AppContext {
    /// 基于配置创建生产环境上下文
    pub fn new(config: Config) -> Result<Self> {
        let cache = Arc::new(CacheManager::new(config.cache.clone()));
        let completion = CompletionClient::new(config.llm.clone(), cache.clone())?;
        let search = SearchClient::new(config.search.clone(), cache.clone())?;

        Ok(Self {
            config,
            completion,
            search,
            cache,
        })
    }

    /// 注入自定义通道的上下文，用于测试
    pub fn with_transports(
        config: Config,
        completion_transport: Arc<dyn CompletionTransport>,
        search_transport: Arc<dyn SearchTransport>,
    ) -> Self {
        let cache = Arc::new(CacheManager::new(config.cache.clone()));
        let completion =
            CompletionClient::with_transport(config.llm.clone(), completion_transport, cache.clone());
        let search =
            SearchClient::with_transport(config.search.clone(), search_transport, cache.clone());

        Self {
            config,
            completion,
            search,
            cache,
        }
    }
}
