use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::i18n::TargetLanguage;

/// 应用程序配置
///
/// 启动时构建一次，显式传递给所有客户端，不依赖任何全局状态。
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// 目标语言
    pub target_language: TargetLanguage,

    /// Markdown输出路径（不设置则只展示到控制台）
    pub output_path: Option<PathBuf>,

    /// 是否启用详细日志
    pub verbose: bool,

    /// 补全服务配置
    pub llm: CompletionConfig,

    /// 检索服务配置
    pub search: SearchConfig,

    /// 缓存配置
    pub cache: CacheConfig,
}

/// 补全服务配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct CompletionConfig {
    /// 补全服务API KEY
    pub api_key: String,

    /// 补全服务API地址
    pub api_base_url: String,

    /// 模型名称
    pub model: String,

    /// 最大补全tokens
    pub max_completion_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 核采样参数
    pub top_p: f64,

    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

/// 检索服务配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// 是否在生成文章时检索引用
    pub enabled: bool,

    /// 检索服务API KEY
    pub api_key: String,

    /// 检索服务API地址
    pub api_base_url: String,

    /// 每次检索返回的论文数量
    pub num_results: usize,

    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

/// 缓存配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// 是否启用缓存
    pub enabled: bool,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 校验启动所需的密钥，缺失即启动失败
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            anyhow::bail!(
                "missing completion API key: set TESISTA_LLM_API_KEY or [llm].api_key in tesista.toml"
            );
        }
        if self.search.enabled && self.search.api_key.trim().is_empty() {
            anyhow::bail!(
                "missing search API key: set TESISTA_SEARCH_API_KEY or [search].api_key in tesista.toml, or disable citation search with --no-citations"
            );
        }
        Ok(())
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("TESISTA_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.kluster.ai/v1/chat/completions"),
            model: String::from("klusterai/Meta-Llama-3.1-405B-Instruct-Turbo"),
            max_completion_tokens: 5000,
            temperature: 1.0,
            top_p: 1.0,
            timeout_seconds: 60,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: std::env::var("TESISTA_SEARCH_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.metaphor.systems/search"),
            num_results: 3,
            timeout_seconds: 60,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
