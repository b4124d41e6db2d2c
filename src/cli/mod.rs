use crate::config::Config;
use crate::i18n::TargetLanguage;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tesista - 由Rust与AI驱动的学术论文生成引擎
#[derive(Parser, Debug)]
#[command(name = "Tesista (tesista-rs)")]
#[command(
    about = "AI-based generator for academic theses and articles. It chains prompts against a hosted LLM endpoint and enriches every section with citations retrieved from a neural paper-search service."
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// 配置文件路径
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Markdown输出路径
    #[arg(short, long, global = true)]
    pub output_path: Option<PathBuf>,

    /// 目标语言 (es, en, zh)
    #[arg(long, global = true)]
    pub target_language: Option<String>,

    /// 补全服务API基地址
    #[arg(long, global = true)]
    pub llm_api_base_url: Option<String>,

    /// 补全服务API KEY
    #[arg(long, global = true)]
    pub llm_api_key: Option<String>,

    /// 补全模型名称
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// 检索服务API KEY
    #[arg(long, global = true)]
    pub search_api_key: Option<String>,

    /// 每次检索返回的论文数量
    #[arg(long, global = true)]
    pub num_results: Option<usize>,

    /// 生成文章时跳过引用检索
    #[arg(long, global = true)]
    pub no_citations: bool,

    /// 是否禁用缓存
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// 是否启用详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 用户动作
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// 基于研究领域生成论点与完整文章
    Generate {
        /// 感兴趣的科学或哲学领域
        #[arg(short, long)]
        area: String,
    },
    /// 即席检索相关论文
    Search {
        /// 检索查询
        #[arg(short, long)]
        query: String,
    },
}

impl Args {
    /// 将CLI参数转换为配置与用户动作
    pub fn into_parts(self) -> (Config, Command) {
        let mut config = if let Some(config_path) = &self.config {
            // 显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path)
                .unwrap_or_else(|_| panic!("⚠️ 警告: 无法读取配置文件 {:?}", config_path))
        } else {
            // 没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("tesista.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!("⚠️ 警告: 无法读取默认配置文件 {:?}", default_config_path)
                })
            } else {
                Config::default()
            }
        };

        // CLI参数覆盖配置文件中的设置
        if let Some(output_path) = self.output_path {
            config.output_path = Some(output_path);
        }
        if let Some(target_language_str) = self.target_language {
            if let Ok(target_language) = target_language_str.parse::<TargetLanguage>() {
                config.target_language = target_language;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的目标语言: {}，使用默认语言 (Spanish)",
                    target_language_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(search_api_key) = self.search_api_key {
            config.search.api_key = search_api_key;
        }
        if let Some(num_results) = self.num_results {
            config.search.num_results = num_results;
        }
        if self.no_citations {
            config.search.enabled = false;
        }
        if self.no_cache {
            config.cache.enabled = false;
        }

        // 即席检索动作始终需要检索服务
        if matches!(self.command, Command::Search { .. }) {
            config.search.enabled = true;
        }

        config.verbose = self.verbose;

        (config, self.command)
    }
}
