use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一次用户动作生成的结构化文章结果
///
/// 编排逻辑只填充这个结构，展示由独立的出口层完成。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// 用户输入的研究领域
    pub area: String,
    /// 生成的论点，该步骤失败时为None
    pub thesis: Option<String>,
    /// 写作计划
    pub plan: Option<String>,
    /// 各章节内容，按模型返回的顺序排列
    pub sections: Vec<ArticleSection>,
    /// 面向用户的提示信息（失败与降级说明）
    pub notices: Vec<String>,
    /// 生成时间
    pub generated_at: DateTime<Utc>,
}

impl Article {
    pub fn new(area: &str) -> Self {
        Self {
            area: area.to_string(),
            thesis: None,
            plan: None,
            sections: Vec::new(),
            notices: Vec::new(),
            generated_at: Utc::now(),
        }
    }
}

/// 单个章节：标题、正文与引用块
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSection {
    pub title: String,
    /// 正文，生成失败时为None
    pub body: Option<String>,
    /// 已渲染的引用列表，无可用引用时为空字符串
    pub references: String,
}
