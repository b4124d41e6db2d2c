use serde::{Deserialize, Serialize};

/// 神经检索请求体，固定限定在"research paper"类别并开启自动提示
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(rename = "type")]
    pub search_type: String,
    pub category: String,
    #[serde(rename = "useAutoprompt")]
    pub use_autoprompt: bool,
    #[serde(rename = "numResults")]
    pub num_results: usize,
}

/// 检索响应体
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<PaperRecord>,
}

/// 论文记录
///
/// 所有字段按检索服务的响应原样反序列化，不做本地校验或归一化，
/// 缺失字段在引用渲染时替换为占位文本。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Authors>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "abstract")]
    pub summary: Option<String>,
}

/// 作者字段：不同版本的检索服务返回字符串列表或自由文本
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Authors {
    List(Vec<String>),
    Text(String),
}
