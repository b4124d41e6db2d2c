use serde::{Deserialize, Serialize};

/// 生成内容的目标语言
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub enum TargetLanguage {
    #[serde(rename = "es")]
    #[default]
    Spanish,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetLanguage::Spanish => write!(f, "es"),
            TargetLanguage::English => write!(f, "en"),
            TargetLanguage::Chinese => write!(f, "zh"),
        }
    }
}

impl std::str::FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "es" => Ok(TargetLanguage::Spanish),
            "en" => Ok(TargetLanguage::English),
            "zh" => Ok(TargetLanguage::Chinese),
            _ => Err(format!("Unknown target language: {}", s)),
        }
    }
}

impl TargetLanguage {
    /// 文章总标题
    pub fn heading_article(&self) -> &'static str {
        match self {
            TargetLanguage::Spanish => "Artículo Académico",
            TargetLanguage::English => "Academic Article",
            TargetLanguage::Chinese => "学术文章",
        }
    }

    /// 论点块标题
    pub fn heading_thesis(&self) -> &'static str {
        match self {
            TargetLanguage::Spanish => "Tesis Generada",
            TargetLanguage::English => "Generated Thesis",
            TargetLanguage::Chinese => "生成的论点",
        }
    }

    /// 写作计划块标题
    pub fn heading_plan(&self) -> &'static str {
        match self {
            TargetLanguage::Spanish => "Plan de Desarrollo",
            TargetLanguage::English => "Development Plan",
            TargetLanguage::Chinese => "写作计划",
        }
    }

    /// 引用块标题
    pub fn heading_references(&self) -> &'static str {
        match self {
            TargetLanguage::Spanish => "Referencias",
            TargetLanguage::English => "References",
            TargetLanguage::Chinese => "参考文献",
        }
    }
}
