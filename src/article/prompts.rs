//! 提示词模板
//!
//! 每个生成步骤把用户输入或上一步的模型输出插入固定模板，按目标语言
//! 选取措辞。提示词没有文本之外的身份。

use crate::i18n::TargetLanguage;

/// 论点生成提示词
pub fn thesis_prompt(language: TargetLanguage, area: &str) -> String {
    match language {
        TargetLanguage::Spanish => {
            format!("Genera una tesis original en el área de {}.", area)
        }
        TargetLanguage::English => {
            format!("Generate an original thesis in the area of {}.", area)
        }
        TargetLanguage::Chinese => {
            format!("请在{}领域提出一个原创论点。", area)
        }
    }
}

/// 写作计划提示词，基于已生成的论点
pub fn plan_prompt(language: TargetLanguage, thesis: &str) -> String {
    match language {
        TargetLanguage::Spanish => format!(
            "Elabora un plan de desarrollo para un artículo académico basado en la siguiente tesis: {}",
            thesis
        ),
        TargetLanguage::English => format!(
            "Develop a writing plan for an academic article based on the following thesis: {}",
            thesis
        ),
        TargetLanguage::Chinese => {
            format!("基于以下论点，为一篇学术文章制定写作计划：{}", thesis)
        }
    }
}

/// 章节列表提示词，要求模型只回复编号列表
pub fn sections_prompt(language: TargetLanguage, thesis: &str, plan: &str) -> String {
    match language {
        TargetLanguage::Spanish => format!(
            "Enumera en una lista numerada los apartados de un artículo académico basado en la siguiente tesis: {}\nPlan de desarrollo: {}\nResponde únicamente con la lista numerada.",
            thesis, plan
        ),
        TargetLanguage::English => format!(
            "List as a numbered list the sections of an academic article based on the following thesis: {}\nWriting plan: {}\nReply with the numbered list only.",
            thesis, plan
        ),
        TargetLanguage::Chinese => format!(
            "基于以下论点列出一篇学术文章的各个章节，使用编号列表：{}\n写作计划：{}\n只回复编号列表。",
            thesis, plan
        ),
    }
}

/// 章节正文提示词
pub fn section_body_prompt(language: TargetLanguage, thesis: &str, section: &str) -> String {
    match language {
        TargetLanguage::Spanish => format!(
            "Redacta el contenido del apartado \"{}\" de un artículo académico basado en la siguiente tesis: {}",
            section, thesis
        ),
        TargetLanguage::English => format!(
            "Write the body of the section \"{}\" for an academic article based on the following thesis: {}",
            section, thesis
        ),
        TargetLanguage::Chinese => {
            format!("基于以下论点撰写学术文章中\"{}\"章节的正文：{}", section, thesis)
        }
    }
}
