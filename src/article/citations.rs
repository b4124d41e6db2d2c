//! 引用渲染 - 把论文记录装配为编号引用列表

use crate::search::types::{Authors, PaperRecord};

/// 缺失字段的占位文本
pub const AUTHOR_PLACEHOLDER: &str = "Unknown author(s)";
pub const YEAR_PLACEHOLDER: &str = "n.d.";
pub const TITLE_PLACEHOLDER: &str = "Untitled";
pub const URL_PLACEHOLDER: &str = "No link available";

fn author_text(record: &PaperRecord) -> String {
    match &record.authors {
        Some(Authors::List(list)) => {
            let joined = list
                .iter()
                .map(|author| author.trim())
                .filter(|author| !author.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            if joined.is_empty() {
                AUTHOR_PLACEHOLDER.to_string()
            } else {
                joined
            }
        }
        Some(Authors::Text(text)) if !text.trim().is_empty() => text.trim().to_string(),
        _ => AUTHOR_PLACEHOLDER.to_string(),
    }
}

fn year_text(record: &PaperRecord) -> String {
    // 优先取发表日期的年份前缀
    if let Some(date) = &record.publication_date {
        let head: String = date.chars().take(4).collect();
        if head.len() == 4 && head.chars().all(|c| c.is_ascii_digit()) {
            return head;
        }
    }
    match record.year {
        Some(year) => year.to_string(),
        None => YEAR_PLACEHOLDER.to_string(),
    }
}

fn field_or<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match value {
        Some(text) if !text.trim().is_empty() => text.trim(),
        _ => placeholder,
    }
}

/// 将论文记录渲染为编号引用列表
///
/// 纯函数：空输入返回空字符串，缺失字段替换为占位文本，从不报错。
pub fn format_citations(records: &[PaperRecord]) -> String {
    let mut references = String::new();
    for (index, record) in records.iter().enumerate() {
        references.push_str(&format!(
            "[{}] {} ({}). {}. {}\n",
            index + 1,
            author_text(record),
            year_text(record),
            field_or(&record.title, TITLE_PLACEHOLDER),
            field_or(&record.url, URL_PLACEHOLDER),
        ));
    }
    references
}
