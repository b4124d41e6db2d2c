use regex::Regex;
use std::sync::LazyLock;

/// 数字列表标记，例如 "1. " 或 "2) "
static SECTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\s*[.)]\s*").expect("invalid section marker pattern"));

/// 把模型返回的编号列表文本拆分为章节标题
///
/// 这是针对无结构模型输出的启发式解析：丢弃首个标记之前的引导文本，
/// 修剪空白并丢弃空片段。找不到任何标记时退化为只含整段修剪文本的
/// 单元素列表，而不是报错；纯空白输入返回空列表。
pub fn split_sections(raw: &str) -> Vec<String> {
    let Some(first) = SECTION_MARKER.find(raw) else {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        return vec![trimmed.to_string()];
    };

    SECTION_MARKER
        .split(&raw[first.start()..])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}
