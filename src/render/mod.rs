//! 出口层 - 结构化文章的展示与落盘

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::article::types::Article;
use crate::i18n::TargetLanguage;

/// 文章出口
pub trait Outlet {
    fn emit(&self, article: &Article, language: TargetLanguage) -> Result<()>;
}

/// 控制台出口：按标题块展示文章内容
pub struct ConsoleOutlet;

impl Outlet for ConsoleOutlet {
    fn emit(&self, article: &Article, language: TargetLanguage) -> Result<()> {
        print!("{}", render_markdown(article, language));
        Ok(())
    }
}

/// 磁盘出口：把装配好的文章保存为Markdown文档
pub struct DiskOutlet {
    output_path: PathBuf,
}

impl DiskOutlet {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl Outlet for DiskOutlet {
    fn emit(&self, article: &Article, language: TargetLanguage) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.output_path, render_markdown(article, language))
            .context(format!("Failed to write article to {:?}", self.output_path))?;

        println!("💾 已保存文章: {}", self.output_path.display());
        Ok(())
    }
}

/// 将结构化文章装配为Markdown文本
pub fn render_markdown(article: &Article, language: TargetLanguage) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# {}: {}\n\n",
        language.heading_article(),
        article.area
    ));

    if let Some(thesis) = &article.thesis {
        out.push_str(&format!(
            "## {}\n\n{}\n\n",
            language.heading_thesis(),
            thesis
        ));
    }

    if let Some(plan) = &article.plan {
        out.push_str(&format!("## {}\n\n{}\n\n", language.heading_plan(), plan));
    }

    for (index, section) in article.sections.iter().enumerate() {
        out.push_str(&format!("## {}. {}\n\n", index + 1, section.title));
        if let Some(body) = &section.body {
            out.push_str(body);
            out.push_str("\n\n");
        }
        if !section.references.is_empty() {
            out.push_str(&format!(
                "### {}\n\n{}\n",
                language.heading_references(),
                section.references
            ));
        }
    }

    for notice in &article.notices {
        out.push_str(&format!("> ⚠️ {}\n", notice));
    }

    out
}
