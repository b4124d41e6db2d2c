use crate::article::citations::format_citations;
use crate::article::prompts;
use crate::article::sections::split_sections;
use crate::article::types::{Article, ArticleSection};
use crate::context::AppContext;

/// 文章编排器 - 串联论点、计划、章节与引用的生成链
///
/// 每一步都以上一步的文本作为提示词输入。补全步骤失败会中断其下游
/// 依赖并留下提示；引用检索失败只降级为空引用块，不会中断整条链。
pub struct ArticleOrchestrator<'a> {
    context: &'a AppContext,
}

impl<'a> ArticleOrchestrator<'a> {
    pub fn new(context: &'a AppContext) -> Self {
        Self { context }
    }

    /// 针对一个研究领域执行完整生成链
    pub async fn generate(&self, area: &str) -> Article {
        let language = self.context.config.target_language;
        let mut article = Article::new(area);

        println!("🧠 正在生成论点...");
        let thesis = match self
            .context
            .completion
            .complete(&prompts::thesis_prompt(language, area))
            .await
        {
            Ok(text) => text,
            Err(err) => {
                article
                    .notices
                    .push(format!("thesis generation failed: {}", err));
                return article;
            }
        };
        article.thesis = Some(thesis.clone());

        println!("🗂️ 正在生成写作计划...");
        let plan = match self
            .context
            .completion
            .complete(&prompts::plan_prompt(language, &thesis))
            .await
        {
            Ok(text) => text,
            Err(err) => {
                article
                    .notices
                    .push(format!("development plan generation failed: {}", err));
                return article;
            }
        };
        article.plan = Some(plan.clone());

        println!("📑 正在生成章节列表...");
        let outline = match self
            .context
            .completion
            .complete(&prompts::sections_prompt(language, &thesis, &plan))
            .await
        {
            Ok(text) => text,
            Err(err) => {
                article
                    .notices
                    .push(format!("section list generation failed: {}", err));
                return article;
            }
        };

        let titles = split_sections(&outline);
        if titles.is_empty() {
            article
                .notices
                .push(String::from("the model returned an empty section list"));
            return article;
        }

        for title in titles {
            println!("✍️ 正在撰写章节: {}", title);
            let body = match self
                .context
                .completion
                .complete(&prompts::section_body_prompt(language, &thesis, &title))
                .await
            {
                Ok(text) => Some(text),
                Err(err) => {
                    article
                        .notices
                        .push(format!("section \"{}\" generation failed: {}", title, err));
                    None
                }
            };

            // 正文缺失时跳过该章节的引用检索
            let references = match (&body, self.context.config.search.enabled) {
                (Some(_), true) => {
                    self.fetch_references(area, &title, &mut article.notices)
                        .await
                }
                _ => String::new(),
            };

            article.sections.push(ArticleSection {
                title,
                body,
                references,
            });
        }

        article
    }

    /// 检索并渲染某章节的引用块，失败时降级为空引用块
    async fn fetch_references(
        &self,
        area: &str,
        title: &str,
        notices: &mut Vec<String>,
    ) -> String {
        let query = format!("{} {}", title, area);
        match self.context.search.search(&query).await {
            Ok(records) => format_citations(&records),
            Err(err) => {
                notices.push(format!(
                    "citation search for \"{}\" unavailable: {}",
                    title, err
                ));
                String::new()
            }
        }
    }
}
