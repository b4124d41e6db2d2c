#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::article::citations::{
        AUTHOR_PLACEHOLDER, TITLE_PLACEHOLDER, URL_PLACEHOLDER, YEAR_PLACEHOLDER,
        format_citations,
    };
    use crate::article::orchestrator::ArticleOrchestrator;
    use crate::article::sections::split_sections;
    use crate::config::Config;
    use crate::context::AppContext;
    use crate::error::ApiError;
    use crate::i18n::TargetLanguage;
    use crate::llm::types::{ChatChoice, ChatResponseMessage};
    use crate::llm::{ChatRequest, ChatResponse, CompletionTransport};
    use crate::search::types::{Authors, PaperRecord};
    use crate::search::{SearchRequest, SearchResponse, SearchTransport};

    // ------------------------------------------------------------------
    // 章节拆分
    // ------------------------------------------------------------------

    #[test]
    fn test_split_numbered_list() {
        let titles = split_sections("1. Intro\n2. Methods\n3. Results");
        assert_eq!(titles, vec!["Intro", "Methods", "Results"]);
    }

    #[test]
    fn test_split_parenthesis_markers() {
        let titles = split_sections("1) Uno\n2) Dos");
        assert_eq!(titles, vec!["Uno", "Dos"]);
    }

    #[test]
    fn test_split_discards_leading_text() {
        let titles = split_sections("Los apartados son:\n1. Introducción\n2. Conclusión");
        assert_eq!(titles, vec!["Introducción", "Conclusión"]);
    }

    #[test]
    fn test_split_without_markers_falls_back_to_whole_text() {
        let titles = split_sections("  una sola sección sin numerar  ");
        assert_eq!(titles, vec!["una sola sección sin numerar"]);
    }

    #[test]
    fn test_split_blank_input_yields_empty_list() {
        assert!(split_sections("   \n  ").is_empty());
        assert!(split_sections("").is_empty());
    }

    #[test]
    fn test_split_drops_empty_fragments() {
        let titles = split_sections("1. Intro\n2. \n3. Results");
        assert_eq!(titles, vec!["Intro", "Results"]);
    }

    // ------------------------------------------------------------------
    // 引用渲染
    // ------------------------------------------------------------------

    #[test]
    fn test_citations_empty_input_yields_empty_string() {
        assert_eq!(format_citations(&[]), "");
    }

    #[test]
    fn test_citations_full_record() {
        let record = PaperRecord {
            title: Some(String::from("On Computable Numbers")),
            authors: Some(Authors::List(vec![String::from("Alan Turing")])),
            publication_date: Some(String::from("1936-11-12")),
            url: Some(String::from("https://example.org/turing")),
            ..PaperRecord::default()
        };

        let rendered = format_citations(&[record]);
        assert_eq!(
            rendered,
            "[1] Alan Turing (1936). On Computable Numbers. https://example.org/turing\n"
        );
    }

    #[test]
    fn test_citations_missing_fields_use_placeholders() {
        let rendered = format_citations(&[PaperRecord::default()]);

        assert!(rendered.contains(AUTHOR_PLACEHOLDER));
        assert!(rendered.contains(YEAR_PLACEHOLDER));
        assert!(rendered.contains(TITLE_PLACEHOLDER));
        assert!(rendered.contains(URL_PLACEHOLDER));
    }

    #[test]
    fn test_citations_author_free_text() {
        let record = PaperRecord {
            authors: Some(Authors::Text(String::from("  Lovelace, A.  "))),
            ..PaperRecord::default()
        };

        let rendered = format_citations(&[record]);
        assert!(rendered.starts_with("[1] Lovelace, A. ("));
    }

    #[test]
    fn test_citations_year_falls_back_to_year_field() {
        let record = PaperRecord {
            publication_date: Some(String::from("unknown")),
            year: Some(2019),
            ..PaperRecord::default()
        };

        let rendered = format_citations(&[record]);
        assert!(rendered.contains("(2019)"));
    }

    #[test]
    fn test_citations_are_numbered_in_order() {
        let records = vec![PaperRecord::default(), PaperRecord::default()];
        let rendered = format_citations(&records);

        assert!(rendered.contains("[1]"));
        assert!(rendered.contains("[2]"));
    }

    // ------------------------------------------------------------------
    // 编排链
    // ------------------------------------------------------------------

    /// 脚本化补全通道：章节列表提示词返回固定编号列表，其余回显
    struct ScriptedCompletion {
        calls: AtomicUsize,
        fail: Option<ApiError>,
    }

    impl ScriptedCompletion {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: None,
            }
        }

        fn failing(err: ApiError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: Some(err),
            }
        }
    }

    #[async_trait]
    impl CompletionTransport for ScriptedCompletion {
        async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(err) = &self.fail {
                return Err(err.clone());
            }

            let prompt = &request.messages[0].content;
            let content = if prompt.starts_with("List as a numbered list") {
                String::from("1. Introduction\n2. Methods")
            } else {
                format!("generated for: {}", prompt)
            };

            Ok(ChatResponse {
                choices: vec![ChatChoice {
                    message: ChatResponseMessage { content },
                }],
            })
        }
    }

    /// 脚本化检索通道
    struct ScriptedSearch {
        calls: AtomicUsize,
        fail: Option<ApiError>,
    }

    impl ScriptedSearch {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: None,
            }
        }

        fn failing(err: ApiError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: Some(err),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SearchTransport for ScriptedSearch {
        async fn send(&self, _request: &SearchRequest) -> Result<SearchResponse, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(err) = &self.fail {
                return Err(err.clone());
            }

            Ok(SearchResponse {
                results: vec![PaperRecord {
                    title: Some(String::from("Relevant Paper")),
                    ..PaperRecord::default()
                }],
            })
        }
    }

    fn test_config() -> Config {
        let mut config = Config::default();
        config.target_language = TargetLanguage::English;
        config.llm.api_key = String::from("llm-key");
        config.search.api_key = String::from("search-key");
        config
    }

    #[tokio::test]
    async fn test_full_chain_with_citations() {
        let context = AppContext::with_transports(
            test_config(),
            Arc::new(ScriptedCompletion::ok()),
            Arc::new(ScriptedSearch::ok()),
        );

        let article = ArticleOrchestrator::new(&context).generate("philosophy").await;

        assert!(article.thesis.is_some());
        assert!(article.plan.is_some());
        assert_eq!(article.sections.len(), 2);
        assert_eq!(article.sections[0].title, "Introduction");
        assert!(article.sections[0].body.is_some());
        assert!(article.sections[0].references.starts_with("[1]"));
        assert!(article.notices.is_empty());
    }

    #[tokio::test]
    async fn test_thesis_failure_halts_dependent_steps() {
        let search = Arc::new(ScriptedSearch::ok());
        let context = AppContext::with_transports(
            test_config(),
            Arc::new(ScriptedCompletion::failing(ApiError::Http { status: 500 })),
            search.clone(),
        );

        let article = ArticleOrchestrator::new(&context).generate("philosophy").await;

        assert!(article.thesis.is_none());
        assert!(article.plan.is_none());
        assert!(article.sections.is_empty());
        assert_eq!(article.notices.len(), 1);
        assert!(article.notices[0].contains("thesis generation failed"));
        assert!(article.notices[0].contains("500"));
        // 下游检索从未被触发
        assert_eq!(search.calls(), 0);
    }

    #[tokio::test]
    async fn test_search_failure_degrades_to_empty_references() {
        let context = AppContext::with_transports(
            test_config(),
            Arc::new(ScriptedCompletion::ok()),
            Arc::new(ScriptedSearch::failing(ApiError::Http { status: 503 })),
        );

        let article = ArticleOrchestrator::new(&context).generate("philosophy").await;

        // 检索失败不会中断生成链
        assert_eq!(article.sections.len(), 2);
        for section in &article.sections {
            assert!(section.body.is_some());
            assert_eq!(section.references, "");
        }
        assert_eq!(article.notices.len(), 2);
        assert!(article.notices[0].contains("citation search"));
    }

    #[tokio::test]
    async fn test_citation_search_skipped_when_disabled() {
        let mut config = test_config();
        config.search.enabled = false;

        let search = Arc::new(ScriptedSearch::ok());
        let context = AppContext::with_transports(
            config,
            Arc::new(ScriptedCompletion::ok()),
            search.clone(),
        );

        let article = ArticleOrchestrator::new(&context).generate("philosophy").await;

        assert_eq!(article.sections.len(), 2);
        assert!(article.sections.iter().all(|s| s.references.is_empty()));
        assert_eq!(search.calls(), 0);
    }
}
