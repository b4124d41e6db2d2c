use anyhow::Result;

use crate::article::citations::format_citations;
use crate::article::orchestrator::ArticleOrchestrator;
use crate::cli::Command;
use crate::config::Config;
use crate::context::AppContext;
use crate::render::{ConsoleOutlet, DiskOutlet, Outlet};

/// 启动一次用户动作对应的工作流
pub async fn launch(config: &Config, command: Command) -> Result<()> {
    let context = AppContext::new(config.clone())?;

    match command {
        Command::Generate { area } => run_generate(&context, &area).await,
        Command::Search { query } => run_search(&context, &query).await,
    }
}

/// 生成完整文章并交给出口层展示
pub async fn run_generate(context: &AppContext, area: &str) -> Result<()> {
    let orchestrator = ArticleOrchestrator::new(context);
    let article = orchestrator.generate(area).await;

    ConsoleOutlet.emit(&article, context.config.target_language)?;

    if let Some(output_path) = &context.config.output_path {
        DiskOutlet::new(output_path.clone()).emit(&article, context.config.target_language)?;
    }

    for notice in &article.notices {
        eprintln!("⚠️ {}", notice);
    }

    if context.config.verbose {
        println!("\n{}", context.cache.stats().report());
    }

    Ok(())
}

/// 即席论文检索，渲染为编号引用列表
pub async fn run_search(context: &AppContext, query: &str) -> Result<()> {
    println!("🔍 正在检索相关论文: {}", query);

    match context.search.search(query).await {
        Ok(records) => {
            if records.is_empty() {
                println!("⚠️ 未找到相关论文");
            } else {
                print!("{}", format_citations(&records));
            }
        }
        Err(err) => {
            // 检索失败不是硬错误，提示后正常退出
            eprintln!("⚠️ 检索失败: {}", err);
        }
    }

    Ok(())
}
