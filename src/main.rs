//! Novelist - 小说写作助手
//!
//! 交互式读取小说设定，依次生成大纲、逐章写作、审阅与摘要，最后输出全文

use std::sync::Arc;

use novelist::config::{load_config, print_config, LogConfig};
use novelist::infrastructure::adapters::{OpenAiChatClient, StdioConsole};
use novelist::NovelAgent;

/// 初始化日志，输出到 stderr，避免与 stdout 上的小说内容混在一起
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},novelist={}", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Novelist - 小说写作助手");
    print_config(&config);

    // 创建大模型客户端
    let chat_model = Arc::new(OpenAiChatClient::new(config.llm.client_config())?);

    // 控制台
    let console = Arc::new(StdioConsole::new());

    let agent = NovelAgent::new(
        chat_model,
        console,
        config.llm.model_settings(),
        config.writing.writing_settings()?,
    );

    let manuscript = agent.run().await?;

    tracing::info!(
        chapters = manuscript.chapter_count(),
        "Run complete"
    );

    Ok(())
}
