use badger_pages::app::pages::{
    render_mart, run_mart_session, DirectoryPage, MartFrame, OutputFormat,
};
use badger_pages::config::cli::{CliConfig, Command, LogFormat};
use badger_pages::utils::{logger, validation::Validate};
use badger_pages::{ApiSettings, CatalogLoader, DirectoryLoader, HttpTransport, SearchQuery};
use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting badger-pages");

    // 合併並驗證配置
    let settings = match config.resolve().and_then(|settings| {
        settings.validate()?;
        Ok(settings)
    }) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved settings: api_base={}", settings.api_base);

    let transport = Arc::new(HttpTransport::from_config(&settings));

    match config.command {
        Command::Directory {
            name,
            major,
            interest,
            interactive,
            html,
        } => {
            let query = SearchQuery::new(&name, &major, &interest);
            run_directory(&settings, transport, query, interactive, format_for(html)).await?;
        }
        Command::Mart { interactive, html } => {
            run_mart(&settings, transport, interactive, format_for(html)).await?;
        }
    }

    Ok(())
}

fn format_for(html: bool) -> OutputFormat {
    if html {
        OutputFormat::Html
    } else {
        OutputFormat::Text
    }
}

async fn run_directory(
    settings: &ApiSettings,
    transport: Arc<HttpTransport>,
    query: SearchQuery,
    interactive: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let loader = DirectoryLoader::new(settings.students_endpoint.clone());
    let mut page = DirectoryPage::load(&loader, transport.as_ref(), format).await;

    if query.is_empty() {
        println!("{}", page.render());
    } else {
        println!("{}", page.search(&query));
    }

    if !interactive {
        return Ok(());
    }

    eprintln!("Search as name|major|interest, one per line (Ctrl-D to quit)");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        // 每次搜尋都從完整名單開始
        println!("{}", page.search(&SearchQuery::parse_line(&line)));
    }

    Ok(())
}

async fn run_mart(
    settings: &ApiSettings,
    transport: Arc<HttpTransport>,
    interactive: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let loader = CatalogLoader::new(
        settings.sale_items_endpoint.clone(),
        settings.featured_item_endpoint.clone(),
    );
    let updates = loader.mount(transport);

    let input = interactive.then(|| {
        eprintln!("Commands: + <n>, - <n>, hover +|- <n> on|off (Ctrl-D to quit)");
        BufReader::new(tokio::io::stdin())
    });

    // 請求完成或輸入指令都會重新渲染
    run_mart_session(updates, input, |frame| match frame {
        MartFrame::Render(state) => println!("{}\n", render_mart(state, format)),
        MartFrame::UnknownItem(line) => eprintln!("❌ No such item: {}", line),
        MartFrame::Invalid(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
    })
    .await?;

    Ok(())
}
