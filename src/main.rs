use clap::Parser;
use viaje_mundo::adapters::roles;
use viaje_mundo::core::content::LOAD_ERROR_MESSAGE;
use viaje_mundo::domain::ports::{lock_page, share};
use viaje_mundo::utils::error::{ErrorSeverity, SiteError};
use viaje_mundo::utils::logger::{self, LogFormat};
use viaje_mundo::utils::validation::Validate;
use viaje_mundo::{CliConfig, Command, HttpContentSource, PageBuilder, Site, SiteConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(LogFormat::from_flags(cli.json_logs), cli.verbose);

    tracing::info!("Starting viaje-mundo CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證網站配置
    let site_config = match cli.load_site_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(c) => c,
        Err(e) => exit_with(e),
    };

    let result = match &cli.command {
        Command::Check => {
            println!(
                "✅ Site configuration is valid: {} ({} destinations)",
                site_config.site.name,
                site_config.destinations.len()
            );
            Ok(())
        }
        Command::Search { query, continent } => run_search(&site_config, query, continent).await,
        Command::Fetch { url } => run_fetch(&site_config, url.as_deref()).await,
    };

    if let Err(e) = result {
        exit_with(e);
    }
    Ok(())
}

async fn run_search(config: &SiteConfig, query: &str, continent: &str) -> viaje_mundo::Result<()> {
    let page = share(PageBuilder::new(config).build());
    {
        let mut doc = lock_page(&page);
        for (id, value) in [(roles::SEARCH_INPUT, query), (roles::CONTINENT_FILTER, continent)] {
            if let Some(node) = doc.get_element_by_id(id) {
                if let Some(element) = doc.element_mut(node) {
                    element.set_value(value);
                }
            }
        }
    }

    let site = Site::init(page.clone(), config);
    let search = site.search().ok_or_else(|| SiteError::ConfigError {
        message: "the page has no destination search".to_string(),
    })?;
    let summary = search.filter_now();
    tracing::info!("Search finished: {}/{} visible", summary.visible, summary.total);

    let doc = lock_page(&page);
    for card in doc.elements_with_attr(roles::CARD_CONTINENT_ATTR) {
        if doc.element(card).is_some_and(|e| e.is_displayed()) {
            let name = doc
                .descendant_by_tag(card, "h3")
                .map(|h| doc.text_content(h))
                .unwrap_or_default();
            let country = doc
                .descendants(card)
                .into_iter()
                .find(|&n| doc.element(n).is_some_and(|e| e.has_class("country")))
                .map(|c| doc.text_content(c))
                .unwrap_or_default();
            println!("• {} ({})", name, country);
        }
    }
    if let Some(counter) = doc.get_element_by_id(roles::RESULTS_COUNTER) {
        println!("{}", doc.text_content(counter));
    }
    if let Some(region) = doc.get_element_by_id(roles::LIVE_REGION) {
        println!("🔊 {}", doc.text_content(region));
    }
    Ok(())
}

async fn run_fetch(config: &SiteConfig, url: Option<&str>) -> viaje_mundo::Result<()> {
    let url = url
        .or_else(|| config.content_endpoint())
        .ok_or_else(|| SiteError::MissingConfigError {
            field: "content.endpoint".to_string(),
        })?
        .to_string();

    let site = Site::init(share(PageBuilder::new(config).build()), config);
    match site.load_dynamic_content(&HttpContentSource::new(), &url).await {
        Some(content) => {
            tracing::info!("✅ Content loaded from {}", content.url);
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
        None => {
            eprintln!("❌ {}", LOAD_ERROR_MESSAGE);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn exit_with(e: SiteError) -> ! {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
