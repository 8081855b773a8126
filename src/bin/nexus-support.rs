use anyhow::{Context, Result};
use clap::Parser;
use nexus_support::{
    api::ApiClient,
    gui::{
        config_manager::{AppConfig, ConfigManager},
        utils, App, AppServices,
    },
};
use std::path::PathBuf;

/// Nexus AI サポートコンソール
#[derive(Parser, Debug)]
#[command(name = "nexus-support", version, about = "Nexus AI support console")]
struct Args {
    /// バックエンドのベースURL（設定ファイル・環境変数より優先）
    #[arg(long)]
    api_url: Option<String>,

    /// ログレベル (trace/debug/info/warn/error)
    #[arg(long)]
    log_level: Option<String>,

    /// 設定ファイルのパス
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_manager = match &args.config {
        Some(path) => ConfigManager::with_path(path)?,
        None => ConfigManager::new()?,
    };

    // 優先順位: CLI > 環境変数 > 設定ファイル > デフォルト
    let (mut config, load_error) = match config_manager.load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    config.apply_env();
    if let Some(api_url) = args.api_url {
        config.api_base_url = api_url;
    }
    if let Some(log_level) = args.log_level {
        config.log.log_level = log_level;
    }

    // 強化されたログ初期化
    let _log_guard = utils::init_logging(&config.log)?;

    if let Some(e) = load_error {
        tracing::warn!("設定読み込みエラー、デフォルト設定を使用: {:#}", e);
    }

    config.validate()?;

    tracing::info!("🎬 Starting Nexus AI support console");
    tracing::info!(
        api_base_url = %config.api_base_url,
        config_path = %config_manager.config_path().display(),
        "⚙️ Configuration resolved"
    );

    let client = ApiClient::from_config(&config).context("Failed to build API client")?;
    let services = AppServices::from_client(client);

    let launch_builder = dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::tao::window::WindowBuilder::new()
                    .with_title("Nexus AI - Suporte")
                    .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(
                        config.window.width as f64,
                        config.window.height as f64,
                    ))
                    .with_maximized(config.window.maximized)
                    .with_resizable(true),
            ),
        )
        .with_context(services);

    // 内部でtokioランタイムが管理されるため、外部でtokio::mainは不要
    launch_builder.launch(App);

    tracing::info!("👋 Nexus AI support console shutting down");
    Ok(())
}
