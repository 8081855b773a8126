// GUI用ユーティリティ関数

use crate::gui::config_manager::{default_log_dir, LogConfig};
use chrono::{DateTime, Datelike, Local, NaiveDate};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// 作成日時を pt-BR 形式（dd/mm/yyyy）で表示
///
/// タイムスタンプ自身のオフセットでの日付を使う。解釈できない値はそのまま返す。
pub fn format_date_pt_br(value: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return timestamp.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    value.to_string()
}

/// フッター表示用の現在年
pub fn current_year() -> i32 {
    Local::now().year()
}

/// 強化されたログ初期化
///
/// `RUST_LOG` が設定されていれば設定ファイルのログレベルより優先する。
/// ファイル出力時は返された `WorkerGuard` をプロセス終了まで保持すること。
pub fn init_logging(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .or_else(|_| EnvFilter::try_new("info"))?;

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    let (file_layer, guard) = if config.enable_file_logging {
        let log_dir = match &config.log_dir {
            Some(dir) => dir.clone(),
            None => default_log_dir()?,
        };
        std::fs::create_dir_all(&log_dir)?;

        let appender = tracing_appender::rolling::daily(&log_dir, "nexus-support.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_pt_br() {
        assert_eq!(format_date_pt_br("2023-10-01T10:00:00Z"), "01/10/2023");
        assert_eq!(format_date_pt_br("2023-10-02T14:30:00.123456+00:00"), "02/10/2023");
        assert_eq!(format_date_pt_br("2023-12-31T23:30:00-03:00"), "31/12/2023");
        assert_eq!(format_date_pt_br("2024-02-29"), "29/02/2024");
    }

    #[test]
    fn test_format_date_invalid_is_passthrough() {
        assert_eq!(format_date_pt_br("ontem"), "ontem");
        assert_eq!(format_date_pt_br(""), "");
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
