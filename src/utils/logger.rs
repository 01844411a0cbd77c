use std::io;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日志系统
///
/// 同时挂两路输出:
/// - 文件: `logs/` 下按天轮转的JSON日志,供采集与检索
/// - 控制台: 带颜色的可读格式,供本地调试
///
/// 级别由 `RUST_LOG` 环境变量控制,未设置时默认 INFO。
/// 版本不兼容、关闭TLS校验等异常路径以 WARN 及以上级别记录,
/// 每次API请求的端点细节在 DEBUG 级别。
pub fn init() -> Result<(), io::Error> {
    let log_dir = "logs";

    // 轮转文件名形如 kube-access.2026-08-26.log
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("kube-access")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // 文件层只保留target定位来源,线程与行号对这类I/O日志没有增量
    let file_layer = fmt::layer()
        .json()
        .with_writer(file_appender)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false);

    let console_layer = fmt::layer()
        .with_writer(io::stdout)
        .with_target(true)
        .with_level(true)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(())
}
