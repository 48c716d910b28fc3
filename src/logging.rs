use std::path::PathBuf;
use std::time::SystemTime;

use color_eyre::Result;
use color_eyre::eyre::Context;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Install the global logger: a colored console sink and, when `log_file` is set,
/// a plain file sink that records where each line came from.
pub fn setup_logging(
    console_level: LevelFilter,
    log_file: Option<PathBuf>,
    file_level: LevelFilter,
) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    let console = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} {} {}: {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(console_level)
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sea_orm", LevelFilter::Warn)
        .chain(console);

    if let Some(path) = log_file {
        let file = fern::log_file(&path)
            .wrap_err_with(|| format!("Failed to open log file: {}", path.display()))?;

        let file_sink = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} {}: {} [in {}:{}]",
                    humantime::format_rfc3339_seconds(SystemTime::now()),
                    record.level(),
                    message,
                    record.file().unwrap_or("<unknown>"),
                    record.line().unwrap_or(0)
                ))
            })
            .level(file_level)
            .chain(file);

        dispatch = dispatch.chain(file_sink);
    }

    dispatch.apply().wrap_err("Failed to install logger")?;
    Ok(())
}
