use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Sends log output to `talknative.log` in the working directory. The TUI
/// owns the terminal, so nothing may write to stdout or stderr while it runs.
pub fn init(log_level: &str) -> anyhow::Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(log_level)?
        .log_to_file(
            FileSpec::default()
                .basename("talknative")
                .suppress_timestamp(),
        )
        .append()
        .start()?;
    Ok(handle)
}
