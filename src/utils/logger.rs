use flexi_logger::{
    Cleanup, Criterion, DeferredNow, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
};
use log::Record;

use crate::config::SystemConfig;

const LOG_BASENAME: &str = "roop-process";

fn log_format(
    writer: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    write!(
        writer,
        "[{}][{}][{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.line().unwrap_or(0),
        &record.args()
    )
}

/// Starts logging to stdout, or to rotating files when `log_dir` is set.
/// The returned handle must be kept alive for as long as logging is needed.
pub fn init_logger(system: &SystemConfig) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_str(system.log_level())?.format(log_format);
    match system.log_dir.as_deref() {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename(LOG_BASENAME))
            .rotate(
                Criterion::Size(3_000_000),
                Naming::Numbers,
                Cleanup::KeepLogFiles(15),
            )
            .start(),
        None => logger.log_to_stdout().start(),
    }
}
