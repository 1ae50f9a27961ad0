use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Sortie console: info et debug sur stdout, avertissements et erreurs sur stderr.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match record.level() {
            Level::Error | Level::Warn => eprintln!("{:<5} {}", record.level(), record.args()),
            _ => println!("{:<5} {}", record.level(), record.args()),
        }
    }

    fn flush(&self) {}
}

pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info });
    Ok(())
}
