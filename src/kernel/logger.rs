//! `log` backend writing to a serial console.

use core::fmt::Write;

use log::{LevelFilter, Log, Metadata, Record};
use spin::Mutex;

/// Formats records as `[LEVEL target] message` onto a shared console.
///
/// The console is the same mutex the `println!` macro locks, so log lines
/// and direct prints never interleave mid-line.
pub struct SerialLogger<W: 'static> {
    console: &'static Mutex<W>,
    level: LevelFilter,
}

impl<W: Write + Send> SerialLogger<W> {
    pub const fn new(console: &'static Mutex<W>, level: LevelFilter) -> Self {
        Self { console, level }
    }

    /// Install as the global logger. Fails if one is already set.
    pub fn install(&'static self) -> Result<(), &'static str> {
        log::set_logger(self).map_err(|_| "logger already installed")?;
        log::set_max_level(self.level);
        Ok(())
    }
}

impl<W: Write + Send> Log for SerialLogger<W> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut console = self.console.lock();
        let _ = writeln!(console, "[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}
