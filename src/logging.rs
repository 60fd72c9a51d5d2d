//! Logger setup. Native builds log to the terminal through simplelog; in the
//! browser records go to the JS console via macroquad.

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("logger unavailable: {e}");
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, LevelFilter, Metadata, Record};

    pub struct ConsoleLogger;

    impl log::Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Info
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            match record.level() {
                Level::Error => macroquad::logging::error!("{}", record.args()),
                Level::Warn => macroquad::logging::warn!("{}", record.args()),
                _ => macroquad::logging::info!("{}", record.args()),
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: ConsoleLogger = ConsoleLogger;

    pub fn install() {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Info);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init() {
    console::install();
}
