//! Debug-build logging
//!
//! The terminal belongs to the TUI, so log output goes to a file in the temp
//! directory. Release builds never initialize a logger and `log` macros are
//! no-ops.

use std::path::PathBuf;

const LOG_FILE: &str = "peoplepick-debug.log";

pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Route `log` output to the debug log file. Honors `RUST_LOG`, default `debug`.
#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::File;
    use std::io::Write;

    let file = match File::create(log_file_path()) {
        Ok(file) => file,
        Err(_) => return,
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
