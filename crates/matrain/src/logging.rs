//! Log setup.
//!
//! The terminal is taken over by the animation, so log records go to
//! `matrain.log` in the platform cache directory instead of stderr.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use env_logger::{Env, Target};

const LOG_FILE_NAME: &str = "matrain.log";

/// Install the global logger. Filtering follows `RUST_LOG`, defaulting to
/// `info`. If the log file cannot be created, a warning goes to stderr and
/// logging stays off. Must run before the terminal is taken over.
pub fn init() {
    let Some(dirs) = matrain_config::project_dirs() else {
        eprintln!("matrain: no cache directory found, logging disabled");
        return;
    };
    let dir = dirs.cache_dir();
    let file = match open_log_file(dir) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "matrain: cannot write log file {}: {err}, logging disabled",
                dir.join(LOG_FILE_NAME).display()
            );
            return;
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .init();
}

/// Create `dir` if needed and truncate the log file inside it.
fn open_log_file(dir: &Path) -> io::Result<File> {
    fs::create_dir_all(dir)?;
    File::create(dir.join(LOG_FILE_NAME))
}
