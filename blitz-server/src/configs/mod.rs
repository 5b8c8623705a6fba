use std::path::PathBuf;
use std::{env, io};

mod settings;

pub use settings::{History, Logger, Mock, Models, Server, Settings, Tariff};

pub fn normalize_path(path: &str) -> io::Result<PathBuf> {
    let path_buf = PathBuf::from(path);

    Ok(if path_buf.is_absolute() {
        path_buf
    } else {
        env::current_dir()?.join(path_buf)
    })
}
