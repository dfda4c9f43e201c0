use std::path::PathBuf;
use std::{env, io};

mod settings;

pub use settings::{Gateway, GatewayAuth, Logger, Settings, Topics};

pub fn normalize_path(path: &str) -> io::Result<PathBuf> {
    let path_buf = PathBuf::from(path);

    Ok(if path_buf.is_absolute() {
        path_buf
    } else {
        env::current_dir()?.as_path().join(&path_buf)
    })
}
