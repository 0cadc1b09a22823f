use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Message file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a message file and return its content
pub fn read_message(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read a whole message from any reader, e.g. stdin
pub fn read_message_from<R: Read>(mut reader: R) -> Result<String, IoError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}
