use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChurnError>;

#[derive(Error, Debug)]
pub enum ChurnError {
    #[error("git log failed: {0}")]
    GitLog(String),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Manual From implementation for unboxed to boxed conversion
impl From<gix::discover::Error> for ChurnError {
    fn from(err: gix::discover::Error) -> Self {
        ChurnError::GitDiscover(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn git_log_error_carries_diagnostics() {
        let err = ChurnError::GitLog("fatal: bad revision 'nope'".to_string());
        assert_eq!(err.to_string(), "git log failed: fatal: bad revision 'nope'");
    }
}
