use std::fmt;

#[derive(Debug)]
pub enum RpsError {
    Io(std::io::Error),

    Default(String),
}

impl RpsError {
    pub fn with(msg: &str) -> Self {
        Self::Default(msg.to_owned())
    }
}

impl From<std::io::Error> for RpsError {
    fn from(err: std::io::Error) -> RpsError {
        RpsError::Io(err)
    }
}

impl fmt::Display for RpsError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Io(err) => write!(fmt, "console I/O failed: {}", err),
            Self::Default(msg) => write!(fmt, "{}", msg),
        }
    }
}
