use std::fmt;

/* Wraps everything that can go wrong while touching the portfolio file or
the CSV export. The shell only ever shows the message. */
#[derive(Debug, Clone)]
pub struct IoError {
    error: String,
}

impl IoError {
    pub fn new(error: String) -> Self {
        return IoError { error };
    }
}

impl From<std::io::Error> for IoError {
    fn from(error: std::io::Error) -> Self {
        IoError::new(error.to_string())
    }
}

impl From<csv::Error> for IoError {
    fn from(error: csv::Error) -> Self {
        IoError::new(error.to_string())
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}
