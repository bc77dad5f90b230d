use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum DnsError {
    InvalidRecordType(String),
    TruncatedMessage { offset: usize, needed: usize },
    MalformedLabel { offset: usize },
    Timeout,
    TransportFailure(io::Error),
}

impl DnsError {
    pub fn invalid_type_code(code: u16) -> Self {
        DnsError::InvalidRecordType(format!("code {}", code))
    }

    pub fn invalid_type_name(name: &str) -> Self {
        DnsError::InvalidRecordType(format!("\"{}\"", name))
    }
}

impl Display for DnsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DnsError::InvalidRecordType(which) => {
                write!(f, "{} is not a known record type", which)
            },
            DnsError::TruncatedMessage { offset, needed } => {
                write!(f, "message truncated: {} more byte(s) needed at offset {}", needed, offset)
            },
            DnsError::MalformedLabel { offset } => {
                write!(f, "label at offset {} runs past the end of the message", offset)
            },
            DnsError::Timeout => {
                write!(f, "no response within the deadline")
            },
            DnsError::TransportFailure(err) => {
                write!(f, "transport failure: {}", err)
            }
        }
    }
}

impl std::error::Error for DnsError {}

impl From<io::Error> for DnsError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            // a read deadline expiring surfaces as either of these, platform-dependent
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => DnsError::Timeout,
            _ => DnsError::TransportFailure(err),
        }
    }
}
