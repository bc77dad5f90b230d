use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResultCode {
    NOERROR = 0,
    FORMERR = 1,
    SERVFAIL = 2,
    NXDOMAIN = 3,
    NOTIMP = 4,
    REFUSED = 5,
}

impl ResultCode {
    pub fn from(value: u8) -> Option<ResultCode> {
        match value {
            0 => Some(ResultCode::NOERROR),
            1 => Some(ResultCode::FORMERR),
            2 => Some(ResultCode::SERVFAIL),
            3 => Some(ResultCode::NXDOMAIN),
            4 => Some(ResultCode::NOTIMP),
            5 => Some(ResultCode::REFUSED),
            _ => None,
        }
    }
}

impl Display for ResultCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultCode::NOERROR => write!(f, "NOERROR"),
            ResultCode::FORMERR => write!(f, "FORMERR"),
            ResultCode::SERVFAIL => write!(f, "SERVFAIL"),
            ResultCode::NXDOMAIN => write!(f, "NXDOMAIN"),
            ResultCode::NOTIMP => write!(f, "NOTIMP"),
            ResultCode::REFUSED => write!(f, "REFUSED"),
        }
    }
}
