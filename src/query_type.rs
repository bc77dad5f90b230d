use std::fmt::{Display, Formatter};
use crate::error::DnsError;

// The 16 RFC 1035 record types, coded 1..=16 in declaration order. Code 0
// is reserved and rejected. Type 12 is spelled PTS in the lookup table this
// tool descends from, and that spelling is kept.
#[derive(Default, PartialEq, Eq, Debug, Clone, Hash, Copy)]
pub enum DnsType {
    #[default]
    A, // 1
    NS,
    MD,
    MF,
    CNAME,
    SOA,
    MB,
    MG,
    MR,
    NULL,
    WKS,
    PTS,
    HINFO,
    MINFO,
    MX,
    TXT, // 16
}

impl DnsType {
    pub fn from_num(value: u16) -> Result<DnsType, DnsError> {
        match value {
            1 => Ok(DnsType::A),
            2 => Ok(DnsType::NS),
            3 => Ok(DnsType::MD),
            4 => Ok(DnsType::MF),
            5 => Ok(DnsType::CNAME),
            6 => Ok(DnsType::SOA),
            7 => Ok(DnsType::MB),
            8 => Ok(DnsType::MG),
            9 => Ok(DnsType::MR),
            10 => Ok(DnsType::NULL),
            11 => Ok(DnsType::WKS),
            12 => Ok(DnsType::PTS),
            13 => Ok(DnsType::HINFO),
            14 => Ok(DnsType::MINFO),
            15 => Ok(DnsType::MX),
            16 => Ok(DnsType::TXT),
            _ => Err(DnsError::invalid_type_code(value)),
        }
    }

    pub fn to_num(&self) -> u16 {
        match *self {
            DnsType::A => 1,
            DnsType::NS => 2,
            DnsType::MD => 3,
            DnsType::MF => 4,
            DnsType::CNAME => 5,
            DnsType::SOA => 6,
            DnsType::MB => 7,
            DnsType::MG => 8,
            DnsType::MR => 9,
            DnsType::NULL => 10,
            DnsType::WKS => 11,
            DnsType::PTS => 12,
            DnsType::HINFO => 13,
            DnsType::MINFO => 14,
            DnsType::MX => 15,
            DnsType::TXT => 16,
        }
    }

    pub fn from_name(name: &str) -> Result<DnsType, DnsError> {
        match name {
            "A" => Ok(DnsType::A),
            "NS" => Ok(DnsType::NS),
            "MD" => Ok(DnsType::MD),
            "MF" => Ok(DnsType::MF),
            "CNAME" => Ok(DnsType::CNAME),
            "SOA" => Ok(DnsType::SOA),
            "MB" => Ok(DnsType::MB),
            "MG" => Ok(DnsType::MG),
            "MR" => Ok(DnsType::MR),
            "NULL" => Ok(DnsType::NULL),
            "WKS" => Ok(DnsType::WKS),
            "PTS" => Ok(DnsType::PTS),
            "HINFO" => Ok(DnsType::HINFO),
            "MINFO" => Ok(DnsType::MINFO),
            "MX" => Ok(DnsType::MX),
            "TXT" => Ok(DnsType::TXT),
            _ => Err(DnsError::invalid_type_name(name)),
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            DnsType::A => "A",
            DnsType::NS => "NS",
            DnsType::MD => "MD",
            DnsType::MF => "MF",
            DnsType::CNAME => "CNAME",
            DnsType::SOA => "SOA",
            DnsType::MB => "MB",
            DnsType::MG => "MG",
            DnsType::MR => "MR",
            DnsType::NULL => "NULL",
            DnsType::WKS => "WKS",
            DnsType::PTS => "PTS",
            DnsType::HINFO => "HINFO",
            DnsType::MINFO => "MINFO",
            DnsType::MX => "MX",
            DnsType::TXT => "TXT",
        }
    }
}

impl Display for DnsType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn code_round_trip() {
        for code in 1..=16u16 {
            let qtype = DnsType::from_num(code).unwrap();
            assert_eq!(qtype.to_num(), code);
            assert_eq!(DnsType::from_name(qtype.name()).unwrap(), qtype);
        }
    }

    #[test]
    fn reserved_and_unknown_codes() {
        assert!(matches!(DnsType::from_num(0), Err(DnsError::InvalidRecordType(_))));
        assert!(matches!(DnsType::from_num(17), Err(DnsError::InvalidRecordType(_))));
        assert!(matches!(DnsType::from_num(255), Err(DnsError::InvalidRecordType(_))));
    }

    #[test]
    fn unknown_names() {
        assert!(matches!(DnsType::from_name("AAAA"), Err(DnsError::InvalidRecordType(_))));
        assert!(matches!(DnsType::from_name("a"), Err(DnsError::InvalidRecordType(_))));
        assert!(matches!(DnsType::from_name(""), Err(DnsError::InvalidRecordType(_))));
    }
}
