use std::fmt::{Display, Formatter};
use std::net::Ipv4Addr;
use crate::query_type::DnsType;

// Decoded view of a record's RDATA. A records become an address; everything
// else is run through a best-effort label walk. That walk is only right for
// name-shaped data (NS, CNAME, ...) but it is what this tool has always done
// for the remaining types, so the behavior is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Labels(String),
}

impl RecordData {
    pub fn decode(rtype: DnsType, data: &[u8]) -> RecordData {
        match rtype {
            DnsType::A if data.len() == 4 => {
                RecordData::A(Ipv4Addr::new(data[0], data[1], data[2], data[3]))
            },
            _ => RecordData::Labels(walk_labels(data)),
        }
    }
}

impl Display for RecordData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Labels(name) => write!(f, "{}", name),
        }
    }
}

// Reads length-prefixed labels until a zero octet or the end of the data,
// clamping any overlong length to what is actually there.
fn walk_labels(data: &[u8]) -> String {
    let mut labels: Vec<String> = Vec::new();

    let mut pos = 0;
    while pos < data.len() {
        let len = data[pos] as usize;
        pos += 1;

        if len == 0 {
            break;
        }

        let end = (pos + len).min(data.len());
        labels.push(String::from_utf8_lossy(&data[pos..end]).into_owned());
        pos = end;
    }

    labels.join(".")
}
