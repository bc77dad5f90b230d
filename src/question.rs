use std::fmt::{Display, Formatter};
use crate::pair::BytesPair;
use crate::query_type::DnsType;

// The only class this tool ever asks for.
pub const CLASS_IN: u16 = 1;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub domain: String,
    pub qtype: DnsType,
    pub qclass: u16
}

impl Question {
    pub fn new(domain: String, qtype: DnsType) -> Question {
        Question {
            domain,
            qtype,
            qclass: CLASS_IN,
        }
    }

    pub fn new_with_class(domain: String, qtype: DnsType, qclass: u16) -> Question {
        Question {
            domain,
            qtype,
            qclass,
        }
    }

    pub fn write(&self) -> Vec<u8> {
        let mut res: Vec<u8> = vec![];

        // label lengths are emitted unchecked; empty labels are skipped so a
        // trailing dot does not terminate the name early
        for label in self.domain.split('.') {
            if label.is_empty() {
                continue;
            }

            res.push(label.len() as u8);
            res.extend_from_slice(label.as_bytes());
        }
        res.push(0x0);

        res.append(&mut BytesPair::from(self.qtype.to_num()).bytes());
        res.append(&mut BytesPair::from(self.qclass).bytes());

        res
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# QUESTION SECTION")?;
        writeln!(f, "QNAME: {}", self.domain)?;
        writeln!(f, "QTYPE: {} (\"{}\")", self.qtype.to_num(), self.qtype)?;
        write!(f, "QCLASS: {}", self.qclass)
    }
}
