use std::fmt::{Display, Formatter};
use crate::header::Header;
use crate::query_type::DnsType;
use crate::question::Question;
use crate::record::Record;

// Fixed transaction id for outgoing queries. Responses are matched by the
// blocking send/receive pairing, not by id, so a constant is fine.
pub const QUERY_ID: u16 = 0xAAAA;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub header: Header,
    pub question: Question,
    pub records: Vec<Record>,
}

impl Packet {
    pub fn query(qtype: DnsType, domain: &str) -> Packet {
        Packet {
            header: Header::new_with_id(QUERY_ID)
                .with_recursion_desired()
                .with_question_count(1),
            question: Question::new(domain.to_string(), qtype),
            records: Vec::new(),
        }
    }
}

impl Display for Packet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f)?;
        write!(f, "{}", self.question)?;

        if !self.records.is_empty() {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "# ANSWER SECTION")?;

            for (i, record) in self.records.iter().enumerate() {
                writeln!(f)?;
                writeln!(f, "# ANSWER {}", i + 1)?;
                write!(f, "{}", record)?;
            }
        }

        Ok(())
    }
}
