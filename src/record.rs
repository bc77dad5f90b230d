use std::fmt::{Display, Formatter};
use crate::error::DnsError;
use crate::parser::PacketParser;
use crate::query_type::DnsType;
use crate::record_data::RecordData;
use crate::util::to_hex;

// One resource record as read off the wire. The name is kept as the raw
// 16-bit reference found in that position (usually a compression pointer to
// the question name); pointers are not followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name_ref: u16,
    pub rtype: DnsType,
    pub rclass: u16,
    pub ttl: u32,
    pub len: u16,
    pub data: Vec<u8>,
    pub decoded: RecordData,
}

impl Record {
    pub fn parse(parser: &mut PacketParser) -> Result<Record, DnsError> {
        let name_ref = parser.next_u16()?;
        let rtype = DnsType::from_num(parser.next_u16()?)?;
        let rclass = parser.next_u16()?;
        let ttl = parser.next_u32()?;
        let len = parser.next_u16()?;
        let data = parser.next_bytes(len as usize)?.to_vec();

        Ok(Record {
            name_ref,
            rtype,
            rclass,
            ttl,
            len,
            decoded: RecordData::decode(rtype, &data),
            data,
        })
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ANAME: 0x{:04x}", self.name_ref)?;
        writeln!(f, "ATYPE: {} (\"{}\")", self.rtype.to_num(), self.rtype)?;
        writeln!(f, "ACLASS: {}", self.rclass)?;
        writeln!(f, "TTL: {}", self.ttl)?;
        writeln!(f, "RDLENGTH: {}", self.len)?;
        writeln!(f, "RDDATA: {}", to_hex(&self.data))?;
        write!(f, "RDDATA decoded: {}", self.decoded)
    }
}
