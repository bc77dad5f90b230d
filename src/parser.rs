use crate::error::DnsError;
use crate::header::Header;
use crate::packet::Packet;
use crate::pair::BytesPair;
use crate::query_type::DnsType;
use crate::question::Question;
use crate::record::Record;

// 12-byte header plus the smallest question this tool will accept.
const MIN_MESSAGE_LEN: usize = 24;

pub struct PacketParser {
    buf: Vec<u8>,
    offset: usize
}

impl PacketParser {
    pub fn new(data: &[u8]) -> PacketParser {
        PacketParser {
            buf: data.to_vec(),
            offset: 0,
        }
    }

    pub fn seek(&mut self, n: usize) {
        self.offset = n;
    }

    pub fn next(&mut self) -> Result<u8, DnsError> {
        if self.offset >= self.buf.len() {
            return Err(DnsError::TruncatedMessage { offset: self.offset, needed: 1 });
        }

        let res = self.buf[self.offset];
        self.offset += 1;

        Ok(res)
    }

    pub fn next_u16(&mut self) -> Result<u16, DnsError> {
        Ok(((self.next()? as u16) << 8) | self.next()? as u16)
    }

    pub fn next_u32(&mut self) -> Result<u32, DnsError> {
        let res = ((self.next()? as u32) << 24)
            | ((self.next()? as u32) << 16)
            | ((self.next()? as u32) << 8)
            | self.next()? as u32;

        Ok(res)
    }

    pub fn next_bytes(&mut self, len: usize) -> Result<&[u8], DnsError> {
        if self.offset + len > self.buf.len() {
            return Err(DnsError::TruncatedMessage {
                offset: self.offset,
                needed: self.offset + len - self.buf.len(),
            });
        }

        let res = &self.buf[self.offset..self.offset + len];
        self.offset += len;

        Ok(res)
    }

    pub fn parse(&mut self) -> Result<Packet, DnsError> {
        if self.buf.len() < MIN_MESSAGE_LEN {
            return Err(DnsError::TruncatedMessage {
                offset: self.buf.len(),
                needed: MIN_MESSAGE_LEN - self.buf.len(),
            });
        }

        let header = self.parse_header()?;
        let question = self.parse_question()?;
        let records = self.parse_records(&header);

        Ok(Packet {
            header,
            question,
            records,
        })
    }

    pub fn parse_header(&mut self) -> Result<Header, DnsError> {
        let mut header = Header::new();

        // seek to the beginning of the packet to parse the header.
        if self.offset != 0 {
            self.seek(0);
        }

        header.id = self.next_u16()?;
        self.parse_header_flags(&mut header)?;
        header.question_count = self.next_u16()?;
        header.answer_count = self.next_u16()?;
        header.authority_count = self.next_u16()?;
        header.additional_count = self.next_u16()?;

        Ok(header)
    }

    fn parse_header_flags(&mut self, header: &mut Header) -> Result<(), DnsError> {
        let pair = BytesPair::from(self.next_u16()?);

        header.response = (pair.0 >> 7) & 1 == 1;
        header.opcode = (pair.0 >> 3) & 0x0F;
        header.authoritative = (pair.0 >> 2) & 1 == 1;
        header.truncation = (pair.0 >> 1) & 1 == 1;
        header.recursion_desired = pair.0 & 1 == 1;

        header.recursion_available = (pair.1 >> 7) & 1 == 1;
        header.reserved = (pair.1 >> 4) & 0x07;
        header.code = pair.1 & 0x0F;

        Ok(())
    }

    pub fn parse_question(&mut self) -> Result<Question, DnsError> {
        let name = self.parse_domain_name()?;
        let qtype = DnsType::from_num(self.next_u16()?)?;
        let qclass = self.next_u16()?;

        Ok(Question::new_with_class(name, qtype, qclass))
    }

    // Label walk with an explicit cursor. The offset only ever moves forward
    // and every read is bounds-checked, so malformed input cannot loop; a
    // length octet whose label would run off the end is a MalformedLabel.
    // Compression pointers are not supported.
    pub fn parse_domain_name(&mut self) -> Result<String, DnsError> {
        let mut labels: Vec<String> = Vec::new();

        loop {
            let start = self.offset;
            let len = self.next()? as usize;

            if len == 0 {
                break;
            }

            if self.offset + len > self.buf.len() {
                return Err(DnsError::MalformedLabel { offset: start });
            }

            let bytes = &self.buf[self.offset..self.offset + len];
            labels.push(String::from_utf8_lossy(bytes).into_owned());
            self.offset += len;
        }

        Ok(labels.join("."))
    }

    // All three record groups are read as one homogeneous sequence,
    // max(ANCOUNT, NSCOUNT, ARCOUNT) entries long. That conflates sections
    // the real protocol keeps apart, but it is the established behavior of
    // this tool and downstream output depends on it.
    fn parse_records(&mut self, header: &Header) -> Vec<Record> {
        let count = header.answer_count
            .max(header.authority_count)
            .max(header.additional_count);

        let mut records = Vec::new();

        for _ in 0..count {
            if self.offset >= self.buf.len() {
                break;
            }

            // a record that cannot be read in full takes the rest of the
            // section with it; whatever parsed before it is kept
            match Record::parse(self) {
                Ok(record) => records.push(record),
                Err(_) => break,
            }
        }

        records
    }
}
