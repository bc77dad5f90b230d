use crate::packet::Packet;

// Serializes a packet for sending. Queries are all this tool ever puts on
// the wire, so only the header and question sections are written; the
// record counts in the header are emitted as-is.
#[derive(Default)]
pub struct PacketWriter {
    pub packet: Packet,
}

impl PacketWriter {
    pub fn from(packet: Packet) -> PacketWriter {
        PacketWriter {
            packet,
        }
    }

    pub fn write(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(64);

        buf.extend_from_slice(&self.packet.header.write());
        buf.append(&mut self.packet.question.write());

        buf
    }
}
