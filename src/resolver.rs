use std::io::{BufRead, Write};
use anyhow::{Context, Result};
use tracing::{error, info};
use crate::error::DnsError;
use crate::packet::Packet;
use crate::parser::PacketParser;
use crate::query_type::DnsType;
use crate::transport::Transport;
use crate::util::to_hex;
use crate::writer::PacketWriter;

// Drives a batch of lookups, one hostname per input line, strictly in
// order. A reply that cannot be decoded fails that hostname alone; sink and
// input errors end the batch.
pub struct BatchResolver<T: Transport, W: Write> {
    transport: T,
    sink: W,
    qtype: DnsType,
}

#[derive(Default, Debug)]
pub struct BatchSummary {
    pub attempted: usize,
    pub resolved: usize,
    pub failures: Vec<(String, DnsError)>,
}

impl<T: Transport, W: Write> BatchResolver<T, W> {
    pub fn new(transport: T, sink: W, qtype: DnsType) -> Self {
        Self {
            transport,
            sink,
            qtype,
        }
    }

    pub fn run<R: BufRead>(&mut self, input: R) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();

        for line in input.lines() {
            let line = line.context("failed to read the hostname list")?;
            let host = line.trim();

            if host.is_empty() {
                continue;
            }

            summary.attempted += 1;
            self.lookup(host, &mut summary)?;
        }

        self.sink.flush().context("failed to flush the response sink")?;

        Ok(summary)
    }

    // Returns Err only for sink failures; per-host errors land in the
    // summary and the caller moves on to the next hostname.
    fn lookup(&mut self, host: &str, summary: &mut BatchSummary) -> Result<()> {
        info!("resolving {}", host);

        let writer = PacketWriter::from(Packet::query(self.qtype, host));
        let request = writer.write();

        println!("Request:\n{}\n", to_hex(&request));
        println!("Request (decoded):\n{}\n", writer.packet);

        let response = match self.transport.send(&request) {
            Ok(response) => response,
            Err(err) => {
                error!("{}: transport error: {}", host, err);
                summary.failures.push((host.to_string(), err));

                return Ok(());
            }
        };

        // persisted before decoding so malformed replies are still captured;
        // responses are appended back to back with no framing
        self.sink
            .write_all(&response)
            .context("failed to write to the response sink")?;

        println!("Response:\n{}\n", to_hex(&response));

        match PacketParser::new(&response).parse() {
            Ok(packet) => {
                println!("Response (decoded):\n{}\n", packet);
                summary.resolved += 1;
            },
            Err(err) => {
                error!("{}: failed to decode the response: {}", host, err);
                summary.failures.push((host.to_string(), err));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use super::*;

    struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<Vec<u8>, DnsError>>>,
    }

    impl ScriptedTransport {
        fn new(replies: Vec<Result<Vec<u8>, DnsError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
            }
        }
    }

    impl Transport for ScriptedTransport {
        fn send(&self, _req: &[u8]) -> Result<Vec<u8>, DnsError> {
            self.replies.borrow_mut().pop_front().expect("no scripted reply left")
        }
    }

    fn reply_for(host: &str) -> Vec<u8> {
        PacketWriter::from(Packet::query(DnsType::A, host)).write()
    }

    #[test]
    fn one_bad_reply_does_not_abort_the_batch() {
        let truncated = vec![0xAA; 5];
        let replies = vec![
            Ok(reply_for("one.test")),
            Ok(truncated.clone()),
            Ok(reply_for("three.test")),
        ];
        let mut sink = Vec::new();

        let mut resolver =
            BatchResolver::new(ScriptedTransport::new(replies), &mut sink, DnsType::A);
        let summary = resolver
            .run("one.test\ntwo.test\nthree.test\n".as_bytes())
            .unwrap();
        drop(resolver);

        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.resolved, 2);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].0, "two.test");
        assert!(matches!(summary.failures[0].1, DnsError::TruncatedMessage { .. }));

        // every raw reply lands in the sink, the undecodable one included
        let expected = [reply_for("one.test"), truncated, reply_for("three.test")].concat();
        assert_eq!(sink, expected);
    }

    #[test]
    fn transport_errors_are_isolated() {
        let replies = vec![Err(DnsError::Timeout), Ok(reply_for("b.test"))];
        let mut sink = Vec::new();

        let mut resolver =
            BatchResolver::new(ScriptedTransport::new(replies), &mut sink, DnsType::A);
        let summary = resolver.run("a.test\nb.test\n".as_bytes()).unwrap();
        drop(resolver);

        assert_eq!(summary.resolved, 1);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].0, "a.test");
        assert!(matches!(summary.failures[0].1, DnsError::Timeout));

        // nothing was received for the failed host, so nothing was persisted
        assert_eq!(sink, reply_for("b.test"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let replies = vec![Ok(reply_for("host.test"))];
        let mut sink = Vec::new();

        let mut resolver =
            BatchResolver::new(ScriptedTransport::new(replies), &mut sink, DnsType::A);
        let summary = resolver.run("\n   \n  host.test  \n\n".as_bytes()).unwrap();

        assert_eq!(summary.attempted, 1);
        assert_eq!(summary.resolved, 1);
    }
}
