use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;
use rand::{thread_rng, Rng};
use crate::error::DnsError;

// Large enough for any reply this tool can make sense of; responses are not
// reassembled or retried.
const RECV_BUF_LEN: usize = 4096;

pub trait Transport {
    fn send(&self, req: &[u8]) -> Result<Vec<u8>, DnsError>;
}

pub struct UdpTransport {
    target: SocketAddr,
    timeout: Duration,
}

impl UdpTransport {
    pub fn new(target: SocketAddr, timeout: Duration) -> UdpTransport {
        Self {
            target,
            timeout,
        }
    }
}

impl Transport for UdpTransport {
    fn send(&self, req: &[u8]) -> Result<Vec<u8>, DnsError> {
        let mut res = [0; RECV_BUF_LEN];

        let socket = UdpSocket::bind(
            ("0.0.0.0", thread_rng().gen_range(9999..u16::MAX))
        )?;
        socket.set_read_timeout(Some(self.timeout))?;

        socket.send_to(req, self.target)?;
        let (n, _) = socket.recv_from(&mut res)?;

        Ok(res[..n].to_vec())
    }
}
