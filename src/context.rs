use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use anyhow::{bail, Result};
use crate::config::Config;
use crate::duration;
use crate::query_type::DnsType;

const DEFAULT_RESOLVER: &str = "1.1.1.1";
const DEFAULT_PORT: u16 = 53;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// Merged configuration resolved into concrete runtime values. Anything that
// can fail (addresses, durations, type names) fails here, before the first
// query goes out.
pub struct Context {
    pub target: SocketAddr,
    pub timeout: Duration,
    pub qtype: DnsType,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Context {
    pub fn from(config: Config) -> Result<Self> {
        let addr = config.resolver.addr
            .unwrap_or_else(|| DEFAULT_RESOLVER.to_string());
        let port = config.resolver.port.unwrap_or(DEFAULT_PORT);

        let timeout = match config.resolver.timeout {
            Some(s) => duration::parse(&s)?,
            None => DEFAULT_TIMEOUT,
        };

        let qtype = match config.batch.qtype {
            Some(name) => DnsType::from_name(&name)?,
            None => DnsType::A,
        };

        Ok(Self {
            target: to_target(&addr, port)?,
            timeout,
            qtype,
            input: config.batch.input.unwrap_or_else(|| PathBuf::from("url.txt")),
            output: config.batch.output.unwrap_or_else(|| PathBuf::from("responses.bin")),
        })
    }
}

fn to_target(addr: &str, default_port: u16) -> Result<SocketAddr> {
    if let Ok(addr) = SocketAddr::from_str(addr) {
        return Ok(addr);
    }

    match IpAddr::from_str(addr) {
        Ok(ip_addr) => Ok(SocketAddr::new(ip_addr, default_port)),
        Err(_e) => bail!("{} is not a valid resolver address", addr),
    }
}
