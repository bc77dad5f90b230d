use std::path::PathBuf;
use anyhow::{bail, Result};
use serde::Deserialize;
use crate::args::Args;
use crate::fs::ensure_config_dir;

#[derive(Default, Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

impl Config {
    pub fn apply_args(mut self, args: Args) -> Self {
        self.resolver.addr = args.resolver.or(self.resolver.addr);
        self.resolver.port = args.port.or(self.resolver.port);
        self.resolver.timeout = args.timeout.or(self.resolver.timeout);
        self.batch.qtype = args.qtype.or(self.batch.qtype);
        self.batch.input = args.input.map(PathBuf::from).or(self.batch.input);
        self.batch.output = args.output.map(PathBuf::from).or(self.batch.output);

        self
    }
}

#[derive(Default, Deserialize, Debug)]
pub struct ResolverConfig {
    pub addr: Option<String>,
    pub port: Option<u16>,
    pub timeout: Option<String>,
}

#[derive(Default, Deserialize, Debug)]
pub struct BatchConfig {
    pub qtype: Option<String>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

pub fn load_config(path: Option<String>) -> Result<Config> {
    if let Some(path) = path {
        return load(PathBuf::from(path));
    }

    match ensure_config_dir() {
        Some(dir) => load(dir.join("conf.toml")),
        None => bail!("couldn't find any config file"),
    }
}

fn load(p: PathBuf) -> Result<Config> {
    let file = std::fs::read_to_string(p)?;

    let cfg: Config = toml::from_str(&file)?;

    Ok(cfg)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn file_values() {
        let cfg: Config = toml::from_str(
            r#"
            [resolver]
            addr = "9.9.9.9"
            timeout = "2s"

            [batch]
            qtype = "TXT"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.resolver.addr.as_deref(), Some("9.9.9.9"));
        assert_eq!(cfg.resolver.port, None);
        assert_eq!(cfg.resolver.timeout.as_deref(), Some("2s"));
        assert_eq!(cfg.batch.qtype.as_deref(), Some("TXT"));
        assert_eq!(cfg.batch.input, None);
    }

    #[test]
    fn args_override_file_values() {
        let cfg: Config = toml::from_str("[resolver]\naddr = \"9.9.9.9\"\nport = 5353\n").unwrap();

        let merged = cfg.apply_args(Args {
            resolver: Some("8.8.8.8".to_string()),
            port: None,
            timeout: None,
            qtype: None,
            input: Some("hosts.txt".to_string()),
            output: None,
            config: None,
        });

        assert_eq!(merged.resolver.addr.as_deref(), Some("8.8.8.8"));
        assert_eq!(merged.resolver.port, Some(5353));
        assert_eq!(merged.batch.input, Some(PathBuf::from("hosts.txt")));
    }
}
