mod args;
mod config;
mod context;
mod duration;
mod error;
mod fs;
mod header;
mod packet;
mod pair;
mod parser;
mod query_type;
mod question;
mod record;
mod record_data;
mod resolver;
mod result_code;
mod transport;
mod util;
mod writer;

use std::fs::{File, OpenOptions};
use std::io::BufReader;
use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::{info, error, Level};
use tracing_subscriber::FmtSubscriber;
use crate::args::Args;
use crate::config::load_config;
use crate::context::Context;
use crate::resolver::BatchResolver;
use crate::transport::UdpTransport;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to initialize logger");

    let args = Args::parse();

    if let Err(err) = run(args) {
        error!("{:#}", err);

        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // a missing config file is fine, the defaults cover everything; an
    // explicitly requested one has to load
    let config = match args.config.clone() {
        Some(path) => load_config(Some(path))?,
        None => load_config(None).unwrap_or_default(),
    };
    let ctx = Context::from(config.apply_args(args))?;

    let input = File::open(&ctx.input)
        .with_context(|| format!("failed to open {}", ctx.input.display()))?;
    let sink = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&ctx.output)
        .with_context(|| format!("failed to open {}", ctx.output.display()))?;

    info!("querying {} records against {}", ctx.qtype, ctx.target);

    let transport = UdpTransport::new(ctx.target, ctx.timeout);
    let mut resolver = BatchResolver::new(transport, sink, ctx.qtype);

    let summary = resolver.run(BufReader::new(input))?;

    info!("resolved {}/{} hostnames", summary.resolved, summary.attempted);
    for (host, err) in &summary.failures {
        info!("{} failed: {}", host, err);
    }

    Ok(())
}
