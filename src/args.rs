use clap::Parser;

#[derive(Parser, Debug)]
#[command(about)]
pub(crate) struct Args {
    #[arg(long, short, default_value = None)]
    pub(crate) resolver: Option<String>,
    #[arg(long, short, default_value = None)]
    pub(crate) port: Option<u16>,
    #[arg(long, short, default_value = None)]
    pub(crate) timeout: Option<String>,
    #[arg(long, short = 'T', default_value = None)]
    pub(crate) qtype: Option<String>,
    #[arg(long, short, default_value = None)]
    pub(crate) input: Option<String>,
    #[arg(long, short, default_value = None)]
    pub(crate) output: Option<String>,
    #[arg(long, short, default_value = None)]
    pub(crate) config: Option<String>,
}
