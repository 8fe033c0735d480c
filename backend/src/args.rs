use clap::{value_parser, Parser};

#[derive(Debug, Clone, Parser)]
#[command(about = "Mock emotion-analysis backend for the mobile client")]
pub struct Args {
    /// Listening port.
    #[arg(short, long, default_value_t = 8002)]
    #[arg(value_parser = value_parser!(u16).range(1024..))]
    pub port: u16,

    /// No logging.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Log verbosity, repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
