use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook")]
#[command(about = "Menu-driven address book for the command line", long_about = None)]
pub struct Cli {
    /// Directory holding the address data (defaults to the platform data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}
