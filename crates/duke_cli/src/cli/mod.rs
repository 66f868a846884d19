use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Duke, an interactive task-tracking assistant", long_about = None)]
pub struct Cli {
    /// Override the save-file location
    #[arg(long = "save-file", value_name = "PATH")]
    pub save_file: Option<PathBuf>,
}
