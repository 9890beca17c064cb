use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jsonfold")]
#[command(about = "Render a JSON file into a foldable HTML document", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file to render
    pub input: PathBuf,

    /// Output HTML file (defaults to the input path with an .html extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How many nesting levels start expanded (overrides the config file)
    #[arg(long)]
    pub open_levels: Option<u32>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}
