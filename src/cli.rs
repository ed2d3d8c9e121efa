use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chapquiz", version, about = "Chapter-based terminal quiz runner")]
pub struct Cli {
    /// Path to a question file, or a directory containing one [default: .]
    #[arg(default_value = ".")]
    pub path: String,

    /// Delete the saved session and start fresh
    #[arg(long)]
    pub reset: bool,

    /// Show saved progress without entering the TUI
    #[arg(long)]
    pub status: bool,

    /// Export results to a YAML file (for backup)
    #[arg(long, value_name = "path")]
    pub export: Option<String>,

    /// Quiz taker's name (skips the name prompt)
    #[arg(long, value_name = "name")]
    pub name: Option<String>,
}
