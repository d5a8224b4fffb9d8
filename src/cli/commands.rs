use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mb", about = concat!("matchbook v", env!("CARGO_PKG_VERSION"), " - football fixtures in a JSON file"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Match file to read and write (default: match_details.json)
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,

    /// Config file (default: <config dir>/matchbook/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all matches
    List,
    /// Add a match
    Add(AddArgs),
    /// Edit a match by its list number
    Edit(EditArgs),
    /// Delete a match by its list number
    Delete(DeleteArgs),
    /// Delete every match
    Clear(ClearArgs),
    /// Validate the match file
    Check,
}

#[derive(Args)]
pub struct AddArgs {
    /// Home team name
    #[arg(long)]
    pub home: String,
    /// Away team name
    #[arg(long)]
    pub away: String,
    /// Fixture date as ddmmyyyy, e.g. 20102025
    #[arg(long)]
    pub date: String,
    /// Kick-off time, e.g. 20:00
    #[arg(long, default_value = "")]
    pub time: String,
    /// Stream source URL
    #[arg(long, default_value = "")]
    pub stream: String,
    /// Home logo path (default: /logos/<Home_Team>.png)
    #[arg(long)]
    pub home_logo: Option<String>,
    /// Away logo path (default: /logos/<Away_Team>.png)
    #[arg(long)]
    pub away_logo: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// List number of the match (1-based, as shown by `mb list`)
    pub number: usize,
    #[arg(long)]
    pub home: Option<String>,
    #[arg(long)]
    pub away: Option<String>,
    /// Fixture date as ddmmyyyy
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub stream: Option<String>,
    /// Home logo path; an empty value resets it to the derived default
    #[arg(long)]
    pub home_logo: Option<String>,
    /// Away logo path; an empty value resets it to the derived default
    #[arg(long)]
    pub away_logo: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// List number of the match (1-based)
    pub number: usize,
    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Confirm deleting all matches
    #[arg(long)]
    pub yes: bool,
}
