use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "switchgen")]
#[command(about = "Generate switch configurations from templates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Read the switch inventory from the SQLite database.
    Db(DbArgs),
    /// Read the switch inventory, VLANs, and config layers from files.
    Files(FilesArgs),
}

#[derive(clap::Args, Debug)]
pub struct CommonArgs {
    /// Output directory for configurations.
    #[arg(short, long)]
    pub output_dir: PathBuf,
    /// Print configurations to the console.
    #[arg(long)]
    pub print: bool,
    /// Directory holding per-host fact files (`<dir>/<hostname>/*.json`).
    #[arg(long)]
    pub checks_dir: Option<PathBuf>,
    /// Directory holding the model templates.
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,
    /// YAML mapping of hardware model to template file name.
    #[arg(long)]
    pub template_map: Option<PathBuf>,
    /// Base configuration layer (YAML).
    #[arg(long)]
    pub base_config: Option<PathBuf>,
    /// Global configuration layer (YAML).
    #[arg(long)]
    pub global_config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct DbArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Inventory database path.
    #[arg(long)]
    pub db: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct FilesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// YAML inventory: `global:` layer plus a `switches:` list.
    #[arg(long)]
    pub switches: PathBuf,
    /// VLAN list applied to every switch instead of per-host fact files.
    #[arg(long)]
    pub vlans: Option<PathBuf>,
    /// Render every switch with this template instead of selecting by model.
    #[arg(long)]
    pub template: Option<PathBuf>,
}
