use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "stowctl",
    about = "Temporary content storage toolbox",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file with a [storage] section
    #[arg(long, global = true, env = "STOWAGE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Store a file's bytes under the managed temp root
    Put(PutArgs),
    /// Print digests of a file
    Hash(HashArgs),
    /// Allocate a fresh temporary directory
    Mkdtemp(MkdtempArgs),
    /// Print the effective configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct PutArgs {
    /// File whose bytes are streamed into the store
    pub file: PathBuf,

    /// Fix the stored filename instead of generating a unique one
    #[arg(long)]
    pub name: Option<String>,

    /// Base directory overriding the configured temp root
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Args)]
pub struct HashArgs {
    /// File to digest
    pub file: PathBuf,

    #[arg(long, value_enum, default_value = "all")]
    pub algorithm: Algorithm,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    All,
}

#[derive(Args)]
pub struct MkdtempArgs {
    /// Base directory overriding the configured temp root
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConfigArgs {}
