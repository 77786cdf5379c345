use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use stowage::{folders, hash, ContentSource, StowageConfig, TempStore};

use crate::cli::{Algorithm, Cli, Command, ConfigArgs, HashArgs, MkdtempArgs, PutArgs};

pub fn run_command(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Put(args) => cmd_put(config, args),
        Command::Hash(args) => cmd_hash(args),
        Command::Mkdtemp(args) => cmd_mkdtemp(config, args),
        Command::Config(args) => cmd_config(config, args),
    }
}

fn load_config(path: Option<&Path>) -> Result<StowageConfig> {
    match path {
        Some(p) => {
            StowageConfig::from_file(p).with_context(|| format!("loading {}", p.display()))
        }
        None => Ok(StowageConfig::from_env()),
    }
}

fn cmd_put(config: StowageConfig, args: PutArgs) -> Result<()> {
    let store = TempStore::new(config);
    let file =
        File::open(&args.file).with_context(|| format!("opening {}", args.file.display()))?;
    let content = ContentSource::stream(file);

    let stored = match &args.name {
        Some(name) => store.put_named(content, name, args.root.as_deref())?,
        None => store.put(content, args.root.as_deref())?,
    };

    println!("{}", stored.display());
    Ok(())
}

fn cmd_hash(args: HashArgs) -> Result<()> {
    match args.algorithm {
        Algorithm::Md5 => println!("{}", hash::md5_file(&args.file)?),
        Algorithm::Sha1 => println!("{}", hash::sha1_file(&args.file)?),
        Algorithm::Sha256 => println!("{}", hash::sha256_file(&args.file)?),
        Algorithm::All => {
            println!("md5     {}", hash::md5_file(&args.file)?);
            println!("sha1    {}", hash::sha1_file(&args.file)?);
            println!("sha256  {}", hash::sha256_file(&args.file)?);
        }
    }
    Ok(())
}

fn cmd_mkdtemp(config: StowageConfig, args: MkdtempArgs) -> Result<()> {
    let base = args.root.unwrap_or_else(|| config.scratch_dir());
    let dir = folders::create_temp_in(&base)?;

    println!("{}", dir.display());
    Ok(())
}

fn cmd_config(config: StowageConfig, _args: ConfigArgs) -> Result<()> {
    print!("{}", config_toml(&config));
    Ok(())
}

fn config_toml(config: &StowageConfig) -> String {
    let mut output = String::new();
    output.push_str("[storage]\n");
    output.push_str(&format!("tmppath = \"{}\"\n", config.tmp_root.display()));
    output
}
