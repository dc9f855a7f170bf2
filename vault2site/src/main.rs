// src/main.rs
use anyhow::Result;
use clap::Parser;
use vault2site::{Args, run};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    run(&args)?;
    Ok(())
}
