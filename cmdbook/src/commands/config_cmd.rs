use crate::config::Config;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Property to change (print_style, display_limit)
    pub property: String,
    /// New value
    pub value: String,
}

pub fn run(args: &ConfigArgs) -> Result<()> {
    let mut config = Config::load()?;
    config.set(&args.property, &args.value)?;
    config.save()?;
    println!("✓ Set {} = {}", args.property, args.value);
    Ok(())
}
