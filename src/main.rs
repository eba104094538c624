use clap::Parser;
use image_contents::cli::commands::{cmd_describe, cmd_needs_label};
use image_contents::cli::config::{Cli, Commands, load_config, resolve_settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match &cli.command {
        Commands::Describe {
            snapshot,
            locale,
            format,
            output,
        } => {
            let settings = resolve_settings(&cli, &config, locale.as_deref());
            cmd_describe(snapshot, format, output.as_deref(), &settings, cli.verbose)?;
        }
        Commands::NeedsLabel { snapshot } => {
            let settings = resolve_settings(&cli, &config, None);
            let missing = cmd_needs_label(snapshot, &settings, cli.verbose)?;
            if missing > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
