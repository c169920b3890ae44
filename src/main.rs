use std::{
    io::{Read, Write},
    path::PathBuf,
};

use albumtile::{
    artwork_url::ArtworkUrlTemplate,
    config::{ensure_config_file, load_config_file, Config, CONFIG_FILE_NAME},
    optimize_album_name, parse_album_records, render_album_tiles, TileSize,
};
use clap::{Parser, Subcommand};
use log::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "albumtile", about = "Render album tiles and clean album names")]
struct Cli {
    /// Config file (defaults to albumtile.toml in the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the display name for each album title
    Normalize {
        #[arg(required = true)]
        titles: Vec<String>,
    },
    /// Render a JSON array of albums as HTML tiles
    Tiles {
        /// Tile size (medium or small); defaults to the configured size
        #[arg(long)]
        size: Option<TileSize>,

        /// Input JSON file; reads stdin when omitted
        input: Option<PathBuf>,
    },
}

fn load_config(explicit_path: Option<&PathBuf>) -> Config {
    if let Some(path) = explicit_path {
        return load_config_file(path);
    }
    let Some(config_dir) = dirs::config_dir() else {
        info!("No user config directory available. Using default config");
        return Config::default();
    };
    let config_file = config_dir.join(CONFIG_FILE_NAME);
    if let Err(err) = ensure_config_file(&config_file) {
        warn!("Could not create default config. Using defaults. error={}", err);
        return Config::default();
    }
    load_config_file(&config_file)
}

fn read_input(input: Option<&PathBuf>) -> Result<String, String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read {}: {}", path.display(), err)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| format!("failed to read stdin: {}", err))?;
            Ok(text)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut clog = colog::default_builder();
    clog.filter(
        None,
        if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        },
    );
    clog.init();

    std::panic::set_hook(Box::new(|panic_info| {
        let current_thread = std::thread::current();
        let thread_name = current_thread.name().unwrap_or("unnamed");
        log::error!("panic in thread '{}': {}", thread_name, panic_info);
    }));

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Normalize { titles } => {
            for title in titles {
                writeln!(stdout, "{}", optimize_album_name(&title))?;
            }
        }
        Command::Tiles { size, input } => {
            let config = load_config(cli.config.as_ref());
            let size = size.unwrap_or(config.tiles.default_size);
            let artwork = ArtworkUrlTemplate::new(&config.artwork.url_root);
            debug!(
                "Using artwork root {} for {} tiles",
                config.artwork.url_root,
                size.as_str()
            );

            let albums = parse_album_records(&read_input(input.as_ref())?)?;
            writeln!(stdout, "{}", render_album_tiles(&albums, size, &artwork))?;
        }
    }
    Ok(())
}
