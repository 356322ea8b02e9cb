use anyhow::{Context, Result};
use markymark_config::Config;
use markymark_engine::render::html::{join, pipeline};
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process,
};

/// Parsed command line: `markymark [--config PATH] [FILE]`.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    input: Option<PathBuf>,
}

impl Args {
    fn parse(args: &[String]) -> Option<Self> {
        let mut parsed = Args::default();
        let mut rest = args.iter().skip(1);
        while let Some(arg) = rest.next() {
            match arg.as_str() {
                "--config" | "-c" => parsed.config = Some(PathBuf::from(rest.next()?)),
                "-" if parsed.input.is_none() => {}
                flag if flag.starts_with('-') => return None,
                path if parsed.input.is_none() => parsed.input = Some(PathBuf::from(path)),
                _ => return None,
            }
        }
        Some(parsed)
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(path) => (path.clone(), true),
        None => (Config::config_path(), false),
    };
    log::debug!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None => {
            if explicit {
                log::warn!(
                    "Config file '{}' not found, using defaults",
                    config_path.display()
                );
            }
            Ok(Config::default())
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let Some(parsed) = Args::parse(&args) else {
        eprintln!("Usage: {} [--config PATH] [FILE]", args[0]);
        eprintln!("Reads FILE (or stdin) and prints it as HTML.");
        process::exit(1);
    };

    let config = load_config(parsed.config.as_ref())?;
    let flavor = config.flavor()?;
    log::info!("Using flavor {}", flavor.name());

    let markymark = pipeline(flavor.as_ref(), &config.html_options())?;
    let markdown = read_input(parsed.input.as_ref())?;
    let rendered = markymark.parse_markdown(&markdown)?;

    println!("{}", join(&rendered));
    Ok(())
}
