// SPDX-License-Identifier: MPL-2.0
//! Command-line entry point.
//!
//! Without a subcommand the viewer starts. The site generators produce the
//! files a static deployment of the greeting page needs.

use birthday_gallery::app::{self, paths::AppPaths, Flags};
use birthday_gallery::application::access::PasswordGate;
use birthday_gallery::config::{self, DEFAULT_MANIFEST};
use birthday_gallery::domain::media::MediaKind;
use birthday_gallery::error::Error;
use birthday_gallery::site::{self, ManifestOptions};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage:
  birthday-gallery [--lang L] [--config-dir D] [--data-dir D] [--manifest PATH|URL]
  birthday-gallery generate-manifest --images DIR --thumbs DIR [--output FILE] [--prefix P] [--thumb-prefix P]
  birthday-gallery sitemap --base-url URL [--output FILE] [PAGE...]
  birthday-gallery robots --base-url URL [--output FILE] [--disallow PATH]...
  birthday-gallery set-passphrase [--config-dir D] (PASSPHRASE | --clear)";

#[derive(Debug)]
enum CliError {
    Args(pico_args::Error),
    Usage(String),
    App(Error),
    Gui(iced::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Args(e) => write!(f, "{e}\n\n{USAGE}"),
            CliError::Usage(msg) => write!(f, "{msg}\n\n{USAGE}"),
            CliError::App(e) => write!(f, "{e}"),
            CliError::Gui(e) => write!(f, "Viewer error: {e}"),
        }
    }
}

impl From<pico_args::Error> for CliError {
    fn from(err: pico_args::Error) -> Self {
        CliError::Args(err)
    }
}

impl From<Error> for CliError {
    fn from(err: Error) -> Self {
        CliError::App(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::App(err.into())
    }
}

fn main() -> ExitCode {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let outcome = match args.subcommand() {
        Ok(None) => run_viewer(args),
        Ok(Some(command)) => match command.as_str() {
            "generate-manifest" => generate_manifest(args),
            "sitemap" => sitemap(args),
            "robots" => robots(args),
            "set-passphrase" => set_passphrase(args),
            other => Err(CliError::Usage(format!("Unknown command `{other}`"))),
        },
        Err(err) => Err(err.into()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("birthday_gallery=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_viewer(mut args: pico_args::Arguments) -> Result<(), CliError> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        paths: AppPaths::new(
            args.opt_value_from_str("--data-dir")?,
            args.opt_value_from_str("--config-dir")?,
        ),
        manifest: args.opt_value_from_str("--manifest")?,
    };
    reject_leftovers(args)?;

    tracing::info!(?flags, "starting viewer");
    app::run(flags).map_err(CliError::Gui)
}

fn generate_manifest(mut args: pico_args::Arguments) -> Result<(), CliError> {
    let images: PathBuf = args.value_from_str("--images")?;
    let thumbs: PathBuf = args.value_from_str("--thumbs")?;
    let output: PathBuf = args
        .opt_value_from_str("--output")?
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));
    let prefix: Option<String> = args.opt_value_from_str("--prefix")?;
    let thumb_prefix: Option<String> = args.opt_value_from_str("--thumb-prefix")?;
    reject_leftovers(args)?;

    let mut options = ManifestOptions::new(images, thumbs);
    if let Some(prefix) = prefix {
        options.image_prefix = prefix;
    }
    if let Some(prefix) = thumb_prefix {
        options.thumb_prefix = prefix;
    }

    let generated = site::generate_manifest(&options)?;
    for skipped in &generated.skipped {
        tracing::warn!(path = %skipped.display(), "video has no thumbnail, skipped");
    }
    let json = serde_json::to_string_pretty(&generated.manifest).map_err(Error::from)?;
    write_output(&output, &json)?;

    println!(
        "Wrote {} images and {} videos to {}",
        generated.count(MediaKind::Image),
        generated.count(MediaKind::Video),
        output.display()
    );
    Ok(())
}

fn sitemap(mut args: pico_args::Arguments) -> Result<(), CliError> {
    let base_url: String = args.value_from_str("--base-url")?;
    let output: PathBuf = args
        .opt_value_from_str("--output")?
        .unwrap_or_else(|| PathBuf::from("sitemap.xml"));
    let pages = free_arguments(args)?;

    let lastmod = chrono::Local::now().date_naive();
    let xml = site::build_sitemap(&base_url, &pages, lastmod)?;
    write_output(&output, &xml)?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn robots(mut args: pico_args::Arguments) -> Result<(), CliError> {
    let base_url: String = args.value_from_str("--base-url")?;
    let output: PathBuf = args
        .opt_value_from_str("--output")?
        .unwrap_or_else(|| PathBuf::from("robots.txt"));
    let disallow: Vec<String> = args.values_from_str("--disallow")?;
    reject_leftovers(args)?;

    let robots = site::build_robots(&base_url, &disallow)?;
    write_output(&output, &robots)?;
    println!("Wrote {}", output.display());
    Ok(())
}

/// Stores the hash of a new passphrase in `settings.toml`, or removes it.
fn set_passphrase(mut args: pico_args::Arguments) -> Result<(), CliError> {
    let paths = AppPaths::new(None, args.opt_value_from_str("--config-dir")?);
    let clear = args.contains("--clear");
    let passphrase = free_arguments(args)?.into_iter().next();

    let hash = match (clear, passphrase) {
        (true, None) => None,
        (false, Some(passphrase)) if !passphrase.is_empty() => {
            Some(PasswordGate::hash_passphrase(&passphrase))
        }
        _ => {
            return Err(CliError::Usage(
                "Give either a passphrase or --clear".to_string(),
            ))
        }
    };

    let Some(path) = paths.config_file() else {
        return Err(Error::Config("no configuration directory available".to_string()).into());
    };
    let (mut config, warning) = config::load(&paths);
    if warning.is_some() {
        // Saving now would replace the user's file with defaults.
        return Err(Error::Config(format!("{} could not be read", path.display())).into());
    }

    config.access.passphrase_hash = hash;
    config::save_to_path(&config, &path)?;
    println!("Updated {}", path.display());
    Ok(())
}

fn free_arguments(args: pico_args::Arguments) -> Result<Vec<String>, CliError> {
    args.finish()
        .into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| CliError::Usage(format!("Invalid argument {arg:?}")))
        })
        .collect()
}

fn reject_leftovers(args: pico_args::Arguments) -> Result<(), CliError> {
    let leftovers = free_arguments(args)?;
    if leftovers.is_empty() {
        Ok(())
    } else {
        Err(CliError::Usage(format!(
            "Unexpected arguments: {}",
            leftovers.join(" ")
        )))
    }
}

fn write_output(path: &Path, content: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
