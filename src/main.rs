// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dino_compare::{Catalog, Config, FormInput, PageController};

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let config_path = take_config_flag(&mut args)?;

    let config = Config::load_or_default(config_path.as_deref())
        .context("Failed to load configuration")?;
    init_logging(&config)?;

    if args.first().map(String::as_str) == Some("render") {
        // One-shot mode: print the results page
        run_render(&config, &args[1..])?;
    } else {
        // UI mode (default)
        run_ui_mode(config)?;
    }

    Ok(())
}

/// Pull `--config PATH` out of the argument list
fn take_config_flag(args: &mut Vec<String>) -> Result<Option<PathBuf>> {
    let Some(pos) = args.iter().position(|a| a == "--config") else {
        return Ok(None);
    };

    if pos + 1 >= args.len() {
        bail!("--config needs a path");
    }

    let path = PathBuf::from(args.remove(pos + 1));
    args.remove(pos);
    Ok(Some(path))
}

fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn run_render(config: &Config, args: &[String]) -> Result<()> {
    let [weight, feet, inches, diet, name] = args else {
        bail!("usage: dino-compare render WEIGHT FEET INCHES DIET NAME [--config PATH]");
    };

    info!("Rendering comparison for {}", name);
    let catalog = Catalog::load_or_empty(&config.data_path);
    let form = FormInput::new(name.as_str(), feet.as_str(), inches.as_str(), weight.as_str(), diet.as_str());

    let mut controller = PageController::new(config);
    controller.submit(&form, &catalog, &mut rand::thread_rng())?;

    println!("{}", controller.render(true));
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: Config) -> Result<()> {
    info!("Loading creatures from {:?}", config.data_path);
    let catalog = Catalog::load_or_empty(&config.data_path);

    let mut app = ui::App::new(catalog, config);
    ui::run_ui(&mut app)?;

    info!("UI closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: Config) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use one-shot mode: dino-compare render WEIGHT FEET INCHES DIET NAME");
    eprintln!("   Or use web UI: cargo run --bin dino-server --features server");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_take_config_flag() {
        let mut a = args(&["render", "--config", "dino.toml", "150"]);
        assert_eq!(take_config_flag(&mut a).unwrap(), Some(PathBuf::from("dino.toml")));
        assert_eq!(a, args(&["render", "150"]));

        let mut b = args(&["render"]);
        assert_eq!(take_config_flag(&mut b).unwrap(), None);

        let mut c = args(&["--config"]);
        assert!(take_config_flag(&mut c).is_err());
    }

    #[test]
    fn test_render_needs_five_values() {
        assert!(run_render(&Config::default(), &args(&["150", "5"])).is_err());
    }
}
