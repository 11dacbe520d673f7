use crate::{
    config::{self, Config},
    ui::{self, style::Theme, App, Terminal},
};
use alas_gateways::{alas_api::AlasApi, map::LeafletMap};
use anyhow::Result;
use clap::Parser;
use std::{io, path::PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "alas-tools",
    about = "Retrieve pallet coordinates from the Alas delivery API and draw them on a map",
    disable_version_flag = true
)]
struct Args {
    /// Print the version and exit
    #[arg(short = 'v', long)]
    version: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn version_line() -> String {
    format!("Alas-Tools-Cli version {}", env!("CARGO_PKG_VERSION"))
}

pub fn run() -> Result<()> {
    config::load_dotenv();

    let args = Args::parse();
    if args.version {
        println!("{}", version_line());
        return Ok(());
    }

    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    log::debug!("Using API at {}", cfg.api.base_url);
    log::debug!("Writing files to {}", cfg.output.dir.display());

    let placeholder_credentials = cfg.api.credentials.uses_placeholders();
    let api = AlasApi::new(
        cfg.api.base_url,
        cfg.api.credentials.username,
        cfg.api.credentials.password,
    );
    let map = LeafletMap::default();
    let app = App {
        search: &api,
        map: &map,
        output_dir: &cfg.output.dir,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut term = Terminal::new(stdin.lock(), stdout.lock(), Theme::new(cfg.ui.color));
    if placeholder_credentials {
        term.warning(
            "ALAS_API_USER or ALAS_API_PASSWORD is not set, using development credentials.",
        )?;
    }
    ui::run_menu(&mut term, &app)?;
    Ok(())
}
