mod config;
mod console;
mod dispatch;
mod error;
mod session;

use crate::{
    config::Config,
    console::Terminal,
    session::{Services, Session},
};
use clap::Parser;
use mailbox::{ImapConnector, Staging};
use map::{BrowserViewer, GoogleMapPlotter, NoViewer, Viewer};
use uplink::RockBlockClient;

/// Balloon ground station: downlinked telemetry in, uplink commands out.
#[derive(Parser, Debug)]
#[command(version, about = "Balloon ground station", long_about = None)]
struct Args {
    /// Configuration file, with or without extension
    #[arg(short, long, default_value = "ground-station")]
    config: String,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();

    let config = Config::load(&args.config).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {}", err);
        eprintln!("Set the missing keys in {} or through BALLOON_* variables.", args.config);
        std::process::exit(1);
    });

    log::info!("Mail: {}:{} ({})", config.mail.host, config.mail.port, config.mail.folder);
    log::info!("Uplink: {} (IMEI {})", config.uplink.endpoint, config.uplink.imei);
    log::info!("Staging directory: {}", config.staging.dir.display());

    let connector = ImapConnector::new(&config.mail.host, config.mail.port, &config.mail.folder);
    let mut uplink = RockBlockClient::new(&config.uplink.endpoint, config.uplink.credentials());
    let renderer = GoogleMapPlotter::new(&config.map.api_key);
    let viewer: Box<dyn Viewer> = if config.map.open_viewer {
        Box::new(BrowserViewer)
    } else {
        Box::new(NoViewer)
    };

    let services = Services {
        connector: &connector,
        uplink: &mut uplink,
        renderer: &renderer,
        viewer: viewer.as_ref(),
    };
    let mut session = Session::new(Terminal, services, Staging::new(&config.staging.dir));

    if let Err(err) = session.run() {
        log::error!("{}", err);
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
