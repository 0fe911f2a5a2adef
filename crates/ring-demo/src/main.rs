use clap::Parser;
use progress_ring::{ProgressConfig, StyleOptions};
use relm4::prelude::*;
use ring_demo::config;
use ring_demo::gui::app::AppModel;
use std::path::PathBuf;

const APP_ID: &str = "org.progressring.demo";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file to read instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ring stroke thickness
    #[arg(long)]
    thickness: Option<f64>,

    /// Ring radius
    #[arg(long)]
    radius: Option<f64>,

    /// Duration of each animation stage in milliseconds
    #[arg(long, allow_negative_numbers = true)]
    duration: Option<i64>,

    /// Write the default config file if missing and print its path
    #[arg(long)]
    write_config: bool,
}

impl Args {
    fn apply(&self, options: &mut StyleOptions) {
        options.stroke_thickness = self.thickness.or(options.stroke_thickness);
        options.circle_radius = self.radius.or(options.circle_radius);
        options.animation_duration_ms = self.duration.or(options.animation_duration_ms);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.write_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut app_config = config::load_or_default(args.config.as_deref());
    args.apply(&mut app_config.progress);
    let progress = ProgressConfig::resolve(&app_config.progress);
    log::debug!("Resolved progress config: {:?}", progress);

    // clap owns the command line, keep GTK from parsing it again
    let app = RelmApp::new(APP_ID).with_args(Vec::new());
    app.run::<AppModel>((progress, app_config.window));
    Ok(())
}
