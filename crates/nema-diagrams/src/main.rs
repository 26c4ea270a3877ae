use clap::Parser;
use nema_diagrams::{all_devices, save_all, Device};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nema-diagrams",
    about = "Render NEMA plug and receptacle patterns to SVG"
)]
struct Cli {
    /// Directory to write the SVG files into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Render only the named device (e.g. 5-15); may be repeated
    #[arg(short, long)]
    device: Vec<String>,

    /// List available device names and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let devices = match all_devices() {
        Ok(devices) => devices,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.list {
        for device in &devices {
            println!("{}", device.name());
        }
        return;
    }

    let selected: Vec<Device> = if cli.device.is_empty() {
        devices
    } else {
        let mut selected = Vec::new();
        for name in &cli.device {
            match devices.iter().find(|d| d.name() == name) {
                Some(device) => selected.push(device.clone()),
                None => {
                    eprintln!("Error: unknown device: {name}");
                    std::process::exit(1);
                }
            }
        }
        selected
    };

    match save_all(&cli.out_dir, &selected) {
        Ok(written) => {
            eprintln!("Wrote {} file(s) to {}", written.len(), cli.out_dir.display());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
