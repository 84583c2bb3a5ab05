//! Booster Layout CLI
//!
//! Usage:
//!   booster-layout [OPTIONS] [FILE]
//!
//! Options:
//!   -b, --bounds               Print the bound points of every component
//!   -e, --extent               Print the overall vehicle extent
//!   -p, --precision <DIGITS>   Decimal places for coordinates [default: 3]
//!   -h, --help                 Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use booster_layout::{init_tracing, load, DebugConfig, DescriptionError, Vehicle};

#[derive(Parser)]
#[command(name = "booster-layout")]
#[command(about = "Resolve booster set geometry in a vehicle description")]
struct Cli {
    /// Vehicle description (TOML); reads from stdin if not provided
    input: Option<PathBuf>,

    /// Print the bound points of every component
    #[arg(short, long)]
    bounds: bool,

    /// Print the overall vehicle extent
    #[arg(short, long)]
    extent: bool,

    /// Decimal places for coordinates
    #[arg(short, long, default_value_t = 3)]
    precision: usize,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let read = match &cli.input {
        Some(path) => fs::read_to_string(path).map(|content| (content, path.display().to_string())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map(|_| (buffer, "<stdin>".to_string()))
        }
    };
    let (source, filename) = match read.map_err(DescriptionError::from) {
        Ok(read) => read,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let vehicle = match load(&source) {
        Ok(vehicle) => vehicle,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &vehicle) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, vehicle: &Vehicle) -> Result<(), DescriptionError> {
    let config = DebugConfig::new().with_precision(cli.precision);
    let p = cli.precision;

    if cli.bounds {
        for id in vehicle.subtree(vehicle.root())? {
            let points = vehicle
                .estimate_bounds(id)?
                .iter()
                .map(|b| format!("({:.p$}, {:.p$})", b.x, b.r))
                .collect::<Vec<_>>()
                .join(" ");
            println!("{:<28} {}", vehicle.name(id)?, points);
        }
        return Ok(());
    }

    if cli.extent {
        match vehicle.estimate_extent()? {
            Some(extent) => {
                println!("min:    {:.p$}", extent.min);
                println!("max:    {:.p$}", extent.max);
                println!("length: {:.p$}", extent.length());
            }
            None => println!("empty vehicle"),
        }
        return Ok(());
    }

    print!("{}", vehicle.debug_tree_with(&config)?);
    Ok(())
}

fn print_intro() {
    println!(
        r#"Booster Layout - resolve booster set geometry in a vehicle description

USAGE:
    booster-layout [OPTIONS] [FILE]
    cat vehicle.toml | booster-layout

OPTIONS:
    -b, --bounds       Print the bound points of every component
    -e, --extent       Print the overall vehicle extent
    -p, --precision    Decimal places for coordinates
    -h, --help         Print help

DESCRIPTION FORMAT:
    name = "Heavy"

    [[stages]]
    name = "Core"
    length = 12.0

    [[stages.boosters]]
    count = 3              # boosters in the ring
    length = 8.0
    radial_offset = 1.3    # meters from the core axis
    angular_offset = 0.0   # radians
    position = "bottom"    # top | middle | bottom | after | absolute

Set RUST_LOG=booster_layout=debug to trace location resolution."#
    );
}
