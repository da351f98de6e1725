use clap::{self, Parser};
use config::ArgCheck;
use log::{error, info, Level};
use simple_logger::init_with_level;

use ec_split::{
    cli::{Args, SubArgs},
    core::{split_by_ec, split_by_group},
};

fn exit_on<E: std::fmt::Display>(e: E) -> ! {
    error!("{}", e);
    std::process::exit(1);
}

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();
    match args.command {
        SubArgs::Ec { args } => {
            args.check().unwrap_or_else(|e| exit_on(e));
            split_by_ec(args).unwrap_or_else(|e| exit_on(e));
        }
        SubArgs::Group { args } => {
            args.check().unwrap_or_else(|e| exit_on(e));
            split_by_group(args).unwrap_or_else(|e| exit_on(e));
        }
    }

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
