/// ectools: EC number classification and partitioning of enzyme tables
///
/// This is the entry point for the ectools CLI. Every subcommand
/// forwards its trailing arguments to the in-process entry point of
/// one tool:
/// - ec-type
/// - ec-assign
/// - ec-split
/// - ec-count
///
/// `run` chains ec-type and `ec-split group`: the names file becomes
/// a grouped reference that is then used to split the dataset.
///
/// To get help on the subcommands, you can run:
///
/// ```shell
/// ectools ec-split -- group --help
/// ```
///
use clap::{Args, Parser, Subcommand};
use ectools::{lib, RUN_HELP};
use log::{error, info, Level};
use simple_logger::init_with_level;

use ec_assign::lib_ec_assign;
use ec_count::lib_ec_count;
use ec_split::lib_ec_split;
use ec_type::lib_ec_type;

#[derive(Parser)]
#[command(name = "ectools")]
#[command(about = "ectools: EC number classification and partitioning of enzyme tables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "ec-type")]
    Type(ToolArgs),
    #[command(name = "ec-assign")]
    Assign(ToolArgs),
    #[command(name = "ec-split")]
    Split(ToolArgs),
    #[command(name = "ec-count")]
    Count(ToolArgs),
    #[command(name = "run")]
    Run(RunArgs),
}

#[derive(Args)]
struct ToolArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Args)]
struct RunArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, help = RUN_HELP)]
    args: Vec<String>,
}

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();
    let cli = Cli::parse();

    init();

    let result = match cli.command {
        Commands::Type(args) => lib_ec_type(args.args).map(|_| ()),
        Commands::Assign(args) => lib_ec_assign(args.args).map(|_| ()),
        Commands::Split(args) => lib_ec_split(args.args).map(|_| ()),
        Commands::Count(args) => lib_ec_count(args.args).map(|_| ()),
        Commands::Run(args) => lib(args.args).map(|_| ()),
    };

    result.unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}

fn init() {
    let message = format!(
        r#"

        ectools: EC number classification and partitioning of enzyme tables

        this is the entry point for the ectools CLI
        and it is responsible for forwarding the CLI arguments
        to each tool:

        - ec-type
        - ec-assign
        - ec-split
        - ec-count
        - run (ec-type -> ec-split group)

        > version: {}

        * to get help on the subcommands, run:
            ectools <SUBCOMMAND> -- --help

        "#,
        config::VERSION
    );

    println!("{}", message);
}
