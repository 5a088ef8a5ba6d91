use clap::Parser;
use letcalc::{get_result, logging};
use tracing::{debug, info};

/// letcalc evaluates expressions in a small prefix-notation integer language
/// with `ADD`, `SUB`, `MULT`, `DIV` and `LET`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Sets the log level: ERROR, INFO or DEBUG. Defaults to INFO.
    #[arg(short, long)]
    loglevel: Option<String>,

    /// The command for the calculator, for example "add(1, 2)". Several words
    /// are joined together.
    #[arg(required = true)]
    operations: Vec<String>,
}

fn main() {
    let args = Args::parse();
    logging::init(logging::LogLevel::parse(args.loglevel.as_deref()));

    let command = args.operations.concat();
    debug!("Raw operations text from command line = {:?}", args.operations);
    info!("Calculate command sent to calculator = {command}");

    match get_result(&command) {
        Ok(result) => {
            info!("RESULT = {result}");
            println!("RESULT = {result}");
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
