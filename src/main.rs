mod args;
mod console_driver;

use clap::Parser;
use log::{debug, info};
use stenotype::Translator;

use args::Arguments;
use console_driver::ConsoleDriver;

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(args.loglevel.into())
        .parse_env("RUST_LOG")
        .init();

    if args.expressions.is_empty() {
        eprintln!("No arguments entered, nothing to do.");
        return Ok(());
    }

    debug!("emitting {:?} in `{}`", args.emit, args.namespace);

    let translator = Translator::new(&args.namespace);
    let mut driver = ConsoleDriver::new(args.rich);

    for expression in &args.expressions {
        match translator.translate(expression, args.emit) {
            Ok(text) => println!("{text}"),
            Err(error) => {
                info!("failed to translate `{expression}`");
                driver.report(expression, &error)?;
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
