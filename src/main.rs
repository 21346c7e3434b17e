use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use ip_count::cli::Args;
use ip_count::error::IpCountError;
use ip_count::output::Console;
use std::process;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            eprintln!("{}", Args::command().render_usage());
            process::exit(IpCountError::MissingArgument.exit_code());
        }
        Err(e) => e.exit(),
    };

    if let Err(e) = ip_count::logging::init(args.log_config.as_deref(), args.log_level()) {
        eprintln!("Error initializing log4rs: {e}");
    }
    log::info!("#Start main()");

    let mut console = Console::stderr(args.color(), args.live);
    let mut out = std::io::stdout().lock();

    if let Err(e) = ip_count::run(&args.run_options(), &mut console, &mut out) {
        log::debug!("run failed: {e:?}");
        console.failure("error", &e).ok();
        process::exit(e.exit_code());
    }
}
