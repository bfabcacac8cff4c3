use clap::Parser;
use todo_fetch::cli::Cli;
use todo_fetch::FetchError;

fn main() -> Result<(), FetchError> {
    let _cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Transport and decode errors end the process with a non-zero status
    todo_fetch::fetch_example()
}
