use clap::Parser;

/// Fetches a single todo item from jsonplaceholder and prints it.
#[derive(Parser, Debug)]
#[command(name = "todo_fetch", version, about)]
pub struct Cli {}
