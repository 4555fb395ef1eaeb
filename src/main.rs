use clap::Parser;
use jotter::cli::{
    handle_delete, handle_edit, handle_init, handle_list, handle_new, handle_search, handle_show,
    Cli, Commands,
};
use jotter::config::{data_dir, JotterConfig};
use jotter::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let level = JotterConfig::load(&data_dir())
        .map(|config| config.log_level)
        .unwrap_or_else(|_| JotterConfig::default().log_level);
    init_logging(&level);

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::New {
            title,
            content,
            stdin,
            json,
        } => handle_new(title, content, stdin, json),
        Commands::List { filter, json } => handle_list(filter, json),
        Commands::Show { id, json } => handle_show(id, json),
        Commands::Edit {
            id,
            title,
            content,
            stdin,
            json,
        } => handle_edit(id, title, content, stdin, json),
        Commands::Delete { id, force } => handle_delete(id, force),
        Commands::Search { query, json } => handle_search(query, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
