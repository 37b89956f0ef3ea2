mod cli;
mod commands;
mod errors;
mod ui;

use clap::Parser;

use cli::{PtcgpCli, PtcgpCliCommand};

fn main() {
    let args = PtcgpCli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let result = match args.command {
        PtcgpCliCommand::Get { card_id } => commands::get_card(&args.dataset, &card_id, args.format),
        PtcgpCliCommand::Search { name } => {
            commands::search_pokemon(&args.dataset, &name, args.format)
        }
        PtcgpCliCommand::Color { color } => {
            commands::filter_color(&args.dataset, &color, args.format)
        }
        PtcgpCliCommand::Ability { query } => {
            commands::search_ability(&args.dataset, &query, args.format)
        }
        PtcgpCliCommand::Mcp => commands::serve_mcp(&args.dataset),
    };

    if let Err(err) = result {
        std::process::exit(err.exit_code());
    }
}
