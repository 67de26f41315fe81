use libjournal::config::endpoint;
use libjournal::config::ServerConfig;
use libjournal::constants::JOURNAL_VERSION;
use libjournal::error::JournalError;

pub mod app_data;
pub mod controllers;
pub mod errors;
pub mod params;
pub mod routes;

#[cfg(test)]
pub mod test_helper;

extern crate dotenv;
extern crate log;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use clap::{Arg, Command};
use env_logger::Env;

const START_SERVER_USAGE: &str = "Usage: `journal-server start -i 0.0.0.0 -p 3000`";

#[actix_web::main]
async fn main() -> Result<(), JournalError> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let command = Command::new("journal-server")
        .version(JOURNAL_VERSION)
        .about("🍂 Journal entry server")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("start")
                .about(START_SERVER_USAGE)
                .arg(
                    Arg::new("ip")
                        .long("ip")
                        .short('i')
                        .help("What host to bind the server to, defaults to $JOURNAL_HOST or 0.0.0.0")
                        .action(clap::ArgAction::Set),
                )
                .arg(
                    Arg::new("port")
                        .long("port")
                        .short('p')
                        .help("What port to bind the server to, defaults to $JOURNAL_PORT or 3000")
                        .action(clap::ArgAction::Set),
                ),
        );

    let matches = command.get_matches();
    match matches.subcommand() {
        Some(("start", sub_matches)) => {
            let host = sub_matches
                .get_one::<String>("ip")
                .cloned()
                .unwrap_or_else(endpoint::host);
            let port = sub_matches
                .get_one::<String>("port")
                .cloned()
                .unwrap_or_else(endpoint::port);

            let config = match ServerConfig::new(host, port) {
                Ok(config) => config,
                Err(err) => {
                    log::error!("Invalid server config: {}", err);
                    return Err(err);
                }
            };

            start(config).await
        }
        _ => unreachable!("exhausted list of subcommands"),
    }
}

async fn start(config: ServerConfig) -> Result<(), JournalError> {
    log::info!("🍂 Running journal server on {}", config.addr());

    // Lives as long as the process, entries are gone on restart
    let data = app_data::JournalAppData::in_memory();

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::config)
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
