//! Pharmacy notification center.
//!
//! Loads the alert feed into a single `NotificationStore` and drives it from
//! an interactive console session on stdin.

use chrono::{Local, Utc};
use dotenv::dotenv;
use env_logger::Env;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use pharmacy_backend::config::{self, Config};
use pharmacy_backend::console::{Command, Reply, Session};
use pharmacy_backend::notifications::{self, NotificationStore};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or(config::defaults::LOG_FILTER))
        .init();

    let config = Config::from_env();
    log::debug!("Loaded configuration: {:?}", config);

    let seed = notifications::seed::load_or_default(&config, Utc::now());
    let mut session = Session::new(NotificationStore::new(seed), config);

    println!("{}", session.banner());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        log::error!("[CONSOLE] Failed to read stdin: {}", e);
                        break;
                    }
                };

                let command = match Command::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(msg) => {
                        println!("{}", msg);
                        continue;
                    }
                };

                match session.execute(command, &Local::now()) {
                    Reply::Output(text) => println!("{}", text),
                    Reply::Quit => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                log::info!("Received Ctrl+C, shutting down...");
                break;
            }
        }
    }

    log::info!(
        "[CONSOLE] Session ended: {} notifications, {} unread",
        session.store().len(),
        session.store().unread_count()
    );
}
