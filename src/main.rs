use crate::domain::RuleTable;
use crate::router::handle;
use astra::Server;
use log::{info, warn};
use std::net::SocketAddr;

mod domain;
mod errors;
mod ingest;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

const RULES_PATH: &str = "config/rules.json";

fn main() {
    env_logger::init();

    // 1️⃣ Load the rule table. Cutoffs are deployment configuration, so a
    // missing file is not fatal; the built-in table covers the common case.
    let rules = match RuleTable::from_json_file(RULES_PATH) {
        Ok(rules) => {
            info!("loaded rule table from {RULES_PATH}");
            rules
        }
        Err(e) => {
            warn!("{e}; using the built-in rule table");
            RuleTable::default()
        }
    };

    // 2️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing the rule table into the closure
    let result = server.serve(move |req, _info| match handle(req, &rules) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
