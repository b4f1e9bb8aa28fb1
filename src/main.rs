//! nanohttp binary entry point.
//!
//! Runs the sequential demo server on a single port:
//!
//! ```bash
//! nanohttp          # listens on 8080
//! nanohttp 3000     # listens on 3000
//! ```

use std::process;

use clap::Parser;
use env_logger::Env;

use nanohttp_rs::{HttpServer, ServerConfig};

/// A minimal sequential HTTP demo server.
#[derive(Debug, Parser)]
#[command(name = "nanohttp", version, about = "A minimal sequential HTTP demo server")]
struct Cli {
    /// Port to listen on
    #[arg(value_parser = clap::value_parser!(u16).range(1..), default_value_t = 8080)]
    port: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Default to info so the running banner is always visible
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            if e.use_stderr() {
                eprint!("{e}");
                process::exit(1);
            }
            print!("{e}");
            process::exit(0);
        }
    };

    let server = HttpServer::new(ServerConfig::with_port(cli.port));
    if let Err(e) = server.start().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
