pub mod cli;
pub mod error;
pub mod models;
pub mod responder;
pub mod server;

use cli::Args;
use log::info;
use responder::ResponseSelector;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Serve UI: {}", args.serve_ui);
    info!("TLS Enabled: {}", args.enable_tls);
    if args.enable_tls {
        info!("TLS Cert Path: {}", args.tls_cert_path.as_deref().unwrap_or("<unset>"));
        info!("TLS Key Path: {}", args.tls_key_path.as_deref().unwrap_or("<unset>"));
    }
    info!("-------------------------");

    let selector = Arc::new(ResponseSelector::default());
    info!("Starting server on: {}", args.server_addr);
    let server = Server::new(args, selector);
    server.run().await?;

    Ok(())
}
