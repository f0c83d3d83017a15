pub mod api;

use crate::cli::Args;
use crate::responder::ResponseSelector;
use api::{ create_router, AppState };
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use log::{ error, info };
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct Server {
    args: Args,
    selector: Arc<ResponseSelector>,
}

impl Server {
    pub fn new(args: Args, selector: Arc<ResponseSelector>) -> Self {
        Self { args, selector }
    }

    pub fn router(&self) -> Router {
        create_router(AppState {
            selector: self.selector.clone(),
            serve_ui: self.args.serve_ui,
        })
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = self.router();

        match tls_paths(&self.args)? {
            Some((cert_path, key_path)) => {
                info!(
                    "TLS enabled. Loading certificate from '{}' and key from '{}'",
                    cert_path,
                    key_path
                );
                // ring and aws-lc-rs are both linked, so the provider must be chosen explicitly.
                let _ = rustls::crypto::ring::default_provider().install_default();
                let addr = self.args.server_addr.parse::<SocketAddr>()?;
                let tls_config = RustlsConfig::from_pem_file(cert_path, key_path).await?;
                info!("HTTPS server listening on: https://{}", addr);
                axum_server::bind_rustls(addr, tls_config).serve(app.into_make_service()).await?;
            }
            None => {
                let listener = match TcpListener::bind(&self.args.server_addr).await {
                    Ok(listener) => listener,
                    Err(e) => {
                        error!(
                            "Failed to bind HTTP server to {}: {}. Try a different port.",
                            self.args.server_addr,
                            e
                        );
                        return Err(e.into());
                    }
                };
                info!("HTTP server listening on: http://{}", listener.local_addr()?);
                axum::serve(listener, app).await?;
            }
        }

        Ok(())
    }
}

fn tls_paths(args: &Args) -> Result<Option<(&str, &str)>, Box<dyn Error + Send + Sync>> {
    if !args.enable_tls {
        info!("TLS not enabled. Running plain HTTP server.");
        return Ok(None);
    }
    match (&args.tls_cert_path, &args.tls_key_path) {
        (Some(cert_path), Some(key_path)) => Ok(Some((cert_path.as_str(), key_path.as_str()))),
        (Some(_), None) | (None, Some(_)) => {
            error!("Both --tls-cert-path and --tls-key-path must be provided to enable TLS.");
            Err("Missing TLS certificate or key path".into())
        }
        (None, None) => {
            error!("--enable-tls was set but no certificate/key paths provided.");
            Err("TLS enabled without cert/key".into())
        }
    }
}
