use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host address and port for the server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:4000")]
    pub server_addr: String,

    /// Serve the bundled chat page at `/`. The API is always served.
    #[arg(long, env = "SERVE_UI", default_value = "true", action = clap::ArgAction::Set)]
    pub serve_ui: bool,

    /// Enable debug logging/output
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,

    /// Optional path to the TLS certificate file (PEM format) for enabling HTTPS. Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Optional path to the TLS private key file (PEM format) for enabling HTTPS. Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_serve_plain_http_with_ui() {
        let args = Args::parse_from(["rule-chat"]);
        assert_eq!(args.server_addr, "127.0.0.1:4000");
        assert!(args.serve_ui);
        assert!(!args.enable_tls);
        assert!(args.tls_cert_path.is_none());
    }

    #[test]
    fn ui_can_be_switched_off() {
        let args = Args::parse_from(["rule-chat", "--serve-ui", "false", "--server-addr", "0.0.0.0:8080"]);
        assert!(!args.serve_ui);
        assert_eq!(args.server_addr, "0.0.0.0:8080");
    }
}
