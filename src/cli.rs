use cert_inventory::application::dto::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Inventory the X.509 certificates trusted by this host
#[derive(Parser, Debug)]
#[command(name = "cert-inventory")]
#[command(version)]
#[command(
    about = "Inventory the X.509 certificates trusted by this host",
    long_about = "Scans a trusted certificate directory for PEM bundles, renders every \
                  certificate with `openssl x509 -text` and reports the decoded text per \
                  bundle, together with the instance identity certificate."
)]
pub struct Args {
    /// Output format: json or markdown [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory holding the trusted certificate bundles
    #[arg(long, env = "TRUSTED_CERT_DIRECTORY", value_name = "DIR")]
    pub trusted_cert_directory: Option<PathBuf>,

    /// Instance identity certificate file
    #[arg(long, env = "INSTANCE_CERT_FILE", value_name = "FILE")]
    pub instance_cert_file: Option<PathBuf>,

    /// File name suffix selecting bundle files [default: .crt]
    #[arg(long, value_name = "SUFFIX")]
    pub extension: Option<String>,

    /// openssl executable used to decode certificates [default: openssl]
    #[arg(long, env = "OPENSSL_BIN", value_name = "PATH")]
    pub openssl: Option<PathBuf>,

    /// Path to config file (default: auto-discover cert-inventory.config.yml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Decode every certificate even if the same PEM was already decoded
    #[arg(long)]
    pub no_cache: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
