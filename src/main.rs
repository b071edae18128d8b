mod cli;

use cert_inventory::adapters::outbound::console::StderrProgressReporter;
use cert_inventory::adapters::outbound::filesystem::FileSystemBundleReader;
use cert_inventory::adapters::outbound::renderers::{
    CachingCertificateRenderer, OpensslCertificateRenderer, DEFAULT_OPENSSL_PROGRAM,
};
use cert_inventory::application::dto::{
    DiscoveryRequest, DiscoveryResponse, IdentityMetadataSource, OutputFormat,
};
use cert_inventory::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use cert_inventory::application::read_models::InventoryReadModelBuilder;
use cert_inventory::application::use_cases::DiscoverCertificatesUseCase;
use cert_inventory::config::{self, ConfigFile};
use cert_inventory::ports::outbound::CertificateRenderer;
use cert_inventory::shared::error::ExitCode;
use cert_inventory::shared::Result;
use cli::Args;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with status 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    let request = build_request(&args, config.as_ref())?;
    let format = resolve_format(&args, config.as_ref());
    let openssl = resolve_openssl(&args, config.as_ref());

    let renderer = OpensslCertificateRenderer::new().with_program(openssl);
    let response = if args.no_cache {
        discover(renderer, request).await?
    } else {
        discover(CachingCertificateRenderer::new(renderer), request).await?
    };

    eprintln!("{}", FormatterFactory::progress_message(format));

    let model = InventoryReadModelBuilder::build(&response);
    let formatted_output = FormatterFactory::create(format).format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

async fn discover<CR: CertificateRenderer>(
    renderer: CR,
    request: DiscoveryRequest,
) -> Result<DiscoveryResponse> {
    let use_case = DiscoverCertificatesUseCase::new(
        FileSystemBundleReader::new(),
        renderer,
        StderrProgressReporter::new(),
    );
    use_case.execute(request).await
}

/// Explicit `--config` must exist; otherwise look for the default file in
/// the working directory.
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = args.config.as_deref() {
        return config::load_config_from_path(path).map(Some);
    }

    let cwd = std::env::current_dir()?;
    let discovered = config::discover_config(&cwd)?;
    if discovered.is_some() {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            cwd.join(config::CONFIG_FILENAME).display()
        );
    }
    Ok(discovered)
}

/// CLI and environment values take precedence over the config file.
fn build_request(args: &Args, config: Option<&ConfigFile>) -> Result<DiscoveryRequest> {
    let trusted_cert_directory = args
        .trusted_cert_directory
        .clone()
        .or_else(|| config.and_then(|c| c.trusted_cert_directory.clone()));
    let instance_cert_file = args
        .instance_cert_file
        .clone()
        .or_else(|| config.and_then(|c| c.instance_cert_file.clone()));

    let mut builder = DiscoveryRequest::builder()
        .trusted_cert_directory_opt(trusted_cert_directory)
        .instance_cert_file_opt(instance_cert_file)
        .identity_metadata(IdentityMetadataSource::Environment {
            guid_fallback: config.and_then(|c| c.instance_guid.clone()),
            index_fallback: config.and_then(|c| c.instance_index.clone()),
        });

    if let Some(extension) = args
        .extension
        .clone()
        .or_else(|| config.and_then(|c| c.extension.clone()))
    {
        builder = builder.bundle_extension(extension);
    }

    builder.build()
}

fn resolve_format(args: &Args, config: Option<&ConfigFile>) -> OutputFormat {
    args.format
        .or_else(|| config.and_then(ConfigFile::output_format))
        .unwrap_or_default()
}

fn resolve_openssl(args: &Args, config: Option<&ConfigFile>) -> PathBuf {
    args.openssl
        .clone()
        .or_else(|| config.and_then(|c| c.openssl.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OPENSSL_PROGRAM))
}
