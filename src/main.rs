use clap::{Parser, Subcommand};
use clinic_site::contact::ContactForm;
use clinic_site::render::Site;
use clinic_site::{config, generate, output, serve};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clinic-site")]
#[command(about = "Static site generator and preview server for a clinic website")]
#[command(long_about = "\
Static site generator and preview server for a clinic website

Content (services, testimonials, conditions, FAQs, neighborhoods and cities)
is compiled in. site.toml supplies contact details, routing and palette; every
key is optional.

Routes (path style):

  /                                home
  /servicos /condicoes /sobre      content sections
  /depoimentos /contato
  /local/bairro/{name}             neighborhood landing page
  /local/cidade/{name}             city landing page

Run 'clinic-site gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Path to site.toml (optional; stock defaults when missing)
    #[arg(long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page to disk
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Serve pages rendered on request
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, default_value_t = 4000)]
        port: u16,
    },
    /// List every declared route and its output file
    Routes {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate config and content, report duplicate locations
    Check,
    /// Print the messaging link the contact form would open
    ContactLink {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        /// Treatment of interest (defaults to a general evaluation)
        #[arg(long, default_value = "")]
        service: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build { output: out } => {
            let site_config = load(&cli.config)?;
            init_thread_pool(&site_config.build);
            let site = Site::new(site_config);
            println!("==> Generating HTML \u{2192} {}", out.display());
            let summary = generate::generate(&site, &out, config_dir(&cli.config))?;
            output::print_build_output(&summary);
            println!("==> Build complete: {}", out.display());
        }
        Command::Serve { host, port } => {
            let site = Site::new(load(&cli.config)?);
            site.registry.validate()?;
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(serve::serve(site, &host, port))?;
        }
        Command::Routes { json } => {
            let site = Site::new(load(&cli.config)?);
            let pages = generate::page_entries(&site);
            if json {
                println!("{}", serde_json::to_string_pretty(&pages)?);
            } else {
                output::print_routes(&pages);
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let site = Site::new(load(&cli.config)?);
            site.registry.validate()?;
            output::print_check(&site);
            println!("==> Config and content are valid");
        }
        Command::ContactLink {
            name,
            phone,
            service,
            message,
        } => {
            let site_config = load(&cli.config)?;
            let form = ContactForm {
                name,
                phone,
                service,
                message,
            };
            println!(
                "{}",
                form.deep_link(&site_config.site.name, &site_config.clinic.phone_number)
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<config::SiteConfig, config::ConfigError> {
    let site_config = config::load_config(path)?;
    tracing::debug!(config = %path.display(), "configuration loaded");
    Ok(site_config)
}

/// Log to stderr so stdout stays clean for piped output.
///
/// `RUST_LOG` wins over `--verbose` when set.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Initialize the rayon thread pool based on build config.
///
/// Caps at the number of available CPU cores; user can constrain down, not up.
fn init_thread_pool(build: &config::BuildConfig) {
    let threads = config::effective_threads(build);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}

/// Directory relative paths in the config are resolved against.
fn config_dir(config_path: &Path) -> &Path {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
