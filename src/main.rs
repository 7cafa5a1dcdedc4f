//! Command-line front end for language resolution and the service registry.
//!
//! Usage:
//!   translate-registry infer <text...>             # Guess the language of a text
//!   translate-registry match <code>                # Resolve a locale string
//!   translate-registry validate <service> <secret> # Check a service secret
//!   translate-registry services <word|sentence>    # List services by priority
//!   translate-registry icon                        # Print the SVG icon
//!
//! Optional environment variables:
//! - SERVICE_PRIORITIES (e.g. "google=130,bing=90")
//! - DETECT_MIN_LENGTH (defaults to 3)

use anyhow::{bail, Context, Result};
use tracing::info;
use translate_registry::config::Config;
use translate_registry::i18n::{LanguageResolver, WhatlangDetector};
use translate_registry::icon::SVG_ICON;
use translate_registry::services::{get_service, ranked_services, ServiceType};

fn print_usage() {
    eprintln!(
        r#"Usage: translate-registry <command>

Commands:
  infer <text...>               Guess the language of a text sample
  match <code>                  Resolve a locale string (e.g. en-US, zh_TW)
  validate <service> <secret>   Check a secret against a service's format
  services <word|sentence>      List services ordered by priority
  icon                          Print the SVG icon
  help                          Show this message"#
    );
}

fn main() -> Result<()> {
    // Load .env file (optional)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translate_registry=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let config = Config::from_env()?;
    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "infer" => {
            let text = rest.join(" ");
            let resolver = LanguageResolver::with_detector(Box::new(WhatlangDetector))
                .with_min_length(config.detect_min_length);
            let entry = resolver.infer_language(&text);
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        "match" => {
            let code = rest.first().context("match requires a locale code")?;
            let entry = LanguageResolver::global().match_language(code);
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        "validate" => {
            let (Some(id), Some(secret)) = (rest.first(), rest.get(1)) else {
                bail!("validate requires a service id and a secret");
            };
            let service = get_service(id).with_context(|| format!("Unknown service '{}'", id))?;
            let result = service
                .validate_secret(secret)
                .with_context(|| format!("Service '{}' does not take a secret", id))?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.status {
                std::process::exit(1);
            }
        }
        "services" => {
            let service_type: ServiceType = rest
                .first()
                .context("services requires a type (word or sentence)")?
                .parse()?;
            let ranked = ranked_services(service_type, &config.priority_overrides);
            info!("Listing {} {} services", ranked.len(), service_type);
            for (service, priority) in ranked {
                println!("{:>5}  {}", priority, service.id);
            }
        }
        "icon" => println!("{}", SVG_ICON),
        "--help" | "-h" | "help" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
