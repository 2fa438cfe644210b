mod args;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::Args;
use cvsskit_types::CvssVector;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing based on verbosity
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    if args.api {
        info!(listen = %args.listen, "starting API server");
        return cvsskit_api::start_server(cvsskit_api::ApiConfig {
            listen_addr: args.listen,
        })
        .await;
    }

    let vector = CvssVector::from_codes(
        args.attack_vector.as_deref(),
        args.attack_complexity.as_deref(),
        args.privileges_required.as_deref(),
        args.user_interaction.as_deref(),
        args.scope.as_deref(),
        args.confidentiality.as_deref(),
        args.integrity.as_deref(),
        args.availability.as_deref(),
    )?;
    let result = cvsskit_core::score(&vector);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Vector:     {}", result.vector_string);
        println!("Base Score: {:.1}", result.base_score);
        println!("Severity:   {}", result.severity);
    }

    Ok(())
}
