use tracing::info;
use tracing_subscriber::EnvFilter;

use iconforge::api::{generate_icon_set, manifest_entries};
use iconforge::IconParams;

use super::args::CliArgs;
use super::errors::AppError;

fn parse_sizes(raw: &[String]) -> Result<Vec<u32>, AppError> {
    let mut sizes = Vec::with_capacity(raw.len());
    for entry in raw {
        let parsed = entry
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::InvalidSize {
                size: entry.clone(),
            })?;

        if parsed == 0 {
            return Err(AppError::ZeroSize { size: parsed });
        }

        sizes.push(parsed);
    }
    Ok(sizes)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = if args.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let sizes = parse_sizes(&args.sizes)?;
    let params = IconParams {
        filter: args.filter,
        sizes,
        ..IconParams::default()
    };

    info!(
        "Generating icons from {:?} into {:?}",
        args.input, args.output_dir
    );

    // Per-size failures are logged and counted; the run itself still succeeds.
    let report = generate_icon_set(&args.input, &args.output_dir, &params, true)?;

    info!("Conversion complete!");
    info!("Written: {}", report.written);
    info!("Errors: {}", report.errors);

    if args.manifest {
        let entries = manifest_entries(&report);
        println!("{}", serde_json::to_string_pretty(&entries)?);
    }

    Ok(())
}
