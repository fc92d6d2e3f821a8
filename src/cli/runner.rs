use tracing::info;
use tracing_subscriber::EnvFilter;

use circlegrid::{SheetReport, generate_sheet_to_path_local};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

pub fn summary(report: &SheetReport) -> String {
    format!(
        "Generated PDF with\n  \
         date                       {}\n  \
         left hand circle diameter  {:.1} mm\n  \
         right hand circle diameter {:.1} mm",
        report.date, report.left_diameter, report.right_diameter
    )
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging()?;
    }

    let params = args.to_params();
    info!(
        "Generating sheet: left={}mm right={}mm date={} output={:?}",
        params.left_diameter, params.right_diameter, params.date, params.output
    );

    let report = generate_sheet_to_path_local(&params)?;
    println!("{}", summary(&report));
    Ok(())
}
