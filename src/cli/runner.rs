use tracing::info;

use okaprep::api::{aggregate, relabel_patches};
use okaprep::core::config::AggregateConfig;

use super::args::{CliArgs, Command};
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match args.command {
        Command::Relabel {
            present_dir,
            absent_dir,
            output_dir,
        } => {
            info!("Relabeling patches into {:?}", output_dir);
            let report = relabel_patches(&present_dir, &absent_dir, &output_dir)?;
            info!(
                "Relabeling complete! Present: {}, absent: {}",
                report.present, report.absent
            );
        }
        Command::Aggregate {
            src_dir,
            dst_dir,
            points,
            year_start,
            year_end,
            sentinel,
        } => {
            if year_start > year_end {
                return Err(AppError::InvalidYearRange {
                    start: year_start,
                    end: year_end,
                }
                .into());
            }

            let mut config = AggregateConfig::new(&src_dir, &dst_dir, year_start, year_end);
            config.sentinel = sentinel;

            info!(
                "Aggregating years {}..={} from {:?}",
                year_start, year_end, src_dir
            );
            let report = aggregate(&config, &points)?;

            info!("Aggregation complete!");
            info!("Years written: {:?}", report.years_written);
            info!("Years skipped: {:?}", report.years_skipped);
            info!("Final table: {:?}", report.output);
        }
    }

    Ok(())
}
