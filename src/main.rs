#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use fitcalc::{Record, build_workout, cli, record::to_summary, sample_workouts, store, utils};
use std::path::Path;

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    match cli.cmd {
        None | Some(cli::Cmd::Samples) => {
            let records: Vec<Record> = sample_workouts().iter().map(to_summary).collect();
            dlog!("mode=samples workouts={}", records.len());
            report(&records, &cli.data, cli.no_save)
        }
        Some(cli::Cmd::Record { tag, values }) => {
            dlog!("mode=record tag={tag} values={values:?}");
            let workout = build_workout(&tag, &values)
                .with_context(|| format!("Reading sensor package {tag}"))?;
            report(&[to_summary(&workout)], &cli.data, cli.no_save)
        }
        Some(cli::Cmd::Show) => {
            let records = store::load_records(&cli.data)?;
            if records.is_empty() {
                tracing::info!(path = %cli.data.display(), "no stored records");
            }
            for r in &records {
                println!("{r}");
            }
            Ok(())
        }
    }
}

fn report(records: &[Record], data: &Path, no_save: bool) -> Result<()> {
    for r in records {
        println!("{r}");
    }

    if no_save {
        dlog!("no_save set, data file untouched");
        return Ok(());
    }

    store::append_records(data, records)
        .with_context(|| format!("Saving records to {}", data.display()))?;
    Ok(())
}
