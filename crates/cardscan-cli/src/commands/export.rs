use crate::commands::scan::ExtractArgs;
use crate::commands::{print_json, Context};
use crate::util::{now_utc, read_input, resolve_country};
use anyhow::{Context as _, Result};
use cardscan_core::{scan_text, ScanReportDto, ScannedCard};
use cardscan_sync::vcf;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Subcommand)]
pub enum ExportCommand {
    /// Write scanned cards as vCard 3.0
    Vcf(ExportArgs),
    /// Write scanned cards as a JSON array of scan reports
    Json(ExportArgs),
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// OCR text files, one card each; stdin when none are given
    pub files: Vec<PathBuf>,
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[command(flatten)]
    pub extract: ExtractArgs,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    format: String,
    count: usize,
    output: Option<String>,
}

pub fn export_vcf(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let country = resolve_country(
        args.extract.country_code.as_deref(),
        &ctx.config.default_country,
    )?;
    let cards = scan_inputs(ctx, &args)?;
    let data = vcf::export_vcf(&cards, &country)?;
    write_output(ctx, "vcf", cards.len(), args.out, &data)
}

pub fn export_json(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let country = resolve_country(
        args.extract.country_code.as_deref(),
        &ctx.config.default_country,
    )?;
    let cards = scan_inputs(ctx, &args)?;
    let reports: Vec<ScanReportDto> = cards
        .iter()
        .map(|card| ScanReportDto::from_card(card, &country))
        .collect();
    let mut data = serde_json::to_string_pretty(&reports)?;
    data.push('\n');
    write_output(ctx, "json", cards.len(), args.out, &data)
}

fn scan_inputs(ctx: &Context<'_>, args: &ExportArgs) -> Result<Vec<ScannedCard>> {
    let options = args.extract.options(ctx);
    let now = now_utc();
    if args.files.is_empty() {
        let text = read_input(None)?;
        return Ok(vec![scan_text(&text, &options, now)]);
    }

    let mut cards = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let text = read_input(Some(file))?;
        let card = scan_text(&text, &options, now);
        debug!(file = %file.display(), card = %card.id, "card scanned");
        cards.push(card);
    }
    Ok(cards)
}

fn write_output(
    ctx: &Context<'_>,
    format: &str,
    count: usize,
    out: Option<PathBuf>,
    data: &str,
) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(&path, data)
                .with_context(|| format!("write {format} export {}", path.display()))?;
            if ctx.json {
                print_json(&ExportReport {
                    format: format.to_string(),
                    count,
                    output: Some(path.display().to_string()),
                })?;
            } else {
                println!("exported {count} card(s) to {}", path.display());
            }
        }
        None => {
            print!("{data}");
        }
    }
    Ok(())
}
