use crate::commands::{print_json, Context};
use crate::util::{now_utc, read_input, resolve_country};
use anyhow::Result;
use cardscan_core::extract::KnownValues;
use cardscan_core::{scan_text, ExtractOptions, ScanReportDto};
use clap::{ArgAction, Args};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// OCR text file; stdin when omitted or `-`
    pub file: Option<PathBuf>,
    #[command(flatten)]
    pub extract: ExtractArgs,
}

/// Extraction knobs shared by `scan` and `export`.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Card holder's name, if already known
    #[arg(long)]
    pub name: Option<String>,
    /// Job title, if already known
    #[arg(long)]
    pub title: Option<String>,
    /// Company name, if already known
    #[arg(long)]
    pub company: Option<String>,
    /// Extra word that must never continue an address
    #[arg(long, value_name = "TOKEN")]
    pub deny: Vec<String>,
    /// Calling code for local numbers, overriding the configured default
    #[arg(long)]
    pub country_code: Option<String>,
    /// Skip guessing name, title and company
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_guess: bool,
}

impl ExtractArgs {
    pub fn options(&self, ctx: &Context<'_>) -> ExtractOptions {
        let known = KnownValues {
            name: self.name.clone(),
            job_title: self.title.clone(),
            company: self.company.clone(),
            deny: self.deny.clone(),
        };
        let mut options = ctx.config.extract_options(known);
        if self.no_guess {
            options.guess_identity = false;
        }
        options
    }
}

pub fn scan(ctx: &Context<'_>, args: ScanArgs) -> Result<()> {
    let country = resolve_country(
        args.extract.country_code.as_deref(),
        &ctx.config.default_country,
    )?;
    let text = read_input(args.file.as_deref())?;
    let options = args.extract.options(ctx);
    let card = scan_text(&text, &options, now_utc());
    debug!(
        card = %card.id,
        lines = text.lines().count(),
        phones = card.fields.phones.iter().count(),
        "card scanned"
    );

    let report = ScanReportDto::from_card(&card, &country);
    if ctx.json {
        print_json(&report)?;
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &ScanReportDto) {
    let fields = &report.fields;
    println!("{}", report.display_name);
    print_field("name", fields.name.as_deref());
    print_field("title", fields.job_title.as_deref());
    print_field("company", fields.company.as_deref());
    print_field("email", fields.email.as_deref());
    for phone in &report.phones {
        println!("  {}: {} ({})", phone.slot.label(), phone.display, phone.storage);
    }
    print_field("address", fields.address.as_deref());
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("  {label}: {value}");
    }
}
