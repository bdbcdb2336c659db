use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::resolve_country;
use anyhow::Result;
use cardscan_core::domain::{
    format_phone_for_display, is_valid_phone_number, normalize_phone, sms_uri, tel_uri,
    to_dial_form, whatsapp_url,
};
use cardscan_core::CountryCode;
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Debug, Subcommand)]
pub enum PhoneCommand {
    /// Print the storage form (+<country code><digits>)
    Normalize(PhoneArgs),
    /// Print the dial form (<country code><digits>)
    Dial(PhoneArgs),
    /// Print the number grouped for display
    Format(FormatArgs),
    /// Exit non-zero unless the number is dialable
    Check(PhoneArgs),
    /// Build a click-to-call or messaging link
    Link(LinkArgs),
}

#[derive(Debug, Args)]
pub struct PhoneArgs {
    pub number: String,
    #[arg(long)]
    pub country_code: Option<String>,
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    pub number: String,
}

#[derive(Debug, Args)]
pub struct LinkArgs {
    pub number: String,
    #[arg(long)]
    pub country_code: Option<String>,
    #[arg(long, value_enum, default_value_t = LinkKind::Whatsapp)]
    pub kind: LinkKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkKind {
    Whatsapp,
    Tel,
    Sms,
}

#[derive(Debug, Serialize)]
struct PhoneOutput<'a> {
    input: &'a str,
    value: String,
}

#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    input: &'a str,
    valid: bool,
    storage: String,
}

pub fn normalize(ctx: &Context<'_>, args: PhoneArgs) -> Result<()> {
    let country = country_for(ctx, args.country_code.as_deref())?;
    emit(ctx, &args.number, normalize_phone(&args.number, &country))
}

pub fn dial(ctx: &Context<'_>, args: PhoneArgs) -> Result<()> {
    let country = country_for(ctx, args.country_code.as_deref())?;
    emit(ctx, &args.number, to_dial_form(&args.number, &country))
}

pub fn format(ctx: &Context<'_>, args: FormatArgs) -> Result<()> {
    emit(ctx, &args.number, format_phone_for_display(&args.number))
}

pub fn check(ctx: &Context<'_>, args: PhoneArgs) -> Result<()> {
    let country = country_for(ctx, args.country_code.as_deref())?;
    let valid = is_valid_phone_number(&args.number, &country);
    if ctx.json {
        print_json(&CheckOutput {
            input: &args.number,
            valid,
            storage: normalize_phone(&args.number, &country),
        })?;
    } else {
        println!("{}", if valid { "valid" } else { "invalid" });
    }

    if !valid {
        return Err(invalid_input(format!(
            "not a dialable {country} number: {}",
            args.number
        )));
    }
    Ok(())
}

pub fn link(ctx: &Context<'_>, args: LinkArgs) -> Result<()> {
    let country = country_for(ctx, args.country_code.as_deref())?;
    let built = match args.kind {
        LinkKind::Whatsapp => whatsapp_url(&args.number, &country),
        LinkKind::Tel => tel_uri(&args.number, &country),
        LinkKind::Sms => sms_uri(&args.number, &country),
    };
    let Some(value) = built else {
        return Err(invalid_input(format!(
            "phone number has no digits: {}",
            args.number
        )));
    };
    emit(ctx, &args.number, value)
}

fn country_for(ctx: &Context<'_>, override_code: Option<&str>) -> Result<CountryCode> {
    resolve_country(override_code, &ctx.config.default_country)
}

fn emit(ctx: &Context<'_>, input: &str, value: String) -> Result<()> {
    if ctx.json {
        print_json(&PhoneOutput { input, value })?;
    } else {
        println!("{value}");
    }
    Ok(())
}
