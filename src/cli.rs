use std::io::Write;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use serde::Serialize;
use vogue_api::models::{Brand, GalleryKind, Season, Show};
use vogue_api::{BaseUrl, FullSlug, Slug, VogueClient, VogueConfig};

#[derive(Debug, Parser)]
#[command(version, about = "Browse the Vogue runway catalogue", long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["seasons", "brands", "show", "season_show", "brand_show"]),
))]
pub struct Cli {
    /// List every season as `slug<TAB>name`
    #[arg(long)]
    pub seasons: bool,

    /// List every brand as `slug<TAB>name`
    #[arg(long)]
    pub brands: bool,

    /// Print the image URLs of one show, e.g. `fall-2023-ready-to-wear/chanel`
    #[arg(long, value_name = "FULL_SLUG")]
    pub show: Option<FullSlug>,

    /// List the full slugs of every show in a season
    #[arg(long = "seasonshow", value_name = "SEASON_SLUG")]
    pub season_show: Option<Slug>,

    /// List the full slugs of every show of a brand
    #[arg(long = "brandshow", value_name = "BRAND_SLUG")]
    pub brand_show: Option<Slug>,

    /// Gallery printed by --show
    #[arg(long, value_name = "KIND", default_value_t = GalleryKind::Collection)]
    pub gallery: GalleryKind,

    /// Print the decoded response as pretty JSON
    #[arg(long)]
    pub json: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Endpoint base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<BaseUrl>,

    /// Log requests to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the client configuration from the command-line overrides.
    pub fn config(&self) -> Result<VogueConfig> {
        let mut builder = VogueConfig::builder();
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url.clone());
        }
        if let Some(secs) = self.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().context("invalid configuration")
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let client = VogueClient::new(&cli.config()?)?;
    let mut out = std::io::stdout().lock();

    if cli.seasons {
        let seasons = client.get_seasons().await?;
        return emit(&mut out, cli.json, seasons.as_slice(), write_seasons);
    }

    if cli.brands {
        let brands = client.get_brands().await?;
        return emit(&mut out, cli.json, brands.as_slice(), write_brands);
    }

    if let Some(full_slug) = &cli.show {
        let show = client.get_show(full_slug).await?;
        if cli.json {
            return write_json(&mut out, &show);
        }
        return write_gallery(&mut out, &show, cli.gallery)
            .with_context(|| format!("show '{full_slug}'"));
    }

    if let Some(season) = &cli.season_show {
        let shows = client.get_season_shows(season).await?;
        return emit(&mut out, cli.json, shows.as_slice(), write_full_slugs);
    }

    if let Some(brand) = &cli.brand_show {
        let shows = client.get_brand_shows(brand).await?;
        return emit(&mut out, cli.json, shows.as_slice(), write_full_slugs);
    }

    bail!("no action selected")
}

fn emit<W, T>(
    out: &mut W,
    json: bool,
    value: &T,
    plain: fn(&mut W, &T) -> Result<()>,
) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    if json {
        write_json(out, value)
    } else {
        plain(out, value)
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_seasons<W: Write>(out: &mut W, seasons: &[Season]) -> Result<()> {
    for season in seasons {
        writeln!(out, "{}\t{}", season.slug, season.name)?;
    }
    Ok(())
}

fn write_brands<W: Write>(out: &mut W, brands: &[Brand]) -> Result<()> {
    for brand in brands {
        writeln!(out, "{}\t{}", brand.slug, brand.name)?;
    }
    Ok(())
}

fn write_full_slugs<W: Write>(out: &mut W, shows: &[Show]) -> Result<()> {
    for show in shows {
        writeln!(out, "{}", show.full_slug)?;
    }
    Ok(())
}

fn write_gallery<W: Write>(out: &mut W, show: &Show, kind: GalleryKind) -> Result<()> {
    let Some(gallery) = show.gallery(kind) else {
        bail!("no {kind} gallery");
    };
    for url in gallery.image_urls() {
        writeln!(out, "{url}")?;
    }
    Ok(())
}
