//! # CLI Layer
//!
//! One possible client of `blueprintapp`. This is the only place that knows
//! about stdin/stdout/stderr and exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument parsing** with clap (`setup.rs`)
//! 2. **Logging setup**: `tracing-subscriber` on stderr, so stdout stays clean
//! 3. **Dispatch** to the library utilities or the API facade
//! 4. **Output**: plain text (`render.rs`) or JSON (`--json`)
//!
//! Business rules live in the library; handlers here only move data in and out.

mod render;
mod setup;

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use blueprintapp::api::BlueprintApi;
use blueprintapp::config::BlueprintConfig;
use blueprintapp::since::{format_since, parse_timestamp};
use blueprintapp::store::memory::InMemoryStore;
use blueprintapp::tags::{normalize_tags, TagDictionary};
use blueprintapp::video::resolve_video;
use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use render::{render_page, render_profile, render_tags, render_video};
use setup::{Cli, Commands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = BlueprintConfig::load(cli.config.as_deref())?;
    let output = Output { json: cli.json };
    tracing::debug!(command = ?cli.command, json = cli.json, "dispatching");

    match cli.command {
        Commands::Tags { file, dictionary } => {
            handle_tags(&config, &output, file.as_deref(), dictionary.as_deref())
        }
        Commands::Video { input } => handle_video(&output, &input),
        Commands::Since { timestamp, now } => handle_since(&output, &timestamp, now.as_deref()),
        Commands::Paginate {
            total,
            page,
            page_size,
        } => {
            let page = blueprintapp::pagination::Page::new(
                total,
                page_size.unwrap_or(config.page_size),
                page,
            );
            output.emit(&page, |out| render_page(out, &page))
        }
        Commands::Profile {
            username,
            data,
            viewer,
            page,
        } => handle_profile(config, &output, &username, &data, viewer, page.as_deref()),
        Commands::Config { template } => {
            if template {
                print!("{}", BlueprintConfig::template());
                Ok(())
            } else {
                output.emit(&config, |out| {
                    writeln!(out, "page_size = {}", config.page_size)?;
                    writeln!(out, "max_tags = {}", config.max_tags)
                })
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize>(
        &self,
        value: &T,
        text: impl FnOnce(&mut dyn Write) -> io::Result<()>,
    ) -> Result<()> {
        let mut out = io::BufWriter::new(io::stdout().lock());
        if self.json {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        } else {
            text(&mut out)?;
        }
        out.flush()?;
        Ok(())
    }
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    match file {
        Some(path) => {
            File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?
                .read_to_end(&mut bytes)?;
        }
        None => {
            std::io::stdin().read_to_end(&mut bytes)?;
        }
    }
    Ok(bytes)
}

#[derive(Serialize)]
struct TagsOutput<'a> {
    tags: &'a [blueprintapp::tags::Tag],
    created: &'a [blueprintapp::tags::Tag],
    stored_ids: Option<String>,
    textarea: String,
}

fn handle_tags(
    config: &BlueprintConfig,
    output: &Output,
    file: Option<&Path>,
    dictionary: Option<&Path>,
) -> Result<()> {
    let raw = String::from_utf8(read_input(file)?)
        .map_err(|_| blueprintapp::error::BlueprintError::InvalidEncoding)?;

    let dictionary: TagDictionary = match dictionary {
        Some(path) => {
            let reader = BufReader::new(
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
            );
            serde_json::from_reader(reader)
                .with_context(|| format!("invalid tag dictionary {}", path.display()))?
        }
        None => TagDictionary::default(),
    };

    let normalized = normalize_tags(&raw, &dictionary, config.max_tags);
    let data = TagsOutput {
        tags: &normalized.tags,
        created: &normalized.created,
        stored_ids: normalized.stored_ids(),
        textarea: normalized.textarea(),
    };
    output.emit(&data, |out| render_tags(out, &normalized))
}

fn handle_video(output: &Output, input: &str) -> Result<()> {
    let video = resolve_video(input).ok_or_else(|| anyhow!("Video is invalid"))?;
    output.emit(&video, |out| render_video(out, &video))
}

fn handle_since(output: &Output, timestamp: &str, now: Option<&str>) -> Result<()> {
    let t = parse_timestamp(timestamp)?;
    let now = match now {
        Some(raw) => parse_timestamp(raw)?,
        None => Utc::now(),
    };
    let since = format_since(t, now);
    output.emit(&since, |out| writeln!(out, "{}", since))
}

fn handle_profile(
    config: BlueprintConfig,
    output: &Output,
    username: &str,
    data: &Path,
    viewer: Option<u64>,
    page: Option<&str>,
) -> Result<()> {
    let file = File::open(data).with_context(|| format!("cannot open {}", data.display()))?;
    let store = InMemoryStore::from_reader(BufReader::new(file))?;
    let api = BlueprintApi::new(store, config);

    let listing = api.profile(username, viewer, page)?;
    output.emit(&listing, |out| render_profile(out, &listing))
}
