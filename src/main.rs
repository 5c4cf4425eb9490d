mod cli;
mod config;
mod db;
mod error;
mod facts;
mod generator;
mod merge;
mod models;
mod output;
mod templates;
mod vlans;

use clap::Parser;
use serde_json::{Map, Value};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command, CommonArgs, DbArgs, FilesArgs};
use config::Config;
use db::Store;
use error::Result;
use facts::FactLoader;
use generator::{BatchSummary, Generator, VlanSource};
use output::OutputWriter;
use templates::{template_name, TemplateMap, TemplateRenderer, TemplateSelector};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "switchgen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Db(args) => run_db(args).await,
        Command::Files(args) => run_files(args),
    };

    result?;
    Ok(())
}

async fn run_db(args: DbArgs) -> Result<BatchSummary> {
    let common = args.common;
    let cfg = Config::load().with_overrides(
        args.db,
        common.checks_dir.clone(),
        common.templates_dir.clone(),
    );

    tracing::info!("Loading switches from {}", cfg.db_path.display());
    let store = Store::open(&cfg.db_path).await?;
    let switches = store
        .list_switches(&cfg.inventory_table, &cfg.mgmt_ip_column)
        .await;
    store.close().await;
    let switches = switches?;

    let global = optional_layer(common.global_config.as_deref())?;
    let (selector, renderer) = model_templates(&cfg, common.template_map.as_deref())?;

    let mut generator = build_generator(&common, &cfg, selector, renderer, global)?;
    generator.run(&switches)
}

fn run_files(args: FilesArgs) -> Result<BatchSummary> {
    let common = args.common;
    let cfg = Config::load().with_overrides(
        None,
        common.checks_dir.clone(),
        common.templates_dir.clone(),
    );

    tracing::info!("Loading configuration files...");
    let inventory = facts::load_switches_file(&args.switches)?;

    // --global-config replaces the inventory's own global section
    let global = match common.global_config.as_deref() {
        Some(path) => facts::load_layer(path)?,
        None => inventory.global.clone().unwrap_or_else(empty_layer),
    };

    let shared_vlans = match args.vlans.as_deref() {
        Some(path) => Some(vlans::normalize(&facts::load_raw_vlans(path)?)),
        None => None,
    };

    let (selector, renderer) = match args.template.as_deref() {
        Some(path) => (
            TemplateSelector::Fixed(template_name(path)),
            TemplateRenderer::from_file(path)?,
        ),
        None => model_templates(&cfg, common.template_map.as_deref())?,
    };

    let mut generator = build_generator(&common, &cfg, selector, renderer, global)?;
    if let Some(vlans) = shared_vlans {
        generator = generator.with_vlan_source(VlanSource::Shared(vlans));
    }
    generator.run(&inventory.switches)
}

/// Model-table selection over the templates directory
fn model_templates(
    cfg: &Config,
    template_map: Option<&Path>,
) -> Result<(TemplateSelector, TemplateRenderer)> {
    let map = match template_map {
        Some(path) => TemplateMap::from_file(path)?,
        None => TemplateMap::default(),
    };
    if map.is_empty() {
        tracing::warn!("Template map is empty; every switch will be skipped");
    } else {
        tracing::debug!("{} model template(s) known", map.len());
    }
    let renderer = TemplateRenderer::from_dir(&cfg.templates_dir)?;
    Ok((TemplateSelector::ByModel(map), renderer))
}

fn build_generator(
    common: &CommonArgs,
    cfg: &Config,
    selector: TemplateSelector,
    renderer: TemplateRenderer,
    global: Value,
) -> Result<Generator> {
    let base = optional_layer(common.base_config.as_deref())?;

    let writer = OutputWriter::new(&common.output_dir);
    writer.prepare()?;

    Ok(Generator::new(FactLoader::new(&cfg.checks_dir), selector, renderer, writer)
        .with_layers(base, global)
        .with_print(common.print))
}

fn optional_layer(path: Option<&Path>) -> Result<Value> {
    match path {
        Some(path) => facts::load_layer(path),
        None => Ok(empty_layer()),
    }
}

fn empty_layer() -> Value {
    Value::Object(Map::new())
}
