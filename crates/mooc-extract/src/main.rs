mod category;
mod config;
mod error;
mod input;
mod model;
mod origin;
mod pipeline;
mod record;
mod select;
mod text;

use mooc_catalog::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use pipeline::Pipeline;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting MOOCCube course extraction");

    let config = Config::from_env()?;
    info!(
        course_file = %config.course_file.display(),
        relation_file = %config.relation_file.display(),
        output_file = %config.output_file.display(),
        target_count = config.target_count,
        per_category = config.per_category,
        "configuration loaded"
    );

    let catalog = match &config.catalog_file {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    let summary = Pipeline::new(&config, &catalog).run()?;
    info!(
        categories_loaded = summary.categories_loaded,
        courses_loaded = summary.courses_loaded,
        courses_selected = summary.courses_selected,
        categories = summary.distribution.len(),
        "extraction complete"
    );
    Ok(())
}
