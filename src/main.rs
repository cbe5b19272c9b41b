mod assemble;
mod cli;
mod error;
mod introspect;
mod naming;
mod parse;
mod schema;
mod template;
#[cfg(test)]
mod testutil;
mod translate;

use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use sqlx::mysql::MySqlPoolOptions;
use tracing_subscriber::EnvFilter;

use crate::assemble::{assemble, Stubs};
use crate::cli::Cli;
use crate::schema::TableTranslation;
use crate::translate::translate_table;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Resolve templates before touching the database so a missing stub
    // override aborts without any I/O.
    let stubs = match cli.stubs {
        Some(ref dir) => Stubs::from_dir(Path::new(dir))?,
        None => Stubs::embedded(),
    };

    let url = cli.connection_url()?;

    tracing::debug!("Connecting to database...");
    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await?;

    tracing::debug!("Introspecting schema...");
    let tables = introspect::mysql::introspect(&pool, &cli.database).await;
    pool.close().await;
    let tables = tables?;

    tracing::debug!("Found {} tables", tables.len());

    let translations: Vec<TableTranslation> = tables
        .iter()
        .map(|table| translate_table(&table.name, &table.columns))
        .collect();

    let document = assemble(&cli.database, naming::MIGRATION_CLASS, &translations, &stubs);

    // Render fully, then write once.
    let filename = naming::migration_filename(naming::MIGRATION_CLASS, &cli.database);
    fs::create_dir_all(&cli.out_dir)?;
    let path = Path::new(&cli.out_dir).join(&filename);
    fs::write(&path, &document)?;

    tracing::info!("Migration written to {}", path.display());
    println!("Done!");

    Ok(())
}
