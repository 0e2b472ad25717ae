use anyhow::Result;
use clap::Parser;
use notion_tasks::{TaskDatabase, TaskDatabaseParameters};
use tracing_subscriber::EnvFilter;

/// Queries the task database and archives the first row it returns.
#[derive(Parser)]
struct Cli {
    /// Notion integration token.
    #[arg(long, env = "NOTION_TOKEN", hide_env_values = true)]
    notion_token: String,

    /// Identifier of the task database.
    #[arg(long, env = "TABLE_ID")]
    table_id: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Cli {
        notion_token,
        table_id,
    } = Cli::parse();

    let database = TaskDatabase::new(TaskDatabaseParameters {
        token: notion_token,
        database_id: table_id,
        base_url_override: None,
    });

    let response = database.read(None, None)?;
    let page_id = response.first_page_id()?;

    println!(
        "Query returned {} row(s); archiving the first one: {}",
        response.results.len(),
        page_id
    );

    database.delete(page_id)?;

    println!("Archived page {}", page_id);

    Ok(())
}
