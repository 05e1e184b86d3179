use sql_engine::{DatabaseBackend, DatabaseEngine, RunOutcome};
use sqlx::any::AnyPoolOptions;
use tracing_subscriber::EnvFilter;

mod database;

const DEFAULT_URI: &str = "sqlite::memory:";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Usage: example-cli [connection-uri] [sql-statement]
    let mut args = std::env::args().skip(1);
    let uri = args.next().unwrap_or_else(|| DEFAULT_URI.to_string());
    let statement = args.next();

    // In-memory SQLite needs a single pooled connection, otherwise every
    // acquire sees a fresh empty database
    let options = AnyPoolOptions::new().max_connections(1);
    let engine = DatabaseEngine::connect_with(&uri, options)
        .await
        .expect("Failed to open database connection");

    println!("Connected to {} (family: {})", engine.uri(), engine.family());

    if uri == DEFAULT_URI {
        database::setup(&engine).await;
        println!("Seeded demo tables into the in-memory database");
    }

    let tables = engine.list_tables().await.expect("Failed to list tables");
    for table in &tables {
        match &table.comment {
            Some(comment) => println!("table {} -- {}", table.name, comment),
            None => println!("table {}", table.name),
        }

        let fields = engine
            .list_fields(&table.name, None)
            .await
            .expect("Failed to list fields");
        for field in fields {
            let length = field
                .column_length
                .map(|length| format!("({length})"))
                .unwrap_or_default();
            let nullable = if field.is_nullable { "NULL" } else { "NOT NULL" };
            println!(
                "    {} {}{} {}",
                field.column_name, field.column_type, length, nullable
            );
        }
    }

    if let Some(statement) = statement {
        match engine.run(&statement).await {
            RunOutcome::Rows(output) => {
                println!("{}", serde_json::json!(output.columns));
                for row in output.rows {
                    println!("{}", serde_json::json!(row));
                }
            }
            RunOutcome::Failed { message } => {
                eprintln!("statement failed: {message}");
                std::process::exit(1);
            }
        }
    }
}
