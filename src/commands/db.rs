//! Database commands over the SQLite adapter.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};
use serde_json::Value;

use crate::database::{Database, QueryOutcome};

#[derive(Debug, Clone)]
pub enum DbSubcommand {
    /// Run a SQL statement.
    Query { db: String, query: String },
    /// List user tables.
    ListTables { db: String },
    /// Apply a SQL migration file.
    Migrate { db: String, migration: PathBuf },
    /// Copy the live database to a backup file.
    Backup { db: String, output: PathBuf },
    /// Overwrite the database from a backup file.
    Restore {
        db: String,
        input: PathBuf,
        yes: bool,
    },
}

pub fn execute_db(command: DbSubcommand) -> Result<()> {
    match command {
        DbSubcommand::Query { db, query } => {
            let database = Database::connect(&db)?;
            match database.run_query(&query)? {
                QueryOutcome::Rows { rows, .. } => {
                    for row in rows {
                        println!("{}", Value::Array(row));
                    }
                }
                QueryOutcome::Done { .. } => {
                    println!("{} Query executed successfully.", style("✓").green());
                }
            }
        }

        DbSubcommand::ListTables { db } => {
            let database = Database::connect(&db)?;
            for table in database.list_tables()? {
                println!("{table}");
            }
        }

        DbSubcommand::Migrate { db, migration } => {
            let database = Database::connect(&db)?;
            database.run_migration(&migration)?;
            println!(
                "{} Migration from {} applied successfully.",
                style("✓").green(),
                migration.display()
            );
        }

        DbSubcommand::Backup { db, output } => {
            let database = Database::connect(&db)?;
            database.backup_to(&output)?;
            println!(
                "{} Database backed up to {}.",
                style("✓").green(),
                output.display()
            );
        }

        DbSubcommand::Restore { db, input, yes } => {
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Overwrite '{db}' with {}?", input.display()))
                    .default(false)
                    .interact()?;
            if !confirmed {
                println!("Restore cancelled.");
                return Ok(());
            }
            let mut database = Database::connect(&db)?;
            database.restore_from(&input)?;
            println!(
                "{} Database restored from {}.",
                style("✓").green(),
                input.display()
            );
        }
    }

    Ok(())
}
