//! Migrate command - Schema management for the users table.

use sea_orm::{EntityTrait, PaginatorTrait};

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::user::Entity as UserEntity;
use crate::infra::Database;

/// Outcome of a migrate action: every known migration with its applied flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub migrations: Vec<(String, bool)>,
}

impl MigrationReport {
    /// Names of migrations not yet applied
    pub fn pending(&self) -> Vec<&str> {
        self.migrations
            .iter()
            .filter(|(_, applied)| !applied)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(config.database_url.as_str())
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let report = apply(&db, args.action).await?;

    if args.action == MigrateAction::Status {
        for (name, applied) in &report.migrations {
            let marker = if *applied { "[x]" } else { "[ ]" };
            println!("{} {}", marker, name);
        }
    }

    Ok(())
}

/// Run one migrate action against an open database and report the result.
pub async fn apply(db: &Database, action: MigrateAction) -> AppResult<MigrationReport> {
    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            tracing::info!("users table is up to date");
        }
        MigrateAction::Down => {
            warn_discarded_rows(db, "Rolling back").await;
            db.rollback_migration().await?;
        }
        MigrateAction::Fresh => {
            warn_discarded_rows(db, "Recreating").await;
            db.fresh_migrations().await?;
        }
        MigrateAction::Status => {}
    }

    let report = MigrationReport {
        migrations: db.migration_status().await?,
    };

    let pending = report.pending();
    if !pending.is_empty() {
        tracing::info!(?pending, "Pending migrations");
    }

    Ok(report)
}

/// Log how many user rows a destructive action is about to drop.
async fn warn_discarded_rows(db: &Database, verb: &str) {
    // A missing table just means there is nothing to lose
    match UserEntity::find().count(&db.get_connection()).await {
        Ok(rows) => tracing::warn!(rows, "{} users table; existing rows are dropped", verb),
        Err(_) => tracing::warn!("{} users table", verb),
    }
}
