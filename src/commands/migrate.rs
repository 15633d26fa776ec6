//! Migrate command - manages the registry's `users` schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Schema changes are explicit here, so skip the connect-time
    // auto-migration the service startup path uses.
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Store connection failed: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            tracing::info!("Applying pending registry migrations...");
            db.run_migrations().await.map_err(command_failed)?;
            tracing::info!("Registry schema is up to date");
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back the last registry migration...");
            db.rollback_migration().await.map_err(command_failed)?;
            tracing::info!("Rollback complete");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await.map_err(command_failed)?;
            for (name, applied) in status {
                println!("{}: {}", name, if applied { "applied" } else { "pending" });
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping the registry schema and re-running all migrations...");
            db.fresh_migrations().await.map_err(command_failed)?;
            tracing::info!("Fresh registry schema created");
        }
    }

    Ok(())
}

/// Surface a migration failure as an internal error
fn command_failed(err: sea_orm::DbErr) -> AppError {
    AppError::internal(err.to_string())
}
