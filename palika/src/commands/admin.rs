// palika/src/commands/admin.rs

use std::path::Path;

use anyhow::Result;

use palika_core::ports::repository::Repository;

use crate::commands::AppContext;

pub async fn run(project_dir: &Path, username: &str) -> Result<()> {
    let ctx = AppContext::open(project_dir).await?;

    // Printed once; only this token (not a password) is stored.
    let token = uuid::Uuid::new_v4().to_string();
    ctx.repo.create_admin(username, &token).await?;

    println!("👤 Admin account '{username}' ready.");
    println!("   Access token (shown once): {token}");
    Ok(())
}
