//! Session commands: login, logout, and the route guard probe

use chrono::Local;
use reservo_core::{decide, SessionService};
use reservo_domain::{ReservoError, Result};

use crate::AppContext;

/// Exchange the Google identity token for a session and report where the
/// user should continue.
pub async fn login(ctx: &AppContext, id_token: &str, from: Option<&str>) -> Result<()> {
    let record = ctx.sessions.login(id_token).await?;

    let expires = record.expires_at.with_timezone(&Local);
    println!("Welcome! Session active until {}.", expires.format("%Y-%m-%d %H:%M"));
    println!("Continue at: {}", SessionService::return_destination(from));
    Ok(())
}

/// Drop the local session.
pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.sessions.logout().await?;
    println!("Logged out.");
    Ok(())
}

/// Evaluate the route guard for a path and print the decision as JSON, so
/// the web tier (or a script) can consume it directly.
pub async fn guard(ctx: &AppContext, path: &str, query: &str) -> Result<()> {
    let has_token = ctx.sessions.is_authed().await?;
    let decision = decide(path, query, has_token);
    let location = decision.location();

    let output = serde_json::json!({
        "decision": decision,
        "location": location,
    });
    let rendered = serde_json::to_string_pretty(&output)
        .map_err(|e| ReservoError::Internal(format!("decision not serializable: {e}")))?;
    println!("{rendered}");
    Ok(())
}
