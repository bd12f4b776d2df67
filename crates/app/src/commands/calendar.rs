//! Calendar link commands: status, connect, disconnect

use reservo_core::ConnectOutcome;
use reservo_domain::Result;
use tokio_util::sync::CancellationToken;

use crate::AppContext;

/// Fresh status read; also the manual re-check after an inconclusive connect.
pub async fn status(ctx: &AppContext) -> Result<()> {
    let status = ctx.connection.status().await?;

    if status.connected {
        println!("Connected. We'll check your Google Calendar for conflicts on new bookings.");
    } else {
        println!("Not connected. Run `reservo calendar connect` to link your Google Calendar.");
    }
    Ok(())
}

/// Run the connect flow. Ctrl-C cancels the poll cooperatively; the
/// authorization already underway in the browser is unaffected.
pub async fn connect(ctx: &AppContext) -> Result<()> {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });

    println!("Authorize in the browser tab we just opened; we'll check your status automatically.");
    let outcome = ctx.connection.connect(&cancel).await;
    ctrl_c.abort();

    match outcome? {
        ConnectOutcome::Connected => {
            println!("Your Google Calendar is connected. You're all set!");
        }
        ConnectOutcome::StillWaiting => {
            println!(
                "Still waiting on authorization. Run `reservo calendar status` if you already accepted."
            );
        }
        ConnectOutcome::Cancelled => {
            println!("Stopped checking. Run `reservo calendar status` once you've authorized.");
        }
    }
    Ok(())
}

/// Sever the link. Success means immediately disconnected, no re-poll.
pub async fn disconnect(ctx: &AppContext) -> Result<()> {
    ctx.connection.disconnect().await?;
    println!("Calendar disconnected.");
    Ok(())
}
