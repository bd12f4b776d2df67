//! System browser launcher

use std::process::{Command, Stdio};

use reservo_core::UrlOpener;
use reservo_domain::{ReservoError, Result};
use tracing::debug;

/// Opens URLs in the platform's default browser.
///
/// The launched tab is a separate browsing context; the connect flow never
/// reads anything back from it and relies on status polling instead.
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("open", &[])
        } else if cfg!(target_os = "windows") {
            ("cmd", &["/C", "start", ""])
        } else {
            ("xdg-open", &[])
        };

        debug!(url, program, "opening authorization URL in system browser");

        Command::new(program)
            .args(args)
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ReservoError::Platform(format!("could not open browser: {e}")))?;

        Ok(())
    }
}
