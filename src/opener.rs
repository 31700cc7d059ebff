use std::process::{Command, Stdio};

use url::Url;

use crate::error::{Error, Result};

/// Opens a URL in a new browsing context.
pub trait Opener: Send + Sync {
    fn open(&self, url: &Url) -> Result<()>;
}

impl<F> Opener for F
where
    F: Fn(&Url) -> Result<()> + Send + Sync,
{
    fn open(&self, url: &Url) -> Result<()> {
        self(url)
    }
}

/// Hands URLs to the desktop's default handler and returns without waiting on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, url: &Url) -> Result<()> {
        let mut command = launcher(url.as_str());
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command.spawn().map_err(Error::Open)?;
        tracing::debug!(%url, "opened in browser");
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn launcher(target: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(target);
    command
}

#[cfg(target_os = "windows")]
fn launcher(target: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", target]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launcher(target: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(target);
    command
}
