//! Watch-mode rebuild loop
//!
//! At most one watcher is alive at a time; starting the loop drops any
//! previous watcher before the replacement is constructed, so no two
//! watchers ever observe the same path. Events funnel into a channel
//! and the loop runs one full build per event, strictly sequentially.

use std::path::Path;

use anyhow::{Context, Result};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tonik_tokens::BuildOptions;
use tracing::{debug, error, info, warn};

/// Controller owning the single active watcher handle.
#[derive(Default)]
pub struct WatchLoop {
    active: Option<RecommendedWatcher>,
}

impl WatchLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Watch `input` and rebuild on the initial scan and on every
    /// change. Runs until the watcher backend shuts down.
    pub async fn start(&mut self, input: &Path, opts: BuildOptions) -> Result<()> {
        if let Some(previous) = self.active.take() {
            debug!("closing previous watcher");
            drop(previous);
        }

        info!("running builder in watch mode");

        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut watcher =
            notify::recommended_watcher(move |event: notify::Result<notify::Event>| {
                let _ = tx.send(event);
            })
            .context("failed to create file watcher")?;
        watcher
            .watch(input, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {}", input.display()))?;
        self.active = Some(watcher);

        // Initial build once the watch is registered (the "ready" scan).
        rebuild(input, &opts);

        while let Some(event) = rx.recv().await {
            match event {
                Ok(event) if is_change(&event.kind) => rebuild(input, &opts),
                Ok(_) => {}
                Err(err) => warn!(?err, "watch error"),
            }
        }

        Ok(())
    }
}

fn is_change(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

/// One full build per event. A failed rebuild is reported and the
/// watcher stays alive; only watcher setup errors tear the loop down.
fn rebuild(input: &Path, opts: &BuildOptions) {
    match tonik_tokens::build(input, opts) {
        Ok(()) => info!("successfully rebuilt themes"),
        Err(err) => error!(%err, "rebuild failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;

    fn write_theme(path: &Path, name: &str) {
        fs::write(
            path,
            format!(r#"{{ "name": "{name}", "colors": {{ "primary": "blue" }} }}"#),
        )
        .unwrap();
    }

    fn spawn_loop(input: PathBuf, opts: BuildOptions) -> tokio::task::JoinHandle<Result<()>> {
        tokio::spawn(async move {
            let mut watcher = WatchLoop::new();
            watcher.start(&input, opts).await
        })
    }

    /// Poll until `cond` holds; the loop runs on watcher-thread events,
    /// so the test can only observe its effects with a timeout.
    async fn eventually<F: Fn() -> bool>(cond: F) -> bool {
        for _ in 0..100 {
            if cond() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        false
    }

    #[tokio::test]
    async fn builds_on_start_and_on_every_change() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("theme.summary.json");
        write_theme(&input, "First");
        let opts = BuildOptions {
            theme_path: dir.path().join("theme.json"),
            css_path: dir.path().join("_variables.css"),
        };

        let theme_path = opts.theme_path.clone();
        let css_path = opts.css_path.clone();
        let task = spawn_loop(input.clone(), opts);

        // Registering the watch triggers the initial build.
        assert!(
            eventually(|| theme_path.exists() && css_path.exists()).await,
            "initial build never ran"
        );

        // A change to the input triggers a full rebuild.
        write_theme(&input, "Second");
        assert!(
            eventually(|| {
                fs::read_to_string(&theme_path).is_ok_and(|theme| theme.contains("Second"))
            })
            .await,
            "change did not trigger a rebuild"
        );

        task.abort();
    }

    #[tokio::test]
    async fn failed_rebuild_keeps_the_watcher_alive() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("theme.summary.json");
        write_theme(&input, "First");
        let opts = BuildOptions {
            theme_path: dir.path().join("theme.json"),
            css_path: dir.path().join("_variables.css"),
        };

        let theme_path = opts.theme_path.clone();
        let task = spawn_loop(input.clone(), opts);

        assert!(eventually(|| theme_path.exists()).await, "initial build never ran");

        // A broken intermediate save fails its rebuild but must not
        // tear the watcher down.
        fs::write(&input, "{ not json").unwrap();
        tokio::time::sleep(Duration::from_millis(500)).await;

        write_theme(&input, "Recovered");
        assert!(
            eventually(|| {
                fs::read_to_string(&theme_path).is_ok_and(|theme| theme.contains("Recovered"))
            })
            .await,
            "watcher did not survive a failed rebuild"
        );

        task.abort();
    }
}
