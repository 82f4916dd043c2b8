use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Display;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;

use fitpic_runtime::config::CONFIG_FILE_NAME;
use fitpic_runtime::{App, AppBuilder, AppConfig, UiEvent, UiEventStream};
use fitpic_store::FileStorage;

use crate::args::OutputFormat;
use crate::presentation::{CommandResult, ConsoleRenderer, describe};

const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Shared setup for handlers: where data lives, how to print, and the
/// runtime the App's timers run on.
pub struct HandlerContext {
    pub format: OutputFormat,
    pub data_dir: PathBuf,
    pub config: AppConfig,
    runtime: Runtime,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, data_dir: PathBuf) -> Result<Self> {
        let config = AppConfig::load_from(&data_dir.join(CONFIG_FILE_NAME))
            .with_context(|| format!("Failed to load config from {}", data_dir.display()))?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;

        Ok(Self {
            format,
            data_dir,
            config,
            runtime,
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn start_app(&self) -> Result<(App, UiEventStream)> {
        let storage = FileStorage::open(&self.data_dir)
            .with_context(|| format!("Failed to open {}", self.data_dir.display()))?;
        let started = AppBuilder::new(storage)
            .config(self.config.clone())
            .start()?;
        Ok(started)
    }

    /// Start the App on the data directory. Startup events are discarded.
    ///
    /// Must be called from inside [`HandlerContext::block_on`].
    pub fn open(&self) -> Result<Session> {
        let (app, events) = self.start_app()?;
        Ok(Session::new(app, events))
    }

    /// Like [`HandlerContext::open`], printing events as they arrive.
    pub fn open_timeline(&self) -> Result<Session> {
        let (app, events) = self.start_app()?;
        Ok(self.timeline(app, events))
    }

    /// Wrap a started App, echoing its events as they arrive in plain mode.
    pub fn timeline(&self, app: App, events: UiEventStream) -> Session {
        let session = Session::new(app, events);
        if self.json_mode() {
            session
        } else {
            session.echo()
        }
    }

    pub fn render<T>(&self, content: T, events: Vec<UiEvent>) -> Result<()>
    where
        T: Serialize + Display,
    {
        ConsoleRenderer::new(self.json_mode()).render(&CommandResult::new(content, events))
    }

    /// Render for a [`HandlerContext::timeline`] session: plain mode has
    /// already printed the events.
    pub fn render_timeline<T>(&self, content: T, events: Vec<UiEvent>) -> Result<()>
    where
        T: Serialize + Display,
    {
        let events = if self.json_mode() { events } else { Vec::new() };
        self.render(content, events)
    }
}

/// A running App plus the events it has emitted since startup.
pub struct Session {
    pub app: App,
    stream: UiEventStream,
    events: Vec<UiEvent>,
    echo: Option<tokio::time::Instant>,
}

impl Session {
    pub fn new(app: App, mut stream: UiEventStream) -> Self {
        stream.drain();
        Self {
            app,
            stream,
            events: Vec::new(),
            echo: None,
        }
    }

    /// Print each event with its elapsed time as it arrives.
    pub fn echo(mut self) -> Self {
        self.echo = Some(tokio::time::Instant::now());
        self
    }

    fn collect(&mut self) {
        for event in self.stream.drain() {
            if let Some(start) = self.echo {
                println!("{:>6}ms  {}", start.elapsed().as_millis(), describe(&event));
            }
            self.events.push(event);
        }
    }

    /// Wait until no timer is pending, collecting events along the way.
    pub async fn settle(&mut self, timeout: Duration) -> Result<()> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            tokio::time::sleep(POLL_INTERVAL).await;
            self.collect();
            if self.app.is_idle() {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                self.app.shutdown();
                anyhow::bail!("Timed out after {}ms waiting for the app", timeout.as_millis());
            }
        }
    }

    /// Stop pending timers and hand back everything emitted.
    pub fn finish(mut self) -> Vec<UiEvent> {
        self.collect();
        self.app.shutdown();
        self.events
    }
}

/// Generous bound for one command's timers under `config`.
pub fn settle_timeout(config: &AppConfig) -> Duration {
    let t = &config.timings;
    let processing = t.processing_step_ms * 4
        + t.processing_error_delay_ms.max(t.processing_final_delay_ms)
        + t.insight_cutoff_ms;
    let longest = [
        processing,
        t.feed_initial_ms + t.feed_load_ms,
        t.add_all_to_cart_ms,
        t.checkout_ms,
        t.remix_refresh_ms + t.feed_refresh_ms + t.feed_load_ms,
    ]
    .into_iter()
    .max()
    .unwrap_or(0);
    Duration::from_millis(longest * 2 + 5_000)
}
