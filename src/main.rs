// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;

use toastline::config::{self, Config};
use toastline::diagnostics::DiagnosticsCollector;
use toastline::domain::toast::{DismissAfter, Intent};
use toastline::driver::{TokioClock, Toaster};
use toastline::error::Result;
use toastline::toaster::{Content, Manager, Message, NotifyOptions};

const HELP: &str = "\
toastline: show toasts in the terminal and trace their lifecycle

USAGE:
  toastline [OPTIONS] TITLE...

OPTIONS:
  --duration SECS      Auto-dismiss delay (0 keeps toasts until closed)
  --position NAME      top, top-left, top-right, bottom, bottom-left, bottom-right
  --intent NAME        none, success, warning, danger
  --body TEXT          Description shown under each title
  --close-after SECS   Close every toast after SECS
  --config PATH        Read settings from PATH instead of the user config
  --diagnostics        Print the lifecycle event log as JSON when done
  -h, --help           Print this help
";

/// Toasts that never dismiss themselves are closed after this long unless
/// `--close-after` says otherwise.
const PERSISTENT_FALLBACK: Duration = Duration::from_secs(10);

/// How often the demo moves queued lifecycle events into the log.
const DIAGNOSTICS_DRAIN_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug)]
struct Args {
    duration: Option<f64>,
    position: Option<String>,
    intent: Intent,
    body: Option<String>,
    close_after: Option<f64>,
    config: Option<PathBuf>,
    diagnostics: bool,
    titles: Vec<String>,
}

impl Args {
    fn parse() -> std::result::Result<Option<Self>, pico_args::Error> {
        let mut args = pico_args::Arguments::from_env();
        if args.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let intent: Option<String> = args.opt_value_from_str("--intent")?;
        Ok(Some(Self {
            duration: args.opt_value_from_str("--duration")?,
            position: args.opt_value_from_str("--position")?,
            intent: intent.as_deref().map_or(Intent::None, Intent::parse_or_default),
            body: args.opt_value_from_str("--body")?,
            close_after: args.opt_value_from_str("--close-after")?,
            config: args.opt_value_from_str("--config")?,
            diagnostics: args.contains("--diagnostics"),
            titles: args
                .finish()
                .into_iter()
                .filter_map(|s| s.into_string().ok())
                .collect(),
        }))
    }

    fn options(&self) -> NotifyOptions {
        let mut options = NotifyOptions::new().close_button(true);
        if let Some(secs) = self.duration {
            options = options.duration_secs(secs);
        }
        if let Some(position) = &self.position {
            options = options.position_name(position);
        }
        options
    }

    fn content(&self, title: &str) -> Content {
        let content = Content::new(title).with_intent(self.intent);
        match &self.body {
            Some(body) => content.with_body(body.clone()),
            None => content,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::parse() {
        Ok(Some(args)) if !args.titles.is_empty() => args,
        Ok(_) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };

    let mut collector = DiagnosticsCollector::new(config.event_log_capacity());
    let mut manager = Manager::with_config(&config, TokioClock);
    manager.set_diagnostics(collector.handle());
    let (toaster, driver) = Toaster::spawn(manager);

    let mut surfaces = JoinSet::new();
    for title in &args.titles {
        let handle = toaster.notify(args.content(title), args.options()).await?;
        println!("{} shown: {title}", handle.id());
        surfaces.spawn(play_surface(
            toaster.clone(),
            handle,
            config.exit_animation(),
        ));
        collector.process_pending();
    }

    let closer = close_after(&args, &config).map(|delay| {
        let closer = toaster.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = closer.close_all();
        })
    });

    let mut drain = tokio::time::interval(DIAGNOSTICS_DRAIN_INTERVAL);
    loop {
        tokio::select! {
            joined = surfaces.join_next() => match joined {
                Some(Ok(result)) => result?,
                Some(Err(err)) => tracing::error!(%err, "surface task failed"),
                None => break,
            },
            _ = drain.tick() => {
                collector.process_pending();
            }
        }
    }
    if let Some(closer) = closer {
        closer.abort();
        let _ = closer.await;
    }
    drop(toaster);
    let _ = driver.await;

    if args.diagnostics {
        collector.process_pending();
        println!("{}", collector.export_json()?);
    }
    Ok(())
}

/// Picks when to force-close everything so the demo always terminates.
fn close_after(args: &Args, config: &Config) -> Option<Duration> {
    if let Some(secs) = args.close_after {
        return Some(Duration::try_from_secs_f64(secs.max(0.0)).unwrap_or(PERSISTENT_FALLBACK));
    }
    let dismiss = args
        .duration
        .map_or_else(|| config.dismiss_after(), DismissAfter::from_secs_f64);
    (dismiss == DismissAfter::Never).then_some(PERSISTENT_FALLBACK)
}

/// Plays the rendering surface for one toast: waits for it to start
/// closing, "animates" for the configured time and reports completion.
async fn play_surface(
    toaster: Toaster,
    mut handle: toastline::driver::ToastHandle,
    exit_animation: Duration,
) -> Result<()> {
    handle.closing().await?;
    println!("{} closing", handle.id());

    tokio::time::sleep(exit_animation).await;
    toaster.send(Message::ExitFinished(handle.id()))?;

    handle.removed().await?;
    println!("{} removed", handle.id());
    Ok(())
}
