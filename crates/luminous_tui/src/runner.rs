//! Terminal setup and the main event loop.

use crate::App;
use crate::ui;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use luminous_error::TuiError;
use luminous_live::LiveFeedHandle;
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::io;
use std::panic::PanicHookInfo;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// How long to wait for a key before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Run the dashboard until the user quits, then stop the metric feed.
///
/// Blocks the calling thread. From async code, run it on a blocking task.
/// The terminal is restored however the session ends, including a failed
/// setup or a panic.
#[instrument(skip_all)]
pub fn run(mut app: App, mut feed: LiveFeedHandle) -> Result<(), TuiError> {
    let result = TerminalSession::start().and_then(|_session| {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        info!("Dashboard started");
        let result = event_loop(&mut terminal, &mut app);
        terminal.show_cursor()?;
        result
    });

    if let Err(e) = feed.stop() {
        warn!(error = %e, "Live feed already stopped");
    }
    info!(ticks = feed.ticks(), "Dashboard closed");
    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), TuiError> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            return Ok(());
        }

        app.refresh_metrics();
    }
}

/// Raw mode and the alternate screen, left again on drop.
struct TerminalSession {
    _panic_hook: PanicHookGuard,
}

impl TerminalSession {
    fn start() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let session = Self {
            _panic_hook: PanicHookGuard::install(restore_terminal),
        };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Runs `cleanup` ahead of the previous panic hook until dropped.
struct PanicHookGuard {
    previous: Arc<PanicHook>,
}

impl PanicHookGuard {
    fn install(cleanup: fn()) -> Self {
        let previous = Arc::new(std::panic::take_hook());
        let chained = Arc::clone(&previous);
        std::panic::set_hook(Box::new(move |info| {
            cleanup();
            (*chained)(info);
        }));
        Self { previous }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // set_hook panics on a panicking thread
        if std::thread::panicking() {
            return;
        }
        let previous = Arc::clone(&self.previous);
        std::panic::set_hook(Box::new(move |info| (*previous)(info)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CLEANUPS: AtomicUsize = AtomicUsize::new(0);

    fn count_cleanup() {
        CLEANUPS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_panic_hook_guard_restores_previous_hook() {
        let guard = PanicHookGuard::install(count_cleanup);
        let caught = std::panic::catch_unwind(|| {
            panic!("inside the dashboard");
        });
        assert!(caught.is_err());
        assert_eq!(CLEANUPS.load(Ordering::SeqCst), 1);

        drop(guard);
        let caught = std::panic::catch_unwind(|| {
            panic!("after the dashboard");
        });
        assert!(caught.is_err());
        assert_eq!(CLEANUPS.load(Ordering::SeqCst), 1);
    }
}
