//! Interactive incremental search.
//!
//! A key-reader thread forwards keystrokes and per-query fetch threads post
//! responses, all over one channel. The main loop drives the debounce timer
//! between events and drops responses whose generation token has been
//! superseded, so a slow reply for an old query never overwrites results
//! for a newer one.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use console::{Key, Term};
use tracing::debug;

use crate::api::{ApiClient, Stack};
use crate::catalog::sort_by_stars;
use crate::error::Result;
use crate::ui::{card_lines, should_use_colors, CurrentTheme};

use super::debounce::{Debouncer, Generation, SearchSession};
use super::POPULAR_SEARCHES;

/// Wake interval while no debounce deadline is pending.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Cards shown before the view collapses into an "...and N more" line.
const RESULT_LIMIT: usize = 5;

/// One event on the live loop's channel.
enum LiveEvent {
    Key(Key),
    Response(Generation, Result<Vec<Stack>>),
}

/// What the main loop should do after handling a key.
#[derive(Debug, PartialEq, Eq)]
enum LoopAction {
    Continue,
    Dispatch,
    Exit,
}

/// View state of the search screen.
enum SearchState {
    /// Empty query; show popular searches.
    Idle,
    /// Keystrokes seen, quiet period not yet over.
    Waiting,
    /// Request in flight.
    Fetching,
    /// Results (possibly empty) received.
    Loaded,
    /// The last request failed.
    Failed(String),
}

/// The interactive search screen.
pub struct LiveSearch {
    client: ApiClient,
    term: Term,
    theme: CurrentTheme,
    query: String,
    results: Vec<Stack>,
    state: SearchState,
    rendered_lines: usize,
}

impl LiveSearch {
    pub fn new(client: ApiClient) -> Self {
        let theme = if should_use_colors() {
            CurrentTheme::new()
        } else {
            CurrentTheme::plain()
        };

        Self {
            client,
            term: Term::stdout(),
            theme,
            query: String::new(),
            results: Vec::new(),
            state: SearchState::Idle,
            rendered_lines: 0,
        }
    }

    /// Run the loop until the user exits with Esc or Ctrl-C.
    pub fn run(mut self) {
        let (tx, rx) = mpsc::channel();

        // Key reader thread. Exits when the receiver goes away.
        let key_tx = tx.clone();
        let key_term = Term::stdout();
        thread::spawn(move || loop {
            match key_term.read_key() {
                Ok(key) => {
                    if key_tx.send(LiveEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        let mut debouncer = Debouncer::new();
        let mut session = SearchSession::new();

        self.term.hide_cursor().ok();
        self.render();

        loop {
            if debouncer.fire_at(Instant::now()) {
                self.dispatch(&tx, &mut session);
            }

            let timeout = debouncer.remaining(Instant::now()).unwrap_or(IDLE_POLL);
            match rx.recv_timeout(timeout) {
                Ok(LiveEvent::Key(key)) => {
                    match self.handle_key(key, Instant::now(), &mut debouncer, &mut session) {
                        LoopAction::Continue => {}
                        LoopAction::Dispatch => self.dispatch(&tx, &mut session),
                        LoopAction::Exit => break,
                    }
                }
                Ok(LiveEvent::Response(token, outcome)) => {
                    if session.is_current(token) {
                        self.apply(outcome);
                    } else {
                        debug!("dropping stale search response");
                    }
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }

        self.term.show_cursor().ok();
    }

    /// Apply one keystroke to the query and debounce state.
    ///
    /// Every edit supersedes whatever is in flight; clearing the input also
    /// cancels the pending dispatch and empties the results without a
    /// request.
    fn handle_key(
        &mut self,
        key: Key,
        now: Instant,
        debouncer: &mut Debouncer,
        session: &mut SearchSession,
    ) -> LoopAction {
        match key {
            Key::Escape | Key::CtrlC => return LoopAction::Exit,
            Key::Char(c) if !c.is_control() => {
                self.query.push(c);
                session.invalidate();
                debouncer.input_at(now);
                self.state = SearchState::Waiting;
            }
            Key::Backspace => {
                self.query.pop();
                session.invalidate();
                if self.query.is_empty() {
                    debouncer.cancel();
                    self.results.clear();
                    self.state = SearchState::Idle;
                } else {
                    debouncer.input_at(now);
                    self.state = SearchState::Waiting;
                }
            }
            Key::Enter if !self.query.is_empty() => {
                // Skip the rest of the quiet period.
                debouncer.cancel();
                return LoopAction::Dispatch;
            }
            _ => return LoopAction::Continue,
        }

        self.render();
        LoopAction::Continue
    }

    /// Issue a generation token and fetch on a worker thread.
    fn dispatch(&mut self, tx: &mpsc::Sender<LiveEvent>, session: &mut SearchSession) {
        let token = session.issue();
        let query = self.query.clone();
        let client = self.client.clone();
        let tx = tx.clone();

        debug!(query = %query, "dispatching live search");
        thread::spawn(move || {
            let outcome = client.search(&query).map(|response| response.into_stacks());
            let _ = tx.send(LiveEvent::Response(token, outcome));
        });

        self.state = SearchState::Fetching;
        self.render();
    }

    /// Apply a current-generation response.
    fn apply(&mut self, outcome: Result<Vec<Stack>>) {
        match outcome {
            Ok(mut stacks) => {
                sort_by_stars(&mut stacks);
                self.results = stacks;
                self.state = SearchState::Loaded;
            }
            Err(e) => {
                self.results.clear();
                self.state = SearchState::Failed(format!("Search failed: {}", e));
            }
        }
        self.render();
    }

    /// Redraw the screen in place.
    fn render(&mut self) {
        let mut lines = Vec::new();
        lines.push(String::new());
        lines.push(self.theme.format_header("Search Stacks"));
        lines.push(String::new());
        lines.push(format!(
            "  {} {}{}",
            self.theme.key.apply_to("Search:"),
            self.query,
            self.theme.dim.apply_to("▌"),
        ));
        lines.push(String::new());

        match &self.state {
            SearchState::Idle => {
                lines.push(format!(
                    "  {}",
                    self.theme.dim.apply_to("Type to search. Popular searches:")
                ));
                lines.push(String::new());
                for row in POPULAR_SEARCHES.chunks(6) {
                    lines.push(format!("    {}", self.theme.info.apply_to(row.join("  "))));
                }
            }
            SearchState::Waiting | SearchState::Fetching => {
                lines.push(format!("  {}", self.theme.dim.apply_to("Searching...")));
            }
            SearchState::Loaded => self.result_lines(&mut lines),
            SearchState::Failed(message) => {
                lines.push(format!("  {}", self.theme.format_error(message)));
            }
        }

        lines.push(String::new());
        lines.push(format!("  {}", self.theme.hint.apply_to("Esc to exit")));

        self.term.clear_last_lines(self.rendered_lines).ok();
        for line in &lines {
            self.term.write_line(line).ok();
        }
        self.rendered_lines = lines.len();
    }

    fn result_lines(&self, lines: &mut Vec<String>) {
        if self.results.is_empty() {
            lines.push(format!(
                "  {}",
                self.theme
                    .dim
                    .apply_to(format!("No stacks found matching \"{}\"", self.query))
            ));
            return;
        }

        lines.push(format!(
            "  {}",
            self.theme.success.apply_to(format!(
                "Found {} stack{} matching \"{}\"",
                self.results.len(),
                if self.results.len() == 1 { "" } else { "s" },
                self.query
            ))
        ));
        for stack in self.results.iter().take(RESULT_LIMIT) {
            lines.push(String::new());
            lines.extend(card_lines(stack, None, &self.theme));
        }
        if self.results.len() > RESULT_LIMIT {
            lines.push(String::new());
            lines.push(format!(
                "  {}",
                self.theme
                    .dim
                    .apply_to(format!("...and {} more", self.results.len() - RESULT_LIMIT))
            ));
        }
    }
}
