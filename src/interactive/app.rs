//! TUI application state and event loop

use super::board::Board;
use crate::core::Mode;
use crate::game::{EndNotice, Game, MeaningReply};
use crate::input::InputRouter;
use super::rendering::{key_cells, screen_layout};
use crate::input::Command;
use crate::session::{Event, Outcome, SessionError, Submission};
use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event as TermEvent, EventStream, KeyCode,
        KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, error};

/// Delay between two revealed tiles
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(200);

/// Pause after the last tile before the end notice shows up
pub const NOTICE_DELAY: Duration = Duration::from_secs(1);

/// Shown under every end notice
pub const NEW_WORD_HINT: &str = "Tekrar oynamak için Ctrl+N ile yeni kelime isteyin.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What the event loop has to do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Fetch a word list and start a session in this mode
    SelectMode(Mode),
    /// New word in the current mode
    Restart,
    /// The session just ended; look up the meaning
    FetchMeaning,
}

/// Application state
pub struct App {
    pub game: Game,
    pub router: InputRouter,
    pub board: Board,
    pub messages: Vec<Message>,
    pub loading: bool,
    pub should_quit: bool,
    /// Notice waiting for the reveal to finish
    pending_notice: Option<EndNotice>,
    last_reveal: Instant,
    pub notice: Option<EndNotice>,
}

impl App {
    #[must_use]
    pub fn new(game: Game, router: InputRouter) -> Self {
        let board = Board::new(game.mode());
        Self {
            game,
            router,
            board,
            messages: vec![Message {
                text: "Hoş geldiniz! Kelimeyi 6 denemede bulun.".to_string(),
                style: MessageStyle::Info,
            }],
            loading: false,
            should_quit: false,
            pending_notice: None,
            last_reveal: Instant::now(),
            notice: None,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Char('c') if ctrl => return Some(Action::Quit),
            KeyCode::Char('n') if ctrl => return Some(Action::Restart),
            KeyCode::Tab => return Some(Action::SelectMode(self.game.mode().next())),
            _ => {}
        }

        let command = self.router.route_key(key)?;
        self.run_command(command)
    }

    /// Handle a left click at `column`, `row` on a screen of size `screen`
    ///
    /// Only clicks on an on-screen key do anything.
    pub fn handle_click(&mut self, screen: Rect, column: u16, row: u16) -> Option<Action> {
        let keyboard = screen_layout(screen)[2];
        let position = Position::new(column, row);
        let (_, name) = key_cells(self.router.alphabet(), keyboard)
            .into_iter()
            .find(|(cell, _)| cell.contains(position))?;
        let command = self.router.route_virtual(&name)?;
        self.run_command(command)
    }

    fn run_command(&mut self, command: Command) -> Option<Action> {
        let submission = self.game.apply(command);
        self.sync();
        matches!(
            submission,
            Submission::Scored {
                outcome: Some(_),
                ..
            }
        )
        .then_some(Action::FetchMeaning)
    }

    /// Pull queued events from the game into the board and message log
    pub fn sync(&mut self) {
        for event in self.game.drain_events() {
            self.board.apply(&event);
            match event {
                Event::SessionStarted { mode, .. } => {
                    self.notice = None;
                    self.pending_notice = None;
                    self.add_message(&format!("Yeni kelime ({mode})"), MessageStyle::Info);
                }
                Event::Rejected(rejection) => {
                    self.add_message(&rejection.to_string(), MessageStyle::Error);
                }
                _ => {}
            }
        }
    }

    /// A meaning lookup finished
    pub fn receive_meaning(&mut self, reply: MeaningReply) {
        if let Some(notice) = self.game.conclude(reply) {
            self.pending_notice = Some(notice);
        }
        self.sync();
    }

    /// Advance the reveal animation and release the end notice when due
    pub fn tick(&mut self) {
        if self.board.tick() {
            self.last_reveal = Instant::now();
            return;
        }
        if self.last_reveal.elapsed() >= NOTICE_DELAY
            && let Some(notice) = self.pending_notice.take()
        {
            let style = match notice.outcome {
                Outcome::Won => MessageStyle::Success,
                Outcome::Exhausted => MessageStyle::Error,
            };
            self.add_message(notice.headline(), style);
            self.notice = Some(notice);
        }
    }

    fn setup_failed(&mut self, err: &SessionError) {
        self.board = Board::new(self.game.mode());
        self.notice = None;
        self.pending_notice = None;
        self.add_message(&err.to_string(), MessageStyle::Error);
        self.add_message(
            "Tab ile mod seçin veya Ctrl+N ile tekrar deneyin.",
            MessageStyle::Info,
        );
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = %err, "tui stopped");
    }
    res
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    let (meaning_tx, mut meaning_rx) = mpsc::unbounded_channel::<MeaningReply>();
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(REVEAL_INTERVAL);

    let first = app.game.mode();
    setup(terminal, &mut app, &mut events, Action::SelectMode(first)).await?;

    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => match handle_event(terminal, &mut app, &event)? {
                    Some(Action::Quit) => app.should_quit = true,
                    Some(action @ (Action::SelectMode(_) | Action::Restart)) => {
                        setup(terminal, &mut app, &mut events, action).await?;
                    }
                    Some(Action::FetchMeaning) => {
                        if let Some(request) = app.game.meaning_request() {
                            debug!(word = request.word(), "fetching meaning");
                            let tx = meaning_tx.clone();
                            tokio::spawn(async move {
                                let _ = tx.send(request.resolve().await);
                            });
                        }
                    }
                    None => {}
                },
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(reply) = meaning_rx.recv() => app.receive_meaning(reply),
            _ = ticker.tick() => app.tick(),
        }
    }

    Ok(())
}

fn handle_event<B: ratatui::backend::Backend>(
    terminal: &Terminal<B>,
    app: &mut App,
    event: &TermEvent,
) -> Result<Option<Action>> {
    Ok(match event {
        TermEvent::Key(key) => app.handle_key(key),
        TermEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            let size = terminal.size()?;
            let screen = Rect::new(0, 0, size.width, size.height);
            app.handle_click(screen, mouse.column, mouse.row)
        }
        _ => None,
    })
}

/// Start a session, showing the loading state while the word list is fetched
///
/// Esc or Ctrl+C still quit during the fetch.
async fn setup<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut EventStream,
    action: Action,
) -> Result<()> {
    app.loading = true;
    app.notice = None;
    terminal.draw(|f| super::rendering::ui(f, app))?;

    let result = tokio::select! {
        result = async {
            match action {
                Action::SelectMode(mode) => app.game.select_mode(mode).await,
                _ => app.game.restart().await,
            }
        } => Some(result),
        () = wait_for_quit(events) => None,
    };
    app.loading = false;

    match result {
        Some(Ok(())) => app.sync(),
        Some(Err(err)) => app.setup_failed(&err),
        None => app.should_quit = true,
    }
    Ok(())
}

async fn wait_for_quit(events: &mut EventStream) {
    while let Some(event) = events.next().await {
        if let Ok(TermEvent::Key(key)) = event
            && key.kind == KeyEventKind::Press
            && (key.code == KeyCode::Esc
                || (key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)))
        {
            return;
        }
    }
}
