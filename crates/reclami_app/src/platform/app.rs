use std::env;
use std::io::{self, Stdout};
use std::panic;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use crossterm::cursor::Show;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use reclami_core::{update, AppState, Msg};
use reclami_engine::SearchSettings;
use reclami_logging::{reclami_debug, reclami_error, reclami_info};

use super::effects::EffectRunner;
use super::events::{map_event, Action};
use super::logging;
use super::ui;

/// Overrides the search service base URL.
const API_BASE_ENV_VAR: &str = "RECLAMI_API_BASE";

const POLL_INTERVAL: Duration = Duration::from_millis(50);

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(Path::new(logging::LOG_FILE));

    let settings = match env::var(API_BASE_ENV_VAR) {
        Ok(base) if !base.trim().is_empty() => SearchSettings::with_base_url(base.trim()),
        _ => SearchSettings::default(),
    };
    reclami_info!(
        "Starting reclami base_url={} path={}",
        settings.base_url,
        settings.search_path
    );

    let effects = EffectRunner::new(settings).context("starting search engine")?;

    install_panic_hook();
    let mut terminal = setup_terminal().context("initializing terminal")?;
    let result = App::new(effects).run(&mut terminal);
    restore_terminal(&mut terminal).context("restoring terminal")?;
    if let Err(err) = &result {
        reclami_error!("Event loop failed: {:#}", err);
    }

    reclami_info!("Exiting reclami");
    result
}

/// Puts the terminal back before the default hook prints the panic message.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        reclami_error!("Panic: {}", info);
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            Show
        );
        previous(info);
    }));
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    ) {
        let _ = disable_raw_mode();
        return Err(err);
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()
}

struct App {
    state: AppState,
    effects: EffectRunner,
    needs_render: bool,
    quit: bool,
}

impl App {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            effects,
            needs_render: true,
            quit: false,
        }
    }

    fn run(&mut self, terminal: &mut Tui) -> anyhow::Result<()> {
        while !self.quit {
            if self.needs_render {
                let view = self.state.view();
                terminal.draw(|frame| ui::render::render(frame, &view))?;
                self.needs_render = false;
            }

            if event::poll(POLL_INTERVAL)? {
                let event = event::read()?;
                let size = terminal.size()?;
                self.handle_event(&event, Rect::new(0, 0, size.width, size.height));
            }

            for msg in self.effects.poll_messages() {
                self.dispatch_msg(msg);
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &Event, area: Rect) {
        if let Event::Resize(..) = event {
            self.needs_render = true;
            return;
        }
        let layout = ui::layout::screen_layout(area);
        match map_event(event, &self.state, &layout) {
            Some(Action::Dispatch(msg)) => self.dispatch_msg(msg),
            Some(Action::Quit) => {
                reclami_debug!("Quit requested");
                self.quit = true;
            }
            None => {}
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_render = true;
        }
        self.state = state;
        self.effects.enqueue(effects);
    }
}
