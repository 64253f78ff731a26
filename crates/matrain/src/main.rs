mod logging;
mod terminal;

use matrain_config::{Config, TerminalConfig};
use matrain_rain::RainEngine;
use ratatui::DefaultTerminal;

use crate::terminal::TerminalHost;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();

    // Bad config is reported before the terminal switches screens.
    let config = Config::load()?;
    log::debug!("config: {config:?}");
    let app = App::new(&config)?;

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the engine and host settings.
#[derive(Debug)]
pub struct App {
    engine: RainEngine,
    terminal_config: TerminalConfig,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        Ok(Self {
            engine: RainEngine::new(&config.engine)?,
            terminal_config: config.terminal,
        })
    }

    /// Run the animation until the user quits.
    pub fn run(mut self, terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let mut host = TerminalHost::new(terminal, self.terminal_config)?;
        log::info!(
            "starting with {}x{} pixel cells",
            self.terminal_config.cell_width,
            self.terminal_config.cell_height
        );
        let result = matrain_rain::run(&mut self.engine, &mut host);
        match &result {
            Ok(()) => log::info!("exited after {} ticks", self.engine.ticks()),
            Err(err) => log::error!("animation failed: {err}"),
        }
        result
    }
}
