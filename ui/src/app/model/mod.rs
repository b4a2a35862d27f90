use crate::app::managers::StateManager;
use crate::components::common::{ComponentId, Msg};
use crate::config::keys::KeyBindingsConfig;
use crate::error::ErrorReporter;
use crate::theme::{ThemeLoader, ThemeProvider};
use engine::CountdownTicker;
use std::sync::mpsc::{Receiver, Sender};
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{TerminalAdapter, TerminalBridge};
use tuirealm::{Application, Update};

// Submodules
mod initialization;
mod popup_management;
mod state_management;
mod update_handler;

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    pub state_manager: StateManager,

    pub tx_to_main: Sender<Msg>,
    pub rx_to_main: Receiver<Msg>,

    pub error_reporter: ErrorReporter,

    /// Every component acquires its theme handle from here
    pub theme_provider: ThemeProvider,
    pub theme_loader: ThemeLoader,
    pub keys: KeyBindingsConfig,

    ticker: Option<CountdownTicker>,
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_outside_msg(&mut self) {
        // Messages queued by the error reporter
        while let Ok(msg) = self.rx_to_main.try_recv() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = self.update(msg);
            }
        }
    }

    pub fn set_quit(&mut self, quit: bool) {
        self.state_manager.quit = quit;
    }

    /// Hand the ticker over for an awaited shutdown.
    pub fn take_ticker(&mut self) -> Option<CountdownTicker> {
        self.ticker.take()
    }

    /// Stop the countdown and mark the application for exit
    pub fn shutdown(&mut self) {
        log::info!("Shutting down application");

        if let Some(ticker) = &self.ticker {
            ticker.stop();
        }

        self.state_manager.shutdown();
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.handle_update(msg)
    }
}
