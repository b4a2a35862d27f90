use super::Model;
use crate::app::managers::StateManager;
use crate::components::common::{ComponentId, Msg};
use crate::components::countdown_display::CountdownDisplay;
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::hero::Hero;
use crate::components::palette::Palette;
use crate::components::state::ComponentStateMount;
use crate::config::AppConfig;
use crate::config::event::EventConfig;
use crate::error::{AppError, AppResult, ErrorReporter};
use crate::theme::{ThemeLoader, ThemeProvider};
use engine::{CountdownTicker, TargetInstant};
use std::sync::mpsc;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg, Sub, SubClause, SubEventClause};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    fn init_app(config: &AppConfig) -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(
                    config.crossterm_input_listener_interval(),
                    config.crossterm_input_listener_retries(),
                )
                .poll_timeout(config.poll_timeout())
                .tick_interval(config.tick_interval()),
        );

        app.mount(
            ComponentId::GlobalKeyWatcher,
            Box::new(GlobalKeyWatcher::new(config.keys().clone(), false)),
            vec![Sub::new(SubEventClause::Any, SubClause::Always)],
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(app)
    }

    /// Mount the invitation itself: hero, live countdown and palette.
    ///
    /// Takes ownership of the ticker; it is stopped by [`Model::shutdown`].
    pub fn attach_countdown(
        &mut self,
        ticker: CountdownTicker,
        event: &EventConfig,
        target: &TargetInstant,
    ) -> AppResult<()> {
        self.app.mount_with_state(
            ComponentId::Hero,
            Hero::new(self.theme_provider.use_theme()?, event, target),
            Vec::default(),
        )?;

        self.app.mount_with_state(
            ComponentId::Countdown,
            CountdownDisplay::new(
                self.theme_provider.use_theme()?,
                event.labels(),
                ticker.subscribe(),
            ),
            vec![Sub::new(SubEventClause::Tick, SubClause::Always)],
        )?;

        self.app.mount_with_state(
            ComponentId::Palette,
            Palette::new(self.theme_provider.use_theme()?),
            Vec::default(),
        )?;

        self.app
            .active(&ComponentId::Countdown)
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.ticker = Some(ticker);
        self.state_manager.set_redraw(true);
        Ok(())
    }
}

impl Model<CrosstermTerminalAdapter> {
    /// Model with only the global key watcher mounted. Call
    /// [`Model::attach_countdown`] to show the invitation.
    pub fn new(
        config: &AppConfig,
        theme_provider: ThemeProvider,
        theme_loader: ThemeLoader,
    ) -> AppResult<Self> {
        let (tx_to_main, rx_to_main) = mpsc::channel();

        // Create error reporter for enhanced error handling
        let error_reporter = ErrorReporter::new(tx_to_main.clone());

        Ok(Self {
            app: Self::init_app(config)?,
            terminal: TerminalBridge::init_crossterm()
                .map_err(|e| AppError::Component(e.to_string()))?,
            state_manager: StateManager::new(),
            tx_to_main,
            rx_to_main,
            error_reporter,
            theme_provider,
            theme_loader,
            keys: config.keys().clone(),
            ticker: None,
        })
    }
}
