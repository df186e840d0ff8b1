//! Session state machine
//!
//! Idle → Playing → GameOver → Playing. The session owns the simulation
//! context and talks to the outside world only through a key-value store,
//! a HUD and a frame scheduler.

pub use crate::platform::LoopHandle;

use crate::format_score;
use crate::highscores::HighScore;
use crate::platform::{FrameScheduler, KeyValueStore};
use crate::renderer::{Surface, render_scene};
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, TickOutcome, tick};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen showing, loop not running
    Idle,
    /// Loop armed, physics and scoring active
    Playing,
    /// Run ended, loop halted
    GameOver,
}

/// Overlay panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Start,
    GameOver,
}

/// Text readouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudField {
    /// Running score, 5-digit padded
    Score,
    /// Best score, 5-digit padded
    HighScore,
    /// Score of the finished run, plain integer
    FinalScore,
}

/// Presentation hooks
pub trait Hud {
    fn set_panel_visible(&mut self, panel: Panel, visible: bool);
    fn set_text(&mut self, field: HudField, text: &str);
}

/// HUD that remembers what it was told; used headless and in tests
#[derive(Debug, Clone, Default)]
pub struct RecordingHud {
    pub start_visible: bool,
    pub game_over_visible: bool,
    pub score: String,
    pub high_score: String,
    pub final_score: String,
}

impl Hud for RecordingHud {
    fn set_panel_visible(&mut self, panel: Panel, visible: bool) {
        match panel {
            Panel::Start => self.start_visible = visible,
            Panel::GameOver => self.game_over_visible = visible,
        }
    }

    fn set_text(&mut self, field: HudField, text: &str) {
        let slot = match field {
            HudField::Score => &mut self.score,
            HudField::HighScore => &mut self.high_score,
            HudField::FinalScore => &mut self.final_score,
        };
        *slot = text.to_string();
    }
}

pub struct Session<S: KeyValueStore, H: Hud, F: FrameScheduler> {
    settings: Settings,
    state: GameState,
    phase: GamePhase,
    /// Latest input; sampled once per frame
    input: TickInput,
    high_score: HighScore,
    store: S,
    hud: H,
    scheduler: F,
    /// Pending frame request while the loop is armed
    frame: Option<LoopHandle>,
}

impl<S: KeyValueStore, H: Hud, F: FrameScheduler> Session<S, H, F> {
    /// Load the high score and show the start screen
    pub fn new(settings: Settings, seed: u64, store: S, mut hud: H, scheduler: F) -> Self {
        let high_score = HighScore::load(&store);
        hud.set_text(HudField::HighScore, &format_score(high_score.best as f64));
        hud.set_panel_visible(Panel::Start, true);
        hud.set_panel_visible(Panel::GameOver, false);

        Self {
            state: GameState::new(seed, settings.tuning.clone()),
            settings,
            phase: GamePhase::Idle,
            input: TickInput::default(),
            high_score,
            store,
            hud,
            scheduler,
            frame: None,
        }
    }

    /// Begin a fresh run. From Playing this restarts the run.
    pub fn start(&mut self) {
        self.cancel_pending_frame();

        self.hud.set_panel_visible(Panel::Start, false);
        self.hud.set_panel_visible(Panel::GameOver, false);

        self.state.reset_run();
        self.hud.set_text(HudField::Score, &format_score(self.state.score));
        self.phase = GamePhase::Playing;
        self.frame = Some(self.scheduler.request_frame());

        log::info!("Run started (best {})", self.high_score.best);
    }

    /// Finish the run: halt the loop, record the score, show the result.
    /// Ignored unless Playing.
    pub fn end(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.cancel_pending_frame();

        let final_score = self.state.floored_score();
        if self.high_score.submit(final_score) {
            self.high_score.save(&mut self.store);
            self.hud
                .set_text(HudField::HighScore, &format_score(final_score as f64));
            log::info!("New high score: {}", final_score);
        }

        self.hud.set_text(HudField::FinalScore, &final_score.to_string());
        self.hud.set_panel_visible(Panel::GameOver, true);

        log::info!(
            "Game over: score {} after {} frames at speed {:.3}",
            final_score,
            self.state.time_ticks,
            self.state.speed
        );
    }

    /// The per-frame step, invoked by the scheduler. Updates, draws, then
    /// re-arms the loop or ends the run.
    pub fn step(&mut self, surface: &mut impl Surface) {
        // The request that invoked us has fired
        self.frame = None;
        if self.phase != GamePhase::Playing {
            return;
        }

        let outcome = tick(&mut self.state, &self.input);
        render_scene(surface, &self.state, &self.settings);

        match outcome {
            TickOutcome::Running => {
                self.hud
                    .set_text(HudField::Score, &format_score(self.state.score));
                self.frame = Some(self.scheduler.request_frame());
            }
            TickOutcome::Collision { obstacle } => {
                log::debug!("Collision with obstacle {}", obstacle);
                self.end();
            }
        }
    }

    /// Jump input. Only acts while Playing.
    pub fn jump(&mut self) {
        if self.phase == GamePhase::Playing {
            self.state.player.jump(&self.state.tuning);
        }
    }

    /// Hover easter egg held or released
    pub fn set_fly_mode(&mut self, on: bool) {
        self.input.fly = on && self.settings.fly_mode;
    }

    /// Draw the current state without advancing it (start screen backdrop)
    pub fn render(&self, surface: &mut impl Surface) {
        render_scene(surface, &self.state, &self.settings);
    }

    fn cancel_pending_frame(&mut self) {
        if let Some(handle) = self.frame.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// True while a frame request is outstanding
    pub fn is_armed(&self) -> bool {
        self.frame.is_some()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}
