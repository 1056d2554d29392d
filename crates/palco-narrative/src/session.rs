//! The narrative session state machine.

use std::sync::Arc;

use palco_core::{Choice, EngineError, GameState, SceneCatalog, SceneId, SceneMedia};
use palco_script::{ActiveActors, ParsedLine, apply_directives, filter_visible, tokenize};

use crate::router::route_scene;

/// Routing chains are followed scene to scene; past this many hops the
/// authored content is assumed to cycle.
const MAX_ROUTE_HOPS: usize = 16;

/// Where the dialogue cursor stands within the current scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing visible line `i`; advancing moves the cursor.
    AtLine(usize),
    /// The last line has been passed and choices are on screen; the cursor
    /// stays frozen on the last line.
    AtChoice,
    /// The last line of a scene with no choices has been passed.
    Terminal,
}

/// Which affordance the presentation layer should surface at a choice
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoicePrompt {
    /// Exactly one choice: a plain "continue" affordance, no audience vote.
    Continue,
    /// Two or more choices: open an audience vote.
    Vote,
}

/// A single presenter-driven walk through the authored story.
///
/// Single-writer: methods never block and perform no I/O, so a host with
/// concurrent callers serializes access externally (the API layer holds the
/// session behind a mutex).
pub struct NarrativeSession {
    catalog: Arc<dyn SceneCatalog>,
    scene_id: SceneId,
    state: GameState,
    media: SceneMedia,
    choices: Vec<Choice>,
    visible: Vec<ParsedLine>,
    actors: ActiveActors,
    phase: Phase,
}

impl NarrativeSession {
    /// Starts a session at the given scene.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SceneNotFound`] when the start scene (or a
    /// scene a routing chain leads to) is not in the catalog, and
    /// [`EngineError::Content`] when routing exceeds the hop cap.
    pub fn start(catalog: Arc<dyn SceneCatalog>, start_scene: &str) -> Result<Self, EngineError> {
        let mut session = Self {
            catalog,
            scene_id: SceneId::new(),
            state: GameState::new(),
            media: SceneMedia::default(),
            choices: Vec::new(),
            visible: Vec::new(),
            actors: ActiveActors::new(),
            phase: Phase::Terminal,
        };
        session.enter_scene(start_scene.to_owned())?;
        Ok(session)
    }

    /// Moves the dialogue cursor forward one step.
    ///
    /// At the last visible line the session transitions to `AtChoice` (the
    /// scene has choices) or `Terminal` (it has none) instead of moving.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTransition`] from `AtChoice` or
    /// `Terminal`; the session is left unchanged.
    pub fn advance(&mut self) -> Result<(), EngineError> {
        match self.phase {
            Phase::AtLine(index) if index + 1 < self.visible.len() => {
                let next = index + 1;
                self.actors = apply_directives(&self.actors, &self.visible[next].directives);
                self.phase = Phase::AtLine(next);
                Ok(())
            }
            Phase::AtLine(_) if self.choices.is_empty() => {
                tracing::info!(scene = %self.scene_id, "story reached a terminal scene");
                self.phase = Phase::Terminal;
                Ok(())
            }
            Phase::AtLine(_) => {
                self.phase = Phase::AtChoice;
                Ok(())
            }
            Phase::AtChoice => Err(EngineError::InvalidTransition(
                "advance while choices are on screen".to_owned(),
            )),
            Phase::Terminal => Err(EngineError::InvalidTransition(
                "advance past the end of the story".to_owned(),
            )),
        }
    }

    /// Takes the choice at `index`: applies its state mutation and enters
    /// its target scene (clearing the stage and resetting the cursor).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTransition`] when not at a choice
    /// point, when the index names no choice, or when the chosen option has
    /// no target scene — the session is left unchanged in all three cases.
    /// Returns [`EngineError::SceneNotFound`] when the target is missing
    /// from the catalog; the session then parks in `Terminal`.
    pub fn choose(&mut self, index: usize) -> Result<(), EngineError> {
        if self.phase != Phase::AtChoice {
            return Err(EngineError::InvalidTransition(format!(
                "choose called in {:?}",
                self.phase
            )));
        }
        let Some(choice) = self.choices.get(index).cloned() else {
            return Err(EngineError::InvalidTransition(format!(
                "choice index {index} out of range for {} choices",
                self.choices.len()
            )));
        };
        let Some(target) = choice.target else {
            return Err(EngineError::InvalidTransition(format!(
                "choice \"{}\" has no target scene",
                choice.label
            )));
        };

        if let Some(change) = &choice.state_change {
            self.state.apply(change);
        }
        tracing::info!(scene = %self.scene_id, choice = %choice.label, target = %target, "choice taken");

        let entered = self.enter_scene(target);
        if entered.is_err() {
            // Error-terminal: the story cannot continue past a dangling
            // target, but the session stays queryable.
            self.phase = Phase::Terminal;
        }
        entered
    }

    /// Which affordance applies at the current choice point, or `None`
    /// outside one.
    #[must_use]
    pub fn choice_prompt(&self) -> Option<ChoicePrompt> {
        if self.phase != Phase::AtChoice {
            return None;
        }
        if self.choices.len() == 1 {
            Some(ChoicePrompt::Continue)
        } else {
            Some(ChoicePrompt::Vote)
        }
    }

    /// The id of the current scene.
    #[must_use]
    pub fn scene_id(&self) -> &str {
        &self.scene_id
    }

    /// The current cursor phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The line under the cursor. At a choice point (or past the end) the
    /// cursor stays frozen on the last visible line.
    #[must_use]
    pub fn current_line(&self) -> Option<&ParsedLine> {
        match self.phase {
            Phase::AtLine(index) => self.visible.get(index),
            Phase::AtChoice | Phase::Terminal => self.visible.last(),
        }
    }

    /// The actors currently on stage.
    #[must_use]
    pub fn actors(&self) -> &ActiveActors {
        &self.actors
    }

    /// The current scene's choices.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The current scene's media passthrough.
    #[must_use]
    pub fn media(&self) -> &SceneMedia {
        &self.media
    }

    /// The current state snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the story has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Makes `scene_id` current: follows routing rules, retokenizes and
    /// refilters the script under the current state, clears the stage, and
    /// resets the cursor.
    fn enter_scene(&mut self, mut scene_id: SceneId) -> Result<(), EngineError> {
        let mut hops = 0;
        let scene = loop {
            let scene = self.catalog.lookup(&scene_id)?.clone();
            let Some(rule) = &scene.route else {
                break scene;
            };
            if hops == MAX_ROUTE_HOPS {
                return Err(EngineError::Content(format!(
                    "routing from scene {scene_id} exceeded {MAX_ROUTE_HOPS} hops"
                )));
            }
            let next = route_scene(rule, &self.state).clone();
            tracing::info!(from = %scene_id, to = %next, "scene routed");
            scene_id = next;
            hops += 1;
        };

        self.visible = filter_visible(&tokenize(&scene.text), &self.state);
        self.scene_id = scene_id;
        self.media = scene.media;
        self.choices = scene.choices;
        self.actors = ActiveActors::new();
        self.phase = match self.visible.first() {
            Some(first) => {
                self.actors = apply_directives(&self.actors, &first.directives);
                Phase::AtLine(0)
            }
            // Everything filtered out: fall through to the choice point or
            // the end of the story.
            None if self.choices.is_empty() => Phase::Terminal,
            None => Phase::AtChoice,
        };
        Ok(())
    }
}

impl std::fmt::Debug for NarrativeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrativeSession")
            .field("scene_id", &self.scene_id)
            .field("phase", &self.phase)
            .field("visible_lines", &self.visible.len())
            .field("choices", &self.choices.len())
            .finish_non_exhaustive()
    }
}
