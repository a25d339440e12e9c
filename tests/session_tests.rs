//! Session driver behavior: input routing, role swapping and the
//! degraded no-op frames after a failed swap.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use arcade::core::{Game, Graphics, Grid, Loader, Registry, Session, SessionStatus};
use arcade::types::{EntityKind, Input};

type InputScript = Arc<Mutex<VecDeque<Input>>>;
type DrawLog = Arc<Mutex<Vec<Grid>>>;

/// Graphics that replays a shared input script and records every
/// snapshot it is asked to draw.
struct ScriptedGraphics {
    tag: &'static str,
    script: InputScript,
    draws: DrawLog,
}

impl Graphics for ScriptedGraphics {
    fn poll_input(&mut self) -> Input {
        self.script.lock().unwrap().pop_front().unwrap_or(Input::None)
    }
    fn draw(&mut self, snapshot: &Grid) {
        self.draws.lock().unwrap().push(snapshot.clone());
    }
    fn name(&self) -> &str {
        self.tag
    }
}

/// Game that counts updates and exposes the count through its grid.
struct CountingGame {
    tag: &'static str,
    inputs: Vec<Input>,
    grid: Grid,
}

impl CountingGame {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            inputs: Vec::new(),
            grid: Grid::new(1, 3, 3),
        }
    }
}

impl Game for CountingGame {
    fn init_map(&mut self) {
        self.grid.reset();
    }
    fn reset(&mut self) {
        self.inputs.clear();
        self.grid.set_score(0);
    }
    fn update(&mut self, input: Input) {
        self.inputs.push(input);
        self.grid.set_score(self.inputs.len() as u32);
    }
    fn map(&self) -> Grid {
        self.grid.clone()
    }
    fn is_game_over(&self) -> bool {
        false
    }
    fn score(&self) -> u32 {
        self.grid.score()
    }
    fn name(&self) -> &str {
        self.tag
    }
}

struct Fixture {
    script: InputScript,
    draws: DrawLog,
    registry: Registry,
}

/// Two game units and two graphics units, all scripted from one queue.
fn fixture() -> Fixture {
    let script: InputScript = Arc::default();
    let draws: DrawLog = Arc::default();

    let mut registry = Registry::new();
    for tag in ["game_a", "game_b"] {
        registry.register_game(tag, Box::new(move || Some(Box::new(CountingGame::new(tag)))));
    }
    for tag in ["gfx_a", "gfx_b"] {
        let script = Arc::clone(&script);
        let draws = Arc::clone(&draws);
        registry.register_graphics(
            tag,
            Box::new(move || {
                Some(Box::new(ScriptedGraphics {
                    tag,
                    script: Arc::clone(&script),
                    draws: Arc::clone(&draws),
                }))
            }),
        );
    }

    Fixture {
        script,
        draws,
        registry,
    }
}

fn push_inputs(script: &InputScript, inputs: &[Input]) {
    script.lock().unwrap().extend(inputs.iter().copied());
}

#[test]
fn step_polls_updates_and_draws() {
    let fx = fixture();
    push_inputs(&fx.script, &[Input::Left]);

    let mut session = Session::start(fx.registry, "game_a", "gfx_a").unwrap();
    assert_eq!(session.step(), SessionStatus::Running);
    assert_eq!(session.step(), SessionStatus::Running);

    // Every step draws one snapshot; the game saw Left then None.
    let draws = fx.draws.lock().unwrap();
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].score(), 1);
    assert_eq!(draws[1].score(), 2);
}

#[test]
fn exit_and_escape_terminate() {
    for quit in [Input::Exit, Input::Escape] {
        let fx = fixture();
        push_inputs(&fx.script, &[quit]);
        let mut session = Session::start(fx.registry, "game_a", "gfx_a").unwrap();
        assert_eq!(session.step(), SessionStatus::Terminated);
        // Nothing is drawn on the terminating step.
        assert!(fx.draws.lock().unwrap().is_empty());
    }
}

#[test]
fn switch_game_swaps_only_the_game_role() {
    let fx = fixture();
    push_inputs(&fx.script, &[Input::SwitchGame]);

    let mut session = Session::start(fx.registry, "game_a", "gfx_a").unwrap();
    session.step();

    assert_eq!(session.loader().game_id(), Some("game_b"));
    assert_eq!(session.loader().graphics_id(), Some("gfx_a"));
}

#[test]
fn switch_graphics_swaps_only_the_graphics_role() {
    let fx = fixture();
    push_inputs(&fx.script, &[Input::SwitchGraphics]);

    let mut session = Session::start(fx.registry, "game_a", "gfx_a").unwrap();
    session.step();

    assert_eq!(session.loader().game_id(), Some("game_a"));
    assert_eq!(session.loader().graphics_id(), Some("gfx_b"));
}

#[test]
fn swap_input_is_not_forwarded_to_the_game() {
    let fx = fixture();
    push_inputs(&fx.script, &[Input::SwitchGraphics, Input::Right]);

    let mut session = Session::start(fx.registry, "game_a", "gfx_a").unwrap();
    session.step();
    session.step();

    // Only Right reached the game; the swap was consumed by the driver.
    let draws = fx.draws.lock().unwrap();
    assert_eq!(draws.last().unwrap().score(), 1);
}

#[test]
fn failed_swap_leaves_the_role_unloaded_and_steps_become_no_ops() {
    let fx = fixture();
    let mut registry = fx.registry;
    // Registered last, so it is the next unit after game_b in rotation
    // order, and its factory always fails.
    registry.register_game("game_broken", Box::new(|| None));

    push_inputs(&fx.script, &[Input::SwitchGame]);

    let mut session = Session::start(registry, "game_b", "gfx_a").unwrap();

    // game_b -> game_broken: the factory fails, the role is unloaded.
    assert_eq!(session.step(), SessionStatus::Running);
    assert!(!session.loader().has_game());

    // With no game loaded there is nothing to draw, but stepping stays
    // safe and the session keeps running.
    let drawn_before = fx.draws.lock().unwrap().len();
    assert_eq!(session.step(), SessionStatus::Running);
    assert!(!session.loader().has_game());
    assert_eq!(fx.draws.lock().unwrap().len(), drawn_before);
}

#[test]
fn session_start_fails_fast_on_unknown_units() {
    let fx = fixture();
    assert!(Session::start(fx.registry, "game_a", "nope").is_err());

    let fx = fixture();
    assert!(Session::start(fx.registry, "nope", "gfx_a").is_err());
}

#[test]
fn snapshots_are_independent_of_the_live_game() {
    let fx = fixture();
    let mut loader = Loader::new(fx.registry);
    loader.load_game("game_a").unwrap();

    let mut snapshot = loader.game().unwrap().map();
    snapshot.set_kind(0, 0, EntityKind::Wall);
    snapshot.set_score(999);

    let fresh = loader.game().unwrap().map();
    assert_eq!(fresh.kind(0, 0), Some(EntityKind::Empty));
    assert_eq!(fresh.score(), 0);
}

#[test]
fn session_can_wrap_a_prepared_loader() {
    let fx = fixture();
    let mut loader = Loader::new(fx.registry);
    loader.load_game("game_a").unwrap();
    loader.load_graphics("gfx_b").unwrap();

    let mut session = Session::from_loader(loader);
    assert_eq!(session.step(), SessionStatus::Running);
    assert_eq!(fx.draws.lock().unwrap().len(), 1);
}
