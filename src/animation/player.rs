use crate::{
    compile::frame::{FramePlan, compile_frame},
    foundation::core::Canvas,
    foundation::math::Rng64,
    scene::builder::build_scene,
    scene::model::{Scene, SceneParams, Variant},
};

/// Time advanced per frame.
///
/// A fixed step rather than measured wall-clock delta: the animation is meant
/// to read slow and meditative, and its speed follows the frame cadence the
/// host drives it at.
pub const TIME_STEP: f64 = 0.008;

/// Animation loop state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    /// No frames are produced.
    Idle,
    /// Every [`Player::advance`] call produces a frame plan.
    Running,
}

/// Owned animation handle: the scene, the time counter, and the play state.
///
/// The player holds everything the render loop mutates, so hosts need no
/// globals. The scene is rebuilt on [`Player::start`] and [`Player::resize`];
/// between frames only `time` changes.
#[derive(Clone, Debug)]
pub struct Player {
    canvas: Canvas,
    variant: Variant,
    params: SceneParams,
    seed: u64,
    scene: Scene,
    time: f64,
    state: PlayState,
}

impl Player {
    /// Create an idle player with a freshly generated scene.
    pub fn new(canvas: Canvas, variant: Variant, seed: u64) -> Self {
        Self::with_params(canvas, variant, SceneParams::default(), seed)
    }

    /// Create an idle player with explicit scene parameters.
    pub fn with_params(canvas: Canvas, variant: Variant, params: SceneParams, seed: u64) -> Self {
        let scene = build_scene(canvas, variant, &params, &mut Rng64::new(seed));
        Self {
            canvas,
            variant,
            params,
            seed,
            scene,
            time: 0.0,
            state: PlayState::Idle,
        }
    }

    /// Current play state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// True while the loop is running.
    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    /// The scene frames are currently compiled from.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current animation time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Transition to `Running`.
    ///
    /// Nothing persists across a stop/start cycle: the scene is rebuilt from
    /// scratch and the time counter resets.
    #[tracing::instrument(skip(self))]
    pub fn start(&mut self) {
        self.scene = build_scene(
            self.canvas,
            self.variant,
            &self.params,
            &mut Rng64::new(self.seed),
        );
        self.time = 0.0;
        self.state = PlayState::Running;
    }

    /// Transition to `Idle`. Frames already produced are unaffected; no
    /// further frames are produced until [`Player::start`].
    #[tracing::instrument(skip(self))]
    pub fn stop(&mut self) {
        self.state = PlayState::Idle;
    }

    /// Advance one frame and compile its plan.
    ///
    /// Returns `None` while idle. While running, increments the shared time
    /// counter by [`TIME_STEP`] and compiles the frame at the new time, so the
    /// first frame after a start renders at `TIME_STEP`, as the host refresh
    /// callback would.
    pub fn advance(&mut self) -> Option<FramePlan> {
        if self.state != PlayState::Running {
            return None;
        }
        self.time += TIME_STEP;
        Some(compile_frame(&self.scene, self.time))
    }

    /// Rebuild the scene for new canvas dimensions.
    ///
    /// Rebuilds are idempotent and cheap, so overlapping resize notifications
    /// are last-write-wins. Time and play state are preserved.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, canvas: Canvas) {
        self.canvas = canvas;
        self.scene = build_scene(
            self.canvas,
            self.variant,
            &self.params,
            &mut Rng64::new(self.seed),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/player.rs"]
mod tests;
