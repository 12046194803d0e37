use crate::core::ArmState;

/// Component context.
///
/// The component context is provided to each component on each tick. The
/// context owns the arm motion state for the duration of the frame; the
/// rendering collaborator reads the state between ticks.
pub struct ComponentContext {
    /// Arm motion state.
    pub state: ArmState,
    /// Last tick.
    last_tick: std::time::Instant,
    /// Iteration count.
    iteration: u64,
}

impl ComponentContext {
    /// Construct a new component context around an initial state.
    pub fn new(state: ArmState) -> Self {
        Self {
            state,
            last_tick: std::time::Instant::now(),
            iteration: 0,
        }
    }

    /// Retrieve the tick delta.
    pub fn delta(&self) -> std::time::Duration {
        self.last_tick.elapsed()
    }

    /// Retrieve the iteration count.
    #[inline]
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Called after all components are ticked.
    pub fn post_tick(&mut self) {
        self.last_tick = std::time::Instant::now();
        self.iteration += 1;
    }
}

impl Default for ComponentContext {
    fn default() -> Self {
        Self::new(ArmState::default())
    }
}

pub trait Component<Cnf: Clone> {
    /// Construct a new component.
    ///
    /// This method will be called once on startup.
    /// The component should use this method to initialize itself.
    fn new(config: Cnf) -> Self
    where
        Self: Sized;

    /// Tick the component.
    ///
    /// This method will be called on each tick of the runtime.
    /// How often the runtime ticks is determined by the runtime configuration.
    fn tick(&mut self, ctx: &mut ComponentContext);
}
