use crate::ScrollDirection;

/// Location/velocity tolerance below which the body counts as settled.
const SETTLE_EPSILON: f64 = 0.001;

/// The physics core: a discrete spring-damper integrator.
///
/// Each tick advances one fixed step:
///
/// ```text
/// diff     = target - location
/// velocity = (velocity + diff * spring) * friction
/// location = location + velocity
/// ```
///
/// `spring` and `friction` derive from the configured `speed` and `mass`
/// (`spring = (speed/100)/mass`, `friction = mass/(1 + mass)`). For every
/// validated configuration (`0 < speed <= 100`, `mass > 0`) the product
/// `friction * spring` stays below 1, which keeps the iteration inside the
/// unit circle: any finite start converges to the target in a bounded number
/// of ticks.
///
/// Setting a new target mid-flight never resets velocity, so momentum
/// carries across retargets. Once settled, the location is snapped exactly
/// onto the target and further ticks are no-ops until a new target arrives.
#[derive(Clone, Debug)]
pub struct ScrollBody {
    location: f64,
    target: f64,
    velocity: f64,
    speed: f64,
    mass: f64,
    default_speed: f64,
    default_mass: f64,
    direction: Option<ScrollDirection>,
}

impl ScrollBody {
    pub fn new(location: f64, speed: f64, mass: f64) -> Self {
        Self {
            location,
            target: location,
            velocity: 0.0,
            speed,
            mass,
            default_speed: speed,
            default_mass: mass,
            direction: None,
        }
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Direction hint recorded when the current target was set.
    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    /// Sets a new attraction target, recording the direction hint.
    ///
    /// Velocity is deliberately left untouched: momentum carries.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
        self.direction = ScrollDirection::from_delta(target - self.location);
    }

    pub(crate) fn set_direction(&mut self, direction: Option<ScrollDirection>) {
        self.direction = direction;
    }

    /// Seeds velocity directly (drag release handoff).
    pub fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity;
    }

    /// Shifts location and target jointly (loop wraparound), preserving the
    /// physics gap and momentum.
    pub(crate) fn shift(&mut self, delta: f64) {
        self.location += delta;
        self.target += delta;
    }

    /// One-shot speed override until [`Self::use_default_speed`].
    pub fn use_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// One-shot mass override until [`Self::use_default_mass`].
    pub fn use_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    pub fn use_default_speed(&mut self) {
        self.speed = self.default_speed;
    }

    pub fn use_default_mass(&mut self) {
        self.mass = self.default_mass;
    }

    /// Whether location and velocity are both within tolerance of the
    /// target and zero.
    pub fn settled(&self) -> bool {
        (self.target - self.location).abs() < SETTLE_EPSILON
            && self.velocity.abs() < SETTLE_EPSILON
    }

    /// Advances the simulation by one tick.
    ///
    /// A settled body snaps exactly onto its target and stays there, so
    /// repeated ticks after settling cannot accumulate drift.
    pub fn seek(&mut self) -> &mut Self {
        if !self.settled() {
            let diff = self.target - self.location;
            self.velocity = (self.velocity + diff * self.spring_constant()) * self.friction();
            self.location += self.velocity;
        }
        if self.settled() {
            self.location = self.target;
            self.velocity = 0.0;
        }
        self
    }

    fn spring_constant(&self) -> f64 {
        (self.speed / 100.0) / self.mass
    }

    fn friction(&self) -> f64 {
        self.mass / (1.0 + self.mass)
    }
}
