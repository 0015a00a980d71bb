pub const CELEBRATION_MS: f64 = 2_000.0;
pub const TICK_MS: u32 = 250;
const PARTICLES_AT_START: f64 = 50.0;

/// One confetti burst. Origins are fractions of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Burst {
    pub x: f64,
    pub y: f64,
    pub particle_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    Fire([Burst; 2]),
    Stop,
}

/// Confetti schedule behind the success modal: two mirrored bursts per tick,
/// thinning out linearly until the time runs out.
#[derive(Clone, Debug, PartialEq)]
pub struct Celebration {
    ends_at: f64,
    stopped: bool,
}

fn random_in(rng: &mut impl FnMut() -> f64, min: f64, max: f64) -> f64 {
    rng() * (max - min) + min
}

impl Celebration {
    pub fn start(now: f64) -> Self {
        Self {
            ends_at: now + CELEBRATION_MS,
            stopped: false,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    pub fn cancel(&mut self) {
        self.stopped = true;
    }

    /// `rng` yields values in [0, 1). Once `Stop` is returned every later tick
    /// returns `Stop` too.
    pub fn tick(&mut self, now: f64, rng: &mut impl FnMut() -> f64) -> Tick {
        if self.stopped {
            return Tick::Stop;
        }
        let remaining = self.ends_at - now;
        if remaining <= 0.0 {
            self.stopped = true;
            return Tick::Stop;
        }
        let particle_count = (PARTICLES_AT_START * remaining / CELEBRATION_MS).floor() as u32;
        let left = Burst {
            x: random_in(rng, 0.1, 0.3),
            y: rng() - 0.2,
            particle_count,
        };
        let right = Burst {
            x: random_in(rng, 0.7, 0.9),
            y: rng() - 0.2,
            particle_count,
        };
        Tick::Fire([left, right])
    }
}
