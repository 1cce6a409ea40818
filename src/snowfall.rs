//! Decorative snowfall. Flakes are spawned on a fixed cadence and pruned
//! once their lifetime is over; nothing here touches the session.

use crate::consts::{
    SNOW_FALL_SECS_MIN, SNOW_FALL_SECS_SPREAD, SNOW_LIFETIME, SNOW_OPACITY_MIN,
    SNOW_OPACITY_SPREAD, SNOW_SIZE_MIN, SNOW_SIZE_SPREAD,
};
use crate::random::RandomSource;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Flake {
    /// Horizontal position, percent of the screen width.
    pub x: f64,
    pub fall_secs: f64,
    pub opacity: f64,
    pub size: f64,
    /// Time since startup at which the flake appeared.
    pub born: Duration,
}

impl Flake {
    /// Vertical progress in `[0, 1]` at time `now`.
    pub fn progress(&self, now: Duration) -> f64 {
        let age = now.saturating_sub(self.born).as_secs_f64();
        (age / self.fall_secs).min(1.0)
    }

    pub fn glyph(&self) -> char {
        if self.size >= 17.0 {
            '❄'
        } else if self.size >= 13.0 {
            '*'
        } else {
            '·'
        }
    }
}

#[derive(Debug, Default)]
pub struct Snowfall {
    flakes: VecDeque<Flake>,
}

impl Snowfall {
    pub fn spawn(&mut self, now: Duration, rng: &mut dyn RandomSource) {
        self.prune(now);
        self.flakes.push_back(Flake {
            x: rng.unit() * 100.0,
            fall_secs: rng.spread(SNOW_FALL_SECS_MIN, SNOW_FALL_SECS_SPREAD),
            opacity: rng.spread(SNOW_OPACITY_MIN, SNOW_OPACITY_SPREAD),
            size: rng.spread(SNOW_SIZE_MIN, SNOW_SIZE_SPREAD),
            born: now,
        });
    }

    /// Drop every flake whose lifetime has run out.
    pub fn prune(&mut self, now: Duration) {
        // Flakes are pushed in spawn order, so expired ones sit at the front.
        while let Some(front) = self.flakes.front() {
            if now.saturating_sub(front.born) >= SNOW_LIFETIME {
                self.flakes.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn flakes(&self) -> impl Iterator<Item = &Flake> {
        self.flakes.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.flakes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SNOW_SPAWN_INTERVAL;
    use crate::random::{Sequence, ThreadRandom};

    /// Upper bound of live flakes at the fixed spawn cadence.
    const MAX_LIVE: usize =
        (SNOW_LIFETIME.as_millis() / SNOW_SPAWN_INTERVAL.as_millis() + 1) as usize;

    #[test]
    fn test_spawn_ranges() {
        let mut snow = Snowfall::default();
        let mut rng = ThreadRandom::seeded(3);
        for i in 0..20 {
            snow.spawn(Duration::from_millis(i * 300), &mut rng);
        }
        for f in snow.flakes() {
            assert!((0.0..100.0).contains(&f.x));
            assert!((5.0..8.0).contains(&f.fall_secs));
            assert!((0.4..1.0).contains(&f.opacity));
            assert!((10.0..20.0).contains(&f.size));
        }
    }

    #[test]
    fn test_flake_removed_after_lifetime() {
        let mut snow = Snowfall::default();
        let mut rng = Sequence::constant(0.5);
        snow.spawn(Duration::from_millis(1000), &mut rng);

        snow.prune(Duration::from_millis(8999));
        assert_eq!(snow.len(), 1);
        snow.prune(Duration::from_millis(9000));
        assert_eq!(snow.len(), 0);
    }

    #[test]
    fn test_bounded_under_sustained_run() {
        let mut snow = Snowfall::default();
        let mut rng = ThreadRandom::seeded(11);
        let mut now = Duration::ZERO;
        // Ten minutes of spawning with a frame-rate prune in between.
        for _ in 0..2000 {
            now += SNOW_SPAWN_INTERVAL;
            snow.spawn(now, &mut rng);
            snow.prune(now + Duration::from_millis(16));
            assert!(snow.len() <= MAX_LIVE);
        }
        for f in snow.flakes() {
            assert!(now - f.born < SNOW_LIFETIME);
        }
    }

    #[test]
    fn test_progress_and_glyph() {
        let flake = Flake {
            x: 10.0,
            fall_secs: 5.0,
            opacity: 1.0,
            size: 18.0,
            born: Duration::from_secs(2),
        };
        assert_eq!(flake.progress(Duration::from_secs(1)), 0.0);
        assert!((flake.progress(Duration::from_millis(4500)) - 0.5).abs() < 1e-9);
        assert_eq!(flake.progress(Duration::from_secs(9)), 1.0);
        assert_eq!(flake.glyph(), '❄');
    }
}
