//! Random line sets (dual-box or click-pair sampling + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for tests, benchmarks, and the CLI `random` command.
//!
//! Model
//! - `LineSampler::Dual` draws `(slope, intercept)` uniformly from a box.
//! - `LineSampler::Clicks` draws two integer pixel positions per line inside a
//!   `width × height` screen, the way an interactive picker produces them.
//!   Vertical pairs are shifted right by `nudge` pixels.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dual::Line;
use crate::error::EnvelopeError;

/// How a single line is drawn.
#[derive(Clone, Copy, Debug)]
pub enum LineSampler {
    Dual {
        slope: (f64, f64),
        intercept: (f64, f64),
    },
    Clicks {
        width: u32,
        height: u32,
        nudge: f64,
    },
}

/// Random line set configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomLinesCfg {
    pub count: usize,
    pub sampler: LineSampler,
}
impl Default for RandomLinesCfg {
    fn default() -> Self {
        Self {
            count: 8,
            sampler: LineSampler::Clicks {
                width: 1000,
                height: 750,
                nudge: 3.0,
            },
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Shift `p2` right by `dx` when both points share an x-coordinate.
///
/// Opt-in helper for input collaborators; `Line::new` never perturbs its input.
#[inline]
pub fn nudge_vertical(p1: Vector2<f64>, mut p2: Vector2<f64>, dx: f64) -> Vector2<f64> {
    if p1.x == p2.x {
        p2.x += dx;
    }
    p2
}

/// Redraws allowed per requested line before giving up.
const MAX_ATTEMPTS_PER_LINE: usize = 64;

impl LineSampler {
    fn validate(&self) -> Result<(), EnvelopeError> {
        let invalid = |reason: String| Err(EnvelopeError::InvalidSampler { reason });
        match *self {
            LineSampler::Dual { slope, intercept } => {
                for (name, (lo, hi)) in [("slope", slope), ("intercept", intercept)] {
                    if !(lo.is_finite() && hi.is_finite()) || hi < lo {
                        return invalid(format!(
                            "{name} range ({lo}, {hi}) must be finite with lo <= hi"
                        ));
                    }
                }
                Ok(())
            }
            LineSampler::Clicks { nudge, .. } if !nudge.is_finite() => {
                invalid(format!("nudge {nudge} must be finite"))
            }
            LineSampler::Clicks { .. } => Ok(()),
        }
    }
}

/// Draw `cfg.count` lines.
///
/// Fails with `InvalidSampler` on non-finite or reversed ranges, and when too
/// many draws are rejected (e.g. a zero `nudge` on a very narrow screen).
pub fn draw_lines(cfg: RandomLinesCfg, tok: ReplayToken) -> Result<Vec<Line>, EnvelopeError> {
    cfg.sampler.validate()?;
    let mut rng = tok.to_std_rng();
    let mut out = Vec::with_capacity(cfg.count);
    let budget = cfg.count.saturating_add(1).saturating_mul(MAX_ATTEMPTS_PER_LINE);
    let mut attempts = 0usize;
    while out.len() < cfg.count {
        if attempts == budget {
            return Err(EnvelopeError::InvalidSampler {
                reason: format!("{attempts} draws produced only {} valid lines", out.len()),
            });
        }
        attempts += 1;
        let line = match cfg.sampler {
            LineSampler::Dual { slope, intercept } => {
                let s = uniform(&mut rng, slope);
                let b = uniform(&mut rng, intercept);
                Line::from_slope_intercept(s, b)
            }
            LineSampler::Clicks {
                width,
                height,
                nudge,
            } => {
                let p1 = click(&mut rng, width, height);
                let p2 = nudge_vertical(p1, click(&mut rng, width, height), nudge);
                Line::new(p1, p2)
            }
        };
        // vertical pairs left by a zero nudge are redrawn
        if let Ok(line) = line {
            out.push(line);
        }
    }
    Ok(out)
}

#[inline]
fn uniform<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

#[inline]
fn click<R: Rng>(rng: &mut R, width: u32, height: u32) -> Vector2<f64> {
    let x = rng.gen_range(0..width.max(2));
    let y = rng.gen_range(0..height.max(1));
    Vector2::new(x as f64, y as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_token_same_lines() {
        let cfg = RandomLinesCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        assert_eq!(draw_lines(cfg, tok).unwrap(), draw_lines(cfg, tok).unwrap());
        let other = draw_lines(cfg, ReplayToken { seed: 7, index: 4 }).unwrap();
        assert_ne!(draw_lines(cfg, tok).unwrap(), other);
    }

    #[test]
    fn dual_sampler_stays_in_box() {
        let cfg = RandomLinesCfg {
            count: 200,
            sampler: LineSampler::Dual {
                slope: (-2.0, 2.0),
                intercept: (10.0, 20.0),
            },
        };
        let lines = draw_lines(cfg, ReplayToken { seed: 1, index: 0 }).unwrap();
        assert_eq!(lines.len(), 200);
        for l in &lines {
            assert!((-2.0..2.0).contains(&l.slope()));
            assert!((10.0..20.0).contains(&l.intercept()));
        }
    }

    #[test]
    fn click_sampler_never_vertical() {
        // narrow screen forces many equal-x pairs
        let cfg = RandomLinesCfg {
            count: 100,
            sampler: LineSampler::Clicks {
                width: 2,
                height: 750,
                nudge: 3.0,
            },
        };
        let lines = draw_lines(cfg, ReplayToken { seed: 9, index: 0 }).unwrap();
        assert_eq!(lines.len(), 100);
        assert!(lines.iter().all(|l| l.p1().x != l.p2().x));
    }

    #[test]
    fn non_finite_or_reversed_ranges_are_rejected() {
        let tok = ReplayToken { seed: 3, index: 0 };
        let dual = |slope, intercept| RandomLinesCfg {
            count: 1,
            sampler: LineSampler::Dual { slope, intercept },
        };
        for cfg in [
            dual((f64::NAN, 1.0), (0.0, 1.0)),
            dual((0.0, 1.0), (0.0, f64::INFINITY)),
            dual((2.0, 1.0), (0.0, 1.0)),
        ] {
            assert!(matches!(
                draw_lines(cfg, tok),
                Err(EnvelopeError::InvalidSampler { .. })
            ));
        }
        // a point range is fine
        let lines = draw_lines(dual((1.0, 1.0), (0.0, 0.0)), tok).unwrap();
        assert_eq!(lines[0].slope(), 1.0);
    }

    #[test]
    fn zero_nudge_click_draws_terminate() {
        // half of all pairs are vertical and get redrawn
        let cfg = RandomLinesCfg {
            count: 50,
            sampler: LineSampler::Clicks {
                width: 1,
                height: 1,
                nudge: 0.0,
            },
        };
        let lines = draw_lines(cfg, ReplayToken { seed: 1, index: 0 }).unwrap();
        assert_eq!(lines.len(), 50);
        let bad = RandomLinesCfg {
            count: 1,
            sampler: LineSampler::Clicks {
                width: 1000,
                height: 750,
                nudge: f64::NAN,
            },
        };
        assert!(matches!(
            draw_lines(bad, ReplayToken { seed: 1, index: 0 }),
            Err(EnvelopeError::InvalidSampler { .. })
        ));
    }

    #[test]
    fn nudge_only_touches_vertical_pairs() {
        let p1 = Vector2::new(4.0, 1.0);
        assert_eq!(nudge_vertical(p1, Vector2::new(4.0, 9.0), 3.0).x, 7.0);
        assert_eq!(nudge_vertical(p1, Vector2::new(5.0, 9.0), 3.0).x, 5.0);
    }
}
