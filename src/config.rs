use glam::Vec3;
use thiserror::Error;

/// Rejected simulation parameter. Values are validated once at the boundary;
/// everything downstream takes the validated structs by reference and assumes
/// they are well formed.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("box size must be positive, got {0}")]
    NonPositiveBoxSize(f32),
    #[error("timestep must be positive, got {0}")]
    NonPositiveTimestep(f32),
    #[error("restitution must lie in [0, 1], got {0}")]
    RestitutionOutOfRange(f32),
    #[error("invalid radius range {min}..={max}")]
    InvalidRadiusRange { min: f32, max: f32 },
    #[error("box of size {box_size} cannot hold a sphere of radius {radius}")]
    BoxTooSmall { box_size: f32, radius: f32 },
    #[error("max speed must be non-negative, got {0}")]
    NegativeMaxSpeed(f32),
    #[error("max speed {0} is too large to sample from")]
    MaxSpeedTooLarge(f32),
}

/// Global constants of one simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    /// Edge length of the cubic box, centered on the origin.
    pub box_size: f32,
    /// Fixed simulated time per step.
    pub timestep: f32,
    /// Coefficient of restitution for walls and pairs.
    pub restitution: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            box_size: 500.0,
            timestep: 0.016,
            restitution: 1.0,
        }
    }
}

impl SimConfig {
    pub fn half_extents(&self) -> Vec3 {
        Vec3::splat(self.box_size * 0.5)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.box_size.is_finite() && self.box_size > 0.0) {
            return Err(ConfigError::NonPositiveBoxSize(self.box_size));
        }
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(ConfigError::NonPositiveTimestep(self.timestep));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::RestitutionOutOfRange(self.restitution));
        }
        Ok(())
    }
}

/// How the initial population is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnConfig {
    pub count: usize,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Per-axis bound of the initial velocity, drawn from `-max_speed..=max_speed`.
    pub max_speed: f32,
    /// `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            count: 10,
            radius_min: 10.0,
            radius_max: 30.0,
            max_speed: 100.0,
            seed: None,
        }
    }
}

impl SpawnConfig {
    /// Checks the spawn parameters against the box they will be placed in.
    pub fn validate(&self, sim: &SimConfig) -> Result<(), ConfigError> {
        let (min, max) = (self.radius_min, self.radius_max);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidRadiusRange { min, max });
        }
        if 2.0 * max >= sim.box_size {
            return Err(ConfigError::BoxTooSmall {
                box_size: sim.box_size,
                radius: max,
            });
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(ConfigError::NegativeMaxSpeed(self.max_speed));
        }
        // Velocities are drawn from -max_speed..=max_speed, whose width must stay finite.
        if !(2.0 * self.max_speed).is_finite() {
            return Err(ConfigError::MaxSpeedTooLarge(self.max_speed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let sim = SimConfig::default();
        assert_eq!(sim.validate(), Ok(()));
        assert_eq!(SpawnConfig::default().validate(&sim), Ok(()));
        assert_eq!(sim.half_extents(), Vec3::splat(250.0));
    }

    #[test]
    fn rejects_bad_sim_values() {
        let bad_box = SimConfig {
            box_size: 0.0,
            ..Default::default()
        };
        assert_eq!(
            bad_box.validate(),
            Err(ConfigError::NonPositiveBoxSize(0.0))
        );

        let bad_dt = SimConfig {
            timestep: -0.1,
            ..Default::default()
        };
        assert_eq!(
            bad_dt.validate(),
            Err(ConfigError::NonPositiveTimestep(-0.1))
        );

        let bad_cr = SimConfig {
            restitution: 1.5,
            ..Default::default()
        };
        assert_eq!(
            bad_cr.validate(),
            Err(ConfigError::RestitutionOutOfRange(1.5))
        );

        let nan_cr = SimConfig {
            restitution: f32::NAN,
            ..Default::default()
        };
        assert!(nan_cr.validate().is_err());
    }

    #[test]
    fn rejects_bad_spawn_values() {
        let sim = SimConfig::default();

        let inverted = SpawnConfig {
            radius_min: 30.0,
            radius_max: 10.0,
            ..Default::default()
        };
        assert!(matches!(
            inverted.validate(&sim),
            Err(ConfigError::InvalidRadiusRange { .. })
        ));

        let zero = SpawnConfig {
            radius_min: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            zero.validate(&sim),
            Err(ConfigError::InvalidRadiusRange { .. })
        ));

        let huge = SpawnConfig {
            radius_max: 250.0,
            ..Default::default()
        };
        assert_eq!(
            huge.validate(&sim),
            Err(ConfigError::BoxTooSmall {
                box_size: 500.0,
                radius: 250.0
            })
        );

        let negative = SpawnConfig {
            max_speed: -1.0,
            ..Default::default()
        };
        assert_eq!(
            negative.validate(&sim),
            Err(ConfigError::NegativeMaxSpeed(-1.0))
        );
    }

    #[test]
    fn rejects_max_speed_with_unsampleable_range() {
        let sim = SimConfig::default();

        let overflowing = SpawnConfig {
            max_speed: 2.0e38,
            ..Default::default()
        };
        assert_eq!(
            overflowing.validate(&sim),
            Err(ConfigError::MaxSpeedTooLarge(2.0e38))
        );

        let infinite = SpawnConfig {
            max_speed: f32::INFINITY,
            ..Default::default()
        };
        assert!(infinite.validate(&sim).is_err());

        let largest_ok = SpawnConfig {
            max_speed: f32::MAX / 2.0,
            ..Default::default()
        };
        assert_eq!(largest_ok.validate(&sim), Ok(()));
    }
}
