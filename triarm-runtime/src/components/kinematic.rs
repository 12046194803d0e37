use nalgebra::Point3;
use triarm_core::algorithm::fk::ForwardKinematics;
use triarm_core::algorithm::ik::InverseKinematics;
use triarm_core::{Arm, KinematicError};

use crate::runtime::{Component, ComponentContext};
use crate::{consts, Config, Configurable};

/// Target seeking stepper.
///
/// Performs exactly one pseudo-inverse correction per tick while a target is
/// active. Convergence is observed across frames rather than resolved within
/// one.
pub struct Kinematic {
    arm: Arm,
    fk: ForwardKinematics,
    ik: InverseKinematics,
    enable_motion: bool,
}

impl Component<Config> for Kinematic {
    fn new(config: Config) -> Self
    where
        Self: Sized,
    {
        Self {
            arm: config.arm,
            fk: ForwardKinematics::new(config.arm),
            ik: InverseKinematics::new(config.arm),
            enable_motion: config.global().enable_motion,
        }
    }

    fn tick(&mut self, ctx: &mut ComponentContext) {
        if !self.enable_motion || !ctx.state.is_seeking() {
            return;
        }

        let target = match ctx.state.target() {
            Some(target) => *target,
            None => return,
        };

        let effector = self.fk.effector(&ctx.state.angles);
        let direction = target.point - effector;

        if direction.x.abs() < consts::CONVERGENCE_TOLERANCE
            && direction.y.abs() < consts::CONVERGENCE_TOLERANCE
        {
            ctx.state.settle();

            debug!("Target {} reached at iteration {}", target, ctx.iteration());
            return;
        }

        if nalgebra::distance(&Point3::origin(), &target.point) > self.arm.max_reach() {
            warn!("Target is out of reach");
        }

        match self.ik.correction(&ctx.state.angles, &direction.xy()) {
            Ok(delta) => {
                ctx.state.angles += delta;

                trace!(
                    "Effector: [{:.2}, {:.2}]; {}",
                    effector.x,
                    effector.y,
                    ctx.state.angles
                );
            }
            Err(KinematicError::SingularJacobianProduct) => {
                debug!("Jacobian product is singular, skipping correction");
            }
        }
    }
}
