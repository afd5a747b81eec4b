//! Damped spring integrator.
//!
//! The spring is solved analytically (unit mass) from its current
//! displacement and velocity, so a step of any length lands exactly on the
//! trajectory and retargeting mid-flight continues from where the value is.

use std::time::Duration;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Spring constant (k). Higher settles faster.
    pub stiffness: f32,
    /// 1.0 is critically damped, below bounces, above creeps.
    pub damping_ratio: f32,
    /// Displacement and velocity below which the spring snaps to its target.
    pub visibility_threshold: f32,
}

impl SpringSpec {
    /// Medium bouncy damping with low stiffness.
    pub const MEDIUM_BOUNCY_LOW: SpringSpec = SpringSpec {
        stiffness: 200.0,
        damping_ratio: 0.5,
        visibility_threshold: 0.01,
    };

    /// Advance a displacement/velocity pair by `t` seconds.
    fn advance(&self, displacement: f64, velocity: f64, t: f64) -> (f64, f64) {
        let omega = f64::from(self.stiffness).sqrt();
        let zeta = f64::from(self.damping_ratio);
        let x0 = displacement;
        let v0 = velocity;

        if (zeta - 1.0).abs() < 1e-6 {
            let a = x0;
            let b = v0 + omega * x0;
            let decay = (-omega * t).exp();
            let x = (a + b * t) * decay;
            let v = (b - omega * (a + b * t)) * decay;
            (x, v)
        } else if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + zeta * omega * x0) / damped;
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (damped * t).sin_cos();
            let x = decay * (a * cos + b * sin);
            let v = decay * (-zeta * omega * (a * cos + b * sin) + damped * (b * cos - a * sin));
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c1 = (v0 - r2 * x0) / (r1 - r2);
            let c2 = x0 - c1;
            let e1 = (r1 * t).exp();
            let e2 = (r2 * t).exp();
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::MEDIUM_BOUNCY_LOW
    }
}

/// Running spring state: current value, velocity and target.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    spec: SpringSpec,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// A spring at rest at `value`.
    pub fn new(spec: SpringSpec, value: f32) -> Self {
        Self {
            spec,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget in place. Value and velocity carry over.
    pub fn animate_to(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Advance the spring by one frame.
    pub fn step(&mut self, dt: Duration) {
        if self.is_settled() {
            return;
        }
        let t = dt.as_secs_f64();
        if t <= 0.0 {
            return;
        }

        let displacement = f64::from(self.value) - f64::from(self.target);
        let (x, v) = self
            .spec
            .advance(displacement, f64::from(self.velocity), t);

        let threshold = f64::from(self.spec.visibility_threshold);
        if !x.is_finite() || !v.is_finite() || (x.abs() < threshold && v.abs() < threshold) {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        self.value = (f64::from(self.target) + x) as f32;
        self.velocity = v as f32;
    }
}
