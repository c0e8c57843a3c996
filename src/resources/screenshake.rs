//! Screen shake resource.
//!
//! While active, [`ScreenShake::offset`] returns
//! a jittered sin/cos displacement that the renderer adds to the camera.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use std::f32::consts::TAU;

pub const DEFAULT_SHAKE_FREQUENCY: f32 = 30.0;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenShake {
    /// Peak displacement in pixels.
    pub intensity: f32,
    /// Seconds left.
    pub duration: f32,
    /// Oscillations per second.
    pub frequency: f32,
    /// Seconds since the shake started.
    pub time: f32,
}

impl Default for ScreenShake {
    fn default() -> Self {
        Self {
            intensity: 0.0,
            duration: 0.0,
            frequency: DEFAULT_SHAKE_FREQUENCY,
            time: 0.0,
        }
    }
}

impl ScreenShake {
    /// Start or extend a shake. The stronger intensity and the longer
    /// duration win; the frequency is replaced.
    pub fn start(&mut self, intensity: f32, duration: f32, frequency: f32) {
        self.intensity = self.intensity.max(intensity);
        self.duration = self.duration.max(duration);
        self.frequency = frequency;
    }

    pub fn update(&mut self, dt: f32) {
        if self.duration > 0.0 {
            self.duration -= dt;
            self.time += dt;
            if self.duration <= 0.0 {
                self.intensity = 0.0;
                self.duration = 0.0;
                self.time = 0.0;
            }
        }
    }

    pub fn offset(&self, rng: &mut fastrand::Rng) -> Vector2 {
        if !self.is_active() {
            return Vector2 { x: 0.0, y: 0.0 };
        }
        let angle = self.time * self.frequency * TAU;
        let k = 0.7 + rng.f32() * 0.3;
        Vector2 {
            x: angle.sin() * self.intensity * k,
            y: (angle * 1.3).cos() * self.intensity * k,
        }
    }

    pub fn is_active(&self) -> bool {
        self.duration > 0.0 && self.intensity > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_keeps_strongest_and_longest() {
        let mut shake = ScreenShake::default();
        shake.start(5.0, 0.2, 30.0);
        shake.start(3.0, 0.5, 20.0);
        assert_eq!(shake.intensity, 5.0);
        assert_eq!(shake.duration, 0.5);
        assert_eq!(shake.frequency, 20.0);
        assert!(shake.is_active());
    }

    #[test]
    fn test_update_resets_when_expired() {
        let mut shake = ScreenShake::default();
        shake.start(4.0, 0.1, 30.0);
        shake.update(0.05);
        assert!(shake.is_active());
        shake.update(0.06);
        assert!(!shake.is_active());
        assert_eq!(shake.intensity, 0.0);
        assert_eq!(shake.time, 0.0);
    }

    #[test]
    fn test_offset_is_zero_when_inactive() {
        let shake = ScreenShake::default();
        let mut rng = fastrand::Rng::with_seed(7);
        let o = shake.offset(&mut rng);
        assert_eq!((o.x, o.y), (0.0, 0.0));
    }

    #[test]
    fn test_offset_bounded_by_intensity() {
        let mut shake = ScreenShake::default();
        shake.start(10.0, 1.0, 30.0);
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..20 {
            shake.update(0.013);
            let o = shake.offset(&mut rng);
            assert!(o.x.abs() <= 10.0);
            assert!(o.y.abs() <= 10.0);
        }
    }
}
