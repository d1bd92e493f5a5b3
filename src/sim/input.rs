use crate::config::Config;
use crate::world::LightSource;

/// One frame of player intent, already decoded from raw key state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub forward: f32, // –1 … +1
    pub strafe: f32,  // –1 … +1  (left / right)
    pub turn: f32,    // –1 … +1  (right / left)
}

impl InputCmd {
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.forward == 0.0 && self.strafe == 0.0 && self.turn == 0.0
    }

    /// Move and rotate `light` by one frame's worth of input.
    pub fn apply(&self, light: &mut LightSource, cfg: &Config) {
        if self.is_idle() {
            return;
        }
        let fwd = self.forward.clamp(-1.0, 1.0) * cfg.move_speed;
        let side = self.strafe.clamp(-1.0, 1.0) * cfg.move_speed;
        light.step(fwd, side);
        light.turn(self.turn.clamp(-1.0, 1.0) * cfg.turn_speed_deg.to_radians());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn idle_command_changes_nothing() {
        let cfg = Config::default();
        let mut light = LightSource::from_config(&cfg);
        InputCmd::default().apply(&mut light, &cfg);
        assert_eq!(light.pos(), cfg.start_pos);
        assert_eq!(light.heading(), cfg.start_heading);
    }

    #[test]
    fn forward_moves_move_speed_units() {
        let cfg = Config::default();
        let mut light = LightSource::from_config(&cfg);
        let cmd = InputCmd {
            forward: 1.0,
            ..InputCmd::default()
        };
        cmd.apply(&mut light, &cfg);
        assert!((light.pos().distance(cfg.start_pos) - cfg.move_speed).abs() < 1e-4);
    }

    #[test]
    fn turn_is_clamped_to_turn_speed() {
        let cfg = Config::default();
        let mut light = LightSource::new(vec2(0.0, 0.0), 0.0, 1.0, 4);
        let cmd = InputCmd {
            turn: 5.0,
            ..InputCmd::default()
        };
        cmd.apply(&mut light, &cfg);
        assert!((light.heading() - 2_f32.to_radians()).abs() < 1e-6);
    }
}
