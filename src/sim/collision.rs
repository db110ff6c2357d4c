//! Collision detection and pass scoring
//!
//! The star is tested as its axis-aligned bounding box (center ± radius)
//! against each pipe's blockers and the canvas floor/ceiling.

use serde::{Deserialize, Serialize};

use super::state::{Obstacle, Player};

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing hit
    Clear,
    /// Hit the top or bottom blocker of this pipe
    Obstacle { id: u32 },
    /// Fell past the bottom of the canvas
    Floor,
    /// Flew past the top of the canvas (only when the ceiling is fatal)
    Ceiling,
}

impl Outcome {
    #[inline]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Outcome::Clear)
    }
}

/// Whether the star's horizontal extent overlaps the pipe's
#[inline]
pub fn overlaps_horizontally(player: &Player, obstacle: &Obstacle) -> bool {
    player.right() > obstacle.x && player.left() < obstacle.trailing_edge()
}

/// Whether the star touches either blocker of the pipe
pub fn hits_obstacle(player: &Player, obstacle: &Obstacle) -> bool {
    overlaps_horizontally(player, obstacle)
        && (player.top() < obstacle.top || player.bottom() > obstacle.bottom)
}

/// Canvas bounds check. The floor is always fatal; the ceiling only when asked.
pub fn check_bounds(player: &Player, canvas_height: f32, ceiling_fatal: bool) -> Outcome {
    if player.bottom() > canvas_height {
        Outcome::Floor
    } else if ceiling_fatal && player.top() < 0.0 {
        Outcome::Ceiling
    } else {
        Outcome::Clear
    }
}

/// Check the star against every pipe (in screen order) and the canvas bounds.
/// Stops at the first fatal hit.
pub fn check_collisions(
    player: &Player,
    obstacles: &[Obstacle],
    canvas_height: f32,
    ceiling_fatal: bool,
) -> Outcome {
    if let Some(hit) = obstacles.iter().find(|o| hits_obstacle(player, o)) {
        return Outcome::Obstacle { id: hit.id };
    }
    check_bounds(player, canvas_height, ceiling_fatal)
}

/// Mark pipes whose trailing edge has crossed the star's x as passed.
/// Returns the number of newly passed pipes (one point each).
pub fn award_passes(player: &Player, obstacles: &mut [Obstacle]) -> u32 {
    let mut gained = 0;
    for obstacle in obstacles.iter_mut() {
        if !obstacle.passed && obstacle.trailing_edge() < player.pos.x {
            obstacle.passed = true;
            gained += 1;
        }
    }
    gained
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn player_at(x: f32, y: f32, radius: f32) -> Player {
        let mut p = Player::new(&Tuning::default());
        p.pos.x = x;
        p.pos.y = y;
        p.radius = radius;
        p
    }

    /// `{x=100, top=100, bottom=300, width=40}`
    fn pipe() -> Obstacle {
        Obstacle::new(9, 100.0, 100.0, 200.0, 40.0)
    }

    #[test]
    fn test_hit_bottom_blocker() {
        // 310 + 12 = 322 > 300
        let p = player_at(120.0, 310.0, 12.0);
        let outcome = check_collisions(&p, &[pipe()], 600.0, false);
        assert_eq!(outcome, Outcome::Obstacle { id: 9 });
        assert!(outcome.is_fatal());
    }

    #[test]
    fn test_hit_top_blocker() {
        let p = player_at(120.0, 105.0, 12.0);
        assert!(hits_obstacle(&p, &pipe()));
    }

    #[test]
    fn test_inside_gap_is_clear() {
        let p = player_at(120.0, 200.0, 12.0);
        assert_eq!(check_collisions(&p, &[pipe()], 600.0, false), Outcome::Clear);
    }

    #[test]
    fn test_no_horizontal_overlap_never_hits() {
        for y in [0.0, 50.0, 200.0, 350.0, 590.0] {
            let before = player_at(80.0, y, 12.0);
            let after = player_at(160.0, y, 12.0);
            assert!(!hits_obstacle(&before, &pipe()));
            assert!(!hits_obstacle(&after, &pipe()));
        }
    }

    #[test]
    fn test_edge_touching_is_not_overlap() {
        // right edge exactly at pipe.x
        let p = player_at(88.0, 50.0, 12.0);
        assert!(!overlaps_horizontally(&p, &pipe()));
        let p = player_at(88.1, 50.0, 12.0);
        assert!(overlaps_horizontally(&p, &pipe()));
    }

    #[test]
    fn test_first_hit_short_circuits() {
        let a = Obstacle::new(1, 100.0, 100.0, 200.0, 40.0);
        let b = Obstacle::new(2, 110.0, 100.0, 200.0, 40.0);
        let p = player_at(120.0, 20.0, 12.0);
        assert_eq!(
            check_collisions(&p, &[a, b], 600.0, false),
            Outcome::Obstacle { id: 1 }
        );
    }

    #[test]
    fn test_floor_always_fatal() {
        let p = player_at(10.0, 595.0, 12.0);
        assert_eq!(check_collisions(&p, &[], 600.0, false), Outcome::Floor);
        assert_eq!(check_collisions(&p, &[], 600.0, true), Outcome::Floor);
    }

    #[test]
    fn test_ceiling_policy() {
        let p = player_at(10.0, 5.0, 12.0);
        assert_eq!(check_bounds(&p, 600.0, false), Outcome::Clear);
        assert_eq!(check_bounds(&p, 600.0, true), Outcome::Ceiling);
    }

    #[test]
    fn test_pass_awarded_once() {
        let p = player_at(150.0, 200.0, 12.0);
        let mut pipes = vec![pipe()];
        assert_eq!(award_passes(&p, &mut pipes), 1);
        assert!(pipes[0].passed);
        assert_eq!(award_passes(&p, &mut pipes), 0);
    }

    #[test]
    fn test_no_pass_before_trailing_edge_crosses() {
        let p = player_at(140.0, 200.0, 12.0);
        let mut pipes = vec![pipe()];
        assert_eq!(award_passes(&p, &mut pipes), 0);
        assert!(!pipes[0].passed);
    }
}
