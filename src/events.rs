//! Cosmetic hints for audio and particles.  Never fed back into the simulation.

use crate::entities::{EnemyKind, PickupKind, Point, ProjectileKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefeatCause {
    Stomped,
    Star,
    Burned,
    Frozen,
}

impl From<ProjectileKind> for DefeatCause {
    fn from(kind: ProjectileKind) -> Self {
        match kind {
            ProjectileKind::Fire => DefeatCause::Burned,
            ProjectileKind::Ice => DefeatCause::Frozen,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    EnemyDefeated {
        kind: EnemyKind,
        cause: DefeatCause,
        at: Point,
    },
    PickupCollected { kind: PickupKind, at: Point },
    ExtraLife { lives: u32 },
    PlayerDamaged { at: Point },
    PlayerLanded { at: Point },
    ProjectileFired { kind: ProjectileKind, at: Point },
    ProjectileBounced { kind: ProjectileKind, at: Point },
    LevelCompleted { world_index: usize, at: Point },
    WorldEntered { world_index: usize },
}
