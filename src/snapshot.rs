//! Read-only view of one frame for the presentation layer.

use crate::entities::{Aabb, Entity, EntityKind, GameState, Mode, PowerUp};
use crate::events::GameEvent;
use crate::theme::{WorldTheme, THEMES};

#[derive(Clone, Debug, PartialEq)]
pub struct EntityView {
    pub kind: EntityKind,
    pub bounds: Aabb,
    pub alive: bool,
    pub collected: bool,
    /// Player only.
    pub power: Option<PowerUp>,
    pub invincible: bool,
}

impl EntityView {
    fn of(entity: &impl Entity) -> Self {
        Self {
            kind: entity.kind(),
            bounds: entity.bounds(),
            alive: true,
            collected: false,
            power: None,
            invincible: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Snapshot {
    pub mode: Mode,
    pub frame: u64,
    pub world_index: usize,
    pub theme: &'static WorldTheme,
    pub level_width: f32,
    pub camera_x: f32,
    pub score: u32,
    pub high_score: u32,
    pub lives: u32,
    pub coins: u32,
    /// Back to front: platforms, pickups, exit, enemies, projectiles, player.
    pub entities: Vec<EntityView>,
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn player(&self) -> Option<&EntityView> {
        self.entities.iter().find(|e| e.kind == EntityKind::Player)
    }
}

pub fn snapshot(state: &GameState) -> Snapshot {
    let mut snap = Snapshot {
        mode: state.mode,
        frame: state.frame,
        world_index: state.world_index,
        theme: &THEMES[state.world_index.min(THEMES.len() - 1)],
        level_width: 0.0,
        camera_x: 0.0,
        score: state.score,
        high_score: state.high_score,
        lives: 0,
        coins: 0,
        entities: Vec::new(),
        events: state.events.clone(),
    };
    let Some(session) = &state.session else {
        return snap;
    };
    let world = &session.world;
    let player = &session.player;

    snap.theme = world.theme;
    snap.level_width = world.level_width;
    snap.camera_x = world.camera_x;
    snap.lives = player.lives;
    snap.coins = player.coins;

    snap.entities.extend(world.platforms.iter().map(EntityView::of));
    snap.entities.extend(world.pickups.iter().map(|p| EntityView {
        collected: p.collected,
        ..EntityView::of(p)
    }));
    snap.entities.push(EntityView::of(&world.exit));
    snap.entities.extend(world.enemies.iter().map(|e| EntityView {
        alive: e.alive,
        ..EntityView::of(e)
    }));
    snap.entities.extend(world.projectiles.iter().map(EntityView::of));
    snap.entities.push(EntityView {
        power: Some(player.power),
        invincible: player.is_invincible(),
        ..EntityView::of(player)
    });
    snap
}
