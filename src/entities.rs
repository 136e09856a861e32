//! Simulation entity types: plain data read by the presentation layer.
//!
//! Coordinates are pixels with the origin at the top-left of the level and
//! y growing downward.

use crate::config::SimConfig;
use crate::events::GameEvent;
use crate::theme::WorldTheme;

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box; `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Strict overlap: boxes that merely share an edge do not touch.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

// ── Kinds ─────────────────────────────────────────────────────────────────────

/// Player upgrade tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PowerUp {
    #[default]
    None,
    Mushroom,
    FireFlower,
    IceFlower,
    Star,
}

impl PowerUp {
    /// The four kinds a pickup can carry.
    pub const PICKUPS: [PowerUp; 4] = [
        PowerUp::Mushroom,
        PowerUp::FireFlower,
        PowerUp::Star,
        PowerUp::IceFlower,
    ];

    /// Tiers that grow the player and absorb one hit.
    pub fn is_big(self) -> bool {
        matches!(
            self,
            PowerUp::Mushroom | PowerUp::FireFlower | PowerUp::IceFlower
        )
    }

    pub fn projectile(self) -> Option<ProjectileKind> {
        match self {
            PowerUp::FireFlower => Some(ProjectileKind::Fire),
            PowerUp::IceFlower => Some(ProjectileKind::Ice),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Goomba,
    Koopa,
    Piranha,
    Bullet,
    HammerBro,
    Boo,
    Spike,
}

/// How an enemy moves on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Walks back and forth around its spawn point; subject to gravity.
    Patrol,
    /// Bobs vertically around its spawn height.
    Bob,
    /// Flies straight at triple speed; subject to gravity.
    Dash,
    /// Hangs in place.
    Hover,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 7] = [
        EnemyKind::Goomba,
        EnemyKind::Koopa,
        EnemyKind::Piranha,
        EnemyKind::Bullet,
        EnemyKind::HammerBro,
        EnemyKind::Boo,
        EnemyKind::Spike,
    ];

    pub fn size(self) -> (f32, f32) {
        match self {
            EnemyKind::Goomba => (32.0, 32.0),
            EnemyKind::Koopa => (36.0, 52.0),
            EnemyKind::Piranha => (44.0, 64.0),
            EnemyKind::Bullet => (32.0, 24.0),
            EnemyKind::HammerBro => (44.0, 56.0),
            EnemyKind::Boo => (40.0, 40.0),
            EnemyKind::Spike => (36.0, 36.0),
        }
    }

    pub fn motion(self) -> Motion {
        match self {
            EnemyKind::Piranha => Motion::Bob,
            EnemyKind::Bullet => Motion::Dash,
            EnemyKind::Boo => Motion::Hover,
            _ => Motion::Patrol,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectileKind {
    Fire,
    Ice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupKind {
    Coin,
    PowerUp(PowerUp),
}

/// Discriminant shared by every simulated object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy(EnemyKind),
    Platform,
    Pickup(PickupKind),
    Projectile(ProjectileKind),
    Exit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Common capability of everything living in a world.
///
/// `tick` advances the entity's own motion by one step; interactions between
/// entities are handled by the collision resolver.
pub trait Entity {
    fn kind(&self) -> EntityKind;
    fn bounds(&self) -> Aabb;
    fn tick(&mut self, _config: &SimConfig) {}
}

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 36.0;
pub const PLAYER_SMALL_HEIGHT: f32 = 36.0;
pub const PLAYER_BIG_HEIGHT: f32 = 48.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub bounds: Aabb,
    pub vx: f32,
    pub vy: f32,
    pub power: PowerUp,
    pub lives: u32,
    /// Always below `SimConfig::coins_per_life`.
    pub coins: u32,
    pub facing: Facing,
    /// Recomputed by the collision resolver every tick.
    pub on_ground: bool,
    /// Ticks of invincibility left.
    pub invincibility: u32,
    /// Ticks until the next shot is allowed.
    pub fire_cooldown: u32,
}

impl Player {
    pub fn new(spawn: Point, config: &SimConfig) -> Self {
        Self {
            bounds: Aabb::new(spawn.x, spawn.y, PLAYER_WIDTH, PLAYER_SMALL_HEIGHT),
            vx: 0.0,
            vy: 0.0,
            power: PowerUp::None,
            lives: config.starting_lives,
            coins: 0,
            facing: Facing::Right,
            on_ground: false,
            invincibility: 0,
            fire_cooldown: 0,
        }
    }

    /// Change tier, resizing around the bottom edge and horizontal centre.
    pub fn set_power(&mut self, power: PowerUp) {
        self.power = power;
        let height = if power.is_big() {
            PLAYER_BIG_HEIGHT
        } else {
            PLAYER_SMALL_HEIGHT
        };
        let bottom = self.bounds.bottom();
        let center_x = self.bounds.center_x();
        self.bounds = Aabb::new(center_x - PLAYER_WIDTH / 2.0, bottom - height, PLAYER_WIDTH, height);
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility > 0
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub bounds: Aabb,
    pub vx: f32,
    pub vy: f32,
    /// Anchor for patrol distance and bobbing.
    pub spawn: Point,
    /// Flips to false exactly once; the enemy is dropped at the next compaction.
    pub alive: bool,
    /// Ticks lived; drives the bobbing phase.
    pub age: u32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, at: Point, vx: f32) -> Self {
        let (w, h) = kind.size();
        Self {
            kind,
            bounds: Aabb::new(at.x, at.y, w, h),
            vx,
            vy: 0.0,
            spawn: at,
            alive: true,
            age: 0,
        }
    }
}

// ── Platform ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Back-and-forth path of a kinematic platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillation {
    pub axis: Axis,
    /// Start coordinate along `axis`.
    pub origin: f32,
    pub range: f32,
    /// Pixels per second.
    pub speed: f32,
    /// +1.0 or -1.0.
    pub direction: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    pub bounds: Aabb,
    pub oscillation: Option<Oscillation>,
}

impl Platform {
    pub fn fixed(bounds: Aabb) -> Self {
        Self {
            bounds,
            oscillation: None,
        }
    }

    pub fn moving(bounds: Aabb, axis: Axis, range: f32, speed: f32) -> Self {
        let origin = match axis {
            Axis::Horizontal => bounds.x,
            Axis::Vertical => bounds.y,
        };
        Self {
            bounds,
            oscillation: Some(Oscillation {
                axis,
                origin,
                range,
                speed,
                direction: 1.0,
            }),
        }
    }

    pub fn is_kinematic(&self) -> bool {
        self.oscillation.is_some()
    }

    /// Distance the platform will travel during the next tick.
    pub fn displacement(&self, config: &SimConfig) -> Point {
        match self.oscillation {
            Some(osc) => {
                let step = osc.speed * osc.direction * config.dt();
                match osc.axis {
                    Axis::Horizontal => Point::new(step, 0.0),
                    Axis::Vertical => Point::new(0.0, step),
                }
            }
            None => Point::default(),
        }
    }
}

// ── Pickups, projectiles, exit ────────────────────────────────────────────────

pub const COIN_SIZE: f32 = 24.0;
pub const POWER_UP_SIZE: f32 = 28.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Pickup {
    pub kind: PickupKind,
    pub bounds: Aabb,
    /// Flips to true exactly once; the pickup is dropped in the same tick.
    pub collected: bool,
}

impl Pickup {
    pub fn coin(at: Point) -> Self {
        Self {
            kind: PickupKind::Coin,
            bounds: Aabb::new(at.x, at.y, COIN_SIZE, COIN_SIZE),
            collected: false,
        }
    }

    pub fn power_up(power: PowerUp, at: Point) -> Self {
        Self {
            kind: PickupKind::PowerUp(power),
            bounds: Aabb::new(at.x, at.y, POWER_UP_SIZE, POWER_UP_SIZE),
            collected: false,
        }
    }
}

pub const PROJECTILE_SIZE: f32 = 16.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub bounds: Aabb,
    pub vx: f32,
    pub vy: f32,
    pub bounces: u32,
    /// Marked for removal at the end of the tick.
    pub spent: bool,
}

impl Projectile {
    /// Launch centred on `at`, heading `facing`.
    pub fn launch(kind: ProjectileKind, at: Point, facing: Facing, config: &SimConfig) -> Self {
        let half = PROJECTILE_SIZE / 2.0;
        Self {
            kind,
            bounds: Aabb::new(at.x - half, at.y - half, PROJECTILE_SIZE, PROJECTILE_SIZE),
            vx: config.projectile_speed * facing.sign(),
            vy: -config.projectile_lift,
            bounces: 0,
            spent: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Exit {
    pub bounds: Aabb,
}

// ── World & game ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct World {
    /// 0-based position in the theme list.
    pub index: usize,
    pub theme: &'static WorldTheme,
    pub level_width: f32,
    pub spawn: Point,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub pickups: Vec<Pickup>,
    pub projectiles: Vec<Projectile>,
    pub exit: Exit,
    /// Horizontal view offset, kept within `[0, level_width - screen_width]`.
    pub camera_x: f32,
}

impl World {
    /// A world with bounds and an exit but no terrain or inhabitants.
    pub fn empty(index: usize, theme: &'static WorldTheme, level_width: f32) -> Self {
        Self {
            index,
            theme,
            level_width,
            spawn: Point::new(100.0, 400.0),
            platforms: Vec::new(),
            enemies: Vec::new(),
            pickups: Vec::new(),
            projectiles: Vec::new(),
            exit: Exit {
                bounds: Aabb::new(level_width - 200.0, 150.0, 30.0, 300.0),
            },
            camera_x: 0.0,
        }
    }

    /// Drop everything marked for removal during the tick.
    pub fn compact(&mut self) {
        self.enemies.retain(|e| e.alive);
        self.pickups.retain(|p| !p.collected);
        self.projectiles.retain(|p| !p.spent);
    }
}

/// The live part of a run: discarded when play ends or is cancelled.
#[derive(Clone, Debug)]
pub struct Session {
    pub world: World,
    pub player: Player,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Menu,
    Playing,
    GameOver,
    Victory,
}

/// The entire game state.  Cloneable so the per-tick driver can return a
/// new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub mode: Mode,
    /// Present while playing, and kept on the terminal screens so the final
    /// frame can still be shown.
    pub session: Option<Session>,
    pub score: u32,
    /// Best score seen this process; only raised at game over or victory.
    pub high_score: u32,
    pub world_index: usize,
    pub frame: u64,
    /// Hints emitted during the most recent tick.
    pub events: Vec<GameEvent>,
    pub config: SimConfig,
}
