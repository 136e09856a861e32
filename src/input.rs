/// Intents produced by the input layer for a single tick.
///
/// `select_world` is only honoured while in the menu.  In the game-over and
/// victory screens `jump` doubles as "confirm".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    pub move_left: bool,
    pub move_right: bool,
    pub run: bool,
    pub jump: bool,
    pub fire: bool,
    pub cancel: bool,
    pub select_world: Option<usize>,
}

impl Intents {
    pub fn select(index: usize) -> Self {
        Self {
            select_world: Some(index),
            ..Self::default()
        }
    }
}
