use serde::{Deserialize, Serialize};

use crate::force::Force;


// Which side, if any, the local viewer may move. Assigned by the server once per connection;
// on the wire it is "w", "b" or null.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "Option<Force>", into = "Option<Force>")]
pub enum PlayerRole {
    Player(Force),
    Observer,
}

impl PlayerRole {
    pub fn force(self) -> Option<Force> {
        match self {
            PlayerRole::Player(force) => Some(force),
            PlayerRole::Observer => None,
        }
    }

    pub fn can_drag(self, piece_force: Force) -> bool { self.force() == Some(piece_force) }
}

impl From<Option<Force>> for PlayerRole {
    fn from(force: Option<Force>) -> Self {
        match force {
            Some(force) => PlayerRole::Player(force),
            None => PlayerRole::Observer,
        }
    }
}

impl From<PlayerRole> for Option<Force> {
    fn from(role: PlayerRole) -> Self { role.force() }
}
