use serde::{Deserialize, Serialize};
use strum::EnumIter;


#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, EnumIter, Serialize, Deserialize,
)]
pub enum Force {
    #[serde(rename = "w")]
    White,
    #[serde(rename = "b")]
    Black,
}

impl Force {
    pub fn to_wire(self) -> char {
        match self {
            Force::White => 'w',
            Force::Black => 'b',
        }
    }
}
