// ids 1-5 play on the blue side, 6-10 on the red side
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(u8);

impl ParticipantId {
    pub fn new(raw: i32) -> Option<Self> {
        if (1..=10).contains(&raw) {
            Some(Self(raw as u8))
        } else {
            None
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn index(&self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn side(&self) -> Side {
        if self.0 <= 5 {
            Side::Blue
        } else {
            Side::Red
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (1..=10).map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub fn from_team_id(raw: i32) -> Option<Self> {
        match raw {
            100 => Some(Side::Blue),
            200 => Some(Side::Red),
            _ => None,
        }
    }

    pub fn team_id(&self) -> u16 {
        match self {
            Side::Blue => 100,
            Side::Red => 200,
        }
    }

    pub fn opposite(&self) -> Side {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }

    pub fn participants(&self) -> [ParticipantId; 5] {
        match self {
            Side::Blue => [
                ParticipantId(1),
                ParticipantId(2),
                ParticipantId(3),
                ParticipantId(4),
                ParticipantId(5),
            ],
            Side::Red => [
                ParticipantId(6),
                ParticipantId(7),
                ParticipantId(8),
                ParticipantId(9),
                ParticipantId(10),
            ],
        }
    }
}
