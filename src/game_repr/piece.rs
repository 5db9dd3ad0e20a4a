/// The two sides of the variant.
///
/// `Pawns` is the advancing side (eight pawns moving up the board),
/// `Queen` the defending side (a single queen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Pawns,
    Queen,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Pawns => Self::Queen,
            Self::Queen => Self::Pawns,
        }
    }

    /// +1 for the pawns, -1 for the queen. Converts pawn-side scores into
    /// side-to-move scores.
    #[inline]
    pub fn sign(&self) -> i32 {
        match self {
            Self::Pawns => 1,
            Self::Queen => -1,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::Pawns => 'w',
            Self::Queen => 'b',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Queen,
}

impl PieceKind {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'P' => Some(Self::Pawn),
            'q' => Some(Self::Queen),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Queen => 'q',
        }
    }

    /// Material value in centipawns, used for MVV-LVA and evaluation.
    pub fn value(&self) -> i32 {
        match self {
            Self::Pawn => 100,
            Self::Queen => 900,
        }
    }
}

/// Final or running state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Ongoing,
    /// A pawn reached the eighth rank.
    PawnsWinPromotion,
    /// A pawn captured the queen.
    PawnsWinCapture,
    /// Every pawn was captured.
    QueenWins,
    /// The side to move has no legal move.
    DrawStalemate,
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        *self != GameResult::Ongoing
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::PawnsWinPromotion | GameResult::PawnsWinCapture => Some(Side::Pawns),
            GameResult::QueenWins => Some(Side::Queen),
            GameResult::Ongoing | GameResult::DrawStalemate => None,
        }
    }

    /// Stable numeric code: 0 ongoing, 1 promotion, 2 capture, 3 queen, 4 stalemate.
    pub fn code(&self) -> u8 {
        match self {
            GameResult::Ongoing => 0,
            GameResult::PawnsWinPromotion => 1,
            GameResult::PawnsWinCapture => 2,
            GameResult::QueenWins => 3,
            GameResult::DrawStalemate => 4,
        }
    }
}
