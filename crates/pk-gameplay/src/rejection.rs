/// Why a state mutation was turned down.
///
/// Guards in [`crate::Game`] produce these; the public operations log them
/// and leave the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    EmptyName,
    DuplicateName(String),
    UnknownPlayer(String),
    EmptySelection,
    UnknownPhase(String),
    RepeatedPhase(String),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "player name is empty"),
            Self::DuplicateName(name) => write!(f, "player {:?} is already seated", name),
            Self::UnknownPlayer(name) => write!(f, "no player named {:?}", name),
            Self::EmptySelection => write!(f, "phase selection is empty"),
            Self::UnknownPhase(phase) => write!(f, "phase {:?} is not in the catalog", phase),
            Self::RepeatedPhase(phase) => write!(f, "phase {:?} is selected twice", phase),
        }
    }
}

impl std::error::Error for Rejection {}
