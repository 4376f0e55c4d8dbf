/// Whether the card panel is open. The DOM classes are rendered from this,
/// never read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Collapsed,
    Expanded,
}

impl MenuState {
    pub fn is_expanded(self) -> bool {
        matches!(self, MenuState::Expanded)
    }

    pub fn flipped(self) -> Self {
        match self {
            MenuState::Collapsed => MenuState::Expanded,
            MenuState::Expanded => MenuState::Collapsed,
        }
    }
}
