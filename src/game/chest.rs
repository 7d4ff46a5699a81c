/// The kinds of chest a hunt can turn up.
///
/// Variants are listed in the order the solver considers them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Chest {
    Saver,
    Doubler,
    Mimic,
    Loot,
}

impl Chest {
    pub fn vals() -> [Chest; 4] {
        [Chest::Saver, Chest::Doubler, Chest::Mimic, Chest::Loot]
    }

    pub fn iter_all() -> impl Iterator<Item = Chest> {
        Self::vals().into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Chest::Saver => "saver",
            Chest::Doubler => "doubler",
            Chest::Mimic => "mimic",
            Chest::Loot => "loot",
        }
    }
}
