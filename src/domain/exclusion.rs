/// Anchor titles the store shows in place of a real book title when a
/// listing cannot be bought right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionPhrase {
    /// "下次再買", the save-for-later button on sold-out items.
    BuyNextTime,
    /// "可訂購時通知我", the restock notification button.
    NotifyWhenAvailable,
}

impl ExclusionPhrase {
    pub const ALL: [ExclusionPhrase; 2] = [
        ExclusionPhrase::BuyNextTime,
        ExclusionPhrase::NotifyWhenAvailable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExclusionPhrase::BuyNextTime => "下次再買",
            ExclusionPhrase::NotifyWhenAvailable => "可訂購時通知我",
        }
    }

    /// Exact match only; substrings of a real title do not count.
    pub fn match_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|phrase| phrase.as_str() == title)
    }
}
