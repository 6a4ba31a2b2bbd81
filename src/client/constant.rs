pub const SITE_NAME: &str = "Fiszki";

/// Decks per page on the deck list.
pub const DECKS_PER_PAGE: u64 = 12;
/// Cards per page on the deck detail page.
pub const CARDS_PER_PAGE: u64 = 50;
