use serde::{Deserialize, Serialize};

use super::PageNumber;

/// A single card on the messages page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCard {
    pub title: String,
    pub body: String,
}

/// What a page shows. The role decides which entrance effects can land on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContent {
    Cover {
        title: String,
        subtitle: String,
    },
    Photo {
        /// Lines of the picture, drawn as-is.
        art: Vec<String>,
        caption: String,
    },
    Messages {
        heading: String,
        cards: Vec<MessageCard>,
    },
    Memories {
        heading: String,
        items: Vec<String>,
    },
    Closing {
        title: String,
        message: String,
    },
}

impl PageContent {
    /// Number of message cards on this page (zero for other roles).
    pub fn card_count(&self) -> usize {
        match self {
            PageContent::Messages { cards, .. } => cards.len(),
            _ => 0,
        }
    }

    /// Number of memory items on this page (zero for other roles).
    pub fn memory_count(&self) -> usize {
        match self {
            PageContent::Memories { items, .. } => items.len(),
            _ => 0,
        }
    }

    pub fn has_photo(&self) -> bool {
        matches!(self, PageContent::Photo { .. })
    }
}

/// Page content indexed by page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pages: Vec<PageContent>,
}

impl Deck {
    /// Build a deck from pages in order. Pages past the end of `pages` are
    /// treated as missing by [`Deck::get`].
    pub fn from_pages(pages: Vec<PageContent>) -> Self {
        Self { pages }
    }

    pub fn get(&self, page: PageNumber) -> Option<&PageContent> {
        self.pages.get(page.index())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The presentation shipped with the binary.
    pub fn builtin() -> Self {
        Self::from_pages(vec![
            PageContent::Cover {
                title: "Happy Anniversary".to_string(),
                subtitle: "Another year of us".to_string(),
            },
            PageContent::Photo {
                art: [
                    "   .-~~~-.   .-~~~-.   ",
                    "  /       \\ /       \\  ",
                    " |         '         | ",
                    "  \\                 /  ",
                    "   '.             .'   ",
                    "     '.         .'     ",
                    "       '.     .'       ",
                    "         '. .'         ",
                    "           V           ",
                ]
                .iter()
                .map(|line| (*line).to_string())
                .collect(),
                caption: "The day it all began".to_string(),
            },
            PageContent::Messages {
                heading: "Things I never say enough".to_string(),
                cards: vec![
                    MessageCard {
                        title: "Thank you".to_string(),
                        body: "For the patience, the laughter and every ordinary morning."
                            .to_string(),
                    },
                    MessageCard {
                        title: "I admire you".to_string(),
                        body: "You make hard things look gentle.".to_string(),
                    },
                    MessageCard {
                        title: "I choose you".to_string(),
                        body: "Today, tomorrow, and every day after that.".to_string(),
                    },
                ],
            },
            PageContent::Memories {
                heading: "Our favourite memories".to_string(),
                items: vec![
                    "The first coffee that lasted four hours".to_string(),
                    "Getting lost on purpose in the old town".to_string(),
                    "Dancing in the kitchen at midnight".to_string(),
                    "The rainy weekend we never left the couch".to_string(),
                    "Every single sunset from the balcony".to_string(),
                ],
            },
            PageContent::Closing {
                title: "Forever yours".to_string(),
                message: "Here's to all the pages we have yet to write.".to_string(),
            },
        ])
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::TOTAL_PAGES;

    #[test]
    fn builtin_has_one_entry_per_page() {
        let deck = Deck::builtin();
        assert_eq!(deck.len(), usize::from(TOTAL_PAGES));
        assert!(PageNumber::all().all(|page| deck.get(page).is_some()));
    }

    #[test]
    fn builtin_roles_match_entrance_pages() {
        let deck = Deck::builtin();
        let photo = PageNumber::new(2).and_then(|p| deck.get(p));
        let messages = PageNumber::new(3).and_then(|p| deck.get(p));
        let memories = PageNumber::new(4).and_then(|p| deck.get(p));
        assert!(photo.is_some_and(PageContent::has_photo));
        assert_eq!(messages.map(PageContent::card_count), Some(3));
        assert_eq!(memories.map(PageContent::memory_count), Some(5));
    }

    #[test]
    fn short_deck_reports_missing_pages() {
        let deck = Deck::from_pages(vec![PageContent::Closing {
            title: "only".to_string(),
            message: String::new(),
        }]);
        assert!(deck.get(PageNumber::first()).is_some());
        assert!(deck.get(PageNumber::last()).is_none());
    }

    #[test]
    fn content_parses_from_tagged_toml() {
        let toml_str = r#"
kind = "memories"
heading = "Trips"
items = ["Lisbon", "Kyoto"]
"#;
        let content: PageContent = toml::from_str(toml_str).expect("valid page");
        assert_eq!(content.memory_count(), 2);
        assert_eq!(content.card_count(), 0);
    }
}
