use crate::domain::{Listing, Tab};

#[derive(Clone, PartialEq, Debug)]
pub struct FeedCard {
    pub name: String,
    pub discount: String,
    pub favorite: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub struct FeedSection {
    pub title: String,
    pub cards: Vec<FeedCard>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum FeedView {
    Explore(Vec<FeedSection>),
    Favorites(Vec<FeedCard>),
    NoFavorites,
    Empty,
}

pub const NO_FAVORITES_TITLE: &str = "No favorites yet";
pub const NO_FAVORITES_HINT: &str = "Save your favorite restaurants to access them quickly";

/// Presentation state of the discover screen.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct FeedState {
    active_tab: Tab,
    // Insertion ordered, no duplicates
    favorites: Vec<String>,
    search_focused: bool,
    listings: Vec<Listing>,
}

impl FeedState {
    pub fn new(listings: Vec<Listing>, active_tab: Tab) -> Self {
        FeedState {
            active_tab,
            favorites: Vec::new(),
            search_focused: false,
            listings,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.iter().any(|favorite| favorite == name)
    }

    /// Flips the favorite flag of a listing and returns the new flag, or `None` for an
    /// unknown listing.
    pub fn toggle_favorite(&mut self, name: &str) -> Option<bool> {
        self.listing(name)?;

        if self.is_favorite(name) {
            self.favorites.retain(|favorite| favorite != name);
            Some(false)
        } else {
            self.favorites.push(name.to_string());
            Some(true)
        }
    }

    pub fn set_search_focused(&mut self, focused: bool) {
        self.search_focused = focused;
    }

    /// The filter button next to the search field is only offered while it has focus.
    pub fn shows_search_filter(&self) -> bool {
        self.search_focused
    }

    pub fn view(&self) -> FeedView {
        match self.active_tab {
            Tab::Explore => {
                let mut sections: Vec<FeedSection> = Vec::new();
                for listing in &self.listings {
                    let card = self.card(listing);
                    match sections.iter_mut().find(|section| section.title == listing.section) {
                        Some(section) => section.cards.push(card),
                        None => sections.push(FeedSection {
                            title: listing.section.clone(),
                            cards: vec![card],
                        }),
                    }
                }
                FeedView::Explore(sections)
            }
            Tab::Favorites if self.favorites.is_empty() => FeedView::NoFavorites,
            Tab::Favorites => FeedView::Favorites(
                self.favorites
                    .iter()
                    .filter_map(|name| self.listing(name))
                    .map(|listing| self.card(listing))
                    .collect(),
            ),
            Tab::Food | Tab::Other => FeedView::Empty,
        }
    }

    fn listing(&self, name: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.name == name)
    }

    fn card(&self, listing: &Listing) -> FeedCard {
        FeedCard {
            name: listing.name.clone(),
            discount: listing.discount.clone(),
            favorite: self.is_favorite(&listing.name),
        }
    }
}
