use serde::Deserialize;

/// A promotional card shown in the feed.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Listing {
    pub name: String,
    pub discount: String,
    pub section: String,
}

#[cfg(test)]
impl Listing {
    pub fn new(name: impl Into<String>, discount: impl Into<String>, section: impl Into<String>) -> Self {
        Listing {
            name: name.into(),
            discount: discount.into(),
            section: section.into(),
        }
    }
}
