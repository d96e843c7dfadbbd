use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum Tab {
    #[default]
    Explore,
    Favorites,
    Food,
    Other,
}

impl Tab {
    pub fn all() -> [Tab; 4] {
        [Tab::Explore, Tab::Favorites, Tab::Food, Tab::Other]
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Tab> {
        Tab::all().into_iter().find(|tab| tab.to_string().eq_ignore_ascii_case(name))
    }
}

impl<'de> Deserialize<'de> for Tab {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Tab::from_name(&value).ok_or_else(|| Error::invalid_value(Unexpected::Str(&value), &"one of Explore, Favorites, Food, Other"))
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tab::Explore => "Explore",
            Tab::Favorites => "Favorites",
            Tab::Food => "Food",
            Tab::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("Explore", Tab::Explore)]
    #[case("Favorites", Tab::Favorites)]
    #[case("Food", Tab::Food)]
    #[case("Other", Tab::Other)]
    fn deserializes_tab_names(#[case] name: &str, #[case] expected: Tab) {
        let tab = serde_json::from_value::<Tab>(json!(name)).unwrap();
        assert_eq!(tab, expected);
        assert_eq!(tab.to_string(), name);
    }

    #[rstest]
    #[case("explore", Tab::Explore)]
    #[case("FAVORITES", Tab::Favorites)]
    #[case("fOOd", Tab::Food)]
    fn deserializes_tab_names_in_any_case(#[case] name: &str, #[case] expected: Tab) {
        assert_eq!(serde_json::from_value::<Tab>(json!(name)).unwrap(), expected);
        assert_eq!(Tab::from_name(name), Some(expected));
    }

    #[test]
    fn fails_for_an_unknown_tab() {
        assert!(serde_json::from_value::<Tab>(json!("Drinks")).is_err());
    }
}
