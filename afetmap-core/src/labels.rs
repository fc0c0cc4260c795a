use std::str::FromStr;

use afetmap_entities::need::Need;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Turkish,
    English,
}

#[derive(Debug, Error)]
#[error("unknown language '{0}' (expected 'tr' or 'en')")]
pub struct UnknownLanguage(String);

impl FromStr for Language {
    type Err = UnknownLanguage;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tr" | "tr-tr" | "turkish" | "türkçe" => Ok(Self::Turkish),
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::English),
            _ => Err(UnknownLanguage(s.to_owned())),
        }
    }
}

/// User visible texts of the drawer.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub open_in_maps     : &'static str,
    pub get_directions   : &'static str,
    pub copy             : &'static str,
    pub source           : &'static str,
    pub needs            : &'static str,
    pub help_content     : &'static str,
    pub show_saved_data  : &'static str,
    pub address_copied   : &'static str,
    pub close            : &'static str,
    water                : &'static str,
    food                 : &'static str,
    blanket              : &'static str,
    team                 : &'static str,
}

const TURKISH: Labels = Labels {
    open_in_maps: "Google Haritalarda Aç",
    get_directions: "Yol Tarifi Al",
    copy: "Kopyala",
    source: "Kaynak",
    needs: "İhtiyaç",
    help_content: "Yardım İçeriği",
    show_saved_data: "Kayıtlı veriyi göster",
    address_copied: "Adres Kopyalandı",
    close: "Kapat",
    water: "Su",
    food: "Erzak",
    blanket: "Battaniye",
    team: "Ekip",
};

const ENGLISH: Labels = Labels {
    open_in_maps: "Open in Google Maps",
    get_directions: "Get directions",
    copy: "Copy",
    source: "Source",
    needs: "Needs",
    help_content: "Help request",
    show_saved_data: "Show saved data",
    address_copied: "Address copied",
    close: "Close",
    water: "Water",
    food: "Supplies",
    blanket: "Blankets",
    team: "Team",
};

impl Labels {
    #[must_use]
    pub const fn for_language(language: Language) -> &'static Self {
        match language {
            Language::Turkish => &TURKISH,
            Language::English => &ENGLISH,
        }
    }

    #[must_use]
    pub const fn need(&self, need: Need) -> &'static str {
        match need {
            Need::Water => self.water,
            Need::Food => self.food,
            Need::Blanket => self.blanket,
            Need::Team => self.team,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_language() {
        assert_eq!("tr".parse::<Language>().unwrap(), Language::Turkish);
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::English);
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn turkish_is_default() {
        let labels = Labels::for_language(Language::default());
        assert_eq!(labels.copy, "Kopyala");
        assert_eq!(labels.address_copied, "Adres Kopyalandı");
    }

    #[test]
    fn need_labels() {
        let labels = Labels::for_language(Language::Turkish);
        let needs: Vec<_> = Need::all().map(|n| labels.need(n)).collect();
        assert_eq!(needs, ["Su", "Erzak", "Battaniye", "Ekip"]);
    }
}
