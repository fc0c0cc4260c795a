use strum::{AsRefStr, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// Categories of help that are listed for every location.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumCount, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Need {
    Water,
    Food,
    Blanket,
    Team,
}

impl Need {
    /// All needs in display order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order() {
        let needs: Vec<_> = Need::all().collect();
        assert_eq!(
            needs,
            vec![Need::Water, Need::Food, Need::Blanket, Need::Team]
        );
        assert_eq!(needs.len(), Need::COUNT);
    }

    #[test]
    fn parse_kebab_case() {
        assert_eq!("blanket".parse::<Need>(), Ok(Need::Blanket));
        assert!("blankets".parse::<Need>().is_err());
        assert_eq!(Need::Team.as_ref(), "team");
    }
}
