use crate::domain::common::lenient::{opt_text, opt_u32};
use crate::domain::common::CatalogResource;
use serde::{Deserialize, Serialize};

/// Grape variety
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Grape {
    pub slug: String,
    pub name: String,

    #[serde(default, deserialize_with = "opt_text")]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,

    /// Comma-delimited tasting notes
    #[serde(default, deserialize_with = "opt_text")]
    pub characteristics: Option<String>,

    #[serde(default, deserialize_with = "opt_u32")]
    pub wine_count: Option<u32>,
}

impl Grape {
    pub const RESOURCE: CatalogResource = CatalogResource::Grapes;

    pub fn route(&self) -> String {
        Self::RESOURCE.detail_route(&self.slug)
    }

    pub fn color_category(&self) -> GrapeColor {
        GrapeColor::classify(self.color.as_deref())
    }

    /// Individual characteristics, trimmed, blanks skipped
    pub fn characteristics_list(&self) -> Vec<String> {
        self.characteristics
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }
}

// ============================================================================
// Color category
// ============================================================================

/// Display bucket inferred from the free-text `color` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrapeColor {
    Red,
    White,
    Rose,
    Other,
}

impl GrapeColor {
    /// Checked in order; the first bucket with a matching marker wins
    const MARKERS: [(GrapeColor, &'static [&'static str]); 3] = [
        (GrapeColor::Red, &["red", "tint"]),
        (GrapeColor::White, &["white", "branc"]),
        (GrapeColor::Rose, &["rosé", "rose", "rosa"]),
    ];

    /// Case-insensitive substring match against the color markers
    pub fn classify(color: Option<&str>) -> Self {
        let Some(color) = color else {
            return GrapeColor::Other;
        };
        let lower = color.to_lowercase();
        Self::MARKERS
            .iter()
            .find(|(_, markers)| markers.iter().any(|m| lower.contains(m)))
            .map(|(category, _)| *category)
            .unwrap_or(GrapeColor::Other)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrapeColor::Red => "Uvas Tintas",
            GrapeColor::White => "Uvas Brancas",
            GrapeColor::Rose => "Uvas Rosé",
            GrapeColor::Other => "Outras",
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            GrapeColor::Red => "red",
            GrapeColor::White => "white",
            GrapeColor::Rose => "rose",
            GrapeColor::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grape(color: Option<&str>) -> Grape {
        Grape {
            slug: "g".into(),
            name: "G".into(),
            color: color.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_color_buckets() {
        assert_eq!(grape(Some("Tinta")).color_category().label(), "Uvas Tintas");
        assert_eq!(grape(Some("Branco")).color_category().label(), "Uvas Brancas");
        assert_eq!(grape(Some("Rosé")).color_category().label(), "Uvas Rosé");
        assert_eq!(grape(None).color_category().label(), "Outras");
        assert_eq!(grape(Some("Cinza")).color_category(), GrapeColor::Other);
    }

    #[test]
    fn test_color_matching_ignores_case_and_takes_first_bucket() {
        assert_eq!(GrapeColor::classify(Some("RED")), GrapeColor::Red);
        assert_eq!(GrapeColor::classify(Some("white")), GrapeColor::White);
        assert_eq!(GrapeColor::classify(Some("Rosa")), GrapeColor::Rose);
        // "tinta rosada" carries both markers; red is checked first
        assert_eq!(GrapeColor::classify(Some("Tinta rosada")), GrapeColor::Red);
    }

    #[test]
    fn test_characteristics_split_on_commas() {
        let g = Grape {
            characteristics: Some("Frutado, taninos firmes,, acidez alta ".into()),
            ..Default::default()
        };
        assert_eq!(
            g.characteristics_list(),
            vec!["Frutado", "taninos firmes", "acidez alta"]
        );
        assert!(Grape::default().characteristics_list().is_empty());
    }
}
