//! Country name → flag lookup.
//!
//! One ordered bilingual (Portuguese/English) table feeds both the ISO code
//! used by the flag icon sprite and the emoji glyph. Resolution runs in three
//! tiers: exact name, case-insensitive name, then case-insensitive substring
//! in either direction. The substring tier is a heuristic: the first row that
//! satisfies it wins, so compound or unlisted names can resolve to a
//! neighbouring country.

/// Glyph used when a name resolves to nothing
pub const GLOBE_GLYPH: &str = "🌍";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryFlag {
    pub name: &'static str,
    /// ISO 3166-1 alpha-2, lowercase
    pub code: &'static str,
    pub emoji: &'static str,
}

// Scotland and Wales have their own emoji but the icon sprite only has "gb"
const COUNTRY_FLAGS: &[CountryFlag] = &[
    CountryFlag { name: "França", code: "fr", emoji: "🇫🇷" },
    CountryFlag { name: "France", code: "fr", emoji: "🇫🇷" },
    CountryFlag { name: "Itália", code: "it", emoji: "🇮🇹" },
    CountryFlag { name: "Italy", code: "it", emoji: "🇮🇹" },
    CountryFlag { name: "Espanha", code: "es", emoji: "🇪🇸" },
    CountryFlag { name: "Spain", code: "es", emoji: "🇪🇸" },
    CountryFlag { name: "Portugal", code: "pt", emoji: "🇵🇹" },
    CountryFlag { name: "Estados Unidos", code: "us", emoji: "🇺🇸" },
    CountryFlag { name: "United States", code: "us", emoji: "🇺🇸" },
    CountryFlag { name: "EUA", code: "us", emoji: "🇺🇸" },
    CountryFlag { name: "USA", code: "us", emoji: "🇺🇸" },
    CountryFlag { name: "Argentina", code: "ar", emoji: "🇦🇷" },
    CountryFlag { name: "Chile", code: "cl", emoji: "🇨🇱" },
    CountryFlag { name: "Brasil", code: "br", emoji: "🇧🇷" },
    CountryFlag { name: "Brazil", code: "br", emoji: "🇧🇷" },
    CountryFlag { name: "Alemanha", code: "de", emoji: "🇩🇪" },
    CountryFlag { name: "Germany", code: "de", emoji: "🇩🇪" },
    CountryFlag { name: "Áustria", code: "at", emoji: "🇦🇹" },
    CountryFlag { name: "Austria", code: "at", emoji: "🇦🇹" },
    CountryFlag { name: "Austrália", code: "au", emoji: "🇦🇺" },
    CountryFlag { name: "Australia", code: "au", emoji: "🇦🇺" },
    CountryFlag { name: "Nova Zelândia", code: "nz", emoji: "🇳🇿" },
    CountryFlag { name: "New Zealand", code: "nz", emoji: "🇳🇿" },
    CountryFlag { name: "África do Sul", code: "za", emoji: "🇿🇦" },
    CountryFlag { name: "South Africa", code: "za", emoji: "🇿🇦" },
    CountryFlag { name: "Grécia", code: "gr", emoji: "🇬🇷" },
    CountryFlag { name: "Greece", code: "gr", emoji: "🇬🇷" },
    CountryFlag { name: "Hungria", code: "hu", emoji: "🇭🇺" },
    CountryFlag { name: "Hungary", code: "hu", emoji: "🇭🇺" },
    CountryFlag { name: "Romênia", code: "ro", emoji: "🇷🇴" },
    CountryFlag { name: "Romania", code: "ro", emoji: "🇷🇴" },
    CountryFlag { name: "Bulgária", code: "bg", emoji: "🇧🇬" },
    CountryFlag { name: "Bulgaria", code: "bg", emoji: "🇧🇬" },
    CountryFlag { name: "Croácia", code: "hr", emoji: "🇭🇷" },
    CountryFlag { name: "Croatia", code: "hr", emoji: "🇭🇷" },
    CountryFlag { name: "Eslovênia", code: "si", emoji: "🇸🇮" },
    CountryFlag { name: "Slovenia", code: "si", emoji: "🇸🇮" },
    CountryFlag { name: "Geórgia", code: "ge", emoji: "🇬🇪" },
    CountryFlag { name: "Georgia", code: "ge", emoji: "🇬🇪" },
    CountryFlag { name: "Moldávia", code: "md", emoji: "🇲🇩" },
    CountryFlag { name: "Moldova", code: "md", emoji: "🇲🇩" },
    CountryFlag { name: "Ucrânia", code: "ua", emoji: "🇺🇦" },
    CountryFlag { name: "Ukraine", code: "ua", emoji: "🇺🇦" },
    CountryFlag { name: "Suíça", code: "ch", emoji: "🇨🇭" },
    CountryFlag { name: "Switzerland", code: "ch", emoji: "🇨🇭" },
    CountryFlag { name: "Líbano", code: "lb", emoji: "🇱🇧" },
    CountryFlag { name: "Lebanon", code: "lb", emoji: "🇱🇧" },
    CountryFlag { name: "Israel", code: "il", emoji: "🇮🇱" },
    CountryFlag { name: "Turquia", code: "tr", emoji: "🇹🇷" },
    CountryFlag { name: "Turkey", code: "tr", emoji: "🇹🇷" },
    CountryFlag { name: "Marrocos", code: "ma", emoji: "🇲🇦" },
    CountryFlag { name: "Morocco", code: "ma", emoji: "🇲🇦" },
    CountryFlag { name: "Tunísia", code: "tn", emoji: "🇹🇳" },
    CountryFlag { name: "Tunisia", code: "tn", emoji: "🇹🇳" },
    CountryFlag { name: "Argélia", code: "dz", emoji: "🇩🇿" },
    CountryFlag { name: "Algeria", code: "dz", emoji: "🇩🇿" },
    CountryFlag { name: "China", code: "cn", emoji: "🇨🇳" },
    CountryFlag { name: "Japão", code: "jp", emoji: "🇯🇵" },
    CountryFlag { name: "Japan", code: "jp", emoji: "🇯🇵" },
    CountryFlag { name: "Coreia do Sul", code: "kr", emoji: "🇰🇷" },
    CountryFlag { name: "South Korea", code: "kr", emoji: "🇰🇷" },
    CountryFlag { name: "Índia", code: "in", emoji: "🇮🇳" },
    CountryFlag { name: "India", code: "in", emoji: "🇮🇳" },
    CountryFlag { name: "Tailândia", code: "th", emoji: "🇹🇭" },
    CountryFlag { name: "Thailand", code: "th", emoji: "🇹🇭" },
    CountryFlag { name: "México", code: "mx", emoji: "🇲🇽" },
    CountryFlag { name: "Mexico", code: "mx", emoji: "🇲🇽" },
    CountryFlag { name: "Peru", code: "pe", emoji: "🇵🇪" },
    CountryFlag { name: "Uruguai", code: "uy", emoji: "🇺🇾" },
    CountryFlag { name: "Uruguay", code: "uy", emoji: "🇺🇾" },
    CountryFlag { name: "Canadá", code: "ca", emoji: "🇨🇦" },
    CountryFlag { name: "Canada", code: "ca", emoji: "🇨🇦" },
    CountryFlag { name: "Reino Unido", code: "gb", emoji: "🇬🇧" },
    CountryFlag { name: "United Kingdom", code: "gb", emoji: "🇬🇧" },
    CountryFlag { name: "Inglaterra", code: "gb", emoji: "🇬🇧" },
    CountryFlag { name: "England", code: "gb", emoji: "🇬🇧" },
    CountryFlag { name: "Escócia", code: "gb", emoji: "🏴󠁧󠁢󠁳󠁣󠁴󠁿" },
    CountryFlag { name: "Scotland", code: "gb", emoji: "🏴󠁧󠁢󠁳󠁣󠁴󠁿" },
    CountryFlag { name: "País de Gales", code: "gb", emoji: "🏴󠁧󠁢󠁷󠁬󠁳󠁿" },
    CountryFlag { name: "Wales", code: "gb", emoji: "🏴󠁧󠁢󠁷󠁬󠁳󠁿" },
    CountryFlag { name: "Irlanda", code: "ie", emoji: "🇮🇪" },
    CountryFlag { name: "Ireland", code: "ie", emoji: "🇮🇪" },
    CountryFlag { name: "Holanda", code: "nl", emoji: "🇳🇱" },
    CountryFlag { name: "Netherlands", code: "nl", emoji: "🇳🇱" },
    CountryFlag { name: "Países Baixos", code: "nl", emoji: "🇳🇱" },
    CountryFlag { name: "Bélgica", code: "be", emoji: "🇧🇪" },
    CountryFlag { name: "Belgium", code: "be", emoji: "🇧🇪" },
    CountryFlag { name: "Luxemburgo", code: "lu", emoji: "🇱🇺" },
    CountryFlag { name: "Luxembourg", code: "lu", emoji: "🇱🇺" },
    CountryFlag { name: "Dinamarca", code: "dk", emoji: "🇩🇰" },
    CountryFlag { name: "Denmark", code: "dk", emoji: "🇩🇰" },
    CountryFlag { name: "Suécia", code: "se", emoji: "🇸🇪" },
    CountryFlag { name: "Sweden", code: "se", emoji: "🇸🇪" },
    CountryFlag { name: "Noruega", code: "no", emoji: "🇳🇴" },
    CountryFlag { name: "Norway", code: "no", emoji: "🇳🇴" },
    CountryFlag { name: "Finlândia", code: "fi", emoji: "🇫🇮" },
    CountryFlag { name: "Finland", code: "fi", emoji: "🇫🇮" },
    CountryFlag { name: "Rússia", code: "ru", emoji: "🇷🇺" },
    CountryFlag { name: "Russia", code: "ru", emoji: "🇷🇺" },
    CountryFlag { name: "Polônia", code: "pl", emoji: "🇵🇱" },
    CountryFlag { name: "Poland", code: "pl", emoji: "🇵🇱" },
    CountryFlag { name: "República Tcheca", code: "cz", emoji: "🇨🇿" },
    CountryFlag { name: "Czech Republic", code: "cz", emoji: "🇨🇿" },
    CountryFlag { name: "Eslováquia", code: "sk", emoji: "🇸🇰" },
    CountryFlag { name: "Slovakia", code: "sk", emoji: "🇸🇰" },
];

fn resolve(country_name: &str) -> Option<&'static CountryFlag> {
    if country_name.trim().is_empty() {
        return None;
    }

    if let Some(row) = COUNTRY_FLAGS.iter().find(|row| row.name == country_name) {
        return Some(row);
    }

    let lower = country_name.to_lowercase();
    if let Some(row) = COUNTRY_FLAGS
        .iter()
        .find(|row| row.name.to_lowercase() == lower)
    {
        return Some(row);
    }

    COUNTRY_FLAGS.iter().find(|row| {
        let key = row.name.to_lowercase();
        key.contains(&lower) || lower.contains(&key)
    })
}

/// ISO code for the flag icon sprite, `None` when the name is unknown
pub fn country_code_for(country_name: &str) -> Option<&'static str> {
    resolve(country_name).map(|row| row.code)
}

/// CSS classes of the `flag-icons` sprite, e.g. `"fi fi-fr"`
pub fn flag_icon_class(country_name: &str) -> Option<String> {
    country_code_for(country_name).map(|code| format!("fi fi-{}", code))
}

/// Flag emoji, or the globe glyph when the name is unknown
pub fn country_flag_for(country_name: &str) -> &'static str {
    resolve(country_name)
        .map(|row| row.emoji)
        .unwrap_or(GLOBE_GLYPH)
}

/// `"🇫🇷 França"`; empty for a blank name
pub fn country_with_flag(country_name: &str) -> String {
    if country_name.trim().is_empty() {
        return String::new();
    }
    format!("{} {}", country_flag_for(country_name), country_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_languages_resolve_to_same_flag() {
        assert_eq!(country_flag_for("França"), "🇫🇷");
        assert_eq!(country_flag_for("France"), "🇫🇷");
        assert_eq!(country_code_for("França"), Some("fr"));
        assert_eq!(country_code_for("France"), Some("fr"));
    }

    #[test]
    fn test_unknown_name_falls_back_to_globe() {
        assert_eq!(country_flag_for("Nonexistent-Land"), GLOBE_GLYPH);
        assert_eq!(country_code_for("Nonexistent-Land"), None);
        assert_eq!(country_flag_for(""), GLOBE_GLYPH);
        assert_eq!(country_code_for("   "), None);
    }

    #[test]
    fn test_case_insensitive_exact_match() {
        assert_eq!(country_code_for("ITÁLIA"), Some("it"));
        assert_eq!(country_code_for("new zealand"), Some("nz"));
    }

    #[test]
    fn test_substring_match_either_direction() {
        // name contains a table key
        assert_eq!(country_code_for("Portugal Continental"), Some("pt"));
        // table key contains the name
        assert_eq!(country_code_for("Zelândia"), Some("nz"));
    }

    #[test]
    fn test_substring_match_is_first_row_wins() {
        // "Estados Unidos" and "Reino Unido" both contain "unido"; the
        // earlier row is returned
        assert_eq!(country_code_for("Unido"), Some("us"));
    }

    #[test]
    fn test_scotland_keeps_own_emoji_but_shares_code() {
        assert_eq!(country_code_for("Scotland"), Some("gb"));
        assert_ne!(country_flag_for("Scotland"), country_flag_for("England"));
    }

    #[test]
    fn test_country_with_flag() {
        assert_eq!(country_with_flag("Chile"), "🇨🇱 Chile");
        assert_eq!(country_with_flag(""), "");
    }

    #[test]
    fn test_icon_class_comes_from_iso_code() {
        assert_eq!(flag_icon_class("Itália").as_deref(), Some("fi fi-it"));
        assert_eq!(flag_icon_class("Nonexistent-Land"), None);
        assert_eq!(flag_icon_class(""), None);
    }
}
