//! Client-side grouping for list pages.
//!
//! Groups appear in the order their key is first seen and items inside a
//! group keep their input order, so the API's `ordering` is never undone.

use crate::domain::a002_region::aggregate::Region;
use crate::domain::a005_grape::aggregate::Grape;

/// Label used for regions whose country is missing
pub const UNKNOWN_COUNTRY_GROUP: &str = "Outros";

#[derive(Debug, Clone, PartialEq)]
pub struct Group<T> {
    pub label: String,
    pub items: Vec<T>,
}

pub fn group_by_key<T, F>(items: Vec<T>, key: F) -> Vec<Group<T>>
where
    F: Fn(&T) -> String,
{
    let mut groups: Vec<Group<T>> = Vec::new();
    for item in items {
        let label = key(&item);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.items.push(item),
            None => groups.push(Group {
                label,
                items: vec![item],
            }),
        }
    }
    groups
}

pub fn flatten_groups<T>(groups: Vec<Group<T>>) -> Vec<T> {
    groups.into_iter().flat_map(|g| g.items).collect()
}

pub fn group_regions_by_country(regions: Vec<Region>) -> Vec<Group<Region>> {
    group_by_key(regions, |r| {
        r.country_name()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(UNKNOWN_COUNTRY_GROUP)
            .to_string()
    })
}

pub fn group_grapes_by_color(grapes: Vec<Grape>) -> Vec<Group<Grape>> {
    group_by_key(grapes, |g| g.color_category().label().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::CountryRef;

    fn region(slug: &str, country: Option<&str>) -> Region {
        Region {
            slug: slug.to_string(),
            name: slug.to_uppercase(),
            country: country.map(|c| CountryRef {
                slug: c.to_lowercase(),
                name: c.to_string(),
                regions_count: None,
            }),
            ..Default::default()
        }
    }

    fn slugs(regions: &[Region]) -> Vec<String> {
        regions.iter().map(|r| r.slug.clone()).collect()
    }

    #[test]
    fn test_groups_follow_first_appearance() {
        let input = vec![
            region("douro", Some("Portugal")),
            region("mendoza", Some("Argentina")),
            region("alentejo", Some("Portugal")),
            region("misterio", None),
        ];
        let groups = group_regions_by_country(input);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Portugal", "Argentina", "Outros"]);
        assert_eq!(slugs(&groups[0].items), vec!["douro", "alentejo"]);
    }

    #[test]
    fn test_grouping_then_flattening_keeps_the_multiset() {
        let input = vec![
            region("b", Some("Chile")),
            region("a", Some("Itália")),
            region("c", Some("Chile")),
            region("d", None),
            region("e", Some("Itália")),
        ];
        let mut before = slugs(&input);
        let mut after = slugs(&flatten_groups(group_regions_by_country(input)));
        assert_eq!(before.len(), after.len());
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_grapes_group_by_color_label() {
        let grape = |slug: &str, color: Option<&str>| Grape {
            slug: slug.into(),
            name: slug.into(),
            color: color.map(str::to_string),
            ..Default::default()
        };
        let groups = group_grapes_by_color(vec![
            grape("touriga", Some("Tinta")),
            grape("alvarinho", Some("Branca")),
            grape("baga", Some("tinta")),
            grape("misterio", None),
        ]);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Uvas Tintas", "Uvas Brancas", "Outras"]);
        assert_eq!(groups[0].items.len(), 2);
    }
}
