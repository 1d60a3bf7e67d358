//! schema.org JSON-LD blocks for detail pages.
//!
//! Absent source data means the property is left out, never set to `null`.

use crate::domain::a003_winery::aggregate::Winery;
use crate::domain::a004_wine::aggregate::Wine;
use serde_json::{json, Map, Value};

const SCHEMA_CONTEXT: &str = "https://schema.org";
const PRICE_CURRENCY: &str = "BRL";

fn put(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(v) = value {
        map.insert(key.to_string(), v);
    }
}

fn offer(price: Option<f64>) -> Option<Value> {
    price.filter(|p| *p > 0.0).map(|p| {
        json!({
            "@type": "Offer",
            "price": p,
            "priceCurrency": PRICE_CURRENCY,
        })
    })
}

fn aggregate_rating(rating: Option<f64>) -> Option<Value> {
    rating.filter(|r| *r > 0.0).map(|r| {
        json!({
            "@type": "AggregateRating",
            "ratingValue": r,
            "bestRating": 5,
            "worstRating": 1,
        })
    })
}

fn wine_description(wine: &Wine) -> String {
    match &wine.description {
        Some(d) => d.clone(),
        None => {
            let kind = wine
                .wine_type
                .as_deref()
                .map(str::to_lowercase)
                .unwrap_or_else(|| "vinho".to_string());
            format!("{} é um {}", wine.name, kind)
        }
    }
}

fn winery_product(wine: &Wine, position: usize, brand: &str) -> Value {
    let mut product = Map::new();
    product.insert("@type".into(), json!("Product"));
    product.insert("position".into(), json!(position));
    product.insert("name".into(), json!(wine.name));
    product.insert("description".into(), json!(wine_description(wine)));
    put(&mut product, "category", wine.wine_type.as_ref().map(|t| json!(t)));
    product.insert("brand".into(), json!({"@type": "Brand", "name": brand}));
    put(&mut product, "offers", offer(wine.price));
    put(&mut product, "aggregateRating", aggregate_rating(wine.rating));
    Value::Object(product)
}

/// `Winery` block with address, coordinates and a catalog of its wines
pub fn winery_json_ld(winery: &Winery) -> Value {
    let mut ld = Map::new();
    ld.insert("@context".into(), json!(SCHEMA_CONTEXT));
    ld.insert("@type".into(), json!("Winery"));
    ld.insert("name".into(), json!(winery.name));
    ld.insert(
        "description".into(),
        json!(winery
            .description
            .clone()
            .unwrap_or_else(|| format!("{} é uma vinícola", winery.name))),
    );
    put(&mut ld, "foundingDate", winery.established_year.map(|y| json!(y)));

    put(
        &mut ld,
        "address",
        winery.region.as_ref().map(|region| {
            let mut address = Map::new();
            address.insert("@type".into(), json!("PostalAddress"));
            address.insert("addressRegion".into(), json!(region.name));
            put(&mut address, "addressCountry", region.country_name().map(|c| json!(c)));
            Value::Object(address)
        }),
    );

    put(
        &mut ld,
        "geo",
        winery.coordinates().map(|(lat, lon)| {
            json!({
                "@type": "GeoCoordinates",
                "latitude": lat,
                "longitude": lon,
            })
        }),
    );

    if !winery.wines.is_empty() {
        let items: Vec<Value> = winery
            .wines
            .iter()
            .enumerate()
            .map(|(i, wine)| winery_product(wine, i + 1, &winery.name))
            .collect();
        ld.insert(
            "hasOfferCatalog".into(),
            json!({
                "@type": "OfferCatalog",
                "name": "Vinhos",
                "numberOfItems": items.len(),
                "itemListElement": items,
            }),
        );
    }

    Value::Object(ld)
}

/// `Product` block for a wine page
pub fn wine_json_ld(wine: &Wine, image_url: Option<&str>) -> Value {
    let mut ld = Map::new();
    ld.insert("@context".into(), json!(SCHEMA_CONTEXT));
    ld.insert("@type".into(), json!("Product"));
    ld.insert("name".into(), json!(wine.name));
    ld.insert("description".into(), json!(wine_description(wine)));
    put(&mut ld, "category", wine.wine_type.as_ref().map(|t| json!(t)));
    put(&mut ld, "image", image_url.map(|u| json!(u)));
    put(
        &mut ld,
        "brand",
        wine.winery
            .as_ref()
            .map(|w| json!({"@type": "Brand", "name": w.name})),
    );
    put(&mut ld, "offers", offer(wine.price));
    put(&mut ld, "aggregateRating", aggregate_rating(wine.rating));
    Value::Object(ld)
}

/// Serialized block safe to place inside a `<script>` element
pub fn to_script_body(ld: &Value) -> String {
    ld.to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{CountryRef, RegionRef, WineryRef};

    fn sample_winery() -> Winery {
        Winery {
            slug: "crasto".into(),
            name: "Quinta do Crasto".into(),
            established_year: Some(1615),
            latitude: Some(41.16),
            longitude: Some(-7.55),
            region: Some(RegionRef {
                slug: "douro".into(),
                name: "Douro".into(),
                country: Some(CountryRef {
                    slug: "portugal".into(),
                    name: "Portugal".into(),
                    regions_count: None,
                }),
            }),
            wines: vec![
                Wine {
                    slug: "tinto".into(),
                    name: "Crasto Tinto".into(),
                    wine_type: Some("Vinho Tinto".into()),
                    price: Some(120.0),
                    rating: Some(4.2),
                    ..Default::default()
                },
                Wine {
                    slug: "branco".into(),
                    name: "Crasto Branco".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_winery_block() {
        let ld = winery_json_ld(&sample_winery());
        assert_eq!(ld["@type"], "Winery");
        assert_eq!(ld["description"], "Quinta do Crasto é uma vinícola");
        assert_eq!(ld["foundingDate"], 1615);
        assert_eq!(ld["address"]["addressCountry"], "Portugal");
        assert_eq!(ld["geo"]["latitude"], 41.16);
        let catalog = &ld["hasOfferCatalog"];
        assert_eq!(catalog["numberOfItems"], 2);
        let first = &catalog["itemListElement"][0];
        assert_eq!(first["position"], 1);
        assert_eq!(first["description"], "Crasto Tinto é um vinho tinto");
        assert_eq!(first["offers"]["priceCurrency"], "BRL");
        assert_eq!(first["brand"]["name"], "Quinta do Crasto");
    }

    #[test]
    fn test_absent_data_is_omitted_not_null() {
        let ld = winery_json_ld(&Winery {
            slug: "x".into(),
            name: "X".into(),
            latitude: Some(1.0),
            ..Default::default()
        });
        let obj = ld.as_object().unwrap();
        for key in ["foundingDate", "address", "geo", "hasOfferCatalog"] {
            assert!(!obj.contains_key(key), "{} should be omitted", key);
        }

        let winery = sample_winery();
        let second = &winery_json_ld(&winery)["hasOfferCatalog"]["itemListElement"][1];
        let product = second.as_object().unwrap();
        assert!(!product.contains_key("offers"));
        assert!(!product.contains_key("aggregateRating"));
        assert!(!product.contains_key("category"));
        assert!(!ld.to_string().contains("null"));
    }

    #[test]
    fn test_wine_product_block() {
        let wine = Wine {
            slug: "don".into(),
            name: "Don Melchor".into(),
            description: Some("Cabernet </script> de Puente Alto".into()),
            rating: Some(4.5),
            winery: Some(WineryRef {
                slug: "concha".into(),
                name: "Concha y Toro".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let ld = wine_json_ld(&wine, Some("http://media/1.png"));
        assert_eq!(ld["@type"], "Product");
        assert_eq!(ld["image"], "http://media/1.png");
        assert_eq!(ld["brand"]["name"], "Concha y Toro");
        assert_eq!(ld["aggregateRating"]["bestRating"], 5);
        assert!(ld.get("offers").is_none());
        assert!(!to_script_body(&ld).contains("</script>"));
    }
}
