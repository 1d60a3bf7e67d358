pub mod a001_country;
pub mod a002_region;
pub mod a003_winery;
pub mod a004_wine;
pub mod a005_grape;
