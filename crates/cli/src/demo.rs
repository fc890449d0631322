//! Demo catalogue loaded at start unless `STOCKROOM_SEED_DEMO` turns it off.

use stockroom_core::DomainResult;
use stockroom_inventory::{ExpirationDate, Material};

const CATALOGUE: &[(&str, &str, f64, (u32, u32, i32))] = &[
    ("Wheat flour", "WindMill", 10.5, (24, 5, 2025)),
    ("Sugar", "HomeGoods", 20.0, (20, 6, 2024)),
    ("Eggs", "JohnsFarm", 100.0, (3, 4, 2022)),
    ("Salt", "HomeGoods", 15.0, (30, 10, 2030)),
    ("Baking powder", "HomeGoods", 1.25, (10, 11, 2021)),
    ("Butter", "JohnsFarm", 10.5, (7, 3, 2022)),
    ("Cake flour", "CakesSupply", 15.3, (10, 5, 2022)),
    ("Pastry flour", "CakesSupply", 5.0, (10, 5, 2022)),
    ("Sprouted flour", "CakesSupply", 25.0, (12, 3, 2022)),
    ("Seeds mix", "HomeGoods", 33.0, (3, 3, 2022)),
];

pub fn catalogue() -> DomainResult<Vec<Material>> {
    CATALOGUE
        .iter()
        .map(|&(name, supplier, quantity, (day, month, year))| {
            Material::new(name, supplier, quantity, ExpirationDate::from_dmy(day, month, year)?)
        })
        .collect()
}
