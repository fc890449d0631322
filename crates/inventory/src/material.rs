use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use stockroom_core::{DomainError, DomainResult, Entity, ValueObject};

/// Expiration date of a material (calendar day, no time zone).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpirationDate(NaiveDate);

impl ExpirationDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build from day/month/year; impossible dates are rejected.
    pub fn from_dmy(day: u32, month: u32, year: i32) -> DomainResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                DomainError::invalid_input(format!("{day}/{month}/{year} is not a calendar date"))
            })
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Past due: strictly before `today`. A material expiring today is still good.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.0 < today
    }

    /// [`Self::is_expired_on`] against the local calendar day.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Local::now().date_naive())
    }
}

impl core::fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}/{}", self.day(), self.month(), self.year())
    }
}

impl From<NaiveDate> for ExpirationDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl ValueObject for ExpirationDate {}

/// Identity of a material: name, supplier and expiration date.
///
/// Quantity is deliberately not part of the key; two stock entries of the
/// same item from the same supplier expiring on the same day are one row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MaterialKey {
    name: String,
    supplier: String,
    expiration: ExpirationDate,
}

impl MaterialKey {
    pub fn new(
        name: impl Into<String>,
        supplier: impl Into<String>,
        expiration: ExpirationDate,
    ) -> Self {
        Self {
            name: name.into(),
            supplier: supplier.into(),
            expiration,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn expiration(&self) -> ExpirationDate {
        self.expiration
    }
}

impl core::fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} / {} / {}", self.name, self.supplier, self.expiration)
    }
}

impl ValueObject for MaterialKey {}

/// A stocked material.
///
/// Materials are replaced wholesale, never edited in place; the only way to
/// get a different quantity is to build a new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    #[serde(flatten)]
    key: MaterialKey,
    quantity: f64,
}

impl Material {
    pub fn new(
        name: impl Into<String>,
        supplier: impl Into<String>,
        quantity: f64,
        expiration: ExpirationDate,
    ) -> DomainResult<Self> {
        Self::from_key(MaterialKey::new(name, supplier, expiration), quantity)
    }

    pub fn from_key(key: MaterialKey, quantity: f64) -> DomainResult<Self> {
        if key.name.trim().is_empty() {
            return Err(DomainError::invalid_input("name cannot be empty"));
        }
        if key.supplier.trim().is_empty() {
            return Err(DomainError::invalid_input("supplier cannot be empty"));
        }
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(DomainError::invalid_input(format!(
                "quantity must be a non-negative number, got {quantity}"
            )));
        }
        Ok(Self { key, quantity })
    }

    pub fn name(&self) -> &str {
        &self.key.name
    }

    pub fn supplier(&self) -> &str {
        &self.key.supplier
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn expiration(&self) -> ExpirationDate {
        self.key.expiration
    }

    /// Same identity, quantity increased by `extra`.
    pub(crate) fn restocked(self, extra: f64) -> Self {
        Self {
            quantity: self.quantity + extra,
            ..self
        }
    }
}

impl Entity for Material {
    type Key = MaterialKey;

    fn key(&self) -> &MaterialKey {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> ExpirationDate {
        ExpirationDate::from_dmy(day, month, year).unwrap()
    }

    #[test]
    fn from_dmy_rejects_impossible_dates() {
        assert!(ExpirationDate::from_dmy(31, 2, 2024).is_err());
        assert!(ExpirationDate::from_dmy(0, 1, 2024).is_err());
        assert!(ExpirationDate::from_dmy(1, 13, 2024).is_err());
        assert!(ExpirationDate::from_dmy(29, 2, 2024).is_ok());
    }

    #[test]
    fn date_accessors_and_display() {
        let d = date(1, 6, 2024);
        assert_eq!((d.day(), d.month(), d.year()), (1, 6, 2024));
        assert_eq!(d.to_string(), "1/6/2024");
    }

    #[test]
    fn expiry_is_strictly_before_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        assert!(!date(15, 6, 2024).is_expired_on(today));
        assert!(date(14, 6, 2024).is_expired_on(today));
        assert!(date(14, 5, 2024).is_expired_on(today));
        assert!(date(15, 6, 2023).is_expired_on(today));
        assert!(!date(16, 6, 2024).is_expired_on(today));
    }

    #[test]
    fn identity_ignores_quantity() {
        let a = Material::new("testName", "testSupplier", 12.34, date(1, 2, 2003)).unwrap();
        let b = Material::new("testName", "testSupplier", 12.3, date(1, 2, 2003)).unwrap();
        let c = Material::new("testName2", "testSupplier2", 12.345, date(2, 3, 2004)).unwrap();

        assert!(a.same_identity(&b));
        assert_ne!(a, b);
        assert!(!a.same_identity(&c));
        assert!(!b.same_identity(&c));
    }

    #[test]
    fn construction_validates_input() {
        let d = date(1, 2, 2003);

        let err = Material::new("  ", "s", 1.0, d).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        let err = Material::new("n", "", 1.0, d).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        assert!(Material::new("n", "s", f64::NAN, d).is_err());
        assert!(Material::new("n", "s", -1.0, d).is_err());
        assert!(Material::new("n", "s", 0.0, d).is_ok());
    }

    #[test]
    fn restocked_keeps_identity() {
        let m = Material::new("Sugar", "HomeGoods", 20.0, date(1, 6, 2024)).unwrap();
        let key = m.key().clone();

        let merged = m.restocked(5.0);
        assert_eq!(merged.quantity(), 25.0);
        assert_eq!(merged.key(), &key);
    }

    #[test]
    fn serializes_flat() {
        let m = Material::new("Salt", "HomeGoods", 15.0, date(30, 10, 2030)).unwrap();
        let json = serde_json::to_value(&m).unwrap();

        assert_eq!(json["name"], "Salt");
        assert_eq!(json["supplier"], "HomeGoods");
        assert_eq!(json["quantity"], 15.0);
        assert_eq!(json["expiration"], "2030-10-30");
    }
}
