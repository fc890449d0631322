use stockroom_core::{Container, DomainError, DomainResult, Entity, Snapshot};

use crate::material::{Material, MaterialKey};

/// Starting capacity used when nothing else is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// Keyed collection of materials with merge-on-insert semantics.
///
/// Invariant: no two stored materials share a [`MaterialKey`].
#[derive(Debug, PartialEq)]
pub struct MaterialRepository {
    materials: Container<Material>,
}

impl MaterialRepository {
    pub fn with_capacity(capacity: usize) -> DomainResult<Self> {
        Ok(Self {
            materials: Container::with_capacity(capacity)?,
        })
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.materials.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Material> {
        self.materials.iter()
    }

    /// Position of the material carrying `key`. Linear scan.
    pub fn position(&self, key: &MaterialKey) -> Option<usize> {
        self.materials.iter().position(|m| m.key() == key)
    }

    pub fn contains(&self, key: &MaterialKey) -> bool {
        self.position(key).is_some()
    }

    /// Insert `material`, or merge it into the row with the same key.
    ///
    /// On a merge the existing row is replaced by `material` carrying the
    /// summed quantity, so stock accumulates instead of duplicating rows.
    pub fn add(&mut self, material: Material) -> DomainResult<()> {
        match self.position(material.key()) {
            Some(index) => {
                let existing = self.materials.get(index).map_or(0.0, Material::quantity);
                self.materials.replace(index, material.restocked(existing))
            }
            None => self.materials.push(material),
        }
    }

    /// Replace the row identified by `key` with `replacement`, wholesale.
    ///
    /// Fails with `NotFound` when no row carries `key`, and with `Conflict`
    /// when `replacement` would collide with a different existing row.
    pub fn update(&mut self, key: &MaterialKey, replacement: Material) -> DomainResult<()> {
        let index = self.position(key).ok_or(DomainError::NotFound)?;

        if let Some(other) = self.position(replacement.key()) {
            if other != index {
                return Err(DomainError::conflict(format!(
                    "material {} already exists",
                    replacement.key()
                )));
            }
        }

        self.materials.replace(index, replacement)
    }

    /// Remove the row identified by `key`; the remaining rows keep their order.
    pub fn remove(&mut self, key: &MaterialKey) -> DomainResult<()> {
        let index = self.position(key).ok_or(DomainError::NotFound)?;
        self.materials.remove(index)
    }
}

impl Snapshot for MaterialRepository {
    /// Every material is cloned; the copy keeps the source's capacity.
    fn snapshot(&self) -> DomainResult<Self> {
        Ok(Self {
            materials: self.materials.snapshot()?,
        })
    }
}

impl<'a> IntoIterator for &'a MaterialRepository {
    type Item = &'a Material;
    type IntoIter = core::slice::Iter<'a, Material>;

    fn into_iter(self) -> Self::IntoIter {
        self.materials.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::ExpirationDate;
    use proptest::prelude::*;

    fn date(day: u32, month: u32, year: i32) -> ExpirationDate {
        ExpirationDate::from_dmy(day, month, year).unwrap()
    }

    fn material(name: &str, supplier: &str, quantity: f64, expiration: ExpirationDate) -> Material {
        Material::new(name, supplier, quantity, expiration).unwrap()
    }

    fn sample() -> (Material, Material, Material) {
        (
            material("testName", "testSupplier", 12.34, date(1, 2, 2003)),
            material("otherName", "otherSupplier", 23.45, date(3, 2, 2001)),
            material("anotherName", "anotherSupplier", 7.66, date(3, 2, 2001)),
        )
    }

    #[test]
    fn new_repository_is_empty() {
        let repo = MaterialRepository::with_capacity(DEFAULT_CAPACITY).unwrap();
        assert_eq!(repo.len(), 0);
        assert!(repo.is_empty());
        assert!(MaterialRepository::with_capacity(0).is_err());
    }

    #[test]
    fn position_and_get() {
        let (m1, m2, _) = sample();
        let mut repo = MaterialRepository::with_capacity(10).unwrap();
        repo.add(m1.clone()).unwrap();

        assert_eq!(repo.position(m2.key()), None);
        assert_eq!(repo.len(), 1);

        repo.add(m2.clone()).unwrap();
        assert_eq!(repo.position(m1.key()), Some(0));
        assert_eq!(repo.position(m2.key()), Some(1));
        assert_eq!(repo.get(0), Some(&m1));
        assert_eq!(repo.get(1), Some(&m2));
        assert_eq!(repo.get(2), None);
    }

    #[test]
    fn contains_matches_on_key_only() {
        let (m1, m2, _) = sample();
        let mut repo = MaterialRepository::with_capacity(10).unwrap();
        repo.add(m1.clone()).unwrap();

        let same_key = material("testName", "testSupplier", 999.0, date(1, 2, 2003));
        assert!(repo.contains(m1.key()));
        assert!(repo.contains(same_key.key()));
        assert!(!repo.contains(m2.key()));
    }

    #[test]
    fn add_merges_duplicate_keys() {
        let mut repo = MaterialRepository::with_capacity(1).unwrap();
        let (m1, m2, _) = sample();
        let m3 = material("otherName", "otherSupplier", 7.66, date(3, 2, 2001));

        repo.add(m1).unwrap();
        assert_eq!(repo.len(), 1);
        repo.add(m2).unwrap();
        assert_eq!(repo.len(), 2);
        repo.add(m3).unwrap();
        assert_eq!(repo.len(), 2);

        let merged = repo.get(1).unwrap();
        assert!((merged.quantity() - 31.11).abs() < 1e-9);
        assert_eq!(merged.name(), "otherName");
    }

    #[test]
    fn update_replaces_wholesale() {
        let (m1, m2, m3) = sample();
        let mut repo = MaterialRepository::with_capacity(1).unwrap();
        repo.add(m1.clone()).unwrap();

        repo.update(m1.key(), m3.clone()).unwrap();
        assert_eq!(repo.get(0), Some(&m3));

        repo.update(m3.key(), m2.clone()).unwrap();
        assert_eq!(repo.get(0), Some(&m2));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn update_does_not_merge_quantities() {
        let (m1, _, _) = sample();
        let mut repo = MaterialRepository::with_capacity(4).unwrap();
        repo.add(m1.clone()).unwrap();

        let recount = material("testName", "testSupplier", 1.0, date(1, 2, 2003));
        repo.update(m1.key(), recount).unwrap();
        assert_eq!(repo.get(0).unwrap().quantity(), 1.0);
    }

    #[test]
    fn update_missing_key_is_not_found() {
        let (m1, m2, m3) = sample();
        let mut repo = MaterialRepository::with_capacity(4).unwrap();
        repo.add(m1).unwrap();

        assert_eq!(repo.update(m2.key(), m3), Err(DomainError::NotFound));
    }

    #[test]
    fn update_onto_another_rows_key_is_a_conflict() {
        let (m1, m2, _) = sample();
        let mut repo = MaterialRepository::with_capacity(4).unwrap();
        repo.add(m1.clone()).unwrap();
        repo.add(m2.clone()).unwrap();

        let err = repo.update(m1.key(), m2.clone()).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(repo.get(0), Some(&m1));
        assert_eq!(repo.get(1), Some(&m2));
    }

    #[test]
    fn remove_keeps_order_and_reports_missing() {
        let (m1, m2, m3) = sample();
        let m4 = material("asdfName", "asdfSupplier", 34.56, date(4, 3, 2002));
        let mut repo = MaterialRepository::with_capacity(1).unwrap();
        repo.add(m1.clone()).unwrap();
        repo.add(m2.clone()).unwrap();
        repo.add(m3.clone()).unwrap();

        repo.remove(m1.key()).unwrap();
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get(0), Some(&m2));

        repo.remove(m2.key()).unwrap();
        assert_eq!(repo.len(), 1);

        assert_eq!(repo.remove(m4.key()), Err(DomainError::NotFound));
        assert_eq!(repo.len(), 1);

        repo.remove(m3.key()).unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn snapshot_is_deep_and_independent() {
        let (m1, m2, m3) = sample();
        let mut repo = MaterialRepository::with_capacity(1).unwrap();
        repo.add(m1.clone()).unwrap();
        repo.add(m2.clone()).unwrap();
        repo.add(m3.clone()).unwrap();

        let mut copy = repo.snapshot().unwrap();
        assert_eq!(copy, repo);
        assert_eq!(copy.capacity(), repo.capacity());

        copy.remove(m2.key()).unwrap();
        copy.add(material("testName", "testSupplier", 1.0, date(1, 2, 2003)))
            .unwrap();

        assert_eq!(repo.len(), 3);
        assert_eq!(repo.get(0), Some(&m1));
        assert_eq!(copy.len(), 2);
    }

    fn arb_material() -> impl Strategy<Value = Material> {
        (0usize..4, 0usize..3, 1u32..4, 0u32..1000).prop_map(|(n, s, day, qty)| {
            let names = ["Sugar", "Salt", "Eggs", "Butter"];
            let suppliers = ["HomeGoods", "JohnsFarm", "CakesSupply"];
            material(names[n], suppliers[s], f64::from(qty), date(day, 6, 2024))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of adds no two rows share a key.
        #[test]
        fn keys_stay_unique_under_adds(materials in prop::collection::vec(arb_material(), 0..40)) {
            let mut repo = MaterialRepository::with_capacity(1).unwrap();
            for m in materials {
                repo.add(m).unwrap();
            }

            let rows: Vec<&Material> = repo.iter().collect();
            for (i, a) in rows.iter().enumerate() {
                for b in &rows[i + 1..] {
                    prop_assert!(a.key() != b.key());
                }
            }
        }

        /// Property: the quantity of each row is the sum of all adds with its key.
        #[test]
        fn merged_quantity_is_the_sum(materials in prop::collection::vec(arb_material(), 1..40)) {
            let mut repo = MaterialRepository::with_capacity(2).unwrap();
            for m in &materials {
                repo.add(m.clone()).unwrap();
            }

            for row in &repo {
                let expected: f64 = materials
                    .iter()
                    .filter(|m| m.key() == row.key())
                    .map(Material::quantity)
                    .sum();
                prop_assert_eq!(row.quantity(), expected);
            }
        }
    }
}
