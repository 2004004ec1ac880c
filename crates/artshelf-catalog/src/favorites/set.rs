//! The favorite set value type.

use serde::{Deserialize, Serialize, Serializer};

use crate::catalog::Product;
use crate::ids::ProductId;

/// Favorited product snapshots, unique by id, in insertion order.
///
/// A `FavoriteSet` is a value: the operations that change it return a new
/// set and leave `self` untouched. Serialized as a plain JSON array of
/// products.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Vec<Product>")]
pub struct FavoriteSet {
    items: Vec<Product>,
}

impl FavoriteSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a product with this id is in the set.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == id)
    }

    /// Look up a favorited snapshot.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.items.iter().find(|p| &p.id == id)
    }

    /// The set with `product` appended, or `None` if its id is already present.
    pub fn inserted(&self, product: Product) -> Option<Self> {
        if self.contains(&product.id) {
            return None;
        }
        let mut items = self.items.clone();
        items.push(product);
        Some(Self { items })
    }

    /// The set without `id`, or `None` if `id` is absent.
    pub fn removed(&self, id: &ProductId) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }
        let items = self.items.iter().filter(|p| &p.id != id).cloned().collect();
        Some(Self { items })
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.items
    }

    /// Iterate over products in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.items.iter()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &ProductId> {
        self.items.iter().map(|p| &p.id)
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Equality by id membership, ignoring order and snapshot contents.
    pub fn same_ids(&self, other: &FavoriteSet) -> bool {
        self.len() == other.len() && self.ids().all(|id| other.contains(id))
    }
}

/// Collapse duplicate ids, keeping the first occurrence.
impl From<Vec<Product>> for FavoriteSet {
    fn from(products: Vec<Product>) -> Self {
        let mut set = FavoriteSet::new();
        for product in products {
            if !set.contains(&product.id) {
                set.items.push(product);
            }
        }
        set
    }
}

impl FromIterator<Product> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl Serialize for FavoriteSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a FavoriteSet {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen(id: &str) -> Product {
        Product::new(id, format!("Pen {}", id), "A", 1.0)
    }

    #[test]
    fn test_inserted_is_duplicate_safe() {
        let set = FavoriteSet::new().inserted(pen("1")).unwrap();
        assert!(set.inserted(pen("1")).is_none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_removed_absent_is_none() {
        let set = FavoriteSet::new().inserted(pen("1")).unwrap();
        assert!(set.removed(&ProductId::new("2")).is_none());

        let empty = set.removed(&ProductId::new("1")).unwrap();
        assert!(empty.is_empty());
        // The receiver is untouched.
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insertion_order() {
        let set: FavoriteSet = vec![pen("3"), pen("1"), pen("2")].into();
        let ids: Vec<&str> = set.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_deserialize_collapses_duplicates() {
        let json = serde_json::to_string(&vec![pen("1"), pen("2"), pen("1")]).unwrap();
        let set: FavoriteSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serializes_as_array_of_snapshots() {
        let set: FavoriteSet = vec![pen("1")].into();
        let value = serde_json::to_value(&set).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["artName"], "Pen 1");
    }

    #[test]
    fn test_same_ids_ignores_order() {
        let a: FavoriteSet = vec![pen("1"), pen("2")].into();
        let b: FavoriteSet = vec![pen("2"), pen("1")].into();
        let c: FavoriteSet = vec![pen("1")].into();
        assert!(a.same_ids(&b));
        assert!(!a.same_ids(&c));
    }
}
