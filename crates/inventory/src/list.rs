use backpack_core::{Inventory, InventoryError, InventoryResult, Item};

use crate::outcome::SearchOutcome;

/// A chain node: one owned item and the slot index of its successor.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    item: Item,
    next: Option<usize>,
}

/// Singly linked backpack with head insertion.
///
/// Nodes live in an arena of slots and link to each other by index. A removed
/// node's slot is emptied and its index is kept for the next insert. Dropping
/// the inventory releases every node.
#[derive(Debug, Clone, Default)]
pub struct ListInventory {
    slots: Vec<Option<Node>>,
    /// Indices of empty slots, reused before the arena grows.
    free: Vec<usize>,
    head: Option<usize>,
    len: usize,
}

impl ListInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the empty state, releasing every node.
    pub fn initialize(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Link `item` in as the new head.
    ///
    /// Arena growth is fallible: if the slot cannot be obtained the list is
    /// left untouched and `AllocationFailure` is returned.
    pub fn insert(&mut self, item: Item) -> InventoryResult<()> {
        let node = Node {
            item,
            next: self.head,
        };

        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots
                    .try_reserve(1)
                    .map_err(|_| InventoryError::AllocationFailure)?;
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        self.head = Some(index);
        self.len += 1;
        tracing::debug!(slot = index, len = self.len, "list insert");
        Ok(())
    }

    /// Unlink and release the first node (head-ward) named `name`.
    pub fn remove(&mut self, name: &str) -> InventoryResult<()> {
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let Some(node) = self.node(index) else {
                break;
            };
            if node.item.is_named(name) {
                let next = node.next;
                match prev.and_then(|p| self.node_mut(p)) {
                    Some(prev_node) => prev_node.next = next,
                    None => self.head = next,
                }
                self.release(index);
                tracing::debug!(name, slot = index, "list remove");
                return Ok(());
            }
            prev = Some(index);
            cursor = node.next;
        }

        Err(InventoryError::not_found(name))
    }

    /// Items from head to tail (most recently inserted first).
    pub fn list(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Walk from the head; one comparison per node examined.
    pub fn search_linear(&self, name: &str) -> SearchOutcome<&Item> {
        let mut comparisons = 0;
        for item in self.list() {
            comparisons += 1;
            if item.is_named(name) {
                return SearchOutcome::hit(item, comparisons);
            }
        }
        SearchOutcome::miss(comparisons)
    }

    /// Release every node. A no-op on an empty list.
    pub fn release_all(&mut self) {
        if self.slots.is_empty() && self.head.is_none() {
            return;
        }
        let released = self.len;
        self.initialize();
        tracing::debug!(released, "list released");
    }

    fn node(&self, index: usize) -> Option<&Node> {
        self.slots.get(index)?.as_ref()
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.slots.get_mut(index)?.as_mut()
    }

    fn release(&mut self, index: usize) {
        if self.slots.get_mut(index).and_then(Option::take).is_some() {
            self.free.push(index);
            self.len -= 1;
        }
    }
}

/// Head-to-tail iterator over a `ListInventory`.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    list: &'a ListInventory,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.item)
    }
}

impl<'a> IntoIterator for &'a ListInventory {
    type Item = &'a Item;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.list()
    }
}

impl Inventory for ListInventory {
    const LABEL: &'static str = "linked list";

    fn insert(&mut self, item: Item) -> InventoryResult<()> {
        ListInventory::insert(self, item)
    }

    fn remove(&mut self, name: &str) -> InventoryResult<()> {
        ListInventory::remove(self, name)
    }

    fn items(&self) -> Vec<&Item> {
        self.list().collect()
    }

    fn len(&self) -> usize {
        ListInventory::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(name: &str) -> Item {
        Item::new(name, "Misc", 1)
    }

    fn filled(names: &[&str]) -> ListInventory {
        let mut inv = ListInventory::new();
        for name in names {
            inv.insert(item(name)).unwrap();
        }
        inv
    }

    fn names(inv: &ListInventory) -> Vec<&str> {
        inv.list().map(Item::name).collect()
    }

    #[test]
    fn new_list_is_empty() {
        let inv = ListInventory::new();
        assert!(inv.is_empty());
        assert_eq!(inv.len(), 0);
        assert_eq!(inv.list().count(), 0);
    }

    #[test]
    fn insert_links_new_head() {
        let inv = filled(&["Medkit", "Rifle", "Rope"]);
        assert_eq!(names(&inv), vec!["Rope", "Rifle", "Medkit"]);
        assert_eq!(inv.len(), 3);
    }

    #[test]
    fn duplicate_names_are_stored_separately() {
        let inv = filled(&["Ammo", "Ammo"]);
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn remove_head() {
        let mut inv = filled(&["A", "B", "C"]);
        inv.remove("C").unwrap();
        assert_eq!(names(&inv), vec!["B", "A"]);
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn remove_middle_and_tail() {
        let mut inv = filled(&["A", "B", "C", "D"]);
        inv.remove("B").unwrap();
        assert_eq!(names(&inv), vec!["D", "C", "A"]);
        inv.remove("A").unwrap();
        assert_eq!(names(&inv), vec!["D", "C"]);
    }

    #[test]
    fn remove_last_node_empties_list() {
        let mut inv = filled(&["Solo"]);
        inv.remove("Solo").unwrap();
        assert!(inv.is_empty());
        assert_eq!(inv.len(), 0);
    }

    #[test]
    fn remove_drops_head_ward_duplicate() {
        let mut inv = ListInventory::new();
        inv.insert(Item::new("Ammo", "old", 1)).unwrap();
        inv.insert(Item::new("Ammo", "new", 2)).unwrap();
        inv.remove("Ammo").unwrap();
        let remaining: Vec<&Item> = inv.list().collect();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].kind(), "old");
    }

    #[test]
    fn remove_missing_name_is_not_found() {
        let mut inv = filled(&["A", "B"]);
        let err = inv.remove("Z").unwrap_err();
        assert_eq!(err, InventoryError::NotFound("Z".to_string()));
        assert_eq!(names(&inv), vec!["B", "A"]);
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn remove_from_empty_list_is_not_found() {
        let mut inv = ListInventory::new();
        assert!(matches!(inv.remove("A"), Err(InventoryError::NotFound(_))));
    }

    #[test]
    fn released_slots_are_reused() {
        let mut inv = filled(&["A", "B", "C"]);
        inv.remove("B").unwrap();
        inv.insert(item("D")).unwrap();
        assert_eq!(inv.slots.len(), 3);
        assert_eq!(names(&inv), vec!["D", "C", "A"]);
    }

    #[test]
    fn emptied_slots_are_refilled_before_the_arena_grows() {
        let mut inv = filled(&["A", "B", "C", "D"]);
        inv.remove("A").unwrap();
        inv.remove("C").unwrap();
        assert_eq!(inv.free.len(), 2);

        inv.insert(item("E")).unwrap();
        inv.insert(item("F")).unwrap();
        inv.insert(item("G")).unwrap();
        assert!(inv.free.is_empty());
        assert_eq!(inv.slots.len(), 5);
        assert_eq!(names(&inv), vec!["G", "F", "E", "D", "B"]);

        inv.remove("D").unwrap();
        assert_eq!(names(&inv), vec!["G", "F", "E", "B"]);
        assert_eq!(inv.len(), 4);
    }

    #[test]
    fn search_counts_nodes_from_head() {
        let inv = filled(&["A", "B", "C"]);
        let hit = inv.search_linear("C");
        assert_eq!(hit.comparisons, 1);
        assert_eq!(hit.found.map(Item::name), Some("C"));

        let hit = inv.search_linear("A");
        assert_eq!(hit.comparisons, 3);

        let miss = inv.search_linear("Z");
        assert!(!miss.is_found());
        assert_eq!(miss.comparisons, 3);
    }

    #[test]
    fn search_returns_head_ward_duplicate() {
        let mut inv = ListInventory::new();
        inv.insert(Item::new("Ammo", "old", 1)).unwrap();
        inv.insert(Item::new("Ammo", "new", 2)).unwrap();
        let outcome = inv.search_linear("Ammo");
        assert_eq!(outcome.found.map(Item::kind), Some("new"));
        assert_eq!(outcome.comparisons, 1);
    }

    #[test]
    fn release_all_empties_list() {
        let mut inv = filled(&["A", "B", "C"]);
        inv.release_all();
        assert!(inv.is_empty());
        assert_eq!(inv.len(), 0);
        assert!(inv.slots.is_empty());
        assert!(inv.free.is_empty());
    }

    #[test]
    fn release_all_on_empty_list_is_a_no_op() {
        let mut inv = ListInventory::new();
        inv.release_all();
        inv.release_all();
        assert!(inv.is_empty());
        assert_eq!(inv.len(), 0);
        assert_eq!(inv.head, None);
    }

    #[test]
    fn list_is_usable_after_release_all() {
        let mut inv = filled(&["A", "B"]);
        inv.release_all();
        inv.insert(item("C")).unwrap();
        assert_eq!(names(&inv), vec!["C"]);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a freshly inserted item is always at the head.
        #[test]
        fn insert_then_traverse_finds_new_head(
            names in prop::collection::vec("[A-Za-z]{1,8}", 0..32),
            extra in "[A-Za-z]{1,8}"
        ) {
            let mut inv = ListInventory::new();
            for name in &names {
                inv.insert(item(name)).unwrap();
            }
            inv.insert(item(&extra)).unwrap();
            prop_assert_eq!(inv.list().next().map(Item::name), Some(extra.as_str()));
            prop_assert_eq!(inv.len(), names.len() + 1);
        }

        /// Property: the list matches a reversed-Vec model under inserts and removes.
        #[test]
        fn behaves_like_reversed_vec(
            ops in prop::collection::vec((any::<bool>(), "[a-e]"), 0..64)
        ) {
            let mut inv = ListInventory::new();
            let mut model: Vec<String> = Vec::new();
            for (is_insert, name) in ops {
                if is_insert {
                    inv.insert(item(&name)).unwrap();
                    model.insert(0, name);
                } else {
                    let expected = model.iter().position(|n| *n == name);
                    let result = inv.remove(&name);
                    match expected {
                        Some(pos) => {
                            prop_assert!(result.is_ok());
                            model.remove(pos);
                        }
                        None => prop_assert!(result.is_err()),
                    }
                }
                let actual: Vec<&str> = inv.list().map(Item::name).collect();
                prop_assert_eq!(actual, model.iter().map(String::as_str).collect::<Vec<_>>());
                prop_assert_eq!(inv.len(), model.len());
            }
        }

        /// Property: search comparisons never exceed `len`, and equal it on a miss.
        #[test]
        fn search_comparisons_bounded_by_len(
            names in prop::collection::vec("[a-m]{1,4}", 0..32),
            target in "[a-z]{1,4}"
        ) {
            let mut inv = ListInventory::new();
            for name in &names {
                inv.insert(item(name)).unwrap();
            }
            let outcome = inv.search_linear(&target);
            prop_assert!(outcome.comparisons <= inv.len());
            if !outcome.is_found() {
                prop_assert_eq!(outcome.comparisons, inv.len());
            }
        }
    }
}
