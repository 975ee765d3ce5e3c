use std::collections::BTreeMap;

/// Identity-assigning collection backing one entity type.
///
/// Identities start at 1, grow by one per insert and are never handed out
/// again, even after the row is removed. Rows iterate in identity order,
/// which is insertion order.
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    /// Reserves the next identity, builds the row with it and stores it.
    pub fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }
}

impl<T> Table<T> {
    #[must_use]
    pub fn get(&self, id: i32) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: i32) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Identity of the first row, in insertion order, matching `predicate`.
    pub fn find_id(&self, predicate: impl Fn(&T) -> bool) -> Option<i32> {
        self.rows
            .iter()
            .find(|(_, row)| predicate(row))
            .map(|(id, _)| *id)
    }

    pub fn remove(&mut self, id: i32) -> Option<T> {
        self.rows.remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
