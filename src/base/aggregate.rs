/// Running totals keyed by `K`, along with the grand total over all keys.
#[derive(Debug, Clone)]
pub struct Aggregate<K, V> {
    m: std::collections::HashMap<K, V>,
    sum: V,
}

impl<K, V> Default for Aggregate<K, V>
where
    V: Default,
{
    fn default() -> Self {
        Self {
            m: Default::default(),
            sum: Default::default(),
        }
    }
}

impl<K, V> PartialEq for Aggregate<K, V>
where
    K: Eq + std::hash::Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m && self.sum == other.sum
    }
}

impl<K, V> Eq for Aggregate<K, V>
where
    K: Eq + std::hash::Hash,
    V: Eq,
{
}

impl<K, V> Aggregate<K, V> {
    pub fn sum(&self) -> V
    where
        V: Copy,
    {
        self.sum
    }

    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    pub fn add(&mut self, key: K, value: V)
    where
        K: Copy + Eq + std::hash::Hash,
        V: Copy + Default + std::ops::AddAssign,
    {
        *(self.m.entry(key).or_default()) += value;
        self.sum += value;
    }

    /// Returns entries sorted by key, so output does not depend on hashing
    /// order.
    pub fn sorted(&self) -> Vec<(K, V)>
    where
        K: Copy + Ord,
        V: Copy,
    {
        let mut v = self.m.iter().map(|(&k, &v)| (k, v)).collect::<Vec<_>>();
        v.sort_unstable_by(|(k1, _), (k2, _)| k1.cmp(k2));
        v
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Copy + Eq + std::hash::Hash,
    V: Copy + Default + std::ops::AddAssign,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Aggregate::<K, V>::default();
        for (k, v) in iter {
            agg.add(k, v);
        }
        agg
    }
}
