use crate::MetricValue;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::marker::PhantomData;

/// A closed set of metric names. `ALL` lists them in declared order and
/// `index` is a key's position in `ALL`.
pub trait MetricKey: Copy + 'static {
    const ALL: &'static [Self];
    fn key(self) -> &'static str;
    fn index(self) -> usize;
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenericMetrics<K> {
    values: Vec<Option<MetricValue>>,
    keys: PhantomData<K>,
}

impl<K: MetricKey> GenericMetrics<K> {
    pub fn unset() -> Self {
        Self {
            values: vec![None; K::ALL.len()],
            keys: PhantomData,
        }
    }
    pub fn set(&mut self, metric: K, value: MetricValue) {
        self.values[metric.index()] = Some(value);
    }
    pub fn clear(&mut self, metric: K) {
        self.values[metric.index()] = None;
    }
    pub fn get(&self, metric: K) -> Option<&MetricValue> {
        self.values[metric.index()].as_ref()
    }
    pub fn iter(&self) -> impl Iterator<Item = (K, Option<&MetricValue>)> + '_ {
        K::ALL.iter().map(|&metric| (metric, self.get(metric)))
    }
    pub fn first_unset(&self) -> Option<K> {
        self.iter()
            .find_map(|(metric, value)| value.is_none().then_some(metric))
    }
}

// a flat object in declared key order; unset values become null
impl<K: MetricKey> Serialize for GenericMetrics<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(K::ALL.len()))?;
        for (metric, value) in self.iter() {
            map.serialize_entry(metric.key(), &value)?;
        }
        map.end()
    }
}
