use serde::{Deserialize, Serialize};

/// Ordered `(axis name, value)` pairs, e.g. the coordinates of a located
/// grid point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedValues(Vec<(String, f64)>);

impl NamedValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        self.0.push((name.into(), value));
    }

    /// Value of the first entry called `name`
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> Vec<f64> {
        self.0.iter().map(|(_, v)| *v).collect()
    }

    /// Move entries whose name is in `names` to the front. Both groups keep
    /// their existing relative order.
    #[must_use]
    pub fn pull_to_front(&self, names: &[&str]) -> Self {
        let (mut front, back): (Vec<_>, Vec<_>) = self
            .0
            .iter()
            .cloned()
            .partition(|(n, _)| names.contains(&n.as_str()));
        front.extend(back);
        Self(front)
    }
}

impl From<Vec<(String, f64)>> for NamedValues {
    fn from(pairs: Vec<(String, f64)>) -> Self {
        Self(pairs)
    }
}

impl<'a> FromIterator<(&'a str, f64)> for NamedValues {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, v)| (n.to_string(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_name() {
        let values: NamedValues = [("lS", 5.6), ("lT", 3.4)].into_iter().collect();
        assert_eq!(values.get("lT"), Some(3.4));
        assert_eq!(values.get("ZT"), None);
    }

    #[test]
    fn test_pull_to_front_keeps_relative_order() {
        let values: NamedValues = [("lS", 5.6), ("lT", 3.4), ("ZT", 113.1), ("ZS", 32.1)]
            .into_iter()
            .collect();

        let pulled = values.pull_to_front(&["ZS", "lT"]);
        let names: Vec<&str> = pulled.names().collect();
        assert_eq!(names, vec!["lT", "ZS", "lS", "ZT"]);
        assert_eq!(pulled.values(), vec![3.4, 32.1, 5.6, 113.1]);
    }
}
