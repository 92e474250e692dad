//! Presence counting under a majority threshold.
//!
//! A name counts once per profile that lists it, whatever its weight inside
//! that profile. A cuisine making up 5% of one user's dishes counts the same
//! as one making up 90% of another's.

/// Minimum profile count for an attribute to be common.
pub fn majority_threshold(profile_count: usize, ratio: f64) -> f64 {
    profile_count as f64 * ratio
}

/// Counts how many profiles list each name, remembering first appearance.
#[derive(Debug, Default)]
pub struct PresenceCounter {
    counts: Vec<(String, usize)>,
}

impl PresenceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one profile's list. Repeats inside the list count once.
    pub fn add_profile<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen: Vec<&str> = Vec::new();
        for name in names {
            if seen.contains(&name) {
                continue;
            }
            seen.push(name);
            match self.counts.iter_mut().find(|(n, _)| n == name) {
                Some((_, count)) => *count += 1,
                None => self.counts.push((name.to_string(), 1)),
            }
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.counts
            .iter()
            .find(|(n, _)| n == name)
            .map_or(0, |(_, c)| *c)
    }

    /// Names whose count reaches `threshold`, most shared first, ties by first appearance.
    pub fn at_least(&self, threshold: f64) -> Vec<String> {
        let mut common: Vec<&(String, usize)> = self
            .counts
            .iter()
            .filter(|(_, count)| *count as f64 >= threshold)
            .collect();
        common.sort_by(|a, b| b.1.cmp(&a.1));
        common.into_iter().map(|(name, _)| name.clone()).collect()
    }
}
