/// Dirty flags of the monitored variables for one translation, kept in
/// MONITOR declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonitorTable {
    entries: Vec<(String, bool)>,
}

impl MonitorTable {
    pub fn new(names: &[String]) -> Self {
        Self {
            entries: names.iter().map(|name| (name.clone(), false)).collect(),
        }
    }

    /// Flags `name` as changed. Unmonitored names are ignored.
    pub fn mark(&mut self, name: &str) {
        if let Some((_, dirty)) = self.entries.iter_mut().find(|(n, _)| n == name) {
            *dirty = true;
        }
    }

    /// Returns the changed variables in declaration order and clears their flags.
    pub fn take_dirty(&mut self) -> Vec<String> {
        self.entries
            .iter_mut()
            .filter(|(_, dirty)| *dirty)
            .map(|(name, dirty)| {
                *dirty = false;
                name.clone()
            })
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}
