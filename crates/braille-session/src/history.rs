use std::collections::VecDeque;

/// Bounded list of distinct gesture labels, newest first.
#[derive(Debug, Clone)]
pub struct GestureHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl GestureHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a label. Labels already present are not moved or duplicated.
    /// Returns whether the label was added.
    pub fn record(&mut self, label: &str) -> bool {
        if self.capacity == 0 || self.contains(label) {
            return false;
        }
        self.entries.push_front(label.to_string());
        self.entries.truncate(self.capacity);
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|e| e == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
