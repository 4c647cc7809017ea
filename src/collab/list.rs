use crate::types::descriptor::ListItemDescriptor;

pub trait ListView: Send {
    /// Shows an item above the ones already displayed.
    fn show(&mut self, item: ListItemDescriptor);
    fn clear(&mut self);
}

#[derive(Debug, Clone, Default)]
pub struct RecordedList {
    items: Vec<ListItemDescriptor>,
}

impl RecordedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in display order, newest first.
    pub fn items(&self) -> &[ListItemDescriptor] {
        &self.items
    }
}

impl ListView for RecordedList {
    fn show(&mut self, item: ListItemDescriptor) {
        self.items.insert(0, item);
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
