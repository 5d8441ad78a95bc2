/// One selectable entry of a dropdown menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub value: Option<String>,
    pub text: String,
}

impl MenuItem {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            text: text.into(),
        }
    }
}

/// What the widget shows and what it submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub value: Option<String>,
    pub label: String,
}

impl From<&MenuItem> for SelectionState {
    fn from(item: &MenuItem) -> Self {
        Self {
            value: item.value.clone(),
            label: item.text.clone(),
        }
    }
}

pub trait SelectionTarget {
    fn apply(&self, state: &SelectionState);
}

/// Keeps a dropdown's label and hidden value on the same item.
pub struct DropdownSync<T> {
    target: T,
    items: Vec<MenuItem>,
}

impl<T: SelectionTarget> DropdownSync<T> {
    pub fn new(target: T, items: Vec<MenuItem>) -> Self {
        Self { target, items }
    }

    /// Index of the item to select for `preset`: the first item whose value
    /// equals it, else the first item. `None` when there are no items.
    pub fn initial_index(items: &[MenuItem], preset: Option<&str>) -> Option<usize> {
        if items.is_empty() {
            return None;
        }
        Some(
            items
                .iter()
                .position(|item| item.value.as_deref() == preset)
                .unwrap_or(0),
        )
    }

    pub fn initialize(&self, preset: Option<&str>) -> Option<SelectionState> {
        Self::initial_index(&self.items, preset).and_then(|index| self.select(index))
    }

    pub fn select(&self, index: usize) -> Option<SelectionState> {
        let state = SelectionState::from(self.items.get(index)?);
        self.target.apply(&state);
        Some(state)
    }
}
