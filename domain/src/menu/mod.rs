mod temple_menu;

use core_types::{MenuEntry, MenuSide};

pub use temple_menu::HOME_ENTRY_ID;

/// Static two-sided navigation menu. Built once at start-up and never mutated.
#[derive(Debug, Clone)]
pub struct MenuRegistry {
    left: Vec<MenuEntry>,
    right: Vec<MenuEntry>,
}

impl MenuRegistry {
    pub fn new(left: Vec<MenuEntry>, right: Vec<MenuEntry>) -> Self {
        Self { left, right }
    }

    /// The menu of the temple website.
    pub fn temple() -> Self {
        Self::new(temple_menu::left_entries(), temple_menu::right_entries())
    }

    pub fn left(&self) -> &[MenuEntry] {
        &self.left
    }

    pub fn right(&self) -> &[MenuEntry] {
        &self.right
    }

    pub fn side(&self, side: MenuSide) -> &[MenuEntry] {
        match side {
            MenuSide::Left => &self.left,
            MenuSide::Right => &self.right,
        }
    }

    /// Finds an entry by id in both top-level groups and one level of
    /// children. Top-level entries are checked before their children, left
    /// side before right.
    pub fn find(&self, id: &str) -> Option<&MenuEntry> {
        self.entries().find(|entry| entry.id == id)
    }

    /// All entries: each top-level entry followed by its children.
    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.left
            .iter()
            .chain(self.right.iter())
            .flat_map(|entry| std::iter::once(entry).chain(entry.children.iter()))
    }
}

impl Default for MenuRegistry {
    fn default() -> Self {
        Self::temple()
    }
}
