//! Role markers drawn over the list
//!
//! A marker names a slot without touching node data. Several roles may point
//! at the same slot, and a role pointing at `None` is simply unassigned.

use super::store::{Link, Remap};

/// A named role a slot can play during an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Head,
    Tail,
    Current,
    Prev,
    Next,
    NewNode,
    Target,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Head,
        Role::Tail,
        Role::Current,
        Role::Prev,
        Role::Next,
        Role::NewNode,
        Role::Target,
    ];

    fn slot(self) -> usize {
        match self {
            Role::Head => 0,
            Role::Tail => 1,
            Role::Current => 2,
            Role::Prev => 3,
            Role::Next => 4,
            Role::NewNode => 5,
            Role::Target => 6,
        }
    }

    /// Short label shown under a node
    pub fn label(self) -> &'static str {
        match self {
            Role::Head => "head",
            Role::Tail => "tail",
            Role::Current => "curr",
            Role::Prev => "prev",
            Role::Next => "next",
            Role::NewNode => "new",
            Role::Target => "target",
        }
    }
}

/// The full marker set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    slots: [Link; 7],
}

impl Markers {
    /// No role assigned
    pub fn empty() -> Self {
        Self::default()
    }

    /// Only the head role assigned
    pub fn with_head(head: Link) -> Self {
        let mut markers = Self::empty();
        markers.set(Role::Head, head);
        markers
    }

    pub fn get(&self, role: Role) -> Link {
        self.slots[role.slot()]
    }

    pub fn set(&mut self, role: Role, link: Link) {
        self.slots[role.slot()] = link;
    }

    /// Builder form of [`Markers::set`]
    pub fn and(mut self, role: Role, link: Link) -> Self {
        self.set(role, link);
        self
    }

    /// Translate every marker after a removal
    pub fn remap(&mut self, remap: &Remap) {
        for slot in &mut self.slots {
            *slot = remap.apply(*slot);
        }
    }

    /// Roles currently pointing at `index`, in declaration order
    pub fn roles_at(&self, index: usize) -> impl Iterator<Item = Role> + '_ {
        Role::ALL
            .into_iter()
            .filter(move |role| self.get(*role) == Some(index))
    }
}
