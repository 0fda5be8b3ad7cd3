//! Exclusive groups: radio-style behavior over latching buttons.

use elfin_core::Surface;

/// Keeps at most one member of a set of surface elements on.
///
/// Members are surface indices of elements exposing a boolean value. When
/// one member turns on, [`ExclusiveGroup::update`] turns the others off.
#[derive(Debug, Clone, Default)]
pub struct ExclusiveGroup {
    members: Vec<usize>,
    selected: Option<usize>,
}

impl ExclusiveGroup {
    pub fn new(members: impl IntoIterator<Item = usize>) -> Self {
        Self {
            members: members.into_iter().collect(),
            selected: None,
        }
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Member currently on, as last seen by the group.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Turn `index` on and every other member off. Returns false if
    /// `index` is not a member.
    pub fn select(&mut self, surface: &mut Surface, index: usize) -> bool {
        if !self.members.contains(&index) {
            log::warn!("element {} is not a member of this group", index);
            return false;
        }
        for &member in &self.members {
            surface.set_bool_value(member, member == index);
        }
        self.selected = Some(index);
        true
    }

    /// Pick up a member that turned on since the last call and turn the
    /// others off. Returns the newly selected member, if any.
    pub fn update(&mut self, surface: &mut Surface) -> Option<usize> {
        let fresh = self
            .members
            .iter()
            .copied()
            .find(|&m| Some(m) != self.selected && surface.bool_value(m) == Some(true))?;
        log::debug!("group selection moved to element {}", fresh);
        self.select(surface, fresh);
        Some(fresh)
    }
}
