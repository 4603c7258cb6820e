//! Group-buy engine.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::groups::{
    errors::GroupsError,
    models::{GroupBuy, GroupId, GroupStatus, NewGroupBuy},
};

/// Tracks group-buy campaigns, membership and funding progress.
///
/// Campaigns live in memory for the duration of the session; unlike the
/// cart and review stores there is no persistence namespace.
#[derive(Debug, Default)]
pub struct GroupBuyEngine {
    groups: Vec<GroupBuy>,
    members: FxHashMap<GroupId, FxHashSet<String>>,
}

impl GroupBuyEngine {
    /// Creates an empty engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new campaign. The organizer counts as the first participant
    /// and is a member from the start.
    ///
    /// # Errors
    ///
    /// Returns [`GroupsError::InvalidTarget`] when the target amount or the
    /// participant cap is zero.
    pub fn create_group(
        &mut self,
        new_group: NewGroupBuy,
        organizer_id: &str,
        organizer_name: &str,
    ) -> Result<GroupId, GroupsError> {
        if new_group.target_amount == 0 || new_group.max_participants == 0 {
            return Err(GroupsError::InvalidTarget);
        }

        let id = GroupId::generate();
        self.groups.push(GroupBuy {
            id,
            title: new_group.title,
            description: new_group.description,
            organizer: organizer_name.to_string(),
            organizer_id: organizer_id.to_string(),
            location: new_group.location,
            category: new_group.category,
            target_amount: new_group.target_amount,
            current_amount: 0,
            participants: 1,
            max_participants: new_group.max_participants,
            savings: new_group.savings,
            status: GroupStatus::Active,
        });
        self.members
            .entry(id)
            .or_default()
            .insert(organizer_id.to_string());

        debug!(%id, organizer = organizer_id, "group created");

        Ok(id)
    }

    /// Joins a campaign: one more participant, and a fixed per-slot
    /// contribution added toward the target. Reaching the target completes
    /// the campaign.
    ///
    /// # Errors
    ///
    /// Returns [`GroupsError::NotFound`] for an unknown group,
    /// [`GroupsError::NotActive`] for a group not open for joining,
    /// [`GroupsError::Full`] at the participant cap and
    /// [`GroupsError::AlreadyJoined`] when the user is already a member.
    /// The group is unchanged in every error case.
    pub fn join_group(&mut self, id: GroupId, user_id: &str) -> Result<(), GroupsError> {
        let group = self
            .groups
            .iter_mut()
            .find(|group| group.id == id)
            .ok_or(GroupsError::NotFound)?;

        if group.status != GroupStatus::Active {
            return Err(GroupsError::NotActive);
        }

        if group.is_full() {
            return Err(GroupsError::Full);
        }

        let members = self.members.entry(id).or_default();
        if members.contains(user_id) {
            return Err(GroupsError::AlreadyJoined);
        }

        members.insert(user_id.to_string());
        group.participants += 1;
        group.current_amount += group.slot_contribution();

        if group.current_amount >= group.target_amount {
            group.status = GroupStatus::Completed;
            debug!(%id, "group funded");
        }

        debug!(%id, user = user_id, participants = group.participants, "joined group");

        Ok(())
    }

    /// Closes a campaign, moving it to [`GroupStatus::Completed`].
    ///
    /// This is the explicit completion trigger: the organizer closes the
    /// campaign once its deadline passes or the bulk order goes out. Joins
    /// also complete a campaign whose pledges reach the target, but with
    /// fixed floor(target / cap) contributions the cap binds first, so
    /// closing is an organizer decision. Completing an already completed
    /// campaign is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GroupsError::NotFound`] for an unknown group and
    /// [`GroupsError::NotOrganizer`] when `user_id` did not organize it.
    pub fn complete_group(&mut self, id: GroupId, user_id: &str) -> Result<(), GroupsError> {
        let group = self
            .groups
            .iter_mut()
            .find(|group| group.id == id)
            .ok_or(GroupsError::NotFound)?;

        if group.organizer_id != user_id {
            return Err(GroupsError::NotOrganizer);
        }

        if group.status != GroupStatus::Completed {
            group.status = GroupStatus::Completed;
            debug!(%id, "group completed");
        }

        Ok(())
    }

    /// Whether a user organized or previously joined a group.
    #[must_use]
    pub fn is_member(&self, id: GroupId, user_id: &str) -> bool {
        self.members
            .get(&id)
            .is_some_and(|members| members.contains(user_id))
    }

    /// Looks up a campaign by id.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&GroupBuy> {
        self.groups.iter().find(|group| group.id == id)
    }

    /// Every campaign, in creation order.
    #[must_use]
    pub fn groups(&self) -> &[GroupBuy] {
        &self.groups
    }

    /// Campaigns currently open for joining.
    #[must_use]
    pub fn active_groups(&self) -> Vec<&GroupBuy> {
        self.groups
            .iter()
            .filter(|group| group.status == GroupStatus::Active)
            .collect()
    }

    /// Campaigns a user organized or joined, in creation order.
    #[must_use]
    pub fn groups_for(&self, user_id: &str) -> Vec<&GroupBuy> {
        self.groups
            .iter()
            .filter(|group| self.is_member(group.id, user_id))
            .collect()
    }
}
