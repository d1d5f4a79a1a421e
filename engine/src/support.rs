//! Support-item tracking: which tier of the support quest item a team's
//! support carried at any moment, reconstructed from `ITEM_DESTROYED` events.

use crate::classify::ItemAction;
use crate::{Event, ItemId, MatchSummary, ParticipantId, TeamSide, Timeline, WardType};
use serde::Serialize;
use std::ops::Range;

/// World Atlas, the tier-1 support item.
pub const BASE_SUPPORT_ITEM: ItemId = 3865;
/// World Atlas, Runic Compass, Bounty of Worlds.
pub const SUPPORT_TRINKET_TIERS: Range<ItemId> = 3865..3868;
/// Items granted automatically by a support upgrade. Their `ITEM_PURCHASED`
/// events are not player choices.
pub const UPGRADED_TRINKET_BAND: Range<ItemId> = 3866..3878;
/// Final items chosen when the support quest completes.
pub const SUPPORT_QUEST_REWARDS: Range<ItemId> = 3869..3878;

pub const YELLOW_TRINKET: ItemId = 3340;
pub const CONTROL_WARD: ItemId = 2055;
pub const BLUE_TRINKET: ItemId = 3363;

/// 0-based roster slots that hold each team's support by draft convention.
const SUPPORT_SLOTS: [usize; 2] = [4, 9];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Upgrade {
    pub timestamp: u64,
    pub item_id: ItemId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportTrack {
    pub team: TeamSide,
    pub participant_id: ParticipantId,
    /// Destroy events inside the tier band, ascending by timestamp.
    pub upgrades: Vec<Upgrade>,
    /// Support item held at the end of the game.
    pub final_item: Option<ItemId>,
}

impl SupportTrack {
    /// Scan the whole timeline for `team`'s support upgrades.
    pub fn build(summary: &MatchSummary, timeline: &Timeline, team: TeamSide) -> Option<Self> {
        let support = SUPPORT_SLOTS
            .iter()
            .filter_map(|&slot| summary.participants.get(slot))
            .find(|p| p.team == team)?;

        let upgrades: Vec<Upgrade> = timeline
            .events()
            .filter_map(|e| {
                let change = e.item_change()?;
                let is_upgrade = change.action == ItemAction::Destroyed
                    && change.participant_id == Some(support.participant_id)
                    && SUPPORT_TRINKET_TIERS.contains(&change.item_id);
                is_upgrade.then_some(Upgrade {
                    timestamp: e.timestamp,
                    item_id: change.item_id,
                })
            })
            .collect();

        if upgrades.len() > 2 {
            log::debug!(
                "support {} has {} upgrade events, only the first two bound brackets",
                support.participant_id,
                upgrades.len()
            );
        }

        let final_item = support
            .held_item_in(&SUPPORT_QUEST_REWARDS)
            .or_else(|| support.held_item_in(&SUPPORT_TRINKET_TIERS));

        Some(Self {
            team,
            participant_id: support.participant_id,
            upgrades,
            final_item,
        })
    }

    /// Support item active at `timestamp`.
    ///
    /// Before the first upgrade the base item; between the first and second
    /// upgrade the tier the first one produced; from the last bracket onward
    /// the item held at the end of the game.
    pub fn item_at(&self, timestamp: u64) -> ItemId {
        match (self.upgrades.first(), self.upgrades.get(1)) {
            (None, _) => BASE_SUPPORT_ITEM,
            (Some(first), _) if timestamp < first.timestamp => BASE_SUPPORT_ITEM,
            (Some(first), Some(second)) if timestamp < second.timestamp => {
                companion_item(first.item_id, None).unwrap_or(first.item_id)
            }
            _ => self
                .final_item
                .or_else(|| self.upgrades.last().map(|u| u.item_id))
                .unwrap_or(BASE_SUPPORT_ITEM),
        }
    }
}

/// Both teams' support tracks; either is `None` when the roster slot is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SupportItems {
    pub blue: Option<SupportTrack>,
    pub red: Option<SupportTrack>,
}

impl SupportItems {
    pub fn resolve(summary: &MatchSummary, timeline: &Timeline) -> Self {
        Self {
            blue: SupportTrack::build(summary, timeline, TeamSide::Blue),
            red: SupportTrack::build(summary, timeline, TeamSide::Red),
        }
    }

    pub fn track(&self, team: TeamSide) -> Option<&SupportTrack> {
        match team {
            TeamSide::Blue => self.blue.as_ref(),
            TeamSide::Red => self.red.as_ref(),
        }
    }

    /// Item whose icon a ward event should show. Sight wards come from the
    /// owning team's support item at the event's timestamp; placements are
    /// owned by the creator's team, kills by the killer's opponent.
    pub fn ward_item(&self, summary: &MatchSummary, event: &Event) -> Option<ItemId> {
        let ward = event.ward()?;
        let actor_team = ward.actor.and_then(|id| summary.team_of(id));
        let owner = if ward.placed {
            actor_team
        } else {
            actor_team.map(TeamSide::opponent)
        };

        match ward.ward_type {
            WardType::YellowTrinket => Some(YELLOW_TRINKET),
            WardType::ControlWard => Some(CONTROL_WARD),
            WardType::BlueTrinket => Some(BLUE_TRINKET),
            WardType::SightWard => Some(
                owner
                    .and_then(|team| self.track(team))
                    .map(|track| track.item_at(event.timestamp))
                    .unwrap_or(BASE_SUPPORT_ITEM),
            ),
            WardType::TeemoMushroom | WardType::Undefined => None,
        }
    }
}

/// The item revealed alongside a destroyed support tier: the next tier, or
/// the quest reward once Bounty of Worlds completes.
pub fn companion_item(item_id: ItemId, final_reward: Option<ItemId>) -> Option<ItemId> {
    match item_id {
        3865 => Some(3866),
        3866 => Some(3867),
        3867 => final_reward.filter(|id| SUPPORT_QUEST_REWARDS.contains(id)),
        _ => None,
    }
}
