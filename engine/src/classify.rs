use crate::support::{SUPPORT_TRINKET_TIERS, UPGRADED_TRINKET_BAND};
use crate::{Event, EventKind, ItemId, ParticipantId, TeamSide, WardType};
use serde::Serialize;

/// Topic an event is filed under in actor-keyed views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EventCategory {
    Items,
    Kills,
    Wards,
    Structures,
    Monsters,
    Transforms,
    /// Never shown in the general timeline.
    Discarded,
}

impl EventCategory {
    /// Every category a view can select.
    pub const VISIBLE: [EventCategory; 6] = [
        EventCategory::Items,
        EventCategory::Kills,
        EventCategory::Wards,
        EventCategory::Structures,
        EventCategory::Monsters,
        EventCategory::Transforms,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub actor: Option<ParticipantId>,
    pub category: EventCategory,
}

impl Classification {
    fn keep(actor: Option<ParticipantId>, category: EventCategory) -> Self {
        Self { actor, category }
    }

    fn discard() -> Self {
        Self {
            actor: None,
            category: EventCategory::Discarded,
        }
    }

    /// Retained events have both an actor and a visible category.
    pub fn actor_if_retained(&self) -> Option<ParticipantId> {
        match self.category {
            EventCategory::Discarded => None,
            _ => self.actor,
        }
    }
}

/// Resolve the actor an event is filed under and its category.
///
/// Level-ups and undos are consumed by the dedicated reconstructors, not the
/// general timeline.
pub fn classify(event: &Event) -> Classification {
    use EventCategory::*;

    match &event.kind {
        EventKind::ItemPurchased {
            participant_id,
            item_id,
        } => {
            if UPGRADED_TRINKET_BAND.contains(item_id) {
                Classification::discard()
            } else {
                Classification::keep(*participant_id, Items)
            }
        }
        EventKind::ItemSold { participant_id, .. } => Classification::keep(*participant_id, Items),
        EventKind::ItemDestroyed {
            participant_id,
            item_id,
        } => {
            if SUPPORT_TRINKET_TIERS.contains(item_id) {
                Classification::keep(*participant_id, Items)
            } else {
                Classification::discard()
            }
        }
        EventKind::ItemUndo { .. } | EventKind::LevelUp { .. } | EventKind::SkillLevelUp { .. } => {
            Classification::discard()
        }
        EventKind::WardPlaced {
            creator_id,
            ward_type,
        } => match ward_type {
            WardType::Undefined => Classification::discard(),
            _ => Classification::keep(*creator_id, Wards),
        },
        EventKind::WardKill {
            killer_id,
            ward_type,
        } => match ward_type {
            WardType::Undefined => Classification::discard(),
            _ => Classification::keep(*killer_id, Wards),
        },
        EventKind::ChampionKill { killer_id, .. }
        | EventKind::ChampionSpecialKill { killer_id, .. } => {
            Classification::keep(*killer_id, Kills)
        }
        EventKind::BuildingKill { killer_id, .. }
        | EventKind::TurretPlateDestroyed { killer_id, .. } => {
            Classification::keep(*killer_id, Structures)
        }
        EventKind::EliteMonsterKill { killer_id, .. } => Classification::keep(*killer_id, Monsters),
        EventKind::ChampionTransform { participant_id, .. } => {
            Classification::keep(*participant_id, Transforms)
        }
        EventKind::DragonSoulGiven { .. } | EventKind::Other { .. } => Classification::discard(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemAction {
    Purchased,
    Sold,
    Destroyed,
}

/// Inventory change carried by a purchase, sale or destroy event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemChange {
    pub participant_id: Option<ParticipantId>,
    pub item_id: ItemId,
    pub action: ItemAction,
}

/// A ward placement (`placed`) or a ward kill, with the acting participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WardChange {
    pub actor: Option<ParticipantId>,
    pub ward_type: WardType,
    pub placed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterKill<'a> {
    pub killer_team: Option<TeamSide>,
    pub monster_type: &'a str,
    pub sub_type: Option<&'a str>,
}

/// A destroyed building or turret plate. `building_type` is `None` for plates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureHit<'a> {
    pub killer_id: Option<ParticipantId>,
    /// Side that lost the structure.
    pub team: Option<TeamSide>,
    pub building_type: Option<&'a str>,
    pub lane_type: &'a str,
    pub tower_type: Option<&'a str>,
}

/// Typed views used by the reconstructors and aggregators.
impl Event {
    pub fn item_change(&self) -> Option<ItemChange> {
        let (participant_id, item_id, action) = match self.kind {
            EventKind::ItemPurchased {
                participant_id,
                item_id,
            } => (participant_id, item_id, ItemAction::Purchased),
            EventKind::ItemSold {
                participant_id,
                item_id,
            } => (participant_id, item_id, ItemAction::Sold),
            EventKind::ItemDestroyed {
                participant_id,
                item_id,
            } => (participant_id, item_id, ItemAction::Destroyed),
            _ => return None,
        };
        Some(ItemChange {
            participant_id,
            item_id,
            action,
        })
    }

    /// `(participant, skill slot)` of an ability level-up.
    pub fn skill_up(&self) -> Option<(ParticipantId, u8)> {
        match self.kind {
            EventKind::SkillLevelUp {
                participant_id: Some(pid),
                skill_slot,
                ..
            } => Some((pid, skill_slot)),
            _ => None,
        }
    }

    /// `(participant, level)` of a champion level-up.
    pub fn level_reached(&self) -> Option<(ParticipantId, u8)> {
        match self.kind {
            EventKind::LevelUp {
                participant_id: Some(pid),
                level,
            } => Some((pid, level)),
            _ => None,
        }
    }

    pub fn ward(&self) -> Option<WardChange> {
        match self.kind {
            EventKind::WardPlaced {
                creator_id,
                ward_type,
            } => Some(WardChange {
                actor: creator_id,
                ward_type,
                placed: true,
            }),
            EventKind::WardKill {
                killer_id,
                ward_type,
            } => Some(WardChange {
                actor: killer_id,
                ward_type,
                placed: false,
            }),
            _ => None,
        }
    }

    pub fn monster_kill(&self) -> Option<MonsterKill<'_>> {
        match &self.kind {
            EventKind::EliteMonsterKill {
                killer_team,
                monster_type,
                monster_sub_type,
                ..
            } => Some(MonsterKill {
                killer_team: *killer_team,
                monster_type: monster_type.as_str(),
                sub_type: monster_sub_type.as_deref(),
            }),
            _ => None,
        }
    }

    pub fn structure_hit(&self) -> Option<StructureHit<'_>> {
        match &self.kind {
            EventKind::BuildingKill {
                killer_id,
                team,
                building_type,
                lane_type,
                tower_type,
            } => Some(StructureHit {
                killer_id: *killer_id,
                team: *team,
                building_type: Some(building_type.as_str()),
                lane_type: lane_type.as_str(),
                tower_type: tower_type.as_deref(),
            }),
            EventKind::TurretPlateDestroyed {
                killer_id,
                team,
                lane_type,
            } => Some(StructureHit {
                killer_id: *killer_id,
                team: *team,
                building_type: None,
                lane_type: lane_type.as_str(),
                tower_type: None,
            }),
            _ => None,
        }
    }
}
