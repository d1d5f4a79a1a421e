use crate::classify::ItemAction;
use crate::partition::purchases_by_minute;
use crate::{ItemId, ParticipantId, Timeline};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SkillSlot {
    Q,
    W,
    E,
    R,
}

impl SkillSlot {
    pub const ALL: [SkillSlot; 4] = [SkillSlot::Q, SkillSlot::W, SkillSlot::E, SkillSlot::R];

    /// Riot numbers ability slots 1..=4.
    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(SkillSlot::Q),
            2 => Some(SkillSlot::W),
            3 => Some(SkillSlot::E),
            4 => Some(SkillSlot::R),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillSlot::Q => "Q",
            SkillSlot::W => "W",
            SkillSlot::E => "E",
            SkillSlot::R => "R",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillStep {
    /// Position of this level-up in the participant's sequence, starting at 1.
    pub champion_level: u8,
    pub slot: SkillSlot,
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotLevels {
    pub slot: SkillSlot,
    pub levels: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillOrder {
    pub steps: Vec<SkillStep>,
    /// Always four rows, Q/W/E/R, each with ascending levels.
    pub slots: Vec<SlotLevels>,
}

impl SkillOrder {
    pub fn levels(&self, slot: SkillSlot) -> &[u8] {
        self.slots
            .iter()
            .find(|s| s.slot == slot)
            .map(|s| s.levels.as_slice())
            .unwrap_or_default()
    }
}

/// Rebuild the "levelled at" table for one participant. The event itself
/// carries no champion level; it is the event's rank in time order.
pub fn skill_order(timeline: &Timeline, participant: ParticipantId) -> SkillOrder {
    let mut level_ups: Vec<(u64, u8)> = timeline
        .events()
        .filter_map(|e| {
            e.skill_up()
                .filter(|&(pid, _)| pid == participant)
                .map(|(_, slot)| (e.timestamp, slot))
        })
        .collect();
    level_ups.sort_by_key(|&(ts, _)| ts);

    let mut steps = Vec::with_capacity(level_ups.len());
    for (idx, (timestamp, raw_slot)) in level_ups.into_iter().enumerate() {
        let champion_level = u8::try_from(idx + 1).unwrap_or(u8::MAX);
        match SkillSlot::from_slot(raw_slot) {
            Some(slot) => steps.push(SkillStep {
                champion_level,
                slot,
                timestamp,
            }),
            None => log::debug!(
                "participant {participant} levelled unknown slot {raw_slot} at {timestamp}"
            ),
        }
    }

    let slots = SkillSlot::ALL
        .iter()
        .map(|&slot| SlotLevels {
            slot,
            levels: steps
                .iter()
                .filter(|s| s.slot == slot)
                .map(|s| s.champion_level)
                .collect(),
        })
        .collect();

    SkillOrder { steps, slots }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildEntry {
    pub item_id: ItemId,
    pub timestamp: u64,
    pub action: ItemAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildMinute {
    pub minute: u64,
    pub entries: Vec<BuildEntry>,
}

/// Purchases and sales grouped per elapsed minute. A sale is listed next to,
/// never instead of, the earlier purchase.
pub fn build_order(timeline: &Timeline, participant: ParticipantId) -> Vec<BuildMinute> {
    purchases_by_minute(&timeline.frames, participant)
        .into_iter()
        .map(|(minute, events)| BuildMinute {
            minute,
            entries: events
                .into_iter()
                .filter_map(|e| {
                    let change = e.item_change()?;
                    Some(BuildEntry {
                        item_id: change.item_id,
                        timestamp: e.timestamp,
                        action: change.action,
                    })
                })
                .collect(),
        })
        .collect()
}
