use crate::{MatchSummary, ParticipantFrame, ParticipantId, TeamSide, Timeline};
use serde::Serialize;
use std::cmp::Ordering;

pub const DEFAULT_SNAPSHOT_MINUTE: usize = 15;

/// Red occupants sit this many ids after their blue lane opponent.
const LANE_OFFSET: ParticipantId = 5;

/// Counter differences between lane opponents, signed from one side's view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LaneDiff {
    pub cs: i64,
    pub gold: i64,
    pub xp: i64,
    pub level: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneComparison {
    /// Lane slot 1..=5 in draft order.
    pub lane: u8,
    pub blue_id: ParticipantId,
    pub red_id: ParticipantId,
    pub diff: LaneDiff,
    /// Whether the viewing side hit level 2 first; `None` when neither did
    /// or both did at the same timestamp.
    pub first_level2: Option<bool>,
}

/// Diff of `blue_id` minus `red_id` at frame `minute`, multiplied by the
/// perspective side's sign. A frame the game never reached yields zeros.
pub fn lane_diff(
    timeline: &Timeline,
    blue_id: ParticipantId,
    red_id: ParticipantId,
    perspective: TeamSide,
    minute: usize,
) -> LaneDiff {
    let Some(frame) = timeline.frames.get(minute) else {
        return LaneDiff::default();
    };
    let counters = |id: ParticipantId| {
        frame
            .participant_frames
            .get(&id)
            .copied()
            .unwrap_or_default()
    };
    let blue: ParticipantFrame = counters(blue_id);
    let red: ParticipantFrame = counters(red_id);
    let sign = perspective.sign();

    LaneDiff {
        cs: sign * (i64::from(blue.cs()) - i64::from(red.cs())),
        gold: sign * (i64::from(blue.total_gold) - i64::from(red.total_gold)),
        xp: sign * (i64::from(blue.xp) - i64::from(red.xp)),
        level: sign * (i64::from(blue.level) - i64::from(red.level)),
    }
}

fn level_two_at(timeline: &Timeline, participant: ParticipantId) -> Option<u64> {
    timeline
        .events()
        .filter_map(|e| match e.level_reached() {
            Some((pid, 2)) if pid == participant => Some(e.timestamp),
            _ => None,
        })
        .min()
}

/// Whether the perspective side won the race to level 2 in this lane.
pub fn first_to_level_two(
    timeline: &Timeline,
    blue_id: ParticipantId,
    red_id: ParticipantId,
    perspective: TeamSide,
) -> Option<bool> {
    let blue_first = match (level_two_at(timeline, blue_id), level_two_at(timeline, red_id)) {
        (None, None) => return None,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (Some(blue), Some(red)) => match blue.cmp(&red) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => return None,
        },
    };
    Some(match perspective {
        TeamSide::Blue => blue_first,
        TeamSide::Red => !blue_first,
    })
}

/// Compare every lane pair at `minute` from `selected`'s side.
pub fn lane_snapshot(
    summary: &MatchSummary,
    timeline: &Timeline,
    selected: ParticipantId,
    minute: usize,
) -> Vec<LaneComparison> {
    let Some(perspective) = summary.team_of(selected) else {
        return vec![];
    };
    let lanes = (summary.participants.len() / 2).min(usize::from(LANE_OFFSET));

    (1..=lanes as u8)
        .map(|lane| {
            let blue_id = lane;
            let red_id = lane + LANE_OFFSET;
            LaneComparison {
                lane,
                blue_id,
                red_id,
                diff: lane_diff(timeline, blue_id, red_id, perspective, minute),
                first_level2: first_to_level_two(timeline, blue_id, red_id, perspective),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoldPoint {
    pub minute: usize,
    pub blue: u64,
    pub red: u64,
    /// Blue minus red.
    pub diff: i64,
}

/// Team gold totals at every frame.
pub fn gold_advantage(summary: &MatchSummary, timeline: &Timeline) -> Vec<GoldPoint> {
    timeline
        .frames
        .iter()
        .enumerate()
        .map(|(minute, frame)| {
            let (mut blue, mut red) = (0u64, 0u64);
            for (&id, counters) in &frame.participant_frames {
                match summary.team_of(id) {
                    Some(TeamSide::Blue) => blue += u64::from(counters.total_gold),
                    Some(TeamSide::Red) => red += u64::from(counters.total_gold),
                    None => log::debug!("frame {minute} has counters for unknown participant {id}"),
                }
            }
            GoldPoint {
                minute,
                blue,
                red,
                diff: blue as i64 - red as i64,
            }
        })
        .collect()
}
