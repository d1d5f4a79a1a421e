use crate::settings::Settings;
use anyhow::anyhow;
use lanescope_engine::classify::{EventCategory, ItemAction};
use lanescope_engine::objectives::{self, ObjectiveTally};
use lanescope_engine::order::{self, BuildMinute, SkillOrder};
use lanescope_engine::partition::{self, Scope};
use lanescope_engine::rates::{self, ParticipantRates};
use lanescope_engine::snapshot::{self, GoldPoint, LaneComparison};
use lanescope_engine::support::{SUPPORT_QUEST_REWARDS, SupportItems, companion_item};
use lanescope_engine::{
    Event, ItemId, MatchSummary, Participant, ParticipantId, TeamSide, TeamSummary, Timeline,
    format_clock,
};
use serde::Serialize;

/// Everything derived for one participant's match view.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub match_id: &'a str,
    pub played_at: Option<String>,
    pub duration: String,
    pub queue_id: u32,
    pub game_version: &'a str,
    pub participant: ParticipantId,
    pub champion: &'a str,
    pub team: TeamSide,
    /// Final scoreboard, ordered by participant id.
    pub participants: &'a [Participant],
    pub teams: &'a [TeamSummary],
    pub events: Vec<EventLine<'a>>,
    pub build_order: Vec<BuildMinute>,
    pub skill_order: SkillOrder,
    pub lanes: Vec<LaneComparison>,
    pub objectives: ObjectiveTally,
    pub support_items: SupportItems,
    pub gold_advantage: Vec<GoldPoint>,
    pub rates: Vec<ParticipantRates>,
}

#[derive(Debug, Serialize)]
pub struct EventLine<'a> {
    pub clock: String,
    #[serde(flatten)]
    pub event: &'a Event,
    /// Item whose icon goes with the event: the ward's source item or the
    /// support tier revealed by an upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_hint: Option<ItemId>,
}

pub fn build<'a>(
    summary: &'a MatchSummary,
    timeline: &'a Timeline,
    settings: &Settings,
) -> anyhow::Result<Report<'a>> {
    let selected = settings.participant;
    let participant = summary
        .participant(selected)
        .ok_or_else(|| anyhow!("participant {selected} is not in match {}", summary.match_id))?;

    let scope = if settings.all_players {
        Scope::AllPlayers
    } else {
        Scope::SelectedPlayer(selected)
    };
    let support_items = SupportItems::resolve(summary, timeline);
    let buckets = partition::partition(&timeline.frames);
    let events = partition::view(&buckets, scope, &EventCategory::VISIBLE)
        .into_iter()
        .map(|event| EventLine {
            clock: format_clock(event.timestamp),
            event,
            item_hint: item_hint(summary, &support_items, event),
        })
        .collect();

    log::debug!(
        "{} events across {} actors for participant {selected}",
        buckets.values().map(Vec::len).sum::<usize>(),
        buckets.len()
    );

    Ok(Report {
        match_id: &summary.match_id,
        played_at: summary.game_creation.map(|t| t.to_rfc3339()),
        duration: format_clock(summary.game_duration_secs * 1000),
        queue_id: summary.queue_id,
        game_version: &summary.game_version,
        participant: selected,
        champion: &participant.champion_name,
        team: participant.team,
        participants: &summary.participants,
        teams: &summary.teams,
        events,
        build_order: order::build_order(timeline, selected),
        skill_order: order::skill_order(timeline, selected),
        lanes: snapshot::lane_snapshot(summary, timeline, selected, settings.snapshot_minute),
        objectives: objectives::tally(summary, timeline),
        gold_advantage: snapshot::gold_advantage(summary, timeline),
        rates: rates::all_rates(summary),
        support_items,
    })
}

fn item_hint(summary: &MatchSummary, support: &SupportItems, event: &Event) -> Option<ItemId> {
    if event.ward().is_some() {
        return support.ward_item(summary, event);
    }
    let change = event
        .item_change()
        .filter(|c| c.action == ItemAction::Destroyed)?;
    let reward = change
        .participant_id
        .and_then(|id| summary.participant(id))
        .and_then(|p| p.held_item_in(&SUPPORT_QUEST_REWARDS));
    companion_item(change.item_id, reward)
}
