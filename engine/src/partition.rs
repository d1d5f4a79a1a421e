use crate::classify::{EventCategory, ItemAction, classify};
use crate::{Event, Frame, ParticipantId};
use std::collections::BTreeMap;

/// Retained events per actor, each bucket in chronological order. An actor
/// with no retained events has no key.
pub type ActorEvents<'a> = BTreeMap<ParticipantId, Vec<&'a Event>>;

/// Purchase/sale events per elapsed minute, ascending.
pub type MinuteBuckets<'a> = BTreeMap<u64, Vec<&'a Event>>;

/// Which actors' buckets a view unions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    SelectedPlayer(ParticipantId),
    AllPlayers,
}

/// Bucket every retained event by its resolved actor.
pub fn partition(frames: &[Frame]) -> ActorEvents<'_> {
    let mut buckets = frames
        .iter()
        .flat_map(|f| f.events.iter())
        .fold(ActorEvents::new(), |mut acc, event| {
            match classify(event).actor_if_retained() {
                Some(actor) => acc.entry(actor).or_default().push(event),
                None => log::trace!("dropping unattributed event at {}", event.timestamp),
            }
            acc
        });

    // Stable: well-formed input is already ordered and stays untouched.
    for events in buckets.values_mut() {
        events.sort_by_key(|e| e.timestamp);
    }
    buckets
}

/// Union the buckets selected by `scope`, keep the requested categories and
/// return them in chronological order.
pub fn view<'a>(
    buckets: &ActorEvents<'a>,
    scope: Scope,
    categories: &[EventCategory],
) -> Vec<&'a Event> {
    let mut events: Vec<&'a Event> = match scope {
        Scope::SelectedPlayer(id) => buckets.get(&id).into_iter().flatten().copied().collect(),
        Scope::AllPlayers => buckets.values().flatten().copied().collect(),
    };
    events.retain(|e| categories.contains(&classify(e).category));
    events.sort_by_key(|e| e.timestamp);
    events
}

/// Bucket `participant`'s purchases and sales by `floor(timestamp / 60s)`.
pub fn purchases_by_minute(frames: &[Frame], participant: ParticipantId) -> MinuteBuckets<'_> {
    frames
        .iter()
        .flat_map(|f| f.events.iter())
        .filter(|e| {
            e.item_change().is_some_and(|c| {
                c.action != ItemAction::Destroyed && c.participant_id == Some(participant)
            })
        })
        .fold(MinuteBuckets::new(), |mut acc, event| {
            acc.entry(event.minute()).or_default().push(event);
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WardType;
    use crate::testutil::{frame, kill, level_up, purchase, skill, sold, ward_placed};

    fn sample_frames() -> Vec<Frame> {
        vec![
            frame(0, vec![]),
            frame(
                60_000,
                vec![
                    purchase(1_000, 1, 1055),
                    purchase(1_200, 6, 1056),
                    skill(30_000, 1, 1),
                    ward_placed(55_000, 5, WardType::YellowTrinket),
                ],
            ),
            frame(
                120_000,
                vec![
                    level_up(70_000, 3, 2),
                    kill(80_000, Some(6), 1),
                    kill(81_000, None, 2),
                    sold(95_000, 1, 1055),
                ],
            ),
        ]
    }

    #[test]
    fn keys_are_exactly_actors_with_retained_events() {
        let frames = sample_frames();
        let buckets = partition(&frames);
        let keys: Vec<_> = buckets.keys().copied().collect();
        // 3 only levelled up; 2 was killed by a turret.
        assert_eq!(keys, vec![1, 5, 6]);
        assert!(buckets.values().all(|v| !v.is_empty()));
    }

    #[test]
    fn buckets_preserve_chronological_order() {
        let frames = sample_frames();
        let buckets = partition(&frames);
        let ts: Vec<_> = buckets[&1].iter().map(|e| e.timestamp).collect();
        assert_eq!(ts, vec![1_000, 95_000]);
        let ts: Vec<_> = buckets[&6].iter().map(|e| e.timestamp).collect();
        assert_eq!(ts, vec![1_200, 80_000]);
    }

    #[test]
    fn out_of_order_events_are_stably_sorted() {
        let frames = vec![frame(
            0,
            vec![purchase(5_000, 1, 1001), purchase(2_000, 1, 1055), sold(2_000, 1, 1056)],
        )];
        let buckets = partition(&frames);
        let items: Vec<_> = buckets[&1]
            .iter()
            .filter_map(|e| e.item_change().map(|c| c.item_id))
            .collect();
        assert_eq!(items, vec![1055, 1056, 1001]);
    }

    #[test]
    fn empty_timeline_has_no_keys() {
        assert!(partition(&[]).is_empty());
        assert!(partition(&[frame(0, vec![])]).is_empty());
    }

    #[test]
    fn selected_scope_reads_one_bucket() {
        let frames = sample_frames();
        let buckets = partition(&frames);
        let items = view(&buckets, Scope::SelectedPlayer(1), &[EventCategory::Items]);
        assert_eq!(items.len(), 2);
        let kills = view(&buckets, Scope::SelectedPlayer(1), &[EventCategory::Kills]);
        assert!(kills.is_empty(), "player 1 died but did not kill");
        assert!(view(&buckets, Scope::SelectedPlayer(9), &EventCategory::VISIBLE).is_empty());
    }

    #[test]
    fn all_scope_merges_buckets_chronologically() {
        let frames = sample_frames();
        let buckets = partition(&frames);
        let all = view(&buckets, Scope::AllPlayers, &EventCategory::VISIBLE);
        let ts: Vec<_> = all.iter().map(|e| e.timestamp).collect();
        assert_eq!(ts, vec![1_000, 1_200, 55_000, 80_000, 95_000]);
        let items = view(&buckets, Scope::AllPlayers, &[EventCategory::Items]);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn minute_buckets_flatten_back_to_event_order() {
        let frames = vec![
            frame(
                60_000,
                vec![purchase(1_000, 2, 1055), purchase(1_500, 2, 2003), purchase(1_600, 3, 1001)],
            ),
            frame(
                180_000,
                vec![purchase(125_000, 2, 1036), sold(179_999, 2, 2003), skill(150_000, 2, 1)],
            ),
        ];
        let minutes = purchases_by_minute(&frames, 2);
        let keys: Vec<_> = minutes.keys().copied().collect();
        assert_eq!(keys, vec![0, 2]);

        let flattened: Vec<u64> = minutes.values().flatten().map(|e| e.timestamp).collect();
        assert_eq!(flattened, vec![1_000, 1_500, 125_000, 179_999]);
    }

    #[test]
    fn minute_buckets_are_empty_without_purchases() {
        let frames = sample_frames();
        assert!(purchases_by_minute(&frames, 4).is_empty());
        assert!(purchases_by_minute(&[], 1).is_empty());
    }
}
