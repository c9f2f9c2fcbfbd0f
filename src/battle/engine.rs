use crate::battle::calculators::damage;
use crate::battle::state::{BattleEvent, EventBus, Side};
use crate::config::CombatConfig;
use crate::errors::{CombatError, CombatResult};
use crate::pokemon::Pokemon;
use std::cmp::Ordering;
use tracing::debug;

/// Result of a resolved fight. There is no draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    FirstWins,
    SecondWins,
}

impl Outcome {
    /// Three-way comparison view: `Greater` when the first argument wins,
    /// `Less` otherwise. Never `Equal`.
    pub fn as_ordering(self) -> Ordering {
        match self {
            Outcome::FirstWins => Ordering::Greater,
            Outcome::SecondWins => Ordering::Less,
        }
    }

    pub fn winning_side(self) -> Side {
        match self {
            Outcome::FirstWins => Side::First,
            Outcome::SecondWins => Side::Second,
        }
    }

    pub fn winner<'a>(self, first: &'a Pokemon, second: &'a Pokemon) -> &'a Pokemon {
        match self {
            Outcome::FirstWins => first,
            Outcome::SecondWins => second,
        }
    }

    pub fn loser<'a>(self, first: &'a Pokemon, second: &'a Pokemon) -> &'a Pokemon {
        match self {
            Outcome::FirstWins => second,
            Outcome::SecondWins => first,
        }
    }
}

/// Full account of a resolved fight.
#[derive(Debug, Clone, PartialEq)]
pub struct FightReport {
    pub outcome: Outcome,
    pub rounds: u64,
    pub events: EventBus,
}

/// Decide who wins between `first` and `second`. Records no events, so every
/// round past the first is settled arithmetically.
pub fn resolve(first: &Pokemon, second: &Pokemon) -> CombatResult<Outcome> {
    let (outcome, _) = run_rounds(first, second, 0, |_| {})?;
    Ok(outcome)
}

/// Resolve a fight and keep the round-by-round events.
///
/// Both damage values are computed once up front; neither creature is
/// modified, the running health pools are local to the call.
///
/// Each round, the creature whose speed is greater than or equal to its
/// opponent's attacks. Speeds never change during a fight, so the same side
/// keeps the initiative every round and the slower creature never
/// counter-attacks: the faster one (or the first argument, on a speed tie)
/// wins whenever its damage can make progress. This is a one-sided exchange,
/// not an alternating-turn simulation.
///
/// At most `config.max_recorded_rounds` hits are logged one by one. Any
/// further hits before the knockout are folded into a single
/// [`BattleEvent::RoundsSummarized`]; the outcome and round count are the same.
///
/// # Errors
///
/// - [`CombatError::NonPositiveDefense`] if either side's defense is `<= 0`.
/// - [`CombatError::Stalemate`] if the attacking side's damage can never
///   lower its opponent's health (zero, negative, or too small to register).
pub fn resolve_fight(
    first: &Pokemon,
    second: &Pokemon,
    config: &CombatConfig,
) -> CombatResult<FightReport> {
    let mut event_bus = EventBus::new();
    let (outcome, rounds) = run_rounds(first, second, config.max_recorded_rounds, |event| {
        event_bus.push(event)
    })?;
    Ok(FightReport {
        outcome,
        rounds,
        events: event_bus,
    })
}

fn run_rounds(
    first: &Pokemon,
    second: &Pokemon,
    max_recorded_rounds: u64,
    mut on_event: impl FnMut(BattleEvent),
) -> CombatResult<(Outcome, u64)> {
    let first_damage = damage(first, second)?;
    let second_damage = damage(second, first)?;

    let attacker_side = initiative(first, second);
    let (attacker, per_round, mut target_health) = match attacker_side {
        Side::First => (first, first_damage, second.health()),
        Side::Second => (second, second_damage, first.health()),
    };

    on_event(BattleEvent::FightStarted {
        first: first.name().to_string(),
        second: second.name().to_string(),
        initiative: attacker_side,
    });

    // Health only shrinks from here on, so a first hit that makes progress
    // means every later hit does too.
    if per_round < target_health && target_health - per_round >= target_health {
        return Err(CombatError::Stalemate {
            attacker: attacker.name().to_string(),
            damage: per_round,
        });
    }

    let mut rounds: u64 = 0;
    while per_round < target_health {
        if rounds >= max_recorded_rounds {
            let skipped = ((target_health / per_round).ceil() - 1.0).max(0.0) as u64;
            if skipped > 0 {
                rounds += skipped;
                target_health -= skipped as f64 * per_round;
                on_event(BattleEvent::RoundsSummarized {
                    attacker: attacker_side,
                    rounds: skipped,
                    remaining_health: target_health,
                });
                continue;
            }
        }
        rounds += 1;
        target_health -= per_round;
        on_event(BattleEvent::Attacked {
            attacker: attacker_side,
            damage: per_round,
            remaining_health: target_health,
        });
    }

    rounds += 1;
    target_health -= per_round;
    on_event(BattleEvent::Attacked {
        attacker: attacker_side,
        damage: per_round,
        remaining_health: target_health,
    });
    on_event(BattleEvent::Fainted {
        side: attacker_side.opponent(),
    });

    let outcome = match attacker_side {
        Side::First => Outcome::FirstWins,
        Side::Second => Outcome::SecondWins,
    };
    debug!(
        first = first.name(),
        second = second.name(),
        ?outcome,
        rounds,
        "Fight resolved"
    );
    Ok((outcome, rounds))
}

/// Ties go to the first argument.
fn initiative(first: &Pokemon, second: &Pokemon) -> Side {
    if first.speed() >= second.speed() {
        Side::First
    } else {
        Side::Second
    }
}
