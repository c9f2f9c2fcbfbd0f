use crate::battle::engine::{resolve_fight, FightReport};
use crate::config::{CombatConfig, PresentationConfig};
use crate::errors::CombatResult;
use crate::pokemon::Pokemon;
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Caller-side wrapper that shows a fight with some "thinking time" before
/// revealing the outcome.
///
/// The wait lives here, not in the resolver: resolution stays synchronous and
/// side-effect free, and abandoning the wait leaves nothing behind.
#[derive(Debug, Clone)]
pub struct FightRunner {
    combat: CombatConfig,
    min_delay: Duration,
    max_delay: Duration,
}

impl FightRunner {
    pub fn new(combat: CombatConfig, presentation: &PresentationConfig) -> Self {
        let low = presentation
            .fight_delay_min_ms
            .min(presentation.fight_delay_max_ms);
        let high = presentation
            .fight_delay_min_ms
            .max(presentation.fight_delay_max_ms);
        Self {
            combat,
            min_delay: Duration::from_millis(low),
            max_delay: Duration::from_millis(high),
        }
    }

    /// A runner that resolves immediately.
    pub fn without_delay(combat: CombatConfig) -> Self {
        Self {
            combat,
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Draw a delay uniformly from the configured window.
    pub fn thinking_time(&self) -> Duration {
        if self.min_delay == self.max_delay {
            return self.min_delay;
        }
        let millis = rand::rng()
            .random_range(self.min_delay.as_millis() as u64..=self.max_delay.as_millis() as u64);
        Duration::from_millis(millis)
    }

    /// Wait out the thinking time, then resolve the fight.
    ///
    /// Returns `None` if `cancel` completes before the wait is over; the fight
    /// is then never resolved.
    pub async fn run<C>(
        &self,
        first: &Pokemon,
        second: &Pokemon,
        cancel: C,
    ) -> Option<CombatResult<FightReport>>
    where
        C: Future<Output = ()>,
    {
        let delay = self.thinking_time();
        debug!(?delay, "Fighting {} against {}...", first.name(), second.name());

        tokio::select! {
            biased;
            _ = cancel => {
                info!("Fight between {} and {} was abandoned", first.name(), second.name());
                None
            }
            _ = tokio::time::sleep(delay) => Some(resolve_fight(first, second, &self.combat)),
        }
    }
}
