use std::fmt;

/// Which argument of a fight a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    FightStarted {
        first: String,
        second: String,
        initiative: Side,
    },
    Attacked {
        attacker: Side,
        damage: f64,
        remaining_health: f64,
    },
    /// Consecutive hits by the same side, logged as one entry.
    RoundsSummarized {
        attacker: Side,
        rounds: u64,
        remaining_health: f64,
    },
    Fainted {
        side: Side,
    },
}

impl BattleEvent {
    /// Render the event as a line of text, resolving sides to the given names.
    pub fn format(&self, first_name: &str, second_name: &str) -> String {
        let name_of = |side: Side| match side {
            Side::First => first_name,
            Side::Second => second_name,
        };
        match self {
            BattleEvent::FightStarted {
                first,
                second,
                initiative,
            } => {
                let leader = match initiative {
                    Side::First => first,
                    Side::Second => second,
                };
                format!("{} faces {}! {} moves first.", first, second, leader)
            }
            BattleEvent::Attacked {
                attacker,
                damage,
                remaining_health,
            } => format!(
                "{} hits {} for {:.2} ({:.2} health left).",
                name_of(*attacker),
                name_of(attacker.opponent()),
                damage,
                remaining_health
            ),
            BattleEvent::RoundsSummarized {
                attacker,
                rounds,
                remaining_health,
            } => format!(
                "{} hits {} {} more times ({:.2} health left).",
                name_of(*attacker),
                name_of(attacker.opponent()),
                rounds,
                remaining_health
            ),
            BattleEvent::Fainted { side } => format!("{} fainted!", name_of(*side)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        for event in &self.events {
            println!("  {:?}", event);
        }
    }
}

impl fmt::Display for EventBus {
    /// Shows debug format of all events, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}
