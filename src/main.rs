use anyhow::{bail, Context, Result};
use pokedex::roster::{format_header, format_row};
use pokedex::{
    FightRunner, Pokemon, PokedexConfig, PokemonType, RonFileStore, Roster, RosterColumn,
    SortOrder,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: pokedex [--config PATH] <command>

commands:
  list [--sort COLUMN] [--desc]                        show the roster
  add TYPE NAME HEALTH ATTACK DEFENSE SPEED            add a Pokemon
  edit INDEX TYPE NAME HEALTH ATTACK DEFENSE SPEED     replace a Pokemon in place
  remove INDEX                                         remove a Pokemon
  clone INDEX                                          append a copy of a Pokemon
  fight FIRST SECOND                                   fight two Pokemon (Ctrl-C abandons)
  types                                                list the known types";

/// Longest event log printed in full after a fight.
const MAX_PRINTED_EVENTS: usize = 20;

#[derive(Debug)]
struct PokemonArgs {
    type_tag: String,
    name: String,
    health: f64,
    attack: f64,
    defense: f64,
    speed: f64,
}

impl PokemonArgs {
    fn build(&self) -> Result<Pokemon> {
        Pokemon::create_by_type_name(
            &self.type_tag,
            self.name.clone(),
            self.health,
            self.attack,
            self.defense,
            self.speed,
        )
        .with_context(|| format!("Cannot create Pokemon '{}'", self.name))
    }
}

#[derive(Debug)]
enum Command {
    List {
        sort: Option<(RosterColumn, SortOrder)>,
    },
    Add(PokemonArgs),
    Edit(usize, PokemonArgs),
    Remove(usize),
    Clone(usize),
    Fight(usize, usize),
    Types,
}

impl Command {
    fn mutates_roster(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Edit(..) | Command::Remove(_) | Command::Clone(_)
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let (config_path, command) = match parse_args(std::env::args().skip(1).collect()) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let config = PokedexConfig::load_or_default(config_path.as_deref());

    // Initialize logging; RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.max_level().as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut store = RonFileStore::new(&config.store.path);
    let mut roster = Roster::new();
    roster
        .load_from(&store)
        .with_context(|| format!("Error loading pokemon list from {:?}", store.path()))?;
    if roster.is_empty() {
        info!("Roster is empty, starting with the starter Pokemon");
        roster = Roster::with_starters().context("Cannot build the starter Pokemon")?;
    }

    let mutates = command.mutates_roster();
    run_command(command, &mut roster, &config).await?;

    if mutates {
        roster
            .save_to(&mut store)
            .with_context(|| format!("Error saving pokemon list to {:?}", store.path()))?;
    }
    Ok(())
}

async fn run_command(command: Command, roster: &mut Roster, config: &PokedexConfig) -> Result<()> {
    match command {
        Command::List { sort } => match sort {
            None => print!("{}", roster),
            Some((column, order)) => {
                println!("{}", format_header());
                for (index, pokemon) in roster.sorted_view(column, order) {
                    println!("{}", format_row(index, pokemon));
                }
            }
        },
        Command::Add(args) => {
            let pokemon = args.build()?;
            let index = roster.add(pokemon);
            println!("Added {} at #{}", roster.get(index)?, index);
        }
        Command::Edit(index, args) => {
            let replacement = args.build()?;
            let old = roster.edit(index, replacement)?;
            println!("Replaced {} with {}", old, roster.get(index)?);
        }
        Command::Remove(index) => {
            let removed = roster.remove(index)?;
            println!("Removed {}", removed);
        }
        Command::Clone(index) => {
            let copy_index = roster.clone_entry(index)?;
            println!("Cloned {} to #{}", roster.get(copy_index)?, copy_index);
        }
        Command::Fight(first, second) => {
            let first = roster.get(first)?.clone();
            let second = roster.get(second)?.clone();
            run_fight(&first, &second, config).await?;
        }
        Command::Types => {
            for pokemon_type in PokemonType::all() {
                println!("{:<8} {}", pokemon_type.tag(), pokemon_type.display_name());
            }
        }
    }
    Ok(())
}

async fn run_fight(first: &Pokemon, second: &Pokemon, config: &PokedexConfig) -> Result<()> {
    let runner = FightRunner::new(config.combat, &config.presentation);
    println!("Fighting {} against {}...", first.name(), second.name());

    let cancel = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    let Some(result) = runner.run(first, second, cancel).await else {
        println!("Fight abandoned.");
        return Ok(());
    };
    let report = result.context("The fight could not be resolved")?;

    let events = report.events.events();
    if events.len() <= MAX_PRINTED_EVENTS {
        for event in events {
            println!("  {}", event.format(first.name(), second.name()));
        }
    } else {
        println!("  ({} rounds fought)", report.rounds);
    }
    println!(
        "{} won the fight!",
        report.outcome.winner(first, second).name()
    );
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<(Option<PathBuf>, Command)> {
    let mut args = args.into_iter().peekable();
    let mut config_path = None;
    if args.peek().map(String::as_str) == Some("--config") {
        args.next();
        let path = args.next().context("--config needs a path")?;
        config_path = Some(PathBuf::from(path));
    }

    let Some(name) = args.next() else {
        bail!("missing command");
    };
    let rest: Vec<String> = args.collect();

    let command = match name.as_str() {
        "list" => Command::List {
            sort: parse_sort(&rest)?,
        },
        "add" => Command::Add(parse_pokemon(&rest)?),
        "edit" => {
            let (index, fields) = rest.split_first().context("edit needs an INDEX")?;
            Command::Edit(parse_index(index)?, parse_pokemon(fields)?)
        }
        "remove" => Command::Remove(parse_single_index(&rest)?),
        "clone" => Command::Clone(parse_single_index(&rest)?),
        "fight" => match rest.as_slice() {
            [first, second] => Command::Fight(parse_index(first)?, parse_index(second)?),
            _ => bail!("fight needs FIRST and SECOND indices"),
        },
        "types" => Command::Types,
        other => bail!("unknown command '{}'", other),
    };
    Ok((config_path, command))
}

fn parse_sort(args: &[String]) -> Result<Option<(RosterColumn, SortOrder)>> {
    let mut column = None;
    let mut order = SortOrder::Ascending;
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sort" => {
                let name = args.next().context("--sort needs a COLUMN")?;
                column = Some(name.parse::<RosterColumn>().map_err(anyhow::Error::msg)?);
            }
            "--desc" => order = SortOrder::Descending,
            other => bail!("unexpected argument '{}'", other),
        }
    }
    Ok(column.map(|column| (column, order)))
}

fn parse_pokemon(args: &[String]) -> Result<PokemonArgs> {
    let [type_tag, name, health, attack, defense, speed] = args else {
        bail!("expected TYPE NAME HEALTH ATTACK DEFENSE SPEED");
    };
    Ok(PokemonArgs {
        type_tag: type_tag.clone(),
        name: name.clone(),
        health: parse_stat("health", health)?,
        attack: parse_stat("attack", attack)?,
        defense: parse_stat("defense", defense)?,
        speed: parse_stat("speed", speed)?,
    })
}

fn parse_stat(stat: &str, value: &str) -> Result<f64> {
    value
        .parse()
        .with_context(|| format!("{} is not a valid input for {}", value, stat))
}

fn parse_index(value: &str) -> Result<usize> {
    value
        .parse()
        .with_context(|| format!("'{}' is not a valid roster index", value))
}

fn parse_single_index(args: &[String]) -> Result<usize> {
    match args {
        [index] => parse_index(index),
        _ => bail!("expected a single INDEX"),
    }
}
