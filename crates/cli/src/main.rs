use anyhow::Context;
use crictrumps_core::{
    lower_is_better, score_breakdown, Booster, BoosterPolicy, Card, Event, EventBus, GameSession,
    Phase, RngState, TurnOrder, KNOWN_STATS,
};
use crictrumps_data::{load_assets, Assets, StatFill};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone)]
struct CliOptions {
    auto: bool,
    seed: Option<u64>,
    assets: PathBuf,
    strict_turns: bool,
    consume_boosters: bool,
    provider_defaults: bool,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        auto: false,
        seed: None,
        assets: PathBuf::from("assets"),
        strict_turns: false,
        consume_boosters: false,
        provider_defaults: false,
    };
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => options.auto = true,
            "--strict-turns" => options.strict_turns = true,
            "--consume-boosters" => options.consume_boosters = true,
            "--provider-defaults" => options.provider_defaults = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--assets" => {
                if let Some(value) = args.get(idx + 1) {
                    options.assets = PathBuf::from(value);
                    idx += 1;
                }
            }
            other => warn!("ignoring unknown argument {other}"),
        }
        idx += 1;
    }
    options
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if let Err(err) = run(&options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    let fill = if options.provider_defaults {
        StatFill::ProviderDefaults
    } else {
        StatFill::Zero
    };
    let assets = load_assets(&options.assets, fill)
        .with_context(|| format!("load assets from {}", options.assets.display()))?;
    let mut rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    let mut events = EventBus::default();
    let mut session = build_session(options, &assets, &mut rng, &mut events)?;
    print_events(&mut events);
    info!("table ready, seed {}", rng.seed());
    if options.auto {
        run_auto(&mut session, &mut events);
        return Ok(());
    }
    run_interactive(&mut session, &assets, &mut rng, &mut events)
}

fn build_session(
    options: &CliOptions,
    assets: &Assets,
    rng: &mut RngState,
    events: &mut EventBus,
) -> anyhow::Result<GameSession> {
    let mut config = assets.config.clone();
    if options.strict_turns {
        config.turn_order = TurnOrder::Strict;
    }
    if options.consume_boosters {
        config.booster_policy = BoosterPolicy::ConsumedOnUse;
    }
    let mut session = GameSession::new(config)?;
    session.set_game_data(assets.game_data.clone(), events);
    session.shuffle_and_deal(assets.cards.clone(), rng, events)?;
    Ok(session)
}

fn run_auto(session: &mut GameSession, events: &mut EventBus) {
    let mut round = 0usize;
    while session.phase() != Phase::GameOver {
        let stat = KNOWN_STATS[round % KNOWN_STATS.len()];
        session.select_stat(stat, events);
        let mut seat = session.expected_player().id.clone();
        for _ in 0..session.players().len() {
            let Some(card) = best_card(session, &seat, stat) else {
                warn!("{seat} has no card left to play");
                return;
            };
            let booster = (round % 3 == 0
                && session
                    .player(&seat)
                    .is_some_and(|player| player.boosters.available(Booster::TeamRank)))
            .then_some(Booster::TeamRank);
            if let Err(err) = session.play_card(&seat, &card.id, booster, events) {
                warn!("auto play failed: {err}");
                return;
            }
            if session.phase() == Phase::Resolution {
                break;
            }
            seat = session.expected_player().id.clone();
        }
        if let Err(err) = session.resolve_hand(events) {
            warn!("auto resolve failed: {err}");
            return;
        }
        print_events(events);
        round += 1;
    }
    print_standings(session);
}

fn best_card(session: &GameSession, player: &str, stat: &str) -> Option<Card> {
    let hand = session.hand_of(player)?;
    let lower = lower_is_better(stat);
    hand.iter()
        .fold(None::<&Card>, |best, card| match best {
            Some(current)
                if (lower && card.stat(stat) >= current.stat(stat))
                    || (!lower && card.stat(stat) <= current.stat(stat)) =>
            {
                Some(current)
            }
            _ => Some(card),
        })
        .cloned()
}

fn run_interactive(
    session: &mut GameSession,
    assets: &Assets,
    rng: &mut RngState,
    events: &mut EventBus,
) -> anyhow::Result<()> {
    print_help();
    print_state(session);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}> ", session.phase().id());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        let outcome = match cmd {
            "help" | "h" | "?" => {
                print_help();
                Ok(())
            }
            "quit" | "exit" | "q" => break,
            "state" | "s" => {
                print_state(session);
                Ok(())
            }
            "stats" => {
                print_stats();
                Ok(())
            }
            "stat" | "st" => match args.first().and_then(|arg| parse_stat(arg)) {
                Some(stat) => {
                    session.select_stat(stat, events);
                    Ok(())
                }
                None => Err("usage: stat <name|number>".to_string()),
            },
            "pick" => pick_card(session, &args),
            "play" | "p" => {
                let player = session.expected_player().id.clone();
                play_from_hand(session, &player, &args, events)
            }
            "as" => match args.split_first() {
                Some((seat, rest)) => match seat_name(session, seat) {
                    Some(player) => play_from_hand(session, &player, rest, events),
                    None => Err(format!("no seat {seat}")),
                },
                None => Err("usage: as <seat> <card> [booster]".to_string()),
            },
            "resolve" | "r" => session
                .resolve_hand(events)
                .map(|_| ())
                .map_err(|err| err.to_string()),
            "new" => {
                session.start_new_hand(events);
                Ok(())
            }
            "next" | "n" => {
                session.next_player(events);
                Ok(())
            }
            "deal" => session
                .shuffle_and_deal(assets.cards.clone(), rng, events)
                .map_err(|err| err.to_string()),
            "reset" => {
                session.reset(events);
                Ok(())
            }
            "standings" | "score" => {
                print_standings(session);
                Ok(())
            }
            "json" => {
                println!("{}", serde_json::to_string_pretty(session)?);
                Ok(())
            }
            _ => Err(format!("unknown command {cmd}, try help")),
        };
        if let Err(err) = outcome {
            println!("error: {err}");
        }
        print_events(events);
    }
    Ok(())
}

fn parse_stat(arg: &str) -> Option<&'static str> {
    if let Ok(number) = arg.parse::<usize>() {
        return KNOWN_STATS.get(number.checked_sub(1)?).copied();
    }
    KNOWN_STATS
        .iter()
        .find(|stat| stat.eq_ignore_ascii_case(arg))
        .copied()
}

fn seat_name(session: &GameSession, seat: &str) -> Option<String> {
    let players = session.player_ids();
    if let Ok(number) = seat.parse::<usize>() {
        return players.get(number.checked_sub(1)?).cloned();
    }
    players.iter().find(|name| name.eq_ignore_ascii_case(seat)).cloned()
}

fn card_at(session: &GameSession, player: &str, arg: Option<&&str>) -> Result<Card, String> {
    let hand = session
        .hand_of(player)
        .ok_or_else(|| format!("no player {player}"))?;
    let index = arg
        .and_then(|arg| arg.parse::<usize>().ok())
        .and_then(|number| number.checked_sub(1))
        .ok_or_else(|| "card number required".to_string())?;
    hand.get(index)
        .cloned()
        .ok_or_else(|| format!("{player} has no card {}", index + 1))
}

fn pick_card(session: &mut GameSession, args: &[&str]) -> Result<(), String> {
    let player = session.expected_player().id.clone();
    let card = card_at(session, &player, args.first())?;
    println!("{player} is eyeing {} ({})", card.name, card.team);
    session.select_card(card);
    Ok(())
}

fn play_from_hand(
    session: &mut GameSession,
    player: &str,
    args: &[&str],
    events: &mut EventBus,
) -> Result<(), String> {
    let card = match args.first() {
        Some(_) => card_at(session, player, args.first())?,
        None => session
            .selected_card()
            .cloned()
            .ok_or_else(|| "pick a card first or give its number".to_string())?,
    };
    let booster = match args.get(1) {
        Some(word) => Some(Booster::from_keyword(word).ok_or_else(|| format!("no booster {word}"))?),
        None => None,
    };
    session
        .play_card(player, &card.id, booster, events)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

fn print_help() {
    println!("commands:");
    println!("  state | s                show the table");
    println!("  stats                    list the stats you can play on");
    println!("  stat <name|number>       choose the stat for this hand");
    println!("  pick <card>              highlight a card for the player to act");
    println!("  play <card> [booster]    play for the player to act (orange|purple|teamrank)");
    println!("  as <seat> <card> [boost] play for a given seat");
    println!("  resolve | r              settle a complete hand");
    println!("  new                      start a fresh hand");
    println!("  next | n                 pass the lead to the next seat");
    println!("  deal                     reshuffle the catalog and deal again");
    println!("  reset                    back to the lobby");
    println!("  standings                show scores");
    println!("  json                     dump the table as JSON");
    println!("  quit                     leave");
}

fn print_stats() {
    for (idx, stat) in KNOWN_STATS.iter().enumerate() {
        let order = if lower_is_better(stat) { "lower wins" } else { "higher wins" };
        println!("  {:>2}. {stat} ({order})", idx + 1);
    }
}

fn print_state(session: &GameSession) {
    println!("phase: {}", session.phase().id());
    println!(
        "lead: {}  to act: {}",
        session.current_player().id,
        session.expected_player().id
    );
    if let Some(stat) = session.selected_stat() {
        println!("stat: {stat}");
    }
    let data = session.game_data();
    println!(
        "orange cap: {}  purple cap: {}",
        data.orange_cap.as_deref().unwrap_or("-"),
        data.purple_cap.as_deref().unwrap_or("-")
    );
    for player in session.players() {
        let boosters: Vec<&str> = Booster::ALL
            .iter()
            .filter(|booster| player.boosters.available(**booster))
            .map(|booster| booster.id())
            .collect();
        println!(
            "{} [{} pts] boosters: {}",
            player.id,
            player.score,
            boosters.join(",")
        );
        let stat = session
            .current_hand()
            .map(|hand| hand.stat.as_str())
            .or(session.selected_stat());
        for (idx, card) in player.hand.iter().enumerate() {
            match stat {
                Some(stat) if !stat.is_empty() => {
                    let score = score_breakdown(card, stat, None, data);
                    println!(
                        "  {}. {} ({}) {stat}={} x{:.2}",
                        idx + 1,
                        card.name,
                        card.team,
                        score.base,
                        score.multiplier
                    );
                }
                _ => println!("  {}. {} ({})", idx + 1, card.name, card.team),
            }
        }
    }
    if let Some(hand) = session.current_hand() {
        println!("on the table ({}):", hand.stat);
        for play in &hand.plays {
            let booster = play.booster.map(Booster::id).unwrap_or("none");
            println!(
                "  {}: {} = {:.2} (booster {booster})",
                play.player, play.card.name, play.final_value
            );
        }
    }
}

fn print_standings(session: &GameSession) {
    for standing in session.standings() {
        println!("{:>12}: {}", standing.player, standing.score);
    }
    if session.is_game_over() {
        if let Some(leader) = session.leader() {
            println!("winner: {}", leader.player);
        }
    }
}

fn print_events(events: &mut EventBus) {
    for event in events.drain() {
        match event {
            Event::Dealt {
                hand_size,
                dealt,
                dropped,
            } => println!("dealt {dealt} cards, {hand_size} per seat ({dropped} left out)"),
            Event::CardPlayed {
                player,
                card,
                booster,
                final_value,
            } => println!(
                "{player} played {card} for {final_value:.2}{}",
                booster
                    .map(|b| format!(" with {} booster", b.id()))
                    .unwrap_or_default()
            ),
            Event::HandResolved {
                winner,
                stat,
                value,
            } => println!("{winner} takes the hand on {stat} ({value:.2})"),
            Event::GameOver { leader } => {
                println!("game over, winner {}", leader.as_deref().unwrap_or("-"))
            }
            other => log::debug!("event: {other:?}"),
        }
    }
}
