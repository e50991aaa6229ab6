use broadside::{
    ai, init_logging, render_board, AiPlayer, CliPlayer, FireOutcome, Game, Player, ShotReport,
    Side, FLEET,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play both sides.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed } => play(seed),
        Commands::Demo { seed } => demo(seed),
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn play(seed: Option<u64>) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = make_rng(seed);
    let mut game = Game::new();

    println!("The computer is placing its fleet...");
    ai::place_fleet(&mut rng, game.board_mut(Side::Computer), &FLEET)
        .map_err(|e| anyhow::anyhow!(e))?;

    println!("Now it's your turn!");
    let mut human = CliPlayer::new();
    human
        .place_fleet(&mut rng, game.board_mut(Side::Human), &FLEET)
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut computer = AiPlayer::new();
    while !game.ended() {
        println!("\nEnemy waters:");
        print!("{}", render_board(game.board(Side::Computer), false));
        println!("\nYour waters:");
        print!("{}", render_board(game.board(Side::Human), true));

        let report = human.take_turn(&mut rng, game.board_mut(Side::Computer));
        narrate_player_shot(&report);
        if game.ended() {
            break;
        }

        let report = computer.take_turn(&mut rng, game.board_mut(Side::Human));
        narrate_computer_shot(&report);
    }

    println!("\nGame over!");
    if game.board(Side::Computer).is_game_over() {
        println!("You sank the entire enemy fleet. Victory!");
    } else {
        println!("Your fleet is at the bottom of the sea. The computer wins.");
    }
    Ok(())
}

fn narrate_player_shot(report: &ShotReport) {
    match report.outcome {
        FireOutcome::Hit => println!("Direct hit at {}!", report.target),
        FireOutcome::Miss => println!("Your shot at {} splashed into empty water.", report.target),
    }
    if report.sunk {
        println!("That ship is going down!");
    }
}

fn narrate_computer_shot(report: &ShotReport) {
    println!("The computer fired at {}.", report.target);
    if report.sunk {
        println!("The computer sunk one of your ships!");
    }
}

fn demo(seed: Option<u64>) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = make_rng(seed);
    let mut game = Game::new();

    ai::place_fleet(&mut rng, game.board_mut(Side::Human), &FLEET)
        .map_err(|e| anyhow::anyhow!(e))?;
    ai::place_fleet(&mut rng, game.board_mut(Side::Computer), &FLEET)
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut round = 0u32;
    while !game.ended() {
        round += 1;
        let report = ai::take_turn(&mut rng, game.board_mut(Side::Computer));
        println!("round {:>3}: side A fires at {} - {}", round, report.target, describe(&report));
        if game.ended() {
            break;
        }
        let report = ai::take_turn(&mut rng, game.board_mut(Side::Human));
        println!("round {:>3}: side B fires at {} - {}", round, report.target, describe(&report));
    }

    println!("\nSide A's waters:");
    print!("{}", render_board(game.board(Side::Human), true));
    println!("\nSide B's waters:");
    print!("{}", render_board(game.board(Side::Computer), true));
    let winner = if game.board(Side::Computer).is_game_over() {
        "side A"
    } else {
        "side B"
    };
    println!("\n{} wins after {} rounds.", winner, round);
    Ok(())
}

fn describe(report: &ShotReport) -> &'static str {
    if report.sunk {
        "hit, ship sunk"
    } else {
        match report.outcome {
            FireOutcome::Hit => "hit",
            FireOutcome::Miss => "miss",
        }
    }
}
