use broadside::{ai, Game, Side, FLEET};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut game = Game::new();
    ai::place_fleet(&mut rng1, game.board_mut(Side::Human), &FLEET)
        .map_err(|e| anyhow::anyhow!(e))?;
    ai::place_fleet(&mut rng2, game.board_mut(Side::Computer), &FLEET)
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut shots1 = 0usize;
    let mut shots2 = 0usize;
    while !game.ended() {
        ai::take_turn(&mut rng1, game.board_mut(Side::Computer));
        shots1 += 1;
        if game.ended() {
            break;
        }
        ai::take_turn(&mut rng2, game.board_mut(Side::Human));
        shots2 += 1;
    }

    let winner = if game.board(Side::Computer).is_game_over() {
        "player1"
    } else {
        "player2"
    };
    println!(
        "player1: {} shots, player2: {} shots, winner: {}",
        shots1, shots2, winner
    );
    Ok(())
}
