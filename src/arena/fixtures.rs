//! Hand-built arenas shared across unit tests.
use super::*;

/// One initial P move `0` and a single O reply `0.0`.
pub fn single() -> Arena {
    Arena::new(
        "single",
        vec![
            ArenaMove::new("m0", "0", vec![0], Player::P, true),
            ArenaMove::new("m1", "0.0", vec![], Player::O, false),
        ],
    )
    .expect("unique addresses")
}

/// P opens two branches; O's left reply lets P answer and win,
/// O's right reply leaves P without a move.
pub fn fork() -> Arena {
    Arena::new(
        "fork",
        vec![
            ArenaMove::new("p0", "0", vec![0, 1], Player::P, true),
            ArenaMove::new("o0", "0.0", vec![0], Player::O, false),
            ArenaMove::new("o1", "0.1", vec![], Player::O, false),
            ArenaMove::new("p1", "0.0.0", vec![], Player::P, false),
        ],
    )
    .expect("unique addresses")
}

/// Two initial moves: `0` loses for P at once, `1` wins after two plies.
pub fn choice() -> Arena {
    Arena::new(
        "choice",
        vec![
            ArenaMove::new("a", "0", vec![0], Player::P, true),
            ArenaMove::new("a0", "0.0", vec![], Player::O, false),
            ArenaMove::new("b", "1", vec![0], Player::P, true),
            ArenaMove::new("b0", "1.0", vec![0], Player::O, false),
            ArenaMove::new("b00", "1.0.0", vec![], Player::P, false),
        ],
    )
    .expect("unique addresses")
}

/// A forced line of `length` plies (even) ending on a P fork: `win` leaves
/// O without a reply, `lose` walks into O's last word.
pub fn ladder(length: usize) -> Arena {
    let mut moves = Vec::with_capacity(length + 3);
    let mut address = Address::root(0);
    for ply in 0..length {
        let player = Player::at(ply);
        let ramification = match ply + 1 == length {
            true => vec![0, 1],
            false => vec![0],
        };
        moves.push(ArenaMove::new(format!("l{}", ply), address.clone(), ramification, player, ply == 0));
        address = address.child(0);
    }
    let fork = address.parent().expect("ladder has at least one rung");
    moves.push(ArenaMove::new("win", fork.child(0), vec![], Player::P, false));
    moves.push(ArenaMove::new("lose", fork.child(1), vec![0], Player::P, false));
    moves.push(ArenaMove::new("last", fork.child(1).child(0), vec![], Player::O, false));
    Arena::new("ladder", moves).expect("unique addresses")
}

/// Dense tree built by the default builder.
pub fn tree(depth: usize, ramification: usize) -> Arena {
    Unfolding::default()
        .build(&ArenaConfig::new("positive", "negative", depth, ramification).dense())
        .expect("fixture bounds fit under the ceiling")
}
