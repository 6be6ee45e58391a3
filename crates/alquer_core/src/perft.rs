use crate::{movegen::legal_moves_into, position::Position, types::Move};

/// Pure perft node count.
/// Counts all move sequences of exactly `depth` plies from `pos`; lines that
/// end early because a side runs out of moves contribute nothing.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(pos: &Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        // One buffer per remaining ply
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        legal_moves_into(pos, buf);

        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            nodes += inner(&pos.apply(mv), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(16); depth as usize];
    inner(pos, depth, &mut layers[..])
}
