use crate::{Error, Result};

/// The largest number of disks accepted by [`tower_of_hanoi`]
/// (2²⁰ − 1 moves).
pub const MAX_HANOI_DISKS: u32 = 20;

/// A move of the Tower of Hanoi: `disk` (1 is the smallest) goes from peg
/// `from` to peg `to`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Move<P> {
    pub disk: u32,
    pub from: P,
    pub to: P,
}

/// Solves the Tower of Hanoi for `n` disks.
///
/// Returns the `2ⁿ − 1` moves transferring a tower of `n` disks from peg
/// `from` to peg `to` using `via` as auxiliary peg: move `n − 1` disks to
/// `via`, move disk `n` to `to`, move `n − 1` disks from `via` to `to`.
/// Pegs can be labeled with any copyable type.
///
/// The recursion is run on an explicit stack of pending subproblems.
///
/// # Errors
///
/// [`Error::TooManyDisks`] if `n` is larger than [`MAX_HANOI_DISKS`].
///
/// # Examples
///
/// ```
/// use classic_algo::algo::recursion::*;
///
/// let moves = tower_of_hanoi(2, 'A', 'B', 'C').unwrap();
/// assert_eq!(
///     moves,
///     [
///         Move { disk: 1, from: 'A', to: 'B' },
///         Move { disk: 2, from: 'A', to: 'C' },
///         Move { disk: 1, from: 'B', to: 'C' },
///     ]
/// );
/// ```
pub fn tower_of_hanoi<P: Copy>(n: u32, from: P, via: P, to: P) -> Result<Vec<Move<P>>> {
    if n > MAX_HANOI_DISKS {
        return Err(Error::TooManyDisks {
            disks: n,
            max: MAX_HANOI_DISKS,
        });
    }

    enum Frame<P> {
        Solve { n: u32, from: P, via: P, to: P },
        Move(Move<P>),
    }

    let mut moves = Vec::with_capacity((1_usize << n) - 1);
    let mut stack = vec![Frame::Solve { n, from, via, to }];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Move(m) => moves.push(m),
            Frame::Solve { n: 0, .. } => {}
            Frame::Solve { n, from, via, to } => {
                // Pushed in reverse order of execution
                stack.push(Frame::Solve {
                    n: n - 1,
                    from: via,
                    via: from,
                    to,
                });
                stack.push(Frame::Move(Move { disk: n, from, to }));
                stack.push(Frame::Solve {
                    n: n - 1,
                    from,
                    via: to,
                    to: via,
                });
            }
        }
    }

    Ok(moves)
}
