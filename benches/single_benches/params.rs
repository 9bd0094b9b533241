pub const NUM_SAMPLES: usize = 20;
pub const SEED: u64 = 0;
/// Lengths of the sequences to sort with the O(n log n) sorts.
pub const SORT_LENGTHS: [usize; 3] = [1_000, 100_000, 1_000_000];
/// Lengths of the sequences to sort with the quadratic sorts.
pub const QUADRATIC_SORT_LENGTHS: [usize; 2] = [100, 2_000];
/// Number of nodes of the random graphs; arcs are eight times as many.
pub const GRAPH_SIZES: [usize; 2] = [1_000, 100_000];
