/// Fixed-capacity color presence set backing the validity predicate
pub mod bitset;
/// Stone assignment search over a single tiling
pub mod coloring;
/// Demonstration puzzle generation from shuffled Latin squares
pub mod puzzle;
/// Colored stones and the length-keyed stone bag
pub mod stones;
/// Reduction of tilings under the symmetries of the square
pub mod symmetry;
/// Exhaustive tiling enumeration for a multiset of segment lengths
pub mod tiling;
