/// Seeded depth-first maze carving
pub mod generator;
/// Start and exit marker placement policies
pub mod placement;
/// Lee wavefront expansion and back-trace
pub mod solver;
/// Bitset of cells already reached by the carve
pub mod visited;
