/// Edge index linking tiles that share a border
pub mod adjacency;
/// Breadth-first placement of oriented tiles into the grid
pub mod assembly;
/// Border stripping and interior compositing
pub mod composite;
/// Pipeline orchestration from tiles to report
pub mod engine;
/// Motif masks and the orientation scan
pub mod motif;
