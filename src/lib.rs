// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive file log.
//
// Module responsibilities:
// - `category`: Maps a file name to one of the five fixed categories.
// - `record`: The in-memory log of records plus add/search operations.
// - `store`: Reads and writes the flat `name,category` text files.
// - `report`: Category counts and the summary report file.
// - `config`: File locations and the cleanup threshold.
// - `session`: Menu state machine, independent of the terminal.
// - `ui`: Implements the terminal prompts and delegates to `session`.
//
// Keeping the terminal code in `ui` means everything else can be tested
// without a TTY.
pub mod category;
pub mod config;
pub mod record;
pub mod report;
pub mod session;
pub mod store;
pub mod ui;
