// IO module: Contains the text encodings of a grid
// This module provides the plain CSV codec, the *RUC record codec and a format-dispatching file reader

// ======================== MODULE DECLARATIONS ========================
pub mod csv_grid;
pub mod microstructure_file;
pub mod ruc_parser;
pub mod ruc_writer;


// ======================== CSV ========================
// csv_grid::encode(grid: &Grid) -> String                      - one comma-separated row per line
// csv_grid::decode(text: &str) -> Result<Grid, RucError>       - skips blank lines, rejects ragged rows

// ======================== *RUC ========================
pub use ruc_parser::{
    FieldKey,    // enum - H= (row weights), L= (column weights), SM= (one grid row)
    ParserState, // enum - SeekingSection, InSectionHeader, ReadingField(key), Done
    RucDocument, // struct - grid plus H/L weights and header attributes
    RucMetadata, // struct - ordered KEY=value header attributes
    RucParser,   // struct - line-driven scanner: feed_line() then finish(strict)
    validate_metadata, // fn(&RucMetadata) -> Result<(), RucError> - ARCHID 99 and 2-D MOD only
};
// ruc_parser::decode(text: &str, strict: bool) -> Result<RucDocument, RucError>
// ruc_writer::encode(grid: &Grid) -> String                    - canonical record, unit weights
// ruc_writer::encode_wrapped(grid, items_per_line) -> Result<String, RucError> - lists split over '&' lines

// ======================== FILES ========================
pub use microstructure_file::{
    FileFormat,            // enum - Csv or Ruc, inferred from the extension
    ReadOptions,           // struct - strict, with_radius, materials
    read_microstructure,   // fn(text, format, &ReadOptions) -> Result<Microstructure, RucError>
    write_microstructure,  // fn(&Grid, format) -> String
};
