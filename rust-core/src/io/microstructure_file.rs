// File-level reading and writing of microstructures
// One entry point for both encodings, with analysis folded into reading

use std::fmt;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, analyze_volume_fraction};
use crate::error::RucError;
use crate::grid::{Grid, Microstructure};
use crate::io::{csv_grid, ruc_parser, ruc_writer};
use crate::materials::MaterialPair;

/// On-disk encoding of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileFormat {
    Csv,
    Ruc,
}

impl FileFormat {
    /// `csv` selects CSV; `txt`, `mac` and `ruc` select *RUC (case-insensitive)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(FileFormat::Csv),
            "txt" | "mac" | "ruc" => Some(FileFormat::Ruc),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, RucError> {
        path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| {
                RucError::Format(format!(
                    "cannot infer a grid format from '{}' (expected .csv, .txt, .mac or .ruc)",
                    path.display()
                ))
            })
    }

    /// Extension used when writing
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Ruc => "txt",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Csv => write!(f, "CSV"),
            FileFormat::Ruc => write!(f, "*RUC"),
        }
    }
}

/// How a file is turned into a [`Microstructure`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadOptions {
    /// Check `ARCHID` and `MOD` of *RUC input (no effect on CSV)
    pub strict: bool,
    /// Estimate the fiber radius; when false `R` is left undefined
    pub with_radius: bool,
    pub materials: MaterialPair,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            strict: false,
            with_radius: true,
            materials: MaterialPair::default(),
        }
    }
}

impl ReadOptions {
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_radius(mut self, with_radius: bool) -> Self {
        self.with_radius = with_radius;
        self
    }

    pub fn materials(mut self, materials: MaterialPair) -> Self {
        self.materials = materials;
        self
    }
}

/// Decode `text` in the given format and derive its properties
pub fn read_microstructure(
    text: &str,
    format: FileFormat,
    options: &ReadOptions,
) -> Result<Microstructure, RucError> {
    options.materials.validate()?;

    let grid = match format {
        FileFormat::Csv => csv_grid::decode(text)?,
        FileFormat::Ruc => ruc_parser::decode(text, options.strict)?.grid,
    };
    debug!("read {} grid of {} x {} subcells", format, grid.ng(), grid.nb());

    let MaterialPair { fiber, matrix } = options.materials;
    let properties = if options.with_radius {
        analyze(&grid, fiber, matrix)
    } else {
        analyze_volume_fraction(&grid, fiber, matrix)
    };
    Ok(Microstructure::new(grid, properties))
}

/// Encode `grid` in the given format (canonical *RUC form)
pub fn write_microstructure(grid: &Grid, format: FileFormat) -> String {
    match format {
        FileFormat::Csv => csv_grid::encode(grid),
        FileFormat::Ruc => ruc_writer::encode(grid),
    }
}
