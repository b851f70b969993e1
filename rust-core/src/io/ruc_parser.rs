// *RUC decoder
//
// A record is scanned line by line by a small state machine:
//
//   SeekingSection --"*RUC"--> InSectionHeader --"H=" "L=" "SM="--> ReadingField(key)
//   ReadingField(key) --other KEY=--> InSectionHeader
//   any state after the marker --token starting with '*'--> Done
//
// Field text is only collected while scanning. Lists are tokenized and the
// grid is assembled once the whole record has been read.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::{
    ARCHID_KEY, CONTINUATION_MARKER, MODEL_KEY, RUC_MARKER, SUPPORTED_ARCHETYPE,
    SUPPORTED_DIMENSION,
};
use crate::error::RucError;
use crate::grid::Grid;
use crate::materials::MaterialId;

/// The three list fields of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// `H=`, one weight per grid row
    RowWeights,
    /// `L=`, one weight per grid column
    ColumnWeights,
    /// `SM=`, the material identifiers of one grid row
    SubcellMaterials,
}

impl FieldKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "H" => Some(FieldKey::RowWeights),
            "L" => Some(FieldKey::ColumnWeights),
            "SM" => Some(FieldKey::SubcellMaterials),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FieldKey::RowWeights => "H",
            FieldKey::ColumnWeights => "L",
            FieldKey::SubcellMaterials => "SM",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Before the `*RUC` marker
    SeekingSection,
    /// Inside the record, outside any list field
    InSectionHeader,
    /// Collecting the value of a list field, possibly across continuation lines
    ReadingField(FieldKey),
    /// Past the end of the record
    Done,
}

/// Header attributes of a record (`MOD=`, `ARCHID=`, `NB=`, `NG=` and any other `KEY=value`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RucMetadata {
    /// Attributes in order of appearance
    pub attributes: Vec<(String, String)>,
}

impl RucMetadata {
    /// First value recorded for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn model(&self) -> Option<&str> {
        self.get(MODEL_KEY)
    }

    pub fn archetype(&self) -> Option<&str> {
        self.get(ARCHID_KEY)
    }

    /// Model dimensionality, the last digit of the `MOD` code
    pub fn dimension(&self) -> Option<u32> {
        self.model()?.parse::<u32>().ok().map(|code| code % 10)
    }
}

/// A decoded *RUC record.
///
/// `row_weights` (`H`) and `column_weights` (`L`) are kept as read; the
/// encoder always writes unit weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RucDocument {
    pub grid: Grid,
    pub row_weights: Vec<f64>,
    pub column_weights: Vec<f64>,
    pub metadata: RucMetadata,
}

/// Line-driven scanner for one *RUC record
#[derive(Debug)]
pub struct RucParser {
    state: ParserState,
    line_number: usize,
    row_weights: Option<String>,
    column_weights: Option<String>,
    rows: Vec<String>,
    attributes: Vec<(String, String)>,
    /// First field key written with whitespace before its `=`, and its line
    spaced_key: Option<(usize, FieldKey)>,
}

impl Default for RucParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RucParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::SeekingSection,
            line_number: 0,
            row_weights: None,
            column_weights: None,
            rows: Vec::new(),
            attributes: Vec::new(),
            spaced_key: None,
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Advance the scanner by one physical line and return the new state
    pub fn feed_line(&mut self, line: &str) -> Result<ParserState, RucError> {
        self.line_number += 1;

        match self.state {
            ParserState::Done => {}
            ParserState::SeekingSection => {
                if let Some(position) = line.find(RUC_MARKER) {
                    debug!("*RUC marker on line {}", self.line_number);
                    self.state = ParserState::InSectionHeader;
                    self.read_content(&line[position + RUC_MARKER.len()..])?;
                }
            }
            ParserState::InSectionHeader | ParserState::ReadingField(_) => {
                if starts_section(line) {
                    debug!("*RUC record ends on line {}", self.line_number);
                    self.state = ParserState::Done;
                } else {
                    self.read_content(line)?;
                }
            }
        }
        Ok(self.state)
    }

    /// Tokenize the collected fields and assemble the grid.
    ///
    /// In strict mode the `ARCHID` and `MOD` attributes are checked before any
    /// list is parsed.
    pub fn finish(self, strict: bool) -> Result<RucDocument, RucError> {
        if self.state == ParserState::SeekingSection {
            return Err(RucError::Format(format!("no {} marker found", RUC_MARKER)));
        }

        let metadata = RucMetadata {
            attributes: self.attributes,
        };
        if strict {
            validate_metadata(&metadata)?;
        }
        if let Some((line, field)) = self.spaced_key {
            return Err(RucError::Format(format!(
                "line {}: key {} has whitespace before '='; write it as {}",
                line,
                field.key(),
                field
            )));
        }

        let row_text = self
            .row_weights
            .ok_or_else(|| RucError::Format("missing H= field".to_string()))?;
        let column_text = self
            .column_weights
            .ok_or_else(|| RucError::Format("missing L= field".to_string()))?;

        let row_weights: Vec<f64> = parse_list(&row_text, "H=")?;
        let column_weights: Vec<f64> = parse_list(&column_text, "L=")?;
        if row_weights.is_empty() {
            return Err(RucError::Format("H= field holds no weights".to_string()));
        }
        if column_weights.is_empty() {
            return Err(RucError::Format("L= field holds no weights".to_string()));
        }

        if self.rows.len() != row_weights.len() {
            return Err(RucError::Format(format!(
                "expected {} SM= rows (one per H weight), found {}",
                row_weights.len(),
                self.rows.len()
            )));
        }

        let mut rows: Vec<Vec<MaterialId>> = Vec::with_capacity(self.rows.len());
        for (index, text) in self.rows.iter().enumerate() {
            let label = format!("SM= row {}", index + 1);
            let row: Vec<MaterialId> = parse_list(text, &label)?;
            if row.len() != column_weights.len() {
                return Err(RucError::Format(format!(
                    "{}: expected {} items (one per L weight), found {}",
                    label,
                    column_weights.len(),
                    row.len()
                )));
            }
            rows.push(row);
        }

        check_declared_count(&metadata, "NB", row_weights.len())?;
        check_declared_count(&metadata, "NG", column_weights.len())?;

        let grid = Grid::from_rows(rows)?;
        debug!("decoded *RUC grid of {} x {} subcells", grid.ng(), grid.nb());

        Ok(RucDocument {
            grid,
            row_weights,
            column_weights,
            metadata,
        })
    }

    fn read_content(&mut self, text: &str) -> Result<(), RucError> {
        if self.spaced_key.is_none() {
            self.spaced_key = spaced_field_key(text).map(|field| (self.line_number, field));
        }
        let (leading, fields) = split_keyed(text);

        let leading = leading.trim();
        if !leading.is_empty() {
            match self.state {
                ParserState::ReadingField(field) => self.append(field, leading),
                _ => warn!(
                    "line {}: ignoring text outside any field: '{}'",
                    self.line_number, leading
                ),
            }
        }

        for (key, value) in fields {
            match FieldKey::from_key(key) {
                Some(field) => {
                    self.open_field(field)?;
                    self.append(field, value);
                    self.state = ParserState::ReadingField(field);
                }
                None => {
                    self.attributes.push((key.to_string(), value.trim().to_string()));
                    self.state = ParserState::InSectionHeader;
                }
            }
        }
        Ok(())
    }

    fn open_field(&mut self, field: FieldKey) -> Result<(), RucError> {
        let slot = match field {
            FieldKey::RowWeights => &mut self.row_weights,
            FieldKey::ColumnWeights => &mut self.column_weights,
            FieldKey::SubcellMaterials => {
                self.rows.push(String::new());
                return Ok(());
            }
        };
        if slot.is_some() {
            return Err(RucError::Format(format!(
                "line {}: duplicate {} field",
                self.line_number, field
            )));
        }
        *slot = Some(String::new());
        Ok(())
    }

    fn append(&mut self, field: FieldKey, text: &str) {
        let buffer = match field {
            FieldKey::RowWeights => self.row_weights.as_mut(),
            FieldKey::ColumnWeights => self.column_weights.as_mut(),
            FieldKey::SubcellMaterials => self.rows.last_mut(),
        };
        if let Some(buffer) = buffer {
            buffer.push_str(text);
            buffer.push('\n');
        }
    }
}

/// Decode the first *RUC record of `text`.
///
/// Keys are spelled `KEY=` with no whitespace before the `=`; a list field
/// written as `H = ...` is reported as a format error.
pub fn decode(text: &str, strict: bool) -> Result<RucDocument, RucError> {
    let mut parser = RucParser::new();
    for line in text.lines() {
        if parser.feed_line(line)? == ParserState::Done {
            break;
        }
    }
    parser.finish(strict)
}

/// Reject archetypes other than 99 and models that are not 2-D.
///
/// Absent attributes are accepted.
pub fn validate_metadata(metadata: &RucMetadata) -> Result<(), RucError> {
    if let Some(archetype) = metadata.archetype() {
        let code: u32 = archetype.parse().map_err(|_| {
            RucError::Validation(format!("{}='{}' is not an integer", ARCHID_KEY, archetype))
        })?;
        if code != SUPPORTED_ARCHETYPE {
            return Err(RucError::Validation(format!(
                "unsupported archetype {}={}, only {} is supported",
                ARCHID_KEY, code, SUPPORTED_ARCHETYPE
            )));
        }
    }

    if let Some(model) = metadata.model() {
        let code: u32 = model.parse().map_err(|_| {
            RucError::Validation(format!("{}='{}' is not an integer", MODEL_KEY, model))
        })?;
        let dimension = code % 10;
        if dimension != SUPPORTED_DIMENSION {
            return Err(RucError::Validation(format!(
                "{}={} describes a {}-D model, only {}-D models are supported",
                MODEL_KEY, code, dimension, SUPPORTED_DIMENSION
            )));
        }
    }
    Ok(())
}

/// Split a line into the text before its first `KEY=` and the `(key, value)`
/// pairs that follow.
///
/// A key is an identifier starting with a letter, placed at the start of the
/// line or after whitespace. Each value runs up to the next key.
pub(crate) fn split_keyed(text: &str) -> (&str, Vec<(&str, &str)>) {
    let is_key_char = |c: char| c.is_ascii_alphanumeric() || c == '_';

    let mut keys: Vec<(usize, usize)> = Vec::new();
    for (equals, _) in text.match_indices('=') {
        let start = text[..equals]
            .char_indices()
            .rev()
            .find(|&(_, c)| !is_key_char(c))
            .map_or(0, |(index, c)| index + c.len_utf8());

        let key = &text[start..equals];
        let alphabetic = key.chars().next().map_or(false, |c| c.is_ascii_alphabetic());
        let separated = start == 0 || text[..start].ends_with(char::is_whitespace);
        if alphabetic && separated {
            keys.push((start, equals));
        }
    }

    let leading_end = keys.first().map_or(text.len(), |&(start, _)| start);
    let fields = keys
        .iter()
        .enumerate()
        .map(|(index, &(start, equals))| {
            let end = keys.get(index + 1).map_or(text.len(), |&(next, _)| next);
            (&text[start..equals], &text[equals + 1..end])
        })
        .collect();

    (&text[..leading_end], fields)
}

/// `H`, `L` or `SM` followed by whitespace and then `=`
fn spaced_field_key(text: &str) -> Option<FieldKey> {
    text.match_indices('=').find_map(|(equals, _)| {
        let before = &text[..equals];
        let trimmed = before.trim_end();
        if trimmed.len() == before.len() {
            return None;
        }
        FieldKey::from_key(trimmed.split_whitespace().next_back()?)
    })
}

/// A line holding a token that starts with `*` opens another section
fn starts_section(line: &str) -> bool {
    line.split_whitespace().any(|token| token.starts_with('*'))
}

/// Strip continuation markers and whitespace, then split on commas.
/// Empty items (a trailing comma before `&`) are skipped.
fn parse_list<T: FromStr>(text: &str, label: &str) -> Result<Vec<T>, RucError> {
    let cleaned: String = text
        .chars()
        .filter(|&c| c != CONTINUATION_MARKER && !c.is_whitespace())
        .collect();

    cleaned
        .split(',')
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<T>()
                .map_err(|_| RucError::Format(format!("{}: '{}' is not a number", label, item)))
        })
        .collect()
}

fn check_declared_count(metadata: &RucMetadata, key: &str, counted: usize) -> Result<(), RucError> {
    if let Some(value) = metadata.get(key) {
        let declared: usize = value.parse().map_err(|_| {
            RucError::Format(format!("header {}='{}' is not a count", key, value))
        })?;
        if declared != counted {
            return Err(RucError::Format(format!(
                "header declares {}={} but the record holds {}",
                key, declared, counted
            )));
        }
    }
    Ok(())
}
