use crate::constants::{
    DEFAULT_MARGIN_FACTOR, PRINT_MARGIN_BASE_FACTOR, PRINT_MARGIN_FACTOR_PER_MM,
};
use crate::layout::LayoutTemplate;
use crate::types::*;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How much each page is over-scaled relative to its cell
///
/// A direct factor wins over a print margin; with neither set the
/// calibrated default applies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarginSetting {
    /// Direct margin factor (lower = more white margin)
    pub margin_factor: Option<f32>,
    /// Target print margin in millimeters, converted by linear approximation
    pub print_margin_mm: Option<f32>,
}

impl MarginSetting {
    pub fn from_factor(margin_factor: f32) -> Self {
        Self {
            margin_factor: Some(margin_factor),
            print_margin_mm: None,
        }
    }

    pub fn from_print_margin(print_margin_mm: f32) -> Self {
        Self {
            margin_factor: None,
            print_margin_mm: Some(print_margin_mm),
        }
    }

    /// Resolve to the factor used for scaling
    pub fn resolve(&self) -> f32 {
        match (self.margin_factor, self.print_margin_mm) {
            (Some(factor), _) => factor,
            (None, Some(mm)) => print_margin_to_factor(mm),
            (None, None) => DEFAULT_MARGIN_FACTOR,
        }
    }
}

/// Convert a print margin in millimeters to a margin factor.
///
/// Calibrated from print tests: 3mm gives the default 1.020.
pub fn print_margin_to_factor(print_margin_mm: f32) -> f32 {
    PRINT_MARGIN_BASE_FACTOR - print_margin_mm * PRINT_MARGIN_FACTOR_PER_MM
}

/// PocketMod generation configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PocketModOptions {
    // Scaling
    pub margin: MarginSetting,

    // Guide marks
    pub marks: GuideMarks,

    // Sheet geometry and slot table
    pub template: LayoutTemplate,
}

impl PocketModOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            PocketModError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PocketModError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PocketModError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, json).map_err(|e| {
            PocketModError::Config(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Resolved margin factor
    pub fn margin_factor(&self) -> f32 {
        self.margin.resolve()
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let factor = self.margin_factor();
        if !factor.is_finite() || factor <= 0.0 {
            return Err(PocketModError::Config(format!(
                "Margin factor must be a positive number, got {}",
                factor
            )));
        }

        let template = &self.template;
        if !(template.sheet_width_pt > 0.0 && template.sheet_height_pt > 0.0) {
            return Err(PocketModError::Config(
                "Sheet dimensions must be positive".to_string(),
            ));
        }
        if template.columns == 0 || template.rows == 0 {
            return Err(PocketModError::Config(
                "Grid must have at least one row and one column".to_string(),
            ));
        }
        if template.slots.is_empty() {
            return Err(PocketModError::Config("Layout has no slots".to_string()));
        }

        let mut cells = HashSet::new();
        let mut pages = HashSet::new();
        for slot in &template.slots {
            let pos = slot.grid_pos;
            if pos.row >= template.rows || pos.col >= template.columns {
                return Err(PocketModError::Config(format!(
                    "Slot for page {} is outside the {}x{} grid",
                    slot.page_number, template.columns, template.rows
                )));
            }
            if !cells.insert((pos.row, pos.col)) {
                return Err(PocketModError::Config(format!(
                    "Cell ({},{}) is used by more than one slot",
                    pos.row, pos.col
                )));
            }
            if slot.page_number == 0 || slot.page_number > template.slots.len() {
                return Err(PocketModError::Config(format!(
                    "Page number {} is out of range 1..={}",
                    slot.page_number,
                    template.slots.len()
                )));
            }
            if !pages.insert(slot.page_number) {
                return Err(PocketModError::Config(format!(
                    "Page {} is assigned to more than one slot",
                    slot.page_number
                )));
            }
        }

        Ok(())
    }
}
