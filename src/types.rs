//! Shared vocabulary types for trait factors and their combinations.

use serde::{Deserialize, Serialize};

/// A named categorical trait variable.
///
/// `levels` is the ordered list of unique category names as the model-fitting
/// engine saw them: the reference level (by convention the most frequent
/// category, chosen before fitting) comes first, the remaining levels follow
/// in sorted order. The column ordering of the incoming draw matrix is
/// derived from this list, so it must not be reordered after fitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    /// Name of the trait (e.g. "HostPlantSpecificity").
    pub name: String,
    /// Category levels, reference level first.
    pub levels: Vec<String>,
}

impl Factor {
    /// Create a factor from a name and its levels (reference first).
    pub fn new(name: impl Into<String>, levels: Vec<String>) -> Self {
        Self {
            name: name.into(),
            levels,
        }
    }

    /// Number of category levels.
    pub fn cardinality(&self) -> usize {
        self.levels.len()
    }

    /// The reference level, if the factor has any levels at all.
    pub fn reference(&self) -> Option<&str> {
        self.levels.first().map(String::as_str)
    }
}

/// A single trait factor or a crossed pair analyzed via their interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitCombination {
    /// The row factor (A).
    pub factor_a: Factor,
    /// The column factor (B), when two traits are crossed.
    pub factor_b: Option<Factor>,
}

impl TraitCombination {
    /// A single-factor combination.
    pub fn single(factor: Factor) -> Self {
        Self {
            factor_a: factor,
            factor_b: None,
        }
    }

    /// A two-factor interaction combination.
    pub fn pair(factor_a: Factor, factor_b: Factor) -> Self {
        Self {
            factor_a,
            factor_b: Some(factor_b),
        }
    }

    /// Stable identifier used to key results ("A" or "A:B").
    pub fn key(&self) -> String {
        match &self.factor_b {
            Some(b) => format!("{}:{}", self.factor_a.name, b.name),
            None => self.factor_a.name.clone(),
        }
    }

    /// Total number of cells (categories or category pairs).
    pub fn n_cells(&self) -> usize {
        let n1 = self.factor_a.cardinality();
        match &self.factor_b {
            Some(b) => n1 * b.cardinality(),
            None => n1,
        }
    }

    /// Expected number of treatment-coded period-effect coefficient columns
    /// in the draw matrix: one fewer than the number of cells.
    pub fn expected_columns(&self) -> usize {
        self.n_cells().saturating_sub(1)
    }

    /// Canonical cell order: for a pair, grouped by B level (reference B
    /// first) and within each group by A level (reference A first). This is
    /// the row order of the contrast matrix and the order in which callers
    /// must supply per-cell species counts.
    pub fn cell_labels(&self) -> Vec<(String, Option<String>)> {
        match &self.factor_b {
            None => self
                .factor_a
                .levels
                .iter()
                .map(|a| (a.clone(), None))
                .collect(),
            Some(b) => {
                let mut cells = Vec::with_capacity(self.n_cells());
                for lb in &b.levels {
                    for la in &self.factor_a.levels {
                        cells.push((la.clone(), Some(lb.clone())));
                    }
                }
                cells
            }
        }
    }
}
