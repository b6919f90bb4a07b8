// ---------------------------------------------------------------------------
// Record – one row of the input template
// ---------------------------------------------------------------------------

/// A single data row from the input template.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Identifier cell (first template column), kept verbatim.
    pub name: String,
    /// Primary variable (second template column).  Always numeric.
    pub primary: f64,
    /// Secondary variable.  `Some` in every record or `None` in every
    /// record; the loader rejects partially populated columns.
    pub secondary: Option<f64>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete parsed input table
// ---------------------------------------------------------------------------

/// The full parsed input table, in original row order.
///
/// Row order is significant: display and export preserve it, and cluster
/// labels are matched to rows by position.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column headers as read from the template: identifier, primary, and
    /// the secondary header when that column survives loading.
    pub headers: Vec<String>,
    /// All data rows.
    pub records: Vec<Record>,
}

impl Dataset {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the rows carry a secondary variable.  Uniform across the
    /// dataset by the loader's all-or-nothing rule.
    pub fn has_secondary(&self) -> bool {
        self.records
            .first()
            .is_some_and(|r| r.secondary.is_some())
    }

    /// Number of feature dimensions fed to the clustering engine.
    pub fn feature_dim(&self) -> usize {
        if self.has_secondary() { 2 } else { 1 }
    }
}
