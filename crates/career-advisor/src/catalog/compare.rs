use serde::{Deserialize, Serialize};

use super::program::Program;

/// Number of programs that can sit side by side.
pub const MAX_COMPARED: usize = 2;

/// Program ids picked for comparison, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSelection {
    ids: Vec<u32>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id`, or deselects it when already selected. Selecting into a full
    /// selection is ignored. Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(position) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(position);
            return false;
        }
        if self.is_full() {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARED
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }
}

/// One labelled line of the comparison table, one value per compared program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramComparison {
    pub programs: Vec<Program>,
    pub rows: Vec<ComparisonRow>,
}

impl ProgramComparison {
    /// The table is only meaningful once a full selection resolved.
    pub fn is_complete(&self) -> bool {
        self.programs.len() == MAX_COMPARED
    }
}

/// Resolves the selection against the catalog (unknown ids are skipped) and lays out
/// the comparison rows.
pub fn compare_programs(programs: &[Program], selection: &ComparisonSelection) -> ProgramComparison {
    let selected: Vec<Program> = selection
        .ids()
        .iter()
        .filter_map(|id| programs.iter().find(|program| program.id == *id))
        .cloned()
        .collect();

    let text_row = |label: &str, value: fn(&Program) -> &str| ComparisonRow {
        label: label.to_string(),
        values: selected
            .iter()
            .map(|program| value(program).to_string())
            .collect(),
    };
    let count_row = |label: &str, value: fn(&Program) -> usize| ComparisonRow {
        label: label.to_string(),
        values: selected
            .iter()
            .map(|program| format!("{} options", value(program)))
            .collect(),
    };

    let rows = vec![
        text_row("Duration", |program| program.duration.as_str()),
        text_row("Salary Range", |program| program.salary_range.as_str()),
        count_row("Higher Studies", |program| program.higher_studies.len()),
        count_row("Job Opportunities", |program| program.job_roles.len()),
        count_row("Top Employers", |program| program.employers.len()),
        count_row("Key Skills", |program| program.skills.len()),
    ];

    ProgramComparison {
        programs: selected,
        rows,
    }
}
