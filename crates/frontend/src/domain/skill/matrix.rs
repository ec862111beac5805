//! Employee × skill matrix projection. A pure reshape of the two fetched
//! lists into row/column lookups, recomputed on every render and never
//! mutating the source lists.

use std::collections::HashMap;

use contracts::domain::skill::{EmployeeSkill, Skill};

use crate::shared::export::CsvExportable;

#[derive(Clone, Debug)]
pub struct MatrixRow {
    pub user_id: String,
    pub user_name: String,
    /// skill_id -> entry
    pub cells: HashMap<String, EmployeeSkill>,
}

pub fn build_matrix(skills: &[Skill], employee_skills: &[EmployeeSkill]) -> Vec<MatrixRow> {
    let known: std::collections::HashSet<&str> = skills.iter().map(|s| s.id.as_str()).collect();

    let mut rows: Vec<MatrixRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in employee_skills {
        // Entries for skills missing from the catalog snapshot are dropped
        if !known.contains(entry.skill_id.as_str()) {
            continue;
        }
        let row_index = *index.entry(entry.user_id.clone()).or_insert_with(|| {
            rows.push(MatrixRow {
                user_id: entry.user_id.clone(),
                user_name: entry
                    .user_name
                    .clone()
                    .unwrap_or_else(|| entry.user_id.clone()),
                cells: HashMap::new(),
            });
            rows.len() - 1
        });
        rows[row_index]
            .cells
            .insert(entry.skill_id.clone(), entry.clone());
    }

    rows.sort_by(|a, b| a.user_name.to_lowercase().cmp(&b.user_name.to_lowercase()));
    rows
}

/// Flat export row: one line per (employee, skill) entry.
#[derive(Clone, Debug)]
pub struct MatrixExportRow {
    pub employee: String,
    pub skill: String,
    pub level: u8,
    pub certified: bool,
}

impl CsvExportable for MatrixExportRow {
    fn headers() -> Vec<String> {
        ["Employee", "Skill", "Level", "Certified"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.employee.clone(),
            self.skill.clone(),
            self.level.to_string(),
            if self.certified { "yes" } else { "no" }.to_string(),
        ]
    }
}

pub fn export_rows(skills: &[Skill], employee_skills: &[EmployeeSkill]) -> Vec<MatrixExportRow> {
    let names: HashMap<&str, &str> =
        skills.iter().map(|s| (s.id.as_str(), s.name.as_str())).collect();

    let mut result = Vec::new();
    for row in build_matrix(skills, employee_skills) {
        let mut cells: Vec<_> = row.cells.into_values().collect();
        cells.sort_by(|a, b| a.skill_id.cmp(&b.skill_id));
        for cell in cells {
            result.push(MatrixExportRow {
                employee: row.user_name.clone(),
                skill: names
                    .get(cell.skill_id.as_str())
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| cell.skill_id.clone()),
                level: cell.level.0,
                certified: cell.is_certified,
            });
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::skill::SkillLevel;

    fn skill(id: &str, name: &str) -> Skill {
        Skill {
            id: id.into(),
            name: name.into(),
            category: "Engineering".into(),
            description: None,
        }
    }

    fn entry(user: &str, skill_id: &str, level: u8) -> EmployeeSkill {
        EmployeeSkill {
            id: format!("{user}-{skill_id}"),
            user_id: user.into(),
            user_name: Some(user.to_uppercase()),
            skill_id: skill_id.into(),
            skill_name: None,
            level: SkillLevel(level),
            is_certified: false,
        }
    }

    #[test]
    fn groups_entries_by_employee() {
        let skills = vec![skill("s1", "Rust"), skill("s2", "SQL")];
        let entries = vec![entry("bob", "s1", 3), entry("bob", "s2", 2), entry("ann", "s1", 5)];
        let rows = build_matrix(&skills, &entries);
        assert_eq!(rows.len(), 2);
        // sorted by name: ANN before BOB
        assert_eq!(rows[0].user_name, "ANN");
        assert_eq!(rows[1].cells.len(), 2);
        assert_eq!(rows[0].cells.get("s1").unwrap().level, SkillLevel(5));
    }

    #[test]
    fn entries_for_unknown_skills_are_dropped() {
        let skills = vec![skill("s1", "Rust")];
        let entries = vec![entry("bob", "s1", 3), entry("bob", "gone", 4)];
        let rows = build_matrix(&skills, &entries);
        assert_eq!(rows[0].cells.len(), 1);
    }

    #[test]
    fn export_flattens_one_line_per_entry() {
        let skills = vec![skill("s1", "Rust"), skill("s2", "SQL")];
        let entries = vec![entry("bob", "s1", 3), entry("bob", "s2", 2)];
        let rows = export_rows(&skills, &entries);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].employee, "BOB");
        assert_eq!(rows[0].skill, "Rust");
        assert_eq!(rows[0].level, 3);
    }
}
