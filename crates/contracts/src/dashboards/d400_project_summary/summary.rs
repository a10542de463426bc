use super::dto::{Bucket, ManagerTally, ProjectSummary};
use crate::domain::a001_project::{FieldRoles, Project};
use crate::shared::palette::{CategoryKind, PaletteSet};
use crate::shared::text::{display_label, is_blank, normalize_label, UNASSIGNED_MANAGER, UNSPECIFIED_KEY};
use chrono::NaiveDate;
use std::collections::HashMap;

const COMPLETED: &str = "concluido";
const CANCELED: &str = "cancelado";
const PAUSED: &str = "paralisado";

/// Counts per label, kept in the order labels are first seen.
#[derive(Default)]
struct Tally {
    index: HashMap<String, usize>,
    rows: Vec<(String, usize)>,
}

impl Tally {
    fn add(&mut self, label: String) {
        match self.index.get(&label) {
            Some(&i) => self.rows[i].1 += 1,
            None => {
                self.index.insert(label.clone(), self.rows.len());
                self.rows.push((label, 1));
            }
        }
    }

    fn into_rows(self) -> Vec<(String, usize)> {
        self.rows
    }
}

fn buckets<'a>(
    records: &'a [Project],
    select: impl Fn(&'a Project) -> Option<&'a str>,
    palettes: &PaletteSet,
    kind: CategoryKind,
) -> Vec<Bucket> {
    let mut tally = Tally::default();
    for project in records {
        tally.add(display_label(select(project)));
    }
    tally
        .into_rows()
        .into_iter()
        .map(|(label, count)| Bucket {
            color: palettes.resolve(Some(label.as_str()), kind),
            label,
            count,
        })
        .collect()
}

/// Managers ranked by project count. The sort is stable, so equal counts keep
/// the order in which managers first appear.
pub fn top_managers(records: &[Project], limit: usize) -> Vec<ManagerTally> {
    let mut tally = Tally::default();
    for project in records {
        let manager = match project.gerente.as_deref() {
            Some(m) if !is_blank(Some(m)) => m.to_string(),
            _ => UNASSIGNED_MANAGER.to_string(),
        };
        tally.add(manager);
    }
    let mut rows = tally.into_rows();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.truncate(limit);
    rows.into_iter()
        .map(|(manager, count)| ManagerTally { manager, count })
        .collect()
}

/// True when the project is still open and its approved end date is strictly
/// before `today`. Unparseable or empty dates are never overdue.
pub fn is_overdue(project: &Project, roles: &FieldRoles, today: NaiveDate) -> bool {
    let state = normalize_label(roles.state_of(project));
    if [COMPLETED, CANCELED, UNSPECIFIED_KEY].contains(&state.as_str()) {
        return false;
    }
    match project.approved_end_date() {
        Some(end) => end < today,
        None => false,
    }
}

/// Builds the dashboard figures for `records`.
///
/// Pure: same input, same output. `today` is passed in so the overdue count
/// does not depend on the clock.
pub fn summarize(
    records: &[Project],
    roles: &FieldRoles,
    palettes: &PaletteSet,
    today: NaiveDate,
    top_n: usize,
) -> ProjectSummary {
    let states: Vec<String> = records
        .iter()
        .map(|p| normalize_label(roles.state_of(p)))
        .collect();
    let count_state = |token: &str| states.iter().filter(|s| s.as_str() == token).count();

    let completed_count = count_state(COMPLETED);
    let canceled_count = count_state(CANCELED);
    let paused_count = count_state(PAUSED);

    let overdue_count = records
        .iter()
        .filter(|p| is_overdue(p, roles, today))
        .count();

    let average_completion = if records.is_empty() {
        0.0
    } else {
        records.iter().map(Project::completion_percent).sum::<f64>() / records.len() as f64
    };

    ProjectSummary {
        total_count: records.len(),
        completed_count,
        canceled_count,
        paused_count,
        overdue_count,
        in_progress_count: records.len() - completed_count - canceled_count,
        average_completion,
        phase_buckets: buckets(records, |p| roles.phase_of(p), palettes, CategoryKind::Phase),
        state_buckets: buckets(records, |p| roles.state_of(p), palettes, CategoryKind::State),
        manager_top: top_managers(records, top_n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::palette::FALLBACK_COLOR;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    // State lives in `estado` for these fixtures.
    fn roles() -> FieldRoles {
        FieldRoles::by_name()
    }

    fn with_state(estado: &str) -> Project {
        Project {
            estado: Some(estado.to_string()),
            ..Default::default()
        }
    }

    fn with_manager(gerente: &str) -> Project {
        Project {
            gerente: Some(gerente.to_string()),
            ..Default::default()
        }
    }

    fn run(records: &[Project]) -> ProjectSummary {
        summarize(records, &roles(), &PaletteSet::default(), today(), 5)
    }

    #[test]
    fn test_state_counts() {
        let records = vec![with_state("Concluído"), with_state("Cancelado"), with_state("Aberto")];
        let s = run(&records);
        assert_eq!(s.total_count, 3);
        assert_eq!(s.completed_count, 1);
        assert_eq!(s.canceled_count, 1);
        assert_eq!(s.paused_count, 0);
        assert_eq!(s.in_progress_count, 1);
    }

    #[test]
    fn test_state_counts_ignore_case_and_accents() {
        let records = vec![
            with_state("CONCLUIDO"),
            with_state(" concluído "),
            with_state("Paralisado"),
            with_state("paralisado"),
        ];
        let s = run(&records);
        assert_eq!(s.completed_count, 2);
        assert_eq!(s.paused_count, 2);
    }

    #[test]
    fn test_overdue_yesterday() {
        let yesterday = (today() - Duration::days(1)).format("%Y-%m-%d").to_string();
        let mut open = with_state("Aberto");
        open.data_termino_aprovada = Some(yesterday.clone());
        assert_eq!(run(&[open]).overdue_count, 1);

        let mut done = with_state("Concluído");
        done.data_termino_aprovada = Some(yesterday);
        assert_eq!(run(&[done]).overdue_count, 0);
    }

    #[test]
    fn test_overdue_boundaries() {
        let mut due_today = with_state("Aberto");
        due_today.data_termino_aprovada = Some("2025-06-15".into());
        let mut malformed = with_state("Aberto");
        malformed.data_termino_aprovada = Some("15/06/2020".into());
        let mut empty_date = with_state("Aberto");
        empty_date.data_termino_aprovada = Some(String::new());
        let mut unspecified = with_state("  ");
        unspecified.data_termino_aprovada = Some("2020-01-01".into());
        let mut canceled = with_state("cancelado");
        canceled.data_termino_aprovada = Some("2020-01-01".into());
        let mut timestamp = with_state("Paralisado");
        timestamp.data_termino_aprovada = Some("2025-06-14T23:59:59".into());

        let s = run(&[due_today, malformed, empty_date, unspecified, canceled, timestamp]);
        assert_eq!(s.overdue_count, 1);
    }

    #[test]
    fn test_manager_ranking_is_stable() {
        let records: Vec<Project> = ["A", "A", "A", "B", "B", "C"]
            .iter()
            .map(|m| with_manager(m))
            .collect();
        let s = run(&records);
        let got: Vec<(&str, usize)> = s
            .manager_top
            .iter()
            .map(|t| (t.manager.as_str(), t.count))
            .collect();
        assert_eq!(got, vec![("A", 3), ("B", 2), ("C", 1)]);
    }

    #[test]
    fn test_manager_ties_keep_encounter_order_and_truncate() {
        let records: Vec<Project> = ["F", "E", "D", "C", "B", "A", "A"]
            .iter()
            .map(|m| with_manager(m))
            .collect();
        let top = top_managers(&records, 5);
        let names: Vec<&str> = top.iter().map(|t| t.manager.as_str()).collect();
        assert_eq!(names, vec!["A", "F", "E", "D", "C"]);
    }

    #[test]
    fn test_missing_manager_is_unassigned() {
        let records = vec![Project::default(), with_manager("   ")];
        let top = top_managers(&records, 5);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].manager, UNASSIGNED_MANAGER);
        assert_eq!(top[0].count, 2);
    }

    #[test]
    fn test_buckets_keep_first_seen_order_and_colors() {
        let records = vec![
            Project {
                fase: Some("Execução".into()),
                estado: Some("Aberto".into()),
                ..Default::default()
            },
            Project {
                fase: Some("Planejamento".into()),
                estado: Some("Concluído".into()),
                ..Default::default()
            },
            Project {
                fase: Some("Execução".into()),
                estado: Some("Algo novo".into()),
                ..Default::default()
            },
            Project {
                fase: None,
                estado: Some("".into()),
                ..Default::default()
            },
        ];
        let s = run(&records);

        let phases: Vec<(&str, usize, &str)> = s
            .phase_buckets
            .iter()
            .map(|b| (b.label.as_str(), b.count, b.color.as_str()))
            .collect();
        assert_eq!(
            phases,
            vec![
                ("Execução", 2, "#34D399"),
                ("Planejamento", 1, "#60A5FA"),
                ("Não Especificado", 1, "#E5E7EB"),
            ]
        );

        let states: Vec<(&str, &str)> = s
            .state_buckets
            .iter()
            .map(|b| (b.label.as_str(), b.color.as_str()))
            .collect();
        assert_eq!(
            states,
            vec![
                ("Aberto", "#8B5CF6"),
                ("Concluído", "#10B981"),
                ("Algo novo", FALLBACK_COLOR),
                ("Não Especificado", FALLBACK_COLOR),
            ]
        );
    }

    #[test]
    fn test_roles_swap_columns() {
        let records = vec![Project {
            fase: Some("Concluído".into()),
            estado: Some("Encerramento".into()),
            ..Default::default()
        }];
        let swapped = summarize(&records, &FieldRoles::swapped(), &PaletteSet::default(), today(), 5);
        assert_eq!(swapped.completed_count, 1);
        assert_eq!(swapped.phase_buckets[0].label, "Encerramento");
        assert_eq!(swapped.phase_buckets[0].color, "#9CA3AF");

        let by_name = run(&records);
        assert_eq!(by_name.completed_count, 0);
    }

    #[test]
    fn test_empty_input() {
        let s = run(&[]);
        assert_eq!(s.total_count, 0);
        assert_eq!(s.average_completion, 0.0);
        assert!(s.phase_buckets.is_empty());
        assert!(s.manager_top.is_empty());
        assert_eq!(s.share_percent(3), 0.0);
    }

    #[test]
    fn test_average_completion_treats_missing_as_zero() {
        let mut a = Project::default();
        a.porcentagem_conclusao = Some(80.0);
        let b = Project::default();
        let s = run(&[a, b]);
        assert_eq!(s.average_completion, 40.0);
        assert_eq!(s.share_percent(1), 50.0);
    }
}
