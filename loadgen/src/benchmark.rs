//! Sort benchmark over a generated roster

use roster::{Clock, PayrollDesk, RecordStore, SortReport};
use shared::{logging, ComponentId, Employee, Role};

/// Result of one benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub sort: SortReport,
    /// Leading records of the sorted roster
    pub preview: Vec<String>,
}

impl BenchmarkReport {
    /// How many times slower the list sort was than the `Vec` sort
    pub fn slowdown(&self) -> Option<f64> {
        let vec_secs = self.sort.vec_elapsed.as_secs_f64();
        (vec_secs > 0.0).then(|| self.sort.list_elapsed.as_secs_f64() / vec_secs)
    }
}

/// Sort the desk's roster and capture the first `preview` records
pub fn run_benchmark<C, S>(desk: &mut PayrollDesk<C, S>, preview: usize) -> BenchmarkReport
where
    C: Clock,
    S: RecordStore,
{
    logging::log_progress(
        ComponentId::current(),
        "Benchmark",
        &format!("sorting {} records", desk.len()),
    );
    let sort = desk.sort();
    let preview = preview_lines(desk.employees(), preview);
    BenchmarkReport { sort, preview }
}

/// One line per record, e.g. `Programmer - ProgrammerDummy (Employee number: 12)`
pub fn preview_lines<'a>(
    employees: impl Iterator<Item = &'a Employee>,
    limit: usize,
) -> Vec<String> {
    employees
        .take(limit)
        .map(|employee| {
            let kind = match employee.role() {
                Role::Analyst(_) => "Analyst",
                Role::Programmer(_) => "Programmer",
            };
            format!(
                "{} - {} (Employee number: {})",
                kind,
                employee.visible_name(),
                employee.employee_number()
            )
        })
        .collect()
}
