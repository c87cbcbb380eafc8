//! Report rendering
//!
//! Writes one text block per solution: a separator, the file name, four
//! lines per actor and one schedule per processing element.

use crate::config::DecisionModel;
use crate::solution::{Schedule, Solution};
use crate::types::Result;
use serde_json::Value;
use std::io::Write;

/// Printed for any value the result file does not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Separator written before each solution
pub const SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

/// Arrow between consecutive actors of a super-loop schedule
pub const SCHEDULE_ARROW: &str = " -> ";

/// Render an optional value, falling back to [`NOT_AVAILABLE`]
///
/// Strings are printed without quotes, everything else as JSON.
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render a schedule as `A -> B -> C`
pub fn render_schedule(schedule: &Schedule) -> String {
    schedule
        .order
        .iter()
        .map(|actor| render_value(Some(actor)))
        .collect::<Vec<_>>()
        .join(SCHEDULE_ARROW)
}

/// Write the report block of a single solution
pub fn write_solution<W: Write>(out: &mut W, solution: &Solution, model: &DecisionModel) -> Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Solution: {}", solution.file_name)?;

    for actor in &solution.actors {
        writeln!(out, "Actor: {}:", actor)?;
        writeln!(out, "\t- Mapped to: {}", render_value(solution.mapped_to(actor)))?;
        writeln!(out, "\t- Min throughput: {}", render_value(solution.min_throughput(actor)))?;
        writeln!(out, "\t- WCET: {}", render_value(solution.worst_execution_time(actor)))?;
        if model.average_execution_time {
            writeln!(
                out,
                "\t- Avg ET: {}",
                render_value(solution.average_execution_time(actor))
            )?;
        }
    }
    writeln!(out)?;

    for schedule in &solution.schedules {
        writeln!(out, "PE: {}", schedule.pe)?;
        writeln!(out, "\t- Schedule: {}", render_schedule(schedule))?;
    }

    Ok(())
}

/// Write the report of all solutions, in the given order
pub fn write_report<W: Write>(out: &mut W, solutions: &[Solution], model: &DecisionModel) -> Result<()> {
    for solution in solutions {
        write_solution(out, solution, model)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn solution(value: Value, model: &DecisionModel) -> Solution {
        let Value::Object(record) = value else {
            panic!("test record must be an object");
        };
        Solution::from_record("sol1.json", record, model)
    }

    fn render(sol: &Solution, model: &DecisionModel) -> String {
        let mut buf = Vec::new();
        write_solution(&mut buf, sol, model).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(None), "N/A");
        assert_eq!(render_value(Some(&Value::Null)), "N/A");
        assert_eq!(render_value(Some(&json!("PE0"))), "PE0");
        assert_eq!(render_value(Some(&json!(10))), "10");
        assert_eq!(render_value(Some(&json!(2.5))), "2.5");
    }

    #[test]
    fn test_schedule_rendering() {
        let model = DecisionModel::new("t");
        let sol = solution(json!({ "super_loop_schedules": {"PE0": ["A", "B", "C"]} }), &model);
        let text = render(&sol, &model);

        let lines: Vec<_> = text.lines().collect();
        let pe = lines.iter().position(|l| *l == "PE: PE0").unwrap();
        assert_eq!(lines[pe + 1], "\t- Schedule: A -> B -> C");
    }

    #[test]
    fn test_one_line_per_actor_field() {
        let model = DecisionModel::multicore();
        let sol = solution(
            json!({ "aperiodic_asynchronous_dataflows": [{ "processes": ["A", "B"] }] }),
            &model,
        );
        let text = render(&sol, &model);

        for prefix in ["\t- Mapped to: ", "\t- Min throughput: ", "\t- WCET: ", "\t- Avg ET: "] {
            assert_eq!(text.lines().filter(|l| l.starts_with(prefix)).count(), 2);
        }
        assert!(text.contains("\t- Avg ET: N/A"));
    }

    #[test]
    fn test_average_line_follows_model() {
        let model = DecisionModel::multicore_and_pl();
        let sol = solution(
            json!({ "aperiodic_asynchronous_dataflows": [{ "processes": ["A"] }] }),
            &model,
        );

        assert!(!render(&sol, &model).contains("Avg ET"));
    }

    #[test]
    fn test_empty_solution_block() {
        let model = DecisionModel::default();
        let sol = Solution::from_record("empty.json", Map::new(), &model);

        assert_eq!(
            render(&sol, &model),
            format!("{}\nSolution: empty.json\n\n", SEPARATOR)
        );
    }
}
