//! Solution parsing
//!
//! One result file becomes one [`Solution`]. Every section is looked up
//! defensively: an absent section or actor entry reads back as `None` and is
//! rendered as a placeholder later, never as an error.

use crate::config::DecisionModel;
use crate::types::{ReportError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// List of dataflow descriptors; only the first one is reported
pub const DATAFLOWS_KEY: &str = "aperiodic_asynchronous_dataflows";
/// Actor names of a dataflow, in report order
pub const PROCESSES_KEY: &str = "processes";
/// Minimum throughput requirement per actor (inside the dataflow)
pub const MIN_THROUGHPUT_KEY: &str = "process_minimum_throughput";
/// Actor to runtime (processing element) mapping
pub const RUNTIME_MAPPING_KEY: &str = "processes_to_runtime_scheduling";
/// Actor to programmable logic area mapping
pub const LOGIC_AREA_MAPPING_KEY: &str = "processes_to_logic_programmable_areas";
/// Measured execution times section
pub const EXECUTION_TIMES_KEY: &str = "instrumented_computation_times";
/// Worst-case execution time per actor (inside the execution times)
pub const WCET_KEY: &str = "worst_execution_times";
/// Average execution time per actor (inside the execution times)
pub const AVERAGE_ET_KEY: &str = "average_execution_times";
/// Processing element to super-loop order
pub const SCHEDULES_KEY: &str = "super_loop_schedules";

/// Repeating execution order of the actors mapped to one processing element
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    /// Processing element identifier
    pub pe: String,
    /// Actors in execution order
    pub order: Vec<Value>,
}

/// One parsed result file
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Result file name, relative to the scanned directory
    pub file_name: String,
    /// Actor names of the first dataflow, in file order
    pub actors: Vec<String>,
    /// Actor to resource mapping (runtime and, if enabled, logic area)
    pub actor_mapping: Map<String, Value>,
    /// Actor minimum throughput
    pub min_throughput: Map<String, Value>,
    /// Actor worst-case execution time
    pub worst_execution_time: Map<String, Value>,
    /// Actor average execution time (`None` if the file has no such section)
    pub average_execution_time: Option<Map<String, Value>>,
    /// Super-loop schedules in file order
    pub schedules: Vec<Schedule>,
}

impl Solution {
    /// Build a solution from an already deserialized result record
    pub fn from_record(
        file_name: impl Into<String>,
        mut record: Map<String, Value>,
        model: &DecisionModel,
    ) -> Self {
        let mut dataflow = first_dataflow(&mut record);
        let actors = actor_names(dataflow.get(PROCESSES_KEY));
        let min_throughput = take_object(&mut dataflow, MIN_THROUGHPUT_KEY).unwrap_or_default();

        let mut actor_mapping = take_object(&mut record, RUNTIME_MAPPING_KEY).unwrap_or_default();
        if model.logic_area_mapping {
            // Logic area entries win over runtime entries for the same actor
            if let Some(areas) = take_object(&mut record, LOGIC_AREA_MAPPING_KEY) {
                for (actor, area) in areas {
                    if !area.is_null() {
                        actor_mapping.insert(actor, area);
                    }
                }
            }
        }

        let mut execution_times = take_object(&mut record, EXECUTION_TIMES_KEY).unwrap_or_default();
        let worst_execution_time = take_object(&mut execution_times, WCET_KEY).unwrap_or_default();
        let average_execution_time = take_object(&mut execution_times, AVERAGE_ET_KEY);

        let schedules = take_object(&mut record, SCHEDULES_KEY)
            .unwrap_or_default()
            .into_iter()
            .map(|(pe, order)| Schedule {
                order: schedule_order(&pe, order),
                pe,
            })
            .collect();

        Self {
            file_name: file_name.into(),
            actors,
            actor_mapping,
            min_throughput,
            worst_execution_time,
            average_execution_time,
            schedules,
        }
    }

    /// Resource the actor is mapped to
    pub fn mapped_to(&self, actor: &str) -> Option<&Value> {
        lookup(Some(&self.actor_mapping), actor)
    }

    /// Minimum throughput requirement of the actor
    pub fn min_throughput(&self, actor: &str) -> Option<&Value> {
        lookup(Some(&self.min_throughput), actor)
    }

    /// Worst-case execution time of the actor
    pub fn worst_execution_time(&self, actor: &str) -> Option<&Value> {
        lookup(Some(&self.worst_execution_time), actor)
    }

    /// Average execution time of the actor
    pub fn average_execution_time(&self, actor: &str) -> Option<&Value> {
        lookup(self.average_execution_time.as_ref(), actor)
    }
}

/// Read and parse `file_name` inside `dir`
pub fn load_solution(dir: &Path, file_name: &str, model: &DecisionModel) -> Result<Solution> {
    let path = dir.join(file_name);
    log::debug!("Parsing result file: {:?}", path);

    let content = fs::read_to_string(&path).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;

    let record: Map<String, Value> =
        serde_json::from_str(&content).map_err(|source| ReportError::Parse {
            file: file_name.to_string(),
            source,
        })?;

    Ok(Solution::from_record(file_name, record, model))
}

/// Per-actor lookup; JSON `null` counts as missing
fn lookup<'a>(map: Option<&'a Map<String, Value>>, actor: &str) -> Option<&'a Value> {
    map?.get(actor).filter(|value| !value.is_null())
}

fn take_object(map: &mut Map<String, Value>, key: &str) -> Option<Map<String, Value>> {
    match map.remove(key)? {
        Value::Object(object) => Some(object),
        Value::Null => None,
        other => {
            log::warn!("Expected an object under '{}', found {}", key, other);
            None
        }
    }
}

fn first_dataflow(record: &mut Map<String, Value>) -> Map<String, Value> {
    let dataflow = match record.remove(DATAFLOWS_KEY) {
        Some(Value::Array(dataflows)) => {
            if dataflows.len() > 1 {
                log::debug!("{} dataflows present, reporting the first", dataflows.len());
            }
            dataflows.into_iter().next()
        }
        _ => None,
    };

    match dataflow {
        Some(Value::Object(dataflow)) => dataflow,
        _ => {
            log::warn!("No dataflow found under '{}'", DATAFLOWS_KEY);
            Map::new()
        }
    }
}

fn actor_names(processes: Option<&Value>) -> Vec<String> {
    match processes {
        Some(Value::Array(names)) => names
            .iter()
            .map(|name| match name {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn schedule_order(pe: &str, order: Value) -> Vec<Value> {
    match order {
        Value::Array(actors) => actors,
        Value::Null => Vec::new(),
        other => {
            log::warn!("Schedule of {} is not a list: {}", pe, other);
            vec![other]
        }
    }
}
