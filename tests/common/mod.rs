// Shared fixtures for the integration tests

#![allow(dead_code)]

use dllviz::config::SimConfig;
use dllviz::engine::{OperationParams, RunController, RunReport};
use dllviz::catalog::OperationKind;
use dllviz::structure::ListStore;

/// Value source counting up from 50, so generated values are predictable
pub fn counting_values() -> Box<dyn FnMut() -> i32> {
    let mut next = 49;
    Box::new(move || {
        next += 1;
        next
    })
}

/// Controller over a list holding `values`, head first
pub fn controller(values: &[i32]) -> RunController {
    RunController::with_list(
        SimConfig::default(),
        ListStore::from_values(values),
        Box::new(counting_values()),
    )
}

/// Run `kind` to the end on virtual time
pub fn run(controller: &mut RunController, kind: OperationKind, params: OperationParams) -> RunReport {
    controller
        .run_with(kind, &params)
        .expect("no run should be in progress")
}

pub fn values(controller: &RunController) -> Vec<i32> {
    controller.list().values_in_order()
}
