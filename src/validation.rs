//! Input validation for simulation requests.
//!
//! Checks the process set and run parameters before any simulation
//! starts. Detects:
//! - Empty process sets
//! - Empty or duplicate process IDs
//! - Non-positive or non-finite bursts (a run could never finish them)
//! - Negative or non-finite arrivals
//! - Negative context-switch cost
//! - Non-positive Round-Robin quantum

use std::collections::HashSet;

use crate::error::SimError;
use crate::models::ProcessSpec;
use crate::scheduler::SimulationRequest;

/// Validation result carrying every detected problem.
pub type ValidationResult = Result<(), Vec<SimError>>;

/// Validates a process set and run parameters.
///
/// Checks:
/// 1. At least one process
/// 2. Every ID is non-empty and unique
/// 3. `arrival` is finite and ≥ 0
/// 4. `burst` is finite and > 0
/// 5. `context_switch` is finite and ≥ 0
/// 6. `quantum` (when given) is finite and > 0
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    processes: &[ProcessSpec],
    context_switch: f64,
    quantum: Option<f64>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(SimError::EmptyProcessSet);
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id.is_empty() {
            errors.push(SimError::invalid_process("", "empty process ID"));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(SimError::DuplicateProcessId(p.id.clone()));
        }

        if !p.arrival.is_finite() || p.arrival < 0.0 {
            errors.push(SimError::invalid_process(
                &p.id,
                format!("arrival must be a non-negative number, got {}", p.arrival),
            ));
        }

        if !p.burst.is_finite() || p.burst <= 0.0 {
            errors.push(SimError::invalid_process(
                &p.id,
                format!("burst must be a positive number, got {}", p.burst),
            ));
        }
    }

    if !context_switch.is_finite() || context_switch < 0.0 {
        errors.push(SimError::InvalidContextSwitch(context_switch));
    }

    if let Some(q) = quantum {
        if !q.is_finite() || q <= 0.0 {
            errors.push(SimError::InvalidQuantum(q));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a full simulation request.
pub fn validate_request(request: &SimulationRequest) -> ValidationResult {
    validate_input(
        &request.processes,
        request.context_switch,
        request.policy.quantum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("P1", 0.0, 5.0),
            ProcessSpec::new("P2", 1.0, 3.0),
            ProcessSpec::new("P3", 2.5, 0.5),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_processes(), 0.0, None).is_ok());
        assert!(validate_input(&sample_processes(), 0.5, Some(2.0)).is_ok());
    }

    #[test]
    fn test_zero_burst() {
        let procs = vec![ProcessSpec::new("P1", 0.0, 0.0)];
        let errors = validate_input(&procs, 0.0, None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, SimError::InvalidProcess { id, .. } if id == "P1")));
    }

    #[test]
    fn test_negative_burst() {
        let procs = vec![ProcessSpec::new("P1", 0.0, -2.0)];
        assert!(validate_input(&procs, 0.0, None).is_err());
    }

    #[test]
    fn test_nan_burst() {
        let procs = vec![ProcessSpec::new("P1", 0.0, f64::NAN)];
        let errors = validate_input(&procs, 0.0, None).unwrap_err();
        assert!(matches!(errors[0], SimError::InvalidProcess { .. }));
    }

    #[test]
    fn test_negative_arrival() {
        let procs = vec![ProcessSpec::new("P1", -1.0, 2.0)];
        let errors = validate_input(&procs, 0.0, None).unwrap_err();
        assert!(matches!(errors[0], SimError::InvalidProcess { .. }));
    }

    #[test]
    fn test_duplicate_id() {
        let procs = vec![
            ProcessSpec::new("P1", 0.0, 1.0),
            ProcessSpec::new("P1", 1.0, 1.0),
        ];
        let errors = validate_input(&procs, 0.0, None).unwrap_err();
        assert_eq!(errors, vec![SimError::DuplicateProcessId("P1".into())]);
    }

    #[test]
    fn test_empty_id() {
        let procs = vec![ProcessSpec::new("", 0.0, 1.0)];
        assert!(validate_input(&procs, 0.0, None).is_err());
    }

    #[test]
    fn test_empty_process_set() {
        let errors = validate_input(&[], 0.0, None).unwrap_err();
        assert_eq!(errors, vec![SimError::EmptyProcessSet]);
    }

    #[test]
    fn test_negative_context_switch() {
        let errors = validate_input(&sample_processes(), -0.5, None).unwrap_err();
        assert_eq!(errors, vec![SimError::InvalidContextSwitch(-0.5)]);
    }

    #[test]
    fn test_invalid_quantum() {
        let errors = validate_input(&sample_processes(), 0.0, Some(0.0)).unwrap_err();
        assert_eq!(errors, vec![SimError::InvalidQuantum(0.0)]);

        let errors = validate_input(&sample_processes(), 0.0, Some(-1.0)).unwrap_err();
        assert_eq!(errors, vec![SimError::InvalidQuantum(-1.0)]);
    }

    #[test]
    fn test_multiple_errors() {
        let procs = vec![
            ProcessSpec::new("P1", -1.0, 0.0),
            ProcessSpec::new("P1", 0.0, 1.0),
        ];
        let errors = validate_input(&procs, -1.0, Some(0.0)).unwrap_err();
        // arrival, burst, duplicate, context switch, quantum
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_validate_request_uses_policy_quantum() {
        use crate::dispatching::Policy;

        let request = SimulationRequest::new(sample_processes(), Policy::round_robin(-2.0));
        assert_eq!(
            validate_request(&request).unwrap_err(),
            vec![SimError::InvalidQuantum(-2.0)]
        );
        // Quantum is irrelevant for non-RR policies
        let request = request.with_policy(Policy::Sjf).with_context_switch(1.0);
        assert!(validate_request(&request).is_ok());
    }
}
