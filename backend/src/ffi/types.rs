//! Conversions between Python dicts and simulator configuration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::network::TopologyConfig;
use crate::output::Snapshot;
use crate::simulation::SisParams;

/// Extract a required key from a config dict
fn required<'py, T: FromPyObject<'py>>(config: &Bound<'py, PyDict>, key: &str) -> PyResult<T> {
    config
        .get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("missing required config key '{}'", key)))?
        .extract()
}

/// Extract an optional key, falling back to `default`
fn optional<'py, T: FromPyObject<'py>>(
    config: &Bound<'py, PyDict>,
    key: &str,
    default: T,
) -> PyResult<T> {
    match config.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

/// Parse engine parameters from a config dict
///
/// Every field is optional and falls back to the crate defaults, so a Python
/// caller only specifies what deviates.
pub fn parse_sis_params(config: &Bound<'_, PyDict>) -> PyResult<SisParams> {
    let defaults = SisParams::default();
    Ok(SisParams {
        t1: optional(config, "t1", defaults.t1)?,
        t2: optional(config, "t2", defaults.t2)?,
        lambda: optional(config, "lambda", defaults.lambda)?,
        d_lambda: optional(config, "d_lambda", defaults.d_lambda)?,
        mu: optional(config, "mu", defaults.mu)?,
        infection_weight: optional(config, "infection_weight", defaults.infection_weight)?,
    })
}

/// Parse the topology selector from the `topology` sub-dict
pub fn parse_topology_config(config: &Bound<'_, PyDict>) -> PyResult<TopologyConfig> {
    let topology: Bound<'_, PyDict> = required(config, "topology")?;
    let kind: String = required(&topology, "type")?;

    match kind.as_str() {
        "lattice" => Ok(TopologyConfig::Lattice {
            lx: required(&topology, "lx")?,
            ly: required(&topology, "ly")?,
        }),
        "erdos_renyi" => Ok(TopologyConfig::ErdosRenyi {
            n: required(&topology, "n")?,
            p: required(&topology, "p")?,
        }),
        "regular" => Ok(TopologyConfig::Regular {
            n: required(&topology, "n")?,
            k: required(&topology, "k")?,
        }),
        "complete" => Ok(TopologyConfig::Complete {
            n: required(&topology, "n")?,
        }),
        other => Err(PyValueError::new_err(format!(
            "unknown topology type '{}'",
            other
        ))),
    }
}

/// Optional keys consumed by the simulator wrapper itself
pub fn parse_label(config: &Bound<'_, PyDict>) -> PyResult<String> {
    optional(config, "label", "Cont".to_string())
}

pub fn parse_snapshot_interval(config: &Bound<'_, PyDict>) -> PyResult<usize> {
    optional(config, "snapshot_interval", 50)
}

pub fn parse_rng_seed(config: &Bound<'_, PyDict>) -> PyResult<u64> {
    required(config, "rng_seed")
}

/// Convert collected snapshots into a list of `(time, fraction)` tuples
pub fn snapshots_to_py(py: Python<'_>, snapshots: &[Snapshot]) -> PyResult<Py<PyList>> {
    let list = PyList::empty_bound(py);
    for snapshot in snapshots {
        list.append((snapshot.time, snapshot.infected_fraction))?;
    }
    Ok(list.unbind())
}
