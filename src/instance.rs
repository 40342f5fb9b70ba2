//! Flow-shop problem instances.
//!
//! An [`Instance`] holds `n` jobs, `m` machines, and the `n x m` grid of
//! processing times. Instances are validated on construction and immutable
//! afterwards, so every optimizer can assume `n >= 2` and `m >= 1`.
//!
//! [`parse_instances`] reads the plain-text layout used by the benchmark
//! files:
//!
//! ```text
//! instance 0
//! 3 2
//! 2 3
//! 4 1
//! 3 2
//! ```
//!
//! Each block starts with a line beginning with `instance`, followed by
//! `n m` and then one line per job. A job line is either `m` processing
//! times, or `2m` tokens read as `(machine, time)` pairs (OR-Library layout).

use crate::error::{FlowShopError, Result};

/// A permutation flow-shop instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawInstance")
)]
pub struct Instance {
    name: String,
    jobs: usize,
    machines: usize,
    processing_times: Vec<Vec<u64>>,
}

impl Instance {
    /// Builds an instance from a job-major processing-time grid.
    ///
    /// `processing_times[j][k]` is the time job `j` spends on machine `k`.
    ///
    /// # Errors
    /// [`FlowShopError::InvalidInstance`] if there are fewer than two jobs,
    /// no machines, or the rows have differing lengths.
    pub fn new(processing_times: Vec<Vec<u64>>) -> Result<Self> {
        let jobs = processing_times.len();
        let machines = processing_times.first().map_or(0, Vec::len);
        Self::with_dimensions(jobs, machines, processing_times)
    }

    /// Builds an instance and checks the grid against declared dimensions.
    pub fn with_dimensions(
        jobs: usize,
        machines: usize,
        processing_times: Vec<Vec<u64>>,
    ) -> Result<Self> {
        if jobs < 2 {
            return Err(FlowShopError::instance(format!(
                "at least 2 jobs are required, got {jobs}"
            )));
        }
        if machines < 1 {
            return Err(FlowShopError::instance("at least 1 machine is required"));
        }
        if processing_times.len() != jobs {
            return Err(FlowShopError::instance(format!(
                "declared {jobs} jobs but the grid has {} rows",
                processing_times.len()
            )));
        }
        if let Some((j, row)) = processing_times
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != machines)
        {
            return Err(FlowShopError::instance(format!(
                "job {j} has {} processing times, expected {machines}",
                row.len()
            )));
        }

        Ok(Self {
            name: String::new(),
            jobs,
            machines,
            processing_times,
        })
    }

    /// Attaches a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Display name (empty if none was given).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of jobs `n`.
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Number of machines `m`.
    pub fn machines(&self) -> usize {
        self.machines
    }

    /// Processing time of `job` on `machine`.
    #[inline]
    pub fn processing_time(&self, job: usize, machine: usize) -> u64 {
        self.processing_times[job][machine]
    }

    /// Processing times of one job across all machines.
    #[inline]
    pub fn job_times(&self, job: usize) -> &[u64] {
        &self.processing_times[job]
    }

    /// Mean processing time over the whole grid.
    pub fn mean_processing_time(&self) -> f64 {
        let total: u64 = self.processing_times.iter().flatten().sum();
        total as f64 / (self.jobs * self.machines) as f64
    }
}

/// Unchecked wire form of [`Instance`]; deserialization goes through
/// [`Instance::with_dimensions`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInstance {
    #[serde(default)]
    name: String,
    jobs: usize,
    machines: usize,
    processing_times: Vec<Vec<u64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInstance> for Instance {
    type Error = FlowShopError;

    fn try_from(raw: RawInstance) -> Result<Self> {
        Ok(Instance::with_dimensions(raw.jobs, raw.machines, raw.processing_times)?
            .with_name(raw.name))
    }
}

/// Parses every instance block in `text`.
///
/// # Errors
/// [`FlowShopError::Parse`] on malformed headers or job lines, and
/// [`FlowShopError::InvalidInstance`] if a block's dimensions are invalid.
pub fn parse_instances(text: &str) -> Result<Vec<Instance>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let mut instances = Vec::new();

    while let Some((header_no, header)) = lines.next() {
        let Some(rest) = header.strip_prefix("instance") else {
            continue;
        };
        let name = rest.trim().to_string();

        let (dims_no, dims) = lines
            .next()
            .ok_or_else(|| FlowShopError::parse(header_no, "missing `n m` line"))?;
        let dims = parse_numbers(dims_no, dims)?;
        let &[jobs, machines] = dims.as_slice() else {
            return Err(FlowShopError::parse(
                dims_no,
                format!("expected `n m`, found {} values", dims.len()),
            ));
        };
        let (jobs, machines) = (jobs as usize, machines as usize);

        let mut grid = Vec::new();
        for job in 0..jobs {
            let (line_no, line) = lines.next().ok_or_else(|| {
                FlowShopError::parse(dims_no, format!("missing line for job {job}"))
            })?;
            grid.push(parse_job_line(line_no, line, machines)?);
        }

        instances.push(Instance::with_dimensions(jobs, machines, grid)?.with_name(name));
    }

    Ok(instances)
}

fn parse_job_line(line_no: usize, line: &str, machines: usize) -> Result<Vec<u64>> {
    let values = parse_numbers(line_no, line)?;

    if values.len() == machines {
        return Ok(values);
    }

    if values.len() == 2 * machines {
        let mut times = vec![None; machines];
        for pair in values.chunks_exact(2) {
            let machine = pair[0] as usize;
            let slot = times.get_mut(machine).ok_or_else(|| {
                FlowShopError::parse(line_no, format!("machine index {machine} out of range"))
            })?;
            if slot.replace(pair[1]).is_some() {
                return Err(FlowShopError::parse(
                    line_no,
                    format!("machine {machine} listed twice"),
                ));
            }
        }
        // All slots are filled: m distinct indices below m.
        return Ok(times.into_iter().flatten().collect());
    }

    Err(FlowShopError::parse(
        line_no,
        format!(
            "expected {machines} processing times or {} (machine, time) tokens, found {}",
            2 * machines,
            values.len()
        ),
    ))
}

fn parse_numbers(line_no: usize, line: &str) -> Result<Vec<u64>> {
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<u64>()
                .map_err(|_| FlowShopError::parse(line_no, format!("invalid integer `{tok}`")))
        })
        .collect()
}
