//! CSV snapshot ingest.
//!
//! The platform's CRUD layer exports its tables as one CSV file per table.
//! This workflow parses a snapshot directory into an [`InMemoryMatchStore`]
//! so the matching engine can run against a dataset without the live
//! database: fixtures, demos, offline evaluation. Association rows that
//! reference unknown entity ids are skipped with a warning, never a hard
//! error, mirroring how the engine itself tolerates consistency gaps.

mod parser;

use std::fs::File;
use std::path::Path;

use tracing::{info, warn};

use crate::workflows::matching::domain::{
    Accessibility, AccessibilityId, Barrier, BarrierId, Candidate, CandidateId, DisabilitySubtype,
    DisabilityTypeId, Job, JobId, SubtypeId,
};
use crate::workflows::matching::memory::InMemoryMatchStore;

#[derive(Debug)]
pub enum SnapshotImportError {
    Io {
        table: &'static str,
        source: std::io::Error,
    },
    Csv {
        table: &'static str,
        source: csv::Error,
    },
}

impl std::fmt::Display for SnapshotImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotImportError::Io { table, source } => {
                write!(f, "failed to read {} snapshot: {}", table, source)
            }
            SnapshotImportError::Csv { table, source } => {
                write!(f, "invalid {} snapshot data: {}", table, source)
            }
        }
    }
}

impl std::error::Error for SnapshotImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotImportError::Io { source, .. } => Some(source),
            SnapshotImportError::Csv { source, .. } => Some(source),
        }
    }
}

/// The parsed tables of one snapshot directory, before referential checks.
#[derive(Debug, Default)]
pub(crate) struct Snapshot {
    pub(crate) candidates: Vec<parser::CandidateRow>,
    pub(crate) subtypes: Vec<parser::SubtypeRow>,
    pub(crate) barriers: Vec<parser::BarrierRow>,
    pub(crate) accessibilities: Vec<parser::AccessibilityRow>,
    pub(crate) jobs: Vec<parser::JobRow>,
    pub(crate) candidate_subtypes: Vec<parser::CandidateSubtypeRow>,
    pub(crate) candidate_barriers: Vec<parser::CandidateBarrierRow>,
    pub(crate) barrier_accessibilities: Vec<parser::ResolutionRow>,
    pub(crate) job_subtypes: Vec<parser::JobSubtypeRow>,
    pub(crate) job_accessibilities: Vec<parser::JobAccessibilityRow>,
}

impl Snapshot {
    pub(crate) fn from_dir(dir: &Path) -> Result<Self, SnapshotImportError> {
        Ok(Self {
            candidates: read_table(dir, "candidates")?,
            subtypes: read_table(dir, "subtypes")?,
            barriers: read_table(dir, "barriers")?,
            accessibilities: read_table(dir, "accessibilities")?,
            jobs: read_table(dir, "jobs")?,
            candidate_subtypes: read_table(dir, "candidate_subtypes")?,
            candidate_barriers: read_table(dir, "candidate_barriers")?,
            barrier_accessibilities: read_table(dir, "barrier_accessibilities")?,
            job_subtypes: read_table(dir, "job_subtypes")?,
            job_accessibilities: read_table(dir, "job_accessibilities")?,
        })
    }
}

fn read_table<T: serde::de::DeserializeOwned>(
    dir: &Path,
    table: &'static str,
) -> Result<Vec<T>, SnapshotImportError> {
    let path = dir.join(format!("{table}.csv"));
    let file = File::open(&path).map_err(|source| SnapshotImportError::Io { table, source })?;
    parser::parse_rows(file).map_err(|source| SnapshotImportError::Csv { table, source })
}

pub struct SnapshotImporter;

impl SnapshotImporter {
    /// Load a snapshot directory into an in-memory store.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<InMemoryMatchStore, SnapshotImportError> {
        let snapshot = Snapshot::from_dir(dir.as_ref())?;
        let store = build_store(snapshot);
        info!(
            candidates = store.candidate_count(),
            jobs = store.job_count(),
            "snapshot loaded"
        );
        Ok(store)
    }
}

fn build_store(snapshot: Snapshot) -> InMemoryMatchStore {
    let mut store = InMemoryMatchStore::default();

    for row in snapshot.candidates {
        store.insert_candidate(Candidate {
            id: CandidateId(row.id),
            full_name: row.full_name,
        });
    }
    for row in snapshot.subtypes {
        store.insert_subtype(DisabilitySubtype {
            id: SubtypeId(row.id),
            name: row.name,
            disability_type: DisabilityTypeId(row.disability_type_id),
        });
    }
    for row in snapshot.barriers {
        store.insert_barrier(Barrier {
            id: BarrierId(row.id),
            description: row.description,
        });
    }
    for row in snapshot.accessibilities {
        store.insert_accessibility(Accessibility {
            id: AccessibilityId(row.id),
            description: row.description,
        });
    }
    for row in snapshot.jobs {
        let posted_on = row.posted_date();
        store.insert_job(Job {
            id: JobId(row.id),
            title: row.title,
            description: row.description,
            posted_on,
        });
    }

    for row in snapshot.candidate_subtypes {
        let candidate = CandidateId(row.candidate_id);
        let subtype = SubtypeId(row.subtype_id);
        if !store.contains_candidate(&candidate) || !store.contains_subtype(&subtype) {
            warn!(
                candidate = %candidate.0,
                subtype = %subtype.0,
                "skipping candidate_subtypes row with unknown reference"
            );
            continue;
        }
        store.declare_subtype(candidate, subtype);
    }

    for row in snapshot.candidate_barriers {
        let candidate = CandidateId(row.candidate_id);
        let subtype = SubtypeId(row.subtype_id);
        let barrier = BarrierId(row.barrier_id);
        if !store.contains_candidate(&candidate)
            || !store.contains_subtype(&subtype)
            || !store.contains_barrier(&barrier)
        {
            warn!(
                candidate = %candidate.0,
                subtype = %subtype.0,
                barrier = %barrier.0,
                "skipping candidate_barriers row with unknown reference"
            );
            continue;
        }
        store.report_barrier(candidate, subtype, barrier);
    }

    for row in snapshot.barrier_accessibilities {
        let barrier = BarrierId(row.barrier_id);
        let accessibility = AccessibilityId(row.accessibility_id);
        if !store.contains_barrier(&barrier) || !store.contains_accessibility(&accessibility) {
            warn!(
                barrier = %barrier.0,
                accessibility = %accessibility.0,
                "skipping barrier_accessibilities row with unknown reference"
            );
            continue;
        }
        store.map_resolution(barrier, accessibility);
    }

    for row in snapshot.job_subtypes {
        let job = JobId(row.job_id);
        let subtype = SubtypeId(row.subtype_id);
        if !store.contains_job(&job) || !store.contains_subtype(&subtype) {
            warn!(
                job = %job.0,
                subtype = %subtype.0,
                "skipping job_subtypes row with unknown reference"
            );
            continue;
        }
        store.accept_subtype(job, subtype);
    }

    for row in snapshot.job_accessibilities {
        let job = JobId(row.job_id);
        let accessibility = AccessibilityId(row.accessibility_id);
        if !store.contains_job(&job) || !store.contains_accessibility(&accessibility) {
            warn!(
                job = %job.0,
                accessibility = %accessibility.0,
                "skipping job_accessibilities row with unknown reference"
            );
            continue;
        }
        store.offer_accessibility(job, accessibility);
    }

    store
}
