use super::types::Chunk;
use crate::error::PipelineError;
use crate::extract::types::DocumentRef;

/// Splits `documents` into exactly `workers` contiguous chunks.
///
/// With `base = n / w` and `remainder = n % w`, chunk `i` holds `base + 1` references when
/// `i < remainder` and `base` otherwise. Order is preserved and chunks may be empty when
/// `n < w`.
pub fn partition(documents: Vec<DocumentRef>, workers: usize) -> Result<Vec<Chunk>, PipelineError> {
    if workers == 0 {
        return Err(PipelineError::Configuration(
            "cannot partition over zero workers".to_string(),
        ));
    }

    let base = documents.len() / workers;
    let remainder = documents.len() % workers;
    let mut remaining = documents.into_iter();

    let chunks = (0..workers)
        .map(|worker_id| {
            let size = base + usize::from(worker_id < remainder);
            Chunk {
                worker_id,
                documents: remaining.by_ref().take(size).collect(),
            }
        })
        .collect();

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(n: usize) -> Vec<DocumentRef> {
        (0..n).map(|i| DocumentRef(format!("/talk/{}", i))).collect()
    }

    #[test]
    fn test_partition_sizes_for_remainder() {
        let chunks = partition(refs(10), 4).unwrap();
        let sizes: Vec<usize> = chunks.iter().map(Chunk::len).collect();

        assert_eq!(sizes, vec![3, 3, 2, 2]);
    }

    #[test]
    fn test_partition_zero_workers_rejected() {
        assert!(partition(refs(3), 0).is_err());
    }
}
