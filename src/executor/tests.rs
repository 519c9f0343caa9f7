//! Executor Module Tests
//!
//! ## Test Scopes
//! - **Partitioner**: completeness, balance and order preservation for many `(n, w)` pairs.
//! - **Pool**: one report per chunk, settle-all failure isolation, sequential processing
//!   inside a worker, parallelism across workers, fatal worker panics.
//! - **Pool + Extractor**: rendering contexts are released for every talk.

#[cfg(test)]
mod tests {
    use crate::error::PipelineError;
    use crate::executor::partitioner::partition;
    use crate::executor::pool::WorkerPool;
    use crate::executor::types::Chunk;
    use crate::extract::extractor::{ExtractOptions, Extractor};
    use crate::extract::types::{DocumentRef, TalkResult};
    use crate::render::memory::InMemoryRenderer;
    use crate::text::stopwords::StopWords;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn refs(n: usize) -> Vec<DocumentRef> {
        (0..n).map(|i| DocumentRef(format!("/talk/{}", i))).collect()
    }

    fn chunk(worker_id: usize, paths: &[&str]) -> Chunk {
        Chunk {
            worker_id,
            documents: paths.iter().map(|p| DocumentRef::new(*p)).collect(),
        }
    }

    /// Job that echoes the document path as its only token.
    fn echo(document: DocumentRef) -> TalkResult {
        TalkResult {
            author: None,
            tokens: vec![document.0],
        }
    }

    // ============================================================
    // PARTITIONER TESTS
    // ============================================================

    #[test]
    fn test_partition_is_complete_balanced_and_ordered() {
        for n in 0..40 {
            for w in 1..12 {
                let documents = refs(n);
                let chunks = partition(documents.clone(), w).unwrap();

                assert_eq!(chunks.len(), w, "n={} w={}", n, w);

                let sizes: Vec<usize> = chunks.iter().map(Chunk::len).collect();
                assert_eq!(sizes.iter().sum::<usize>(), n);
                let max = *sizes.iter().max().unwrap();
                let min = *sizes.iter().min().unwrap();
                assert!(max - min <= 1, "n={} w={} sizes={:?}", n, w, sizes);

                let rejoined: Vec<DocumentRef> =
                    chunks.into_iter().flat_map(|c| c.documents).collect();
                assert_eq!(rejoined, documents);
            }
        }
    }

    #[test]
    fn test_partition_larger_chunks_come_first() {
        let chunks = partition(refs(7), 3).unwrap();

        assert_eq!(chunks[0].documents, refs(7)[0..3].to_vec());
        assert_eq!(chunks[1].documents, refs(7)[3..5].to_vec());
        assert_eq!(chunks[2].documents, refs(7)[5..7].to_vec());
    }

    #[test]
    fn test_partition_fewer_documents_than_workers() {
        let chunks = partition(refs(2), 5).unwrap();

        let sizes: Vec<usize> = chunks.iter().map(Chunk::len).collect();
        assert_eq!(sizes, vec![1, 1, 0, 0, 0]);
        let ids: Vec<usize> = chunks.iter().map(|c| c.worker_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    // ============================================================
    // POOL TESTS
    // ============================================================

    #[tokio::test]
    async fn test_pool_one_report_per_chunk_including_empty() {
        let pool = WorkerPool::new(|document| async move { Some(echo(document)) });
        let chunks = partition(refs(3), 5).unwrap();

        let reports = pool.run(chunks).await.unwrap();

        assert_eq!(reports.len(), 5);
        let sizes: Vec<usize> = reports.iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![1, 1, 1, 0, 0]);
        assert!(reports[4].is_empty());
    }

    #[tokio::test]
    async fn test_pool_isolates_item_failures() {
        let pool = WorkerPool::new(|document: DocumentRef| async move {
            if document.0 == "/bad" {
                None
            } else {
                Some(echo(document))
            }
        });

        let reports = pool
            .run(vec![chunk(0, &["/good-1", "/bad", "/good-2"])])
            .await
            .unwrap();

        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.len(), 3);
        assert_eq!(report.extracted(), 2);
        assert_eq!(report.failed(), 1);
        assert!(report.results[1].is_none());
    }

    #[tokio::test]
    async fn test_pool_all_failed_chunk_still_reports() {
        let pool = WorkerPool::new(|_document| async move { None });

        let reports = pool.run(vec![chunk(0, &["/a", "/b"])]).await.unwrap();

        assert_eq!(reports[0].len(), 2);
        assert_eq!(reports[0].failed(), 2);
    }

    #[tokio::test]
    async fn test_pool_preserves_chunk_order_in_report() {
        let pool = WorkerPool::new(|document| async move {
            // later documents finish faster; order must still follow the chunk
            let delay = if document.0 == "/first" { 30 } else { 1 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Some(echo(document))
        });

        let reports = pool
            .run(vec![chunk(0, &["/first", "/second", "/third"])])
            .await
            .unwrap();

        let tokens: Vec<String> = reports[0]
            .talks()
            .flat_map(|talk| talk.tokens.clone())
            .collect();
        assert_eq!(tokens, vec!["/first", "/second", "/third"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_pool_parallel_across_workers_sequential_within() {
        let active = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let (active_job, peak_job) = (active.clone(), peak.clone());

        let pool = WorkerPool::new(move |document| {
            let active = active_job.clone();
            let peak = peak_job.clone();
            async move {
                let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(40)).await;
                active.fetch_sub(1, Ordering::SeqCst);
                Some(echo(document))
            }
        });

        let reports = pool.run(partition(refs(8), 4).unwrap()).await.unwrap();

        assert_eq!(reports.len(), 4);
        assert!(reports.iter().all(|r| r.len() == 2));
        let peak = peak.load(Ordering::SeqCst);
        // each worker has at most one talk in flight
        assert!(peak <= 4, "peak concurrency {}", peak);
        assert!(peak > 1, "workers did not overlap");
    }

    #[tokio::test]
    async fn test_pool_reports_ordered_by_worker() {
        let pool = WorkerPool::new(|document| async move { Some(echo(document)) });

        let reports = pool.run(partition(refs(6), 3).unwrap()).await.unwrap();

        let ids: Vec<usize> = reports.iter().map(|r| r.worker_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_pool_worker_panic_is_fatal() {
        let pool = WorkerPool::new(|document: DocumentRef| async move {
            if document.0 == "/boom" {
                panic!("renderer crashed");
            }
            Some(echo(document))
        });

        let result = pool
            .run(vec![chunk(0, &["/ok"]), chunk(1, &["/boom"])])
            .await;

        assert!(matches!(
            result,
            Err(PipelineError::WorkerFailed { worker_id: 1, .. })
        ));
    }

    #[tokio::test]
    async fn test_pool_no_chunks() {
        let pool = WorkerPool::new(|document| async move { Some(echo(document)) });

        let reports = pool.run(vec![]).await.unwrap();

        assert!(reports.is_empty());
    }

    // ============================================================
    // POOL + EXTRACTOR
    // ============================================================

    #[tokio::test]
    async fn test_pool_with_extractor_one_of_three_fails() {
        let page = r#"<p class="author-name">Elder Uchtdorf</p><div class="body-block"><p>Grace and gratitude</p></div>"#;
        let renderer = InMemoryRenderer::new()
            .with_page("https://example.org/talk/1", page)
            .with_page("https://example.org/talk/3", page);
        let extractor = Extractor::new(
            Arc::new(renderer.clone()),
            Arc::new(StopWords::english()),
            ExtractOptions {
                base_url: "https://example.org".to_string(),
                filter_stop_words: true,
                timeout: None,
            },
        );
        let pool = WorkerPool::with_extractor(Arc::new(extractor));

        let reports = pool
            .run(vec![chunk(0, &["/talk/1", "/talk/2", "/talk/3"])])
            .await
            .unwrap();

        assert_eq!(reports[0].len(), 3);
        assert_eq!(reports[0].failed(), 1);
        assert!(reports[0].results[1].is_none());
        assert_eq!(renderer.acquired(), 3);
        assert_eq!(renderer.closed(), 3);
    }
}
