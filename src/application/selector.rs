use crate::domain::entities::article::ArticleBatch;
use crate::domain::error::PipelineError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Bound the fetched batch to a fixed-size random sample so prompt size
/// and classification cost stay predictable. Sampling is without
/// replacement and deliberately ignores provider ranking to avoid
/// systematic bias toward the top of the result page.
///
/// Policy: asking for more articles than are available is an
/// `InsufficientData` error, not a silent shortfall.
pub fn select(batch: &ArticleBatch, count: usize) -> Result<ArticleBatch, PipelineError> {
    select_with_rng(batch, count, &mut rand::thread_rng())
}

/// Same as [`select`] but with a caller-supplied RNG so tests can pin a seed.
pub fn select_with_rng<R: Rng + ?Sized>(
    batch: &ArticleBatch,
    count: usize,
    rng: &mut R,
) -> Result<ArticleBatch, PipelineError> {
    if batch.len() < count {
        return Err(PipelineError::InsufficientData {
            requested: count,
            available: batch.len(),
        });
    }
    Ok(batch.choose_multiple(rng, count).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::article::Article;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            description: format!("{title} description"),
            content: format!("{title} content"),
            published_at: Utc::now(),
            url: None,
            source: None,
            author: None,
            image_url: None,
        }
    }

    fn batch(n: usize) -> ArticleBatch {
        (0..n).map(|i| article(&format!("article-{i}"))).collect()
    }

    #[test]
    fn returns_exactly_count_distinct_members() {
        let b = batch(8);
        let mut rng = StdRng::seed_from_u64(42);
        let sample = select_with_rng(&b, 5, &mut rng).unwrap();

        assert_eq!(sample.len(), 5);
        let titles: HashSet<&str> = sample.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles.len(), 5, "sample must not contain duplicates");
        let pool: HashSet<&str> = b.iter().map(|a| a.title.as_str()).collect();
        assert!(titles.is_subset(&pool), "every sampled article must come from the batch");
    }

    #[test]
    fn whole_batch_when_count_equals_len() {
        let b = batch(4);
        let mut rng = StdRng::seed_from_u64(7);
        let sample = select_with_rng(&b, 4, &mut rng).unwrap();
        assert_eq!(sample.len(), 4);
    }

    #[test]
    fn fails_when_batch_too_small() {
        let b = batch(3);
        let mut rng = StdRng::seed_from_u64(1);
        let err = select_with_rng(&b, 5, &mut rng).unwrap_err();
        match err {
            PipelineError::InsufficientData { requested, available } => {
                assert_eq!(requested, 5);
                assert_eq!(available, 3);
            }
            other => panic!("expected InsufficientData, got {other:?}"),
        }
    }

    #[test]
    fn empty_batch_fails_even_for_zero_free_counts() {
        let b = batch(0);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_with_rng(&b, 1, &mut rng).is_err());
    }

    #[test]
    fn same_seed_same_sample() {
        let b = batch(10);
        let s1 = select_with_rng(&b, 5, &mut StdRng::seed_from_u64(99)).unwrap();
        let s2 = select_with_rng(&b, 5, &mut StdRng::seed_from_u64(99)).unwrap();
        let t1: Vec<&str> = s1.iter().map(|a| a.title.as_str()).collect();
        let t2: Vec<&str> = s2.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(t1, t2);
    }
}
