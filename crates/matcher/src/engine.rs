use std::sync::Arc;

use lancer_common::Result;
use lancer_llm::TextEmbedder;
use tracing::{debug, info};

use crate::profile::{Profile, ScoredMatch};
use crate::similarity::cosine_similarity;

/// Knobs for a matching run
///
/// The threshold is a policy choice, not a hard constraint; callers tune it
/// per project.
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Minimum similarity score for a profile to be kept
    pub threshold: f32,

    /// Maximum number of matches returned
    pub limit: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            limit: 5,
        }
    }
}

/// Ranks freelancer profiles against a project description
pub struct ProfileMatcher {
    embedder: Arc<dyn TextEmbedder>,
}

impl ProfileMatcher {
    /// Create new matcher over an embedding provider
    pub fn new(embedder: Arc<dyn TextEmbedder>) -> Self {
        Self { embedder }
    }

    /// Embed, score, filter and rank profiles against the query
    ///
    /// Every profile and the query are embedded first; any embedding failure
    /// aborts the run with no partial result. Survivors of the threshold
    /// filter come back sorted by descending score, truncated to
    /// `options.limit`. The order of exact score ties is unspecified.
    pub async fn find_matches(
        &self,
        query: &str,
        profiles: &[Profile],
        options: &MatchOptions,
    ) -> Result<Vec<ScoredMatch>> {
        if profiles.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            "Matching {} profiles (threshold={}, limit={})",
            profiles.len(),
            options.threshold,
            options.limit
        );

        let contents: Vec<String> = profiles.iter().map(|p| p.content()).collect();
        let profile_embeddings = self.embedder.embed_batch(&contents).await?;
        let query_embedding = self.embedder.embed(query).await?;

        let mut matches: Vec<ScoredMatch> = profiles
            .iter()
            .zip(profile_embeddings.iter())
            .map(|(profile, embedding)| ScoredMatch {
                profile: profile.clone(),
                score: cosine_similarity(&query_embedding, embedding),
            })
            .filter(|m| m.score >= options.threshold)
            .collect();

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(options.limit);

        info!(
            "Match completed - {} results from {} candidates",
            matches.len(),
            profiles.len()
        );

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lancer_common::LancerError;

    /// Deterministic embedder keyed by substrings of the input text
    struct StubEmbedder {
        vectors: Vec<(&'static str, Vec<f32>)>,
    }

    impl StubEmbedder {
        fn lookup(&self, text: &str) -> Result<Vec<f32>> {
            self.vectors
                .iter()
                .find(|(needle, _)| text.contains(needle))
                .map(|(_, v)| v.clone())
                .ok_or_else(|| LancerError::embedding(format!("No stub vector for: {text}")))
        }
    }

    #[async_trait]
    impl TextEmbedder for StubEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>> {
            self.lookup(text)
        }

        async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            texts.iter().map(|t| self.lookup(t)).collect()
        }
    }

    fn profile(skills: &str) -> Profile {
        Profile::new(vec![("skills".to_string(), skills.to_string())])
    }

    fn freelancer_pool() -> (Arc<StubEmbedder>, Vec<Profile>) {
        let embedder = Arc::new(StubEmbedder {
            vectors: vec![
                ("React TypeScript frontend developer needed", vec![1.0, 0.1, 0.0]),
                ("React frontend, Figma, GraphQL", vec![0.9, 0.2, 0.1]),
                ("Backend Java, Spring", vec![0.1, 0.9, 0.3]),
                ("Embedded C, RTOS", vec![0.0, 0.2, 0.9]),
            ],
        });

        let profiles = vec![
            profile("React frontend, Figma, GraphQL"),
            profile("Backend Java, Spring"),
            profile("Embedded C, RTOS"),
        ];

        (embedder, profiles)
    }

    #[tokio::test]
    async fn test_empty_collection_yields_empty_output() {
        let (embedder, _) = freelancer_pool();
        let matcher = ProfileMatcher::new(embedder);

        let matches = matcher
            .find_matches("any query", &[], &MatchOptions::default())
            .await
            .unwrap();

        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_threshold_above_range_yields_empty_output() {
        let (embedder, profiles) = freelancer_pool();
        let matcher = ProfileMatcher::new(embedder);

        let options = MatchOptions {
            threshold: 1.1,
            limit: 5,
        };
        let matches = matcher
            .find_matches("React TypeScript frontend developer needed", &profiles, &options)
            .await
            .unwrap();

        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_scores_respect_threshold_and_limit() {
        let (embedder, profiles) = freelancer_pool();
        let matcher = ProfileMatcher::new(embedder);

        let options = MatchOptions {
            threshold: 0.5,
            limit: 2,
        };
        let matches = matcher
            .find_matches("React TypeScript frontend developer needed", &profiles, &options)
            .await
            .unwrap();

        assert!(matches.len() <= options.limit.min(profiles.len()));
        for m in &matches {
            assert!(m.score >= options.threshold);
        }
    }

    #[tokio::test]
    async fn test_output_sorted_by_descending_score() {
        let (embedder, profiles) = freelancer_pool();
        let matcher = ProfileMatcher::new(embedder);

        let options = MatchOptions {
            threshold: 0.0,
            limit: 5,
        };
        let matches = matcher
            .find_matches("React TypeScript frontend developer needed", &profiles, &options)
            .await
            .unwrap();

        for pair in matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[tokio::test]
    async fn test_react_query_ranks_react_profile_first() {
        let (embedder, profiles) = freelancer_pool();
        let matcher = ProfileMatcher::new(embedder);

        let options = MatchOptions {
            threshold: 0.0,
            limit: 5,
        };
        let matches = matcher
            .find_matches(
                "React TypeScript frontend developer needed",
                &profiles[..2],
                &options,
            )
            .await
            .unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(
            matches[0].profile.get("skills"),
            Some("React frontend, Figma, GraphQL")
        );
        assert!(matches[0].score >= matches[1].score);
    }

    #[tokio::test]
    async fn test_embedding_failure_aborts_run() {
        let embedder = Arc::new(StubEmbedder { vectors: vec![] });
        let matcher = ProfileMatcher::new(embedder);
        let profiles = vec![profile("React frontend, Figma, GraphQL")];

        let result = matcher
            .find_matches("query", &profiles, &MatchOptions::default())
            .await;

        assert!(result.is_err());
    }
}
