//! TF-IDF vector space over feature strings.
//!
//! ## Algorithm
//! 1. Tokenize every document (see `TokenPattern`)
//! 2. Vocabulary = distinct terms, sorted, index = position
//! 3. idf(t) = ln((1 + n) / (1 + df(t))) + 1, n = document count
//! 4. Row = raw term count x idf, then L2-normalized
//!
//! This is the smoothed formulation used by scikit-learn's
//! `TfidfVectorizer` defaults, so fitted weights agree with that
//! implementation up to floating-point noise.

use crate::error::{Result, VectorizeError};
use crate::similarity::l2_normalize;
use crate::tokenizer::TokenPattern;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::debug;

/// Fitting on fewer documents than this is refused
pub const MIN_DOCUMENTS: usize = 2;

// =============================================================================
// Vocabulary
// =============================================================================

/// Ordered set of terms observed during a fit.
///
/// Terms are kept in lexicographic order, so identical input always yields
/// identical indices regardless of document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    fn from_terms(terms: BTreeSet<String>) -> Self {
        let terms: Vec<String> = terms.into_iter().collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        Self { terms, index }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Term at a dimension index
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// Dimension index of a term
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// All terms in index order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

// =============================================================================
// TfidfModel
// =============================================================================

/// A fitted vocabulary plus its idf weights.
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfModel {
    pattern: TokenPattern,
    vocabulary: Vocabulary,
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Fit the vector space and return the model together with one
    /// L2-normalized row per document, in input order.
    pub fn fit<D>(documents: &[D], pattern: TokenPattern) -> Result<(Self, Vec<Vec<f64>>)>
    where
        D: AsRef<str> + Sync,
    {
        if documents.len() < MIN_DOCUMENTS {
            return Err(VectorizeError::TooFewDocuments {
                found: documents.len(),
                required: MIN_DOCUMENTS,
            });
        }

        let tokenized: Vec<Vec<String>> = documents
            .par_iter()
            .map(|doc| pattern.tokenize(doc.as_ref()))
            .collect();

        let terms: BTreeSet<String> = tokenized.iter().flatten().cloned().collect();
        if terms.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }
        let vocabulary = Vocabulary::from_terms(terms);

        // Document frequency: each term counted once per document
        let mut doc_frequency = vec![0usize; vocabulary.len()];
        for doc in &tokenized {
            let unique: HashSet<usize> = doc
                .iter()
                .filter_map(|term| vocabulary.index_of(term))
                .collect();
            for i in unique {
                doc_frequency[i] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = doc_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let model = Self {
            pattern,
            vocabulary,
            idf,
        };

        let matrix = tokenized
            .par_iter()
            .map(|terms| model.weigh(terms))
            .collect();

        debug!(
            "Fitted TF-IDF over {} documents, {} terms",
            documents.len(),
            model.vocabulary.len()
        );

        Ok((model, matrix))
    }

    /// Vectorize a document against the fitted vocabulary.
    ///
    /// Terms outside the vocabulary contribute nothing; a document with no
    /// known terms maps to the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        self.weigh(&self.pattern.tokenize(document))
    }

    fn weigh(&self, terms: &[String]) -> Vec<f64> {
        let mut row = vec![0.0; self.vocabulary.len()];
        for term in terms {
            if let Some(i) = self.vocabulary.index_of(term) {
                row[i] += 1.0;
            }
        }
        for (weight, idf) in row.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }
        l2_normalize(&mut row);
        row
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn pattern(&self) -> TokenPattern {
        self.pattern
    }
}
