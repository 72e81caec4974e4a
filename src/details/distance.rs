/// Distance whose normalized variant divides by an upper bound that only
/// depends on the sequence lengths.
pub(crate) trait DistanceMetric {
    fn maximum(&self, len1: usize, len2: usize) -> f64;

    fn _distance<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>;

    fn _normalized_distance<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        let maximum = self.maximum(s1.len(), s2.len());
        if maximum == 0.0 {
            log::warn!("normalizing the distance between two empty sequences, using 0.0");
            return 0.0;
        }

        self._distance(s1, s2) / maximum
    }
}

/// Similarity whose normalized variant divides by the larger self similarity
/// of the two inputs.
pub(crate) trait SimilarityMetric {
    fn _similarity<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>;

    fn _normalized_similarity<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2> + PartialEq,
        Elem2: PartialEq<Elem1> + PartialEq,
    {
        let maximum = self._similarity(s1, s1).max(self._similarity(s2, s2));
        if maximum == 0.0 {
            log::warn!("normalizing the similarity between two empty sequences, using 1.0");
            return 1.0;
        }

        self._similarity(s1, s2) / maximum
    }
}
