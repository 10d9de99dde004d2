use crate::errors::Id3Error;
use hashbrown::HashMap;

/// Count the occurrences of each label in the sample.
pub fn label_counts<'a, I>(labels: I) -> HashMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}

/// Shannon entropy (base 2) of a label sample.
///
/// Only labels present in the sample contribute to the sum, so
/// there is never a `0 * log2(0)` term to evaluate.
pub fn entropy<'a, I>(labels: I) -> Result<f64, Id3Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<usize> = label_counts(labels).into_values().collect();
    if counts.is_empty() {
        return Err(Id3Error::EmptyDataset("entropy".to_string()));
    }
    let n = counts.iter().sum::<usize>() as f64;
    // Summation order is fixed so equal distributions give bit-identical results.
    counts.sort_unstable();
    let e = counts
        .iter()
        .map(|c| {
            let p = *c as f64 / n;
            p * p.log2()
        })
        .sum::<f64>();
    Ok(-e)
}

/// Most frequent item of the sample, ties go to the lexicographically smallest one.
pub fn mode<'a, I>(labels: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    label_counts(labels)
        .into_iter()
        .max_by(|(l1, c1), (l2, c2)| c1.cmp(c2).then_with(|| l2.cmp(l1)))
        .map(|(l, _)| l)
}

#[cfg(test)]
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}
