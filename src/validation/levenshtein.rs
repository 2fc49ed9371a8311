//! src/validation/levenshtein.rs

/// Minimum number of single-unit insertions, deletions or substitutions
/// turning `a` into `b`.
///
/// Strings are compared as UTF-16 code units, so a character outside the
/// Basic Multilingual Plane weighs two units.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<u16> = a.encode_utf16().collect();
    let b: Vec<u16> = b.encode_utf16().collect();

    // Row `j` is the prefix of `b` of length `j`, column `i` the prefix of `a`.
    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];

    for (i, cell) in matrix[0].iter_mut().enumerate() {
        *cell = i;
    }
    for (j, row) in matrix.iter_mut().enumerate() {
        row[0] = j;
    }

    for j in 1..=b.len() {
        for i in 1..=a.len() {
            matrix[j][i] = if a[i - 1] == b[j - 1] {
                matrix[j - 1][i - 1]
            } else {
                let substitution = matrix[j - 1][i - 1];
                let insertion = matrix[j][i - 1];
                let deletion = matrix[j - 1][i];
                1 + substitution.min(insertion).min(deletion)
            };
        }
    }

    matrix[b.len()][a.len()]
}
