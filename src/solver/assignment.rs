/// Minimum cost assignment of every row to a distinct column (Hungarian algorithm with potentials).
///
/// `costs` is row-major, `None` marks a forbidden pair.
/// Returns `None` if there are more rows than columns or no assignment avoids forbidden pairs.
///
/// O(rows^2 * cols)
pub fn min_cost_assignment(costs: &[Vec<Option<u32>>]) -> Option<u32> {
    let rows = costs.len();
    if rows == 0 {
        return Some(0);
    }
    let cols = costs[0].len();
    if rows > cols {
        return None;
    }

    // large enough that any assignment using it costs more than any without it
    // but small enough not to overflow when summed
    const FORBIDDEN: i64 = 1 << 40;
    const INF: i64 = i64::max_value() / 4;
    let cost = |r: usize, c: usize| costs[r][c].map_or(FORBIDDEN, i64::from);

    // 1-based, index 0 is a sentinel
    let mut u = vec![0i64; rows + 1];
    let mut v = vec![0i64; cols + 1];
    // col_match[c] = row assigned to column c
    let mut col_match = vec![0usize; cols + 1];
    let mut way = vec![0usize; cols + 1];

    for r in 1..=rows {
        col_match[0] = r;
        let mut c0 = 0;
        let mut min_v = vec![INF; cols + 1];
        let mut used = vec![false; cols + 1];

        loop {
            used[c0] = true;
            let r0 = col_match[c0];
            let mut delta = INF;
            let mut c1 = 0;
            for c in 1..=cols {
                if used[c] {
                    continue;
                }
                let cur = cost(r0 - 1, c - 1) - u[r0] - v[c];
                if cur < min_v[c] {
                    min_v[c] = cur;
                    way[c] = c0;
                }
                if min_v[c] < delta {
                    delta = min_v[c];
                    c1 = c;
                }
            }
            for c in 0..=cols {
                if used[c] {
                    u[col_match[c]] += delta;
                    v[c] -= delta;
                } else {
                    min_v[c] -= delta;
                }
            }
            c0 = c1;
            if col_match[c0] == 0 {
                break;
            }
        }

        // augment along the alternating path
        loop {
            let c1 = way[c0];
            col_match[c0] = col_match[c1];
            c0 = c1;
            if c0 == 0 {
                break;
            }
        }
    }

    let mut total = 0;
    for c in 1..=cols {
        let r = col_match[c];
        if r != 0 {
            total += costs[r - 1][c - 1]?;
        }
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tries every permutation.
    fn brute_force(costs: &[Vec<Option<u32>>]) -> Option<u32> {
        fn rec(costs: &[Vec<Option<u32>>], row: usize, used: &mut Vec<bool>) -> Option<u32> {
            if row == costs.len() {
                return Some(0);
            }
            let mut best = None;
            for c in 0..used.len() {
                if used[c] {
                    continue;
                }
                if let Some(cost) = costs[row][c] {
                    used[c] = true;
                    if let Some(rest) = rec(costs, row + 1, used) {
                        let total = cost + rest;
                        best = Some(best.map_or(total, |b: u32| b.min(total)));
                    }
                    used[c] = false;
                }
            }
            best
        }

        let cols = costs.get(0).map_or(0, |row| row.len());
        rec(costs, 0, &mut vec![false; cols])
    }

    fn matrix(rows: &[&[i32]]) -> Vec<Vec<Option<u32>>> {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|&c| if c < 0 { None } else { Some(c as u32) })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn greedy_is_not_optimal() {
        // greedy would take the 1 and then be forced to take the 100
        let costs = matrix(&[&[1, 2], &[2, 100]]);
        assert_eq!(min_cost_assignment(&costs), Some(4));
    }

    #[test]
    fn forbidden_pairs() {
        let costs = matrix(&[&[5, -1], &[-1, 7]]);
        assert_eq!(min_cost_assignment(&costs), Some(12));

        // both rows can only use the first column
        let costs = matrix(&[&[5, -1], &[3, -1]]);
        assert_eq!(min_cost_assignment(&costs), None);
    }

    #[test]
    fn rectangular() {
        let costs = matrix(&[&[4, 1, 3], &[2, 0, 5]]);
        assert_eq!(min_cost_assignment(&costs), Some(3));

        let costs = matrix(&[&[1], &[1]]);
        assert_eq!(min_cost_assignment(&costs), None);

        assert_eq!(min_cost_assignment(&[]), Some(0));
    }

    #[test]
    fn matches_brute_force() {
        let matrices = [
            matrix(&[&[7, 3, 9, 4], &[2, 8, 6, 5], &[3, 3, 1, 9], &[9, 4, 2, 2]]),
            matrix(&[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]]),
            matrix(&[&[10, -1, 3, 7], &[-1, 4, -1, 2], &[6, 6, 6, -1]]),
            matrix(&[&[-1, 2, 3], &[1, -1, 3], &[1, 2, -1]]),
            matrix(&[&[12, 7, 9, 7, 9], &[8, 9, 6, 6, 6], &[7, 17, 12, 14, 9], &[15, 14, 6, 6, 10], &[4, 10, 7, 10, 9]]),
        ];
        for costs in &matrices {
            assert_eq!(min_cost_assignment(costs), brute_force(costs), "{:?}", costs);
        }
    }
}
