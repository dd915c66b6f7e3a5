//! Iterator pipelines and binding-in-condition loops.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub squares: Vec<u64>,
    pub even_squares: Vec<u64>,
    pub sum_even_squares: u64,
    pub filtered_squares: Vec<u64>,
    pub lazy_sum: u64,
}

/// Map/filter/reduce over `1..=10`, then eager and lazy filtering over `0..10`.
pub fn pipeline() -> Pipeline {
    let squares: Vec<u64> = (1..=10).map(|x: u64| x.pow(2)).collect();
    let even_squares: Vec<u64> = squares.iter().copied().filter(|x| x % 2 == 0).collect();
    let sum_even_squares = even_squares.iter().copied().reduce(|a, b| a + b).unwrap_or(0);

    let filtered_squares = (0..10u64).filter(|x| x % 2 == 0).map(|x| x.pow(2)).collect();
    let lazy_sum = (0..10u64).filter(|x| x % 2 == 0).map(|x| x.pow(2)).sum();

    Pipeline {
        squares,
        even_squares,
        sum_even_squares,
        filtered_squares,
        lazy_sum,
    }
}

/// Pops from `data` while its length, bound in the loop condition, is
/// positive. Stops right after the pass that saw three items.
pub fn countdown(mut data: Vec<i32>) -> Vec<String> {
    let mut lines = Vec::new();
    while let n @ 1.. = data.len() {
        lines.push(format!("List has {} items", n));
        data.pop();
        if n == 3 {
            break;
        }
    }
    lines
}

/// Squares of `0..limit` above `bound`; each square is computed once.
pub fn squares_above(limit: u64, bound: u64) -> Vec<u64> {
    (0..limit)
        .filter_map(|x| Some(x * x).filter(|&y| y > bound))
        .collect()
}
