//! Text chart of head movement.

use std::fmt::Write;

use dslab_disk_scheduling::{DiskDomain, Trace};

const START_MARK: char = '@';
const REQUEST_MARK: char = '*';
const BOUNDARY_MARK: char = '#';

/// Renders one row per visited position, x axis is the cylinder range of the disk.
pub fn render(trace: &Trace, domain: &DiskDomain, width: usize) -> String {
    let width = width.max(2);
    let mut chart = String::new();
    let _ = writeln!(
        chart,
        "{:>10} {}{}",
        domain.lower_bound(),
        " ".repeat(width.saturating_sub(1)),
        domain.upper_bound()
    );
    for (idx, &position) in trace.visited().iter().enumerate() {
        let mark = if idx == 0 {
            START_MARK
        } else if trace.boundary_visits().contains(&idx) {
            BOUNDARY_MARK
        } else {
            REQUEST_MARK
        };
        let column = scale_to_column(position.abs_diff(domain.lower_bound()), domain.span(), width);
        let mut row = vec!['.'; width];
        row[column] = mark;
        let _ = writeln!(chart, "{:>4} {:>5} |{}|", idx, position, row.into_iter().collect::<String>());
    }
    chart
}

/// Scales the offset from the lower bound to a column in `[0, width - 1]`.
fn scale_to_column(offset: u64, span: u64, width: usize) -> usize {
    (u128::from(offset) * (width as u128 - 1) / u128::from(span)) as usize
}

#[cfg(test)]
mod tests {
    use dslab_disk_scheduling::{Direction, Policy, RequestSet};

    use super::*;

    #[test]
    fn marks_start_requests_and_bounds() {
        let domain = DiskDomain::new(0, 10).unwrap();
        let trace = Policy::Scan
            .schedule(5, &RequestSet::from(vec![7, 2]), &domain, Direction::Up)
            .unwrap();
        let chart = render(&trace, &domain, 11);
        let rows: Vec<_> = chart.lines().collect();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1], "   0     5 |.....@.....|");
        assert_eq!(rows[2], "   1     7 |.......*...|");
        assert_eq!(rows[3], "   2    10 |..........#|");
        assert_eq!(rows[4], "   3     2 |..*........|");
    }

    #[test]
    fn full_i64_range_fits_the_chart() {
        let domain = DiskDomain::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(scale_to_column(0, domain.span(), 64), 0);
        assert_eq!(scale_to_column(domain.span(), domain.span(), 64), 63);
        assert_eq!(scale_to_column(domain.span() / 2, domain.span(), 64), 31);

        let trace = Policy::Fcfs
            .schedule(i64::MAX, &RequestSet::new(), &domain, Direction::Up)
            .unwrap();
        let chart = render(&trace, &domain, 64);
        let rows: Vec<_> = chart.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].ends_with("@|"));
    }
}
