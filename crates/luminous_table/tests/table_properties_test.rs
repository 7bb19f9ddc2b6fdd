//! Property tests for the table view engine.

mod test_utils;

use luminous_core::SortDirection;
use luminous_table::{TableOptions, TableView};
use proptest::prelude::*;
use test_utils::{Row, RowField};

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(prop::option::of(-5i64..5), 0..60).prop_map(|scores| {
        scores
            .into_iter()
            .enumerate()
            .map(|(i, score)| Row::new(i as u32, score, if i % 3 == 0 { "a" } else { "b" }))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_total_pages_and_page_length(rows in rows_strategy(), page_size in 1usize..12, page in 0usize..10) {
        let mut view = TableView::new(rows, TableOptions::new().with_page_size(page_size)).unwrap();
        view.set_filter_fn(|row: &Row| row.group == "b");
        view.set_page(page);

        let total = view.total();
        prop_assert_eq!(view.total_pages(), std::cmp::max(1, total.div_ceil(page_size)));
        prop_assert!(view.page_data().len() <= page_size);
    }

    #[test]
    fn prop_repeated_sort_flips_direction(rows in rows_strategy(), presses in 1usize..6) {
        let mut view = TableView::with_defaults(rows);
        for _ in 0..presses {
            view.set_sort(RowField::Score);
        }
        let expected = if presses % 2 == 1 { SortDirection::Asc } else { SortDirection::Desc };
        prop_assert_eq!(view.sort_key(), Some(RowField::Score));
        prop_assert_eq!(view.sort_direction(), expected);

        view.set_sort(RowField::Id);
        prop_assert_eq!(view.sort_direction(), SortDirection::Asc);
    }

    #[test]
    fn prop_sort_is_stable_and_missing_last(rows in rows_strategy(), descending in any::<bool>()) {
        let mut view = TableView::with_defaults(rows);
        view.set_sort(RowField::Score);
        if descending {
            view.set_sort(RowField::Score);
        }
        let sorted = view.sorted();

        let first_missing = sorted.iter().position(|row| row.score.is_none()).unwrap_or(sorted.len());
        prop_assert!(sorted[first_missing..].iter().all(|row| row.score.is_none()));

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.score == b.score {
                // ids follow insertion order, so equal keys keep ascending ids
                prop_assert!(a.id < b.id);
            } else if let (Some(x), Some(y)) = (a.score, b.score) {
                let ordered = if descending { x > y } else { x < y };
                prop_assert!(ordered);
            }
        }
    }
}
