//! Classic sorting exercises over [`Record`]s.
//!
//! These share the record total order with the index structures but are
//! otherwise independent of them; `regsort` times them against the same
//! dataset files the index benchmark uses.

use crate::Record;

/// Selection sort, O(n²) comparisons. Not stable.
pub fn selection_sort(records: &mut [Record]) {
    if records.is_empty() {
        return;
    }
    for i in 0..records.len() - 1 {
        let mut min = i;
        for j in i + 1..records.len() {
            if records[j] < records[min] {
                min = j;
            }
        }
        if min != i {
            records.swap(i, min);
        }
    }
}

/// Shaker (cocktail) sort: bubble passes alternating direction, shrinking
/// the unsorted window from both ends, stopping early once a pass makes no
/// swaps.
pub fn shaker_sort(records: &mut [Record]) {
    if records.len() < 2 {
        return;
    }
    let mut left = 0;
    let mut right = records.len() - 1;
    loop {
        let mut swapped = false;
        for i in left..right {
            if records[i] > records[i + 1] {
                records.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        // The largest element is now at the right boundary.
        right -= 1;

        swapped = false;
        for i in (left + 1..=right).rev() {
            if records[i - 1] > records[i] {
                records.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        // The smallest element is now at the left boundary.
        left += 1;
    }
}

/// Hoare-style quicksort with a middle-element pivot.
pub fn quick_sort(records: &mut [Record]) {
    if records.len() > 1 {
        quick(records, 0, records.len() as isize - 1);
    }
}

fn quick(records: &mut [Record], start: isize, end: isize) {
    let mut l = start;
    let mut r = end;
    let pivot = records[((l + r) / 2) as usize].clone();

    while l <= r {
        while records[l as usize] < pivot {
            l += 1;
        }
        while records[r as usize] > pivot {
            r -= 1;
        }
        if l <= r {
            records.swap(l as usize, r as usize);
            l += 1;
            r -= 1;
        }
    }
    if start < r {
        quick(records, start, r);
    }
    if end > l {
        quick(records, l, end);
    }
}
